// src/resolve/exceptions.rs
//! Repairs for known gaps in the reference document.
//!
//! Every entry here works around one upstream documentation bug. Keep the
//! tables small and keyed, so each repair stays visible.

/// Resources the generated client does not support. Parsed over, not failed.
pub const SKIPPED_RESOURCES: &[&str] = &["tournament-provider"];

/// `(resource, class)` pairs resolved to a named reference without an override.
pub const REGISTRY_BYPASS: &[(&str, &str)] = &[("lol-static-data", "SpellRange")];

/// `(resource, classes, field, type)`: documented field types that are wrong.
const FIELD_TYPES: &[(&str, &[&str], &str, &str)] = &[
    ("lol-static-data", &["SummonerSpellDto", "ChampionSpellDto"], "effect", "List[List[double]]"),
    ("lol-static-data", &["SummonerSpellDto", "ChampionSpellDto"], "range", "SpellRange"),
];

/// Comma-separated path parameters documented as scalars.
const PATH_PARAM_TYPES: &[(&str, &str)] = &[
    ("summonerIds", "List[long]"),
    ("summonerNames", "List[string]"),
];

/// Path placeholders materialized as region parameters.
pub const REGION_PLACEHOLDERS: &[&str] = &["region", "platformId"];

pub fn is_skipped(resource: &str) -> bool {
    SKIPPED_RESOURCES.contains(&resource)
}

pub fn bypasses_registry(resource: &str, class: &str) -> bool {
    REGISTRY_BYPASS.iter().any(|&(r, c)| r == resource && c == class)
}

/// Type string to resolve for a schema field.
pub fn field_type<'a>(resource: &str, class: &str, field: &str, documented: &'a str) -> &'a str {
    FIELD_TYPES
        .iter()
        .find(|(r, classes, f, _)| *r == resource && *f == field && classes.contains(&class))
        .map_or(documented, |&(.., ty)| ty)
}

/// Type string to resolve for a path parameter.
pub fn path_param_type<'a>(param: &str, documented: &'a str) -> &'a str {
    PATH_PARAM_TYPES
        .iter()
        .find(|(p, _)| *p == param)
        .map_or(documented, |&(_, ty)| ty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_repairs_are_scoped_to_resource_and_class() {
        assert_eq!(field_type("lol-static-data", "ChampionSpellDto", "effect", "List[object]"), "List[List[double]]");
        assert_eq!(field_type("lol-static-data", "SummonerSpellDto", "range", "object"), "SpellRange");
        assert_eq!(field_type("lol-static-data", "ItemDto", "effect", "Map[string, double]"), "Map[string, double]");
        assert_eq!(field_type("champion", "ChampionSpellDto", "effect", "List[object]"), "List[object]");
    }

    #[test]
    fn path_param_repairs() {
        assert_eq!(path_param_type("summonerIds", "string"), "List[long]");
        assert_eq!(path_param_type("summonerNames", "string"), "List[string]");
        assert_eq!(path_param_type("teamIds", "string"), "string");
    }

    #[test]
    fn named_exceptions() {
        assert!(is_skipped("tournament-provider"));
        assert!(!is_skipped("summoner"));
        assert!(bypasses_registry("lol-static-data", "SpellRange"));
        assert!(!bypasses_registry("champion", "SpellRange"));
    }
}
