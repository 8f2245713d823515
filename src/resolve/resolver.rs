// src/resolve/resolver.rs
//! Vendor type strings → `Type`, and override lookups.
//!
//! ```text
//! Type      := Primitive | "List[" Type "]" | "Set[" Type "]" | "Map[" Type "," Type "]" | ClassName
//! Primitive := boolean | int | long | string | double | float
//! ```

use thiserror::Error;
use tracing::trace;

use super::exceptions::bypasses_registry;
use super::registry::{OperationPatch, Registry};
use super::types::{Primitive, Type};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The override table does not cover a resource, operation or class yet.
    #[error("{}", patch_required_msg(.resource, .target.as_deref()))]
    PatchRequired { resource: String, target: Option<String> },

    #[error("malformed type {raw:?}: {reason}")]
    MalformedType { raw: String, reason: String },
}

fn patch_required_msg(resource: &str, target: Option<&str>) -> String {
    match target {
        Some(t) => format!("override required for {t} in resource {resource:?}"),
        None => format!("override required for resource {resource:?}"),
    }
}

impl ResolveError {
    pub fn patch_required(resource: impl Into<String>, target: Option<String>) -> Self {
        Self::PatchRequired { resource: resource.into(), target }
    }

    fn malformed(raw: &str, reason: impl Into<String>) -> Self {
        Self::MalformedType { raw: s!(raw), reason: reason.into() }
    }
}

impl Registry {
    /// Override for the operation at `path`, longest suffix first.
    pub fn operation(&self, resource: &str, path: &str) -> Result<&OperationPatch, ResolveError> {
        let res = self
            .overrides(resource)
            .ok_or_else(|| ResolveError::patch_required(resource, None))?;
        res.operation(path)
            .ok_or_else(|| ResolveError::patch_required(resource, Some(format!("operation {path:?}"))))
    }

    /// Target identifier for the schema `class`. Exact match only.
    pub fn class(&self, resource: &str, class: &str) -> Result<&str, ResolveError> {
        let res = self
            .overrides(resource)
            .ok_or_else(|| ResolveError::patch_required(resource, None))?;
        res.class(class)
            .ok_or_else(|| ResolveError::patch_required(resource, Some(format!("class {class:?}"))))
    }

    /// Type of a synthesized `{region}`/`{platformId}` parameter.
    pub fn region_type(&self, resource: &str) -> Type {
        match self.overrides(resource).and_then(|res| res.class("Region")) {
            Some(target) => Type::named(target),
            None => Type::named("Region"),
        }
    }

    pub fn resolve_type(&self, resource: &str, raw: &str) -> Result<Type, ResolveError> {
        let s = raw.trim();
        if s.is_empty() {
            return Err(ResolveError::malformed(raw, "empty type string"));
        }
        if let Some(p) = Primitive::from_vendor(s) {
            return Ok(p.into());
        }

        if let Some(inner) = wrapped(s, "List[").or_else(|| wrapped(s, "Set[")) {
            let elem = self.resolve_type(resource, inner)?;
            return Ok(Type::list(elem));
        }

        if let Some(inner) = wrapped(s, "Map[") {
            let terms = split_top_level(inner);
            let [key, value] = terms.as_slice() else {
                return Err(ResolveError::malformed(
                    s,
                    format!("map needs 2 type terms, got {}", terms.len()),
                ));
            };
            let key = self.resolve_type(resource, key)?;
            let value = self.resolve_type(resource, value)?;
            return Ok(Type::map(key, value));
        }

        self.class_type(resource, s)
    }

    /// Named reference for a schema class, via its override or a bypass entry.
    pub fn class_type(&self, resource: &str, class: &str) -> Result<Type, ResolveError> {
        if bypasses_registry(resource, class) {
            trace!(resource, class, "registry bypass");
            return Ok(Type::named(class));
        }
        self.class(resource, class).map(Type::named)
    }
}

/// `"List[long]"` with prefix `"List["` → `"long"`.
fn wrapped<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    s.strip_prefix(prefix)?.strip_suffix(']')
}

/// Split on commas outside of brackets.
fn split_top_level(s: &str) -> Vec<&str> {
    let mut terms = Vec::new();
    let (mut depth, mut start) = (0usize, 0usize);
    for (i, ch) in s.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                terms.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    terms.push(&s[start..]);
    terms
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::registry::ResourcePatch;

    fn registry() -> Registry {
        Registry::builder()
            .resource(
                "lol-static-data",
                ResourcePatch::new()
                    .class("ChampionDto", "Champion")
                    .class("ImageDto", "Image"),
            )
            .resource("lol-status", ResourcePatch::new().class("Region", "ShardRegion"))
            .build()
            .unwrap()
    }

    #[test]
    fn composite_types() {
        let reg = registry();
        let t = reg.resolve_type("lol-static-data", "List[Map[string, int]]").unwrap();
        assert_eq!(t, Type::list(Type::map(Primitive::String.into(), Primitive::Int32.into())));

        let set = reg.resolve_type("lol-static-data", "Set[long]").unwrap();
        let list = reg.resolve_type("lol-static-data", "List[long]").unwrap();
        assert_eq!(set, list);
        assert_eq!(set, Type::list(Primitive::Int64.into()));
    }

    #[test]
    fn nested_map_splits_on_top_level_comma() {
        let reg = registry();
        let t = reg
            .resolve_type("lol-static-data", " Map[string, Map[string, ChampionDto]] ")
            .unwrap();
        assert_eq!(
            t,
            Type::map(
                Primitive::String.into(),
                Type::map(Primitive::String.into(), Type::named("Champion"))
            )
        );
    }

    #[test]
    fn malformed_types() {
        let reg = registry();
        for raw in ["", "   ", "Map[string]", "Map[string, int, long]", "List[]"] {
            let err = reg.resolve_type("lol-static-data", raw).unwrap_err();
            assert!(matches!(err, ResolveError::MalformedType { .. }), "{raw:?}: {err}");
        }
    }

    #[test]
    fn classes_need_overrides() {
        let reg = registry();
        assert_eq!(reg.resolve_type("lol-static-data", "ImageDto").unwrap(), Type::named("Image"));
        assert_eq!(reg.resolve_type("lol-static-data", "SpellRange").unwrap(), Type::named("SpellRange"));

        let err = reg.resolve_type("lol-static-data", "Long").unwrap_err();
        assert_eq!(
            err,
            ResolveError::patch_required("lol-static-data", Some(s!("class \"Long\"")))
        );

        let err = reg.resolve_type("stats", "RankedStatsDto").unwrap_err();
        assert_eq!(err, ResolveError::patch_required("stats", None));
        assert_eq!(err.to_string(), "override required for resource \"stats\"");
    }

    #[test]
    fn region_type_prefers_override() {
        let reg = registry();
        assert_eq!(reg.region_type("lol-status"), Type::named("ShardRegion"));
        assert_eq!(reg.region_type("summoner"), Type::named("Region"));
    }

    #[test]
    fn operation_lookup_names_missing_path() {
        let reg = registry();
        let err = reg.operation("lol-static-data", "/api/lol/static-data/{region}/v1.2/champion").unwrap_err();
        let ResolveError::PatchRequired { resource, target } = err else {
            panic!("expected PatchRequired");
        };
        assert_eq!(resource, "lol-static-data");
        assert!(target.unwrap().contains("/v1.2/champion"));
    }
}
