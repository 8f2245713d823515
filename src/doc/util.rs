// src/doc/util.rs

/// `"champion-v1.2"` → `("champion", "v1.2")`. Splits on the last `-`.
pub fn parse_id_version(s: &str) -> (String, String) {
    if s.chars().count() < 2 {
        return (s!(), s!());
    }
    match s.rsplit_once('-') {
        Some((id, ver)) => (s!(id), s!(ver)),
        None => (s!(s), s!()),
    }
}

/// `"[BR, EUNE, EUW]"` → `["BR", "EUNE", "EUW"]`. Missing brackets yield nothing.
pub fn parse_regions(s: &str) -> Vec<String> {
    let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    let Some(inner) = compact.strip_prefix('[').and_then(|t| t.strip_suffix(']')) else {
        return Vec::new();
    };
    if inner.is_empty() {
        return Vec::new();
    }
    inner.split(',').map(String::from).collect()
}

/// `{region}`-style placeholders present in `path`, in the order given.
pub fn placeholders<'a>(path: &str, names: &[&'a str]) -> Vec<&'a str> {
    names
        .iter()
        .copied()
        .filter(|name| path.contains(&format!("{{{name}}}")))
        .collect()
}
