// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Quote `text` for embedding in an HTML comment.
/// `--` would end the comment early, so every dash run is split.
pub fn comment_quote(text: &str) -> String {
    let mut out = format!(" {text:?} ");
    while out.contains("--") {
        out = out.replace("--", "- -");
    }
    out
}

/// `" - This object contains..."` → `"This object contains..."`
pub fn strip_dash_prefix(s: &str) -> String {
    let t = s.trim();
    let t = t.strip_prefix('-').unwrap_or(t);
    normalize_ws(t)
}
