// src/config/consts.rs

// Source document (informational, never fetched)
pub const DOC_URL: &str = "https://developer.riotgames.com/api/methods";

// Document layout
pub const CONTAINER_PATH: &[&str] = &["html", "body", "#wrap", ".body.container"];
pub const RESOURCE_LIST: &str = ".row .span12 #api_detail";

// Presentational subtrees removed before parsing
pub const PRUNE: &[&str] = &[
    "head",
    "script",
    "style",
    "title",
    r#"link[rel="stylesheet"]"#,
    r#"link[rel="shortcut icon"]"#,
    "div#footer",
    "div.navbar",
    "div.header.container.ezreal",
    "div#inputs-link",
    ".sandbox_header",
];
// only when it has no element children
pub const PRUNE_IF_EMPTY: &str = "div.push";

// Logging
pub const LOG_FILE: &str = ".store/debug.log";
pub const DEFAULT_LOG_LEVEL: &str = "info";
