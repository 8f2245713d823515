// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Saved copy of the reference page.
    pub input: PathBuf,
    /// stdout when `None`
    pub output: Option<PathBuf>,
    pub pretty: bool,
    /// Report text the parser never consumed.
    pub audit: bool,
    pub log_level: String,
    pub log: LogTarget,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from("methods.html"),
            output: None,
            pretty: false,
            audit: false,
            log_level: s!(DEFAULT_LOG_LEVEL),
            log: LogTarget::File(PathBuf::from(LOG_FILE)),
        }
    }
}

impl RunOptions {
    pub fn with_input(input: impl Into<PathBuf>) -> Self {
        Self { input: input.into(), ..Self::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_log_to_store() {
        let opts = RunOptions::with_input("page.html");
        assert_eq!(opts.input, PathBuf::from("page.html"));
        assert_eq!(opts.log, LogTarget::File(PathBuf::from(".store/debug.log")));
        assert_eq!(opts.log_level, "info");
        assert!(opts.output.is_none());
    }
}
