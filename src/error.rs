// src/error.rs
//! Error values returned by a document parse.
//!
//! A parse fails fast: the first broken assumption aborts the whole document
//! and comes back as exactly one `ParseError`. The error keeps the dump of the
//! innermost subtree that was in scope, plus a trail of the stages it unwound
//! through.

use std::fmt;

use thiserror::Error;

use crate::resolve::ResolveError;

pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("expected {expected} node(s), but found {found}")]
    Shape { expected: &'static str, found: usize },

    #[error("{0}")]
    Structural(String),

    #[error("table row has {actual} cell(s), but the header has {expected} column(s)")]
    RowShape { expected: usize, actual: usize },

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    kind: ErrorKind,
    trail: Vec<String>,
    dump: Option<String>,
}

impl ParseError {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, trail: Vec::new(), dump: None }
    }

    pub fn structural(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Structural(msg.into()))
    }

    pub fn shape(expected: &'static str, found: usize) -> Self {
        Self::new(ErrorKind::Shape { expected, found })
    }

    pub fn row_shape(expected: usize, actual: usize) -> Self {
        Self::new(ErrorKind::RowShape { expected, actual })
    }

    /// Attach a subtree dump. The first dump attached is kept.
    pub fn with_dump(mut self, dump: String) -> Self {
        if self.dump.is_none() {
            self.dump = Some(dump);
        }
        self
    }

    pub fn context(mut self, line: impl Into<String>) -> Self {
        self.trail.push(line.into());
        self
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn dump(&self) -> Option<&str> {
        self.dump.as_deref()
    }

    /// Context lines, innermost first.
    pub fn trail(&self) -> &[String] {
        &self.trail
    }

    pub fn is_patch_required(&self) -> bool {
        matches!(self.kind, ErrorKind::Resolve(ResolveError::PatchRequired { .. }))
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        for line in self.trail.iter() {
            write!(f, "\n  while trying to {line}")?;
        }
        if let Some(dump) = &self.dump {
            write!(f, "\n{dump}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Resolve(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ErrorKind> for ParseError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<ResolveError> for ParseError {
    fn from(e: ResolveError) -> Self {
        Self::new(ErrorKind::Resolve(e))
    }
}

/// Adds trail lines to a failing parse step.
pub trait Context<T> {
    fn context<F, S>(self, line: F) -> ParseResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T, E: Into<ParseError>> Context<T> for Result<T, E> {
    fn context<F, S>(self, line: F) -> ParseResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| e.into().context(line()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn innermost_dump_wins() {
        let err = ParseError::structural("boom")
            .with_dump(s!("inner"))
            .with_dump(s!("outer"));
        assert_eq!(err.dump(), Some("inner"));
    }

    #[test]
    fn display_lists_trail_in_unwind_order() {
        let res: Result<(), ParseError> = Err(ParseError::row_shape(2, 3));
        let err = res
            .context(|| "parse api block")
            .context(|| format!("parse resource {:?}", "summoner"))
            .unwrap_err();

        let text = err.to_string();
        assert!(text.starts_with("table row has 3 cell(s), but the header has 2 column(s)"));
        let block = text.find("parse api block").unwrap();
        let res = text.find("parse resource \"summoner\"").unwrap();
        assert!(block < res);
    }

    #[test]
    fn resolve_errors_convert_and_flag_patch_required() {
        let err: ParseError = ResolveError::patch_required("champion", None).into();
        assert!(err.is_patch_required());
        assert!(std::error::Error::source(&err).is_some());
    }
}
