// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod doc;
pub mod error;
pub mod resolve;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod log;

pub use doc::{Document, parse, parse_html};
pub use error::{ErrorKind, ParseError, ParseResult};
pub use resolve::{Registry, ResolveError};
