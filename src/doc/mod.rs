// src/doc/mod.rs
//! Reference page → `Document`.

mod blocks;
pub mod context;
pub mod model;
mod parser;
pub mod util;

pub use context::ParseContext;
pub use model::{Document, Field, HttpMethod, Operation, Parameter, Resource, ResponseError, Schema};
pub use parser::parse;

use crate::core::Dom;
use crate::error::ParseResult;
use crate::resolve::Registry;

/// Parse `src` into a fresh tree, then walk it.
pub fn parse_html(src: &str, registry: &Registry) -> ParseResult<Document> {
    let mut dom = Dom::parse(src);
    parse(&mut dom, registry)
}
