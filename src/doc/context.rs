// src/doc/context.rs
use tracing::Span;

use crate::error::ParseResult;
use crate::resolve::{OperationPatch, Registry, Type};

/// State handed down from the resource stage to every nested stage.
#[derive(Clone, Copy)]
pub struct ParseContext<'a> {
    pub registry: &'a Registry,
    pub resource: &'a str,
}

impl<'a> ParseContext<'a> {
    pub fn new(registry: &'a Registry, resource: &'a str) -> Self {
        Self { registry, resource }
    }

    /// Span tagging log lines with the current resource.
    pub fn span(&self) -> Span {
        tracing::info_span!("resource", resource = self.resource)
    }

    pub fn resolve_type(&self, raw: &str) -> ParseResult<Type> {
        Ok(self.registry.resolve_type(self.resource, raw)?)
    }

    pub fn class_name(&self, original: &str) -> ParseResult<String> {
        Ok(s!(self.registry.class(self.resource, original)?))
    }

    pub fn operation(&self, path: &str) -> ParseResult<&'a OperationPatch> {
        Ok(self.registry.operation(self.resource, path)?)
    }

    pub fn region_type(&self) -> Type {
        self.registry.region_type(self.resource)
    }
}
