// src/resolve/mod.rs
//! Type and name resolution. Independent of the HTML layer.

mod builtin;
pub mod exceptions;
pub mod names;
pub mod registry;
mod resolver;
pub mod types;

pub use names::field_name;
pub use registry::{OperationPatch, Registry, RegistryBuilder, RegistryError, ResourcePatch};
pub use resolver::ResolveError;
pub use types::{Primitive, Type};
