// src/resolve/registry.rs
//! Curated per-resource overrides.
//!
//! Built once through `RegistryBuilder`, read-only afterwards. Duplicate keys
//! are rejected by `build`, so lookups never see an ambiguous table.

use std::collections::HashMap;

use thiserror::Error;

use super::types::Primitive;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("resource override already exists: {0:?}")]
    DuplicateResource(String),

    #[error("operation suffix {suffix:?} registered twice for resource {resource:?}")]
    DuplicateOperation { resource: String, suffix: String },

    #[error("class {class:?} registered twice for resource {resource:?}")]
    DuplicateClass { resource: String, class: String },
}

/// Predeclared operation info.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperationPatch {
    name: String,
    map_key: Option<Primitive>,
}

impl OperationPatch {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), map_key: None }
    }

    /// Key type of a map-valued return. The operation must then return a map.
    pub fn map_key(mut self, key: Primitive) -> Self {
        self.map_key = Some(key);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key_hint(&self) -> Option<Primitive> {
        self.map_key
    }
}

#[derive(Clone, Debug, Default)]
pub struct ResourcePatch {
    operations: Vec<(String, OperationPatch)>,
    classes: Vec<(String, String)>,
}

impl ResourcePatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override for every request path ending in `suffix`.
    pub fn operation(mut self, suffix: impl Into<String>, patch: OperationPatch) -> Self {
        self.operations.push((suffix.into(), patch));
        self
    }

    /// `original` schema name → target identifier.
    pub fn class(mut self, original: impl Into<String>, target: impl Into<String>) -> Self {
        self.classes.push((original.into(), target.into()));
        self
    }
}

#[derive(Debug, Default)]
pub struct RegistryBuilder {
    resources: Vec<(String, ResourcePatch)>,
}

impl RegistryBuilder {
    pub fn resource(mut self, id: impl Into<String>, patch: ResourcePatch) -> Self {
        self.resources.push((id.into(), patch));
        self
    }

    pub fn build(self) -> Result<Registry, RegistryError> {
        let mut resources = HashMap::with_capacity(self.resources.len());

        for (id, patch) in self.resources {
            if resources.contains_key(&id) {
                return Err(RegistryError::DuplicateResource(id));
            }

            let mut operations: Vec<(String, OperationPatch)> = Vec::new();
            for (suffix, op) in patch.operations {
                if operations.iter().any(|(s, _)| *s == suffix) {
                    return Err(RegistryError::DuplicateOperation { resource: id, suffix });
                }
                operations.push((suffix, op));
            }
            // longest suffix first; equal lengths cannot both match one path
            operations.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

            let mut classes = HashMap::with_capacity(patch.classes.len());
            for (original, target) in patch.classes {
                if classes.contains_key(&original) {
                    return Err(RegistryError::DuplicateClass { resource: id, class: original });
                }
                classes.insert(original, target);
            }

            resources.insert(id, ResourceOverrides { operations, classes });
        }

        Ok(Registry { resources })
    }
}

#[derive(Debug)]
pub(crate) struct ResourceOverrides {
    operations: Vec<(String, OperationPatch)>,
    classes: HashMap<String, String>,
}

impl ResourceOverrides {
    /// Longest registered suffix of `path`.
    pub(crate) fn operation(&self, path: &str) -> Option<&OperationPatch> {
        self.operations
            .iter()
            .find(|(suffix, _)| path.ends_with(suffix.as_str()))
            .map(|(_, op)| op)
    }

    pub(crate) fn class(&self, original: &str) -> Option<&str> {
        self.classes.get(original).map(String::as_str)
    }
}

/// Frozen override table, shared by reference with every parse.
#[derive(Debug)]
pub struct Registry {
    resources: HashMap<String, ResourceOverrides>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    pub fn contains(&self, resource: &str) -> bool {
        self.resources.contains_key(resource)
    }

    pub(crate) fn overrides(&self, resource: &str) -> Option<&ResourceOverrides> {
        self.resources.get(resource)
    }
}
