// src/doc/model.rs
//! Parsed API description. Everything here is fully resolved.

use std::fmt;

use serde::Serialize;

use crate::resolve::exceptions::REGION_PLACEHOLDERS;
use crate::resolve::{Primitive, Type};

/// Resources in document order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Document {
    pub resources: Vec<Resource>,
}

impl Document {
    pub fn resource(&self, id: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == id)
    }

    /// Owning resource of `op`.
    pub fn resource_of(&self, op: &Operation) -> Option<&Resource> {
        self.resource(&op.resource_id)
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Resource {
    pub id: String,
    pub version: String,
    /// Empty for global resources.
    pub regions: Vec<String>,
    /// Unique by `original_name`, in order of first definition.
    pub definitions: Vec<Schema>,
    pub operations: Vec<Operation>,
}

impl Resource {
    pub fn new(id: impl Into<String>, version: impl Into<String>, regions: Vec<String>) -> Self {
        Self { id: id.into(), version: version.into(), regions, ..Self::default() }
    }

    /// Insert `schema`, replacing a previous definition with the same original name.
    pub fn define(&mut self, schema: Schema) {
        match self.definitions.iter_mut().find(|s| s.original_name == schema.original_name) {
            Some(slot) => *slot = schema,
            None => self.definitions.push(schema),
        }
    }

    pub fn definition(&self, original_name: &str) -> Option<&Schema> {
        self.definitions.iter().find(|s| s.original_name == original_name)
    }

    pub fn api_base(&self) -> &'static str {
        api_base(&self.id)
    }

    pub fn needs_api_key(&self) -> bool {
        needs_api_key(&self.id)
    }
}

/// Host for resources served outside the regional endpoints. Empty for normal ones.
pub fn api_base(resource: &str) -> &'static str {
    match resource {
        "lol-static-data" => "https://global.api.pvp.net",
        "lol-status" => "https://status.leagueoflegends.com",
        _ => "",
    }
}

pub fn needs_api_key(resource: &str) -> bool {
    resource != "lol-status"
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    /// Operation marker classes on `li.operation`.
    pub const MARKERS: [(&'static str, HttpMethod); 3] =
        [("get", HttpMethod::Get), ("post", HttpMethod::Post), ("put", HttpMethod::Put)];

    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Operation {
    /// Owning resource.
    pub resource_id: String,
    pub http_method: HttpMethod,
    /// URL template, may hold `{name}` placeholders.
    pub request_path: String,
    pub description: String,
    pub path_params: Vec<Parameter>,
    pub query_params: Vec<Parameter>,
    pub return_type: Option<Type>,
    pub target_name: String,
    pub overridden_map_key: Option<Primitive>,
    pub response_errors: Vec<ResponseError>,
    pub implementation_notes: Option<String>,
    pub rate_limit_notes: Option<String>,
}

impl Operation {
    pub fn api_base(&self) -> &'static str {
        api_base(&self.resource_id)
    }

    pub fn needs_api_key(&self) -> bool {
        needs_api_key(&self.resource_id)
    }

    /// Normal resources are always regional; special ones only with a region placeholder.
    pub fn is_regional(&self) -> bool {
        self.api_base().is_empty() || self.path_params.iter().any(Parameter::is_region)
    }

    pub fn has_param(&self, name: &str) -> bool {
        self.path_params.iter().chain(&self.query_params).any(|p| p.name == name)
    }

    /// Key type of the returned map: the override hint, else the declared key.
    pub fn return_map_key(&self) -> Option<Type> {
        match self.overridden_map_key {
            Some(key) => Some(key.into()),
            None => self.return_type.as_ref().and_then(Type::map_key).cloned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Schema {
    pub original_name: String,
    pub target_name: String,
    pub description: String,
    /// Table row order.
    pub fields: Vec<Field>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Field {
    /// Wire name.
    pub original_name: String,
    pub target_name: String,
    #[serde(rename = "type")]
    pub ty: Type,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Parameter {
    pub name: String,
    pub description: String,
    pub required: bool,
    #[serde(rename = "type")]
    pub ty: Type,
}

impl Parameter {
    pub fn is_region(&self) -> bool {
        REGION_PLACEHOLDERS.contains(&self.name.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResponseError {
    pub code: u16,
    pub reason: String,
}
