// src/resolve/types.rs
use std::fmt;

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Primitive {
    Bool,
    Int32,
    Int64,
    String,
    Float32,
    Float64,
}

impl Primitive {
    /// Vendor spelling → primitive. Case-sensitive.
    pub fn from_vendor(s: &str) -> Option<Self> {
        match s {
            "boolean" => Some(Self::Bool),
            "int" => Some(Self::Int32),
            "long" => Some(Self::Int64),
            "string" => Some(Self::String),
            "double" => Some(Self::Float64),
            "float" => Some(Self::Float32),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::String => "string",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured field/parameter/return type.
///
/// `Named` only ever holds the resolved target identifier; class bodies live
/// in `Resource::definitions`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Type {
    Primitive(Primitive),
    List(Box<Type>),
    Map { key: Box<Type>, value: Box<Type> },
    Named(String),
}

impl Type {
    pub fn list(elem: Type) -> Self {
        Self::List(Box::new(elem))
    }

    pub fn map(key: Type, value: Type) -> Self {
        Self::Map { key: Box::new(key), value: Box::new(value) }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Self::Map { .. })
    }

    pub fn map_key(&self) -> Option<&Type> {
        match self {
            Self::Map { key, .. } => Some(key),
            _ => None,
        }
    }
}

impl From<Primitive> for Type {
    fn from(p: Primitive) -> Self {
        Self::Primitive(p)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(p) => write!(f, "{p}"),
            Self::List(elem) => write!(f, "List[{elem}]"),
            Self::Map { key, value } => write!(f, "Map[{key}, {value}]"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vendor_primitives_are_case_sensitive() {
        assert_eq!(Primitive::from_vendor("long"), Some(Primitive::Int64));
        assert_eq!(Primitive::from_vendor("float"), Some(Primitive::Float32));
        assert_eq!(Primitive::from_vendor("Long"), None);
        assert_eq!(Primitive::from_vendor("object"), None);
    }

    #[test]
    fn display_and_json_shapes() {
        let t = Type::list(Type::map(Primitive::String.into(), Type::named("Champion")));
        assert_eq!(t.to_string(), "List[Map[string, Champion]]");

        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(
            json,
            r#"{"list":{"map":{"key":{"primitive":"string"},"value":{"named":"Champion"}}}}"#
        );
    }
}
