//! Service schema types consumed by the resolver.
//!
//! Field names follow the apibuilder service JSON, so a `service.json`
//! deserializes directly into [`Service`].

use serde::{Deserialize, Serialize};

/// A named schema source: either the home service or one of its imports.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub enums: Vec<Enum>,
    #[serde(default)]
    pub models: Vec<Model>,
    #[serde(default)]
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plural: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Vec<Field>,
}

/// A model field. `field_type` holds the raw type token, e.g. `[user]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default = "default_required")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

fn default_required() -> bool {
    true
}

/// A named value set.
///
/// Well-formed schemas never declare an enum without values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enum {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plural: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub values: Vec<EnumValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumValue {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Operations exposed for a model or enum type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "type")]
    pub resource_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plural: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub operations: Vec<Operation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub method: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Whether a resolved name denotes a model or an enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Model,
    Enum,
}

impl TypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Model => "model",
            TypeKind::Enum => "enum",
        }
    }
}

/// Where a resolved name is defined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TypeSource<'a> {
    /// Defined in the home service.
    Local,
    /// Defined in `service`, found at position `index` of the import list.
    Import { index: usize, service: &'a Service },
}

impl TypeSource<'_> {
    pub fn is_local(&self) -> bool {
        matches!(self, TypeSource::Local)
    }
}

/// Result of [`crate::locate_type`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedType<'a> {
    pub kind: TypeKind,
    /// Bare name used for the lookup.
    pub name: &'a str,
    pub source: TypeSource<'a>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn service_deserializes_with_missing_collections() {
        let service: Service = serde_json::from_value(json!({ "name": "empty" })).unwrap();
        assert_eq!(service.name, "empty");
        assert!(service.enums.is_empty());
        assert!(service.models.is_empty());
        assert!(service.resources.is_empty());
    }

    #[test]
    fn field_type_uses_json_type_key() {
        let field: Field =
            serde_json::from_value(json!({ "name": "tags", "type": "[string]" })).unwrap();
        assert_eq!(field.field_type, "[string]");
        assert!(field.required);
    }

    #[test]
    fn resource_type_uses_json_type_key() {
        let resource: Resource = serde_json::from_value(json!({
            "type": "user",
            "operations": [{ "method": "GET", "path": "/users/:id" }]
        }))
        .unwrap();
        assert_eq!(resource.resource_type, "user");
        assert_eq!(resource.operations[0].method, "GET");
    }

    #[test]
    fn type_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_value(TypeKind::Enum).unwrap(), json!("enum"));
        assert_eq!(TypeKind::Model.as_str(), "model");
    }
}
