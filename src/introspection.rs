//! Typed model of the GraphQL introspection document
//!
//! Mirrors the standard introspection result shape
//! (`{data: {__schema: {queryType, mutationType, subscriptionType, types}}}`)
//! as a closed set of serde structs. Every branch point downstream matches
//! on [`TypeKind`] instead of probing optional fields on untyped JSON.
//!
//! The document is read-only input: the builder borrows it, never mutates it.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VisError};

/// Kind discriminator shared by type definitions and type references.
///
/// `List` and `NonNull` only ever appear as wrapper layers in a [`TypeRef`];
/// the remaining kinds name concrete definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
}

impl TypeKind {
    /// Kinds that can back a top-level graph node and therefore participate
    /// in reference resolution.
    pub fn is_concrete(self) -> bool {
        matches!(self, TypeKind::Object | TypeKind::InputObject | TypeKind::Interface)
    }
}

/// A recursive type reference: either a named leaf or a `NON_NULL`/`LIST`
/// wrapper around another reference.
///
/// Wrapper chains are finite and bottom out in exactly one named leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRef {
    pub kind: TypeKind,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub of_type: Option<Box<TypeRef>>,
}

impl TypeRef {
    /// A named leaf reference.
    pub fn named(kind: TypeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: Some(name.into()),
            of_type: None,
        }
    }

    /// Wrap an existing reference in a `NON_NULL` or `LIST` modifier.
    pub fn wrap(kind: TypeKind, inner: TypeRef) -> Self {
        Self {
            kind,
            name: None,
            of_type: Some(Box::new(inner)),
        }
    }
}

/// An argument to a field (same shape as a field, minus nested args).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputValue {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

/// A field of an object, interface, or input object type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub args: Vec<InputValue>,
}

/// A bare `{name}` reference, used for `possibleTypes` entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedTypeRef {
    pub name: String,
}

/// One entry of the `__schema.types` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaType {
    pub name: String,
    pub kind: TypeKind,
    #[serde(default)]
    pub fields: Option<Vec<Field>>,
    #[serde(default)]
    pub input_fields: Option<Vec<InputValue>>,
    #[serde(default)]
    pub possible_types: Option<Vec<NamedTypeRef>>,
}

/// A `{name}` pointer to one of the operation root types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootRef {
    pub name: String,
}

/// The `__schema` object.
///
/// `types` is optional at the serde level so a document missing it can be
/// reported as [`VisError::MalformedSchema`] rather than a parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaDescription {
    #[serde(default)]
    pub query_type: Option<RootRef>,
    #[serde(default)]
    pub mutation_type: Option<RootRef>,
    /// Accepted in the shape but never surfaced as a node group.
    #[serde(default)]
    pub subscription_type: Option<RootRef>,
    #[serde(default)]
    pub types: Option<Vec<SchemaType>>,
}

/// The `data` envelope around `__schema`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaData {
    #[serde(rename = "__schema")]
    pub schema: SchemaDescription,
}

/// A complete introspection result document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntrospectionDocument {
    pub data: SchemaData,
}

impl IntrospectionDocument {
    /// Parse a document from a JSON string.
    pub fn from_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a document from an already-deserialized JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Read and parse a document from a file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// The `__schema.types` list, or `MalformedSchema` if the document
    /// does not carry one.
    pub fn types(&self) -> Result<&[SchemaType]> {
        self.data
            .schema
            .types
            .as_deref()
            .ok_or_else(|| VisError::MalformedSchema("document has no __schema.types list".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_document() {
        let doc = IntrospectionDocument::from_str(
            r#"{"data": {"__schema": {
                "queryType": {"name": "Query"},
                "types": [
                    {"name": "Query", "kind": "OBJECT", "fields": [
                        {"name": "user", "type": {"kind": "OBJECT", "name": "User"}}
                    ]},
                    {"name": "User", "kind": "OBJECT"}
                ]
            }}}"#,
        )
        .unwrap();

        assert_eq!(doc.data.schema.query_type.as_ref().unwrap().name, "Query");
        assert!(doc.data.schema.mutation_type.is_none());
        let types = doc.types().unwrap();
        assert_eq!(types.len(), 2);
        assert_eq!(types[0].kind, TypeKind::Object);
        let fields = types[0].fields.as_ref().unwrap();
        assert_eq!(fields[0].ty, TypeRef::named(TypeKind::Object, "User"));
    }

    #[test]
    fn test_wrapped_type_ref() {
        let json = r#"{"kind": "NON_NULL", "ofType": {"kind": "LIST", "ofType": {"kind": "SCALAR", "name": "String"}}}"#;
        let ty: TypeRef = serde_json::from_str(json).unwrap();
        assert_eq!(ty.kind, TypeKind::NonNull);
        let list = ty.of_type.unwrap();
        assert_eq!(list.kind, TypeKind::List);
        assert_eq!(list.of_type.unwrap().name.as_deref(), Some("String"));
    }

    #[test]
    fn test_missing_types_is_malformed() {
        let doc = IntrospectionDocument::from_str(r#"{"data": {"__schema": {}}}"#).unwrap();
        assert!(matches!(doc.types(), Err(VisError::MalformedSchema(_))));
    }
}
