//! Error types for graph construction

use thiserror::Error;

use crate::groups::VisualGroup;

/// Result type for graph operations
pub type Result<T> = std::result::Result<T, VisError>;

/// Graph construction errors
///
/// An unresolved type reference is deliberately not an error: a field whose
/// type resolves to no node (scalar and enum leaves) produces zero edges,
/// which is expected behavior rather than a failure.
#[derive(Error, Debug)]
pub enum VisError {
    #[error("Malformed schema: {0}")]
    MalformedSchema(String),

    #[error("Declared {operation} root type has no matching object type: {name}")]
    MissingRoot { operation: String, name: String },

    #[error("Duplicate node id: {0}")]
    DuplicateId(String),

    #[error("No style configured for group {0}")]
    UnstyledGroup(VisualGroup),

    #[error("Unknown node id: {0}")]
    UnknownNode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] config_crate::ConfigError),
}
