//! GraphQL Schema Visualization Graph
//!
//! Derives a visual graph model (nodes and edges) from a GraphQL-style
//! introspection document: classifies every named type into a visual group,
//! resolves recursively-wrapped type references back to their named concrete
//! type, and emits an ordered node/edge graph for a force-directed layout
//! and clustering collaborator.
//!
//! ## Architecture
//!
//! ```text
//! introspection document
//!         │
//!         ▼
//!   graph::build ──── resolver (pure reference resolution)
//!         │
//!         ▼
//!   VisGraph { nodes, edges } ──▶ renderer / analysis / DOT export
//! ```
//!
//! The transformation is a one-way, read-only computation: the document is
//! never mutated, every build returns fresh sequences, and re-running with
//! different options never reuses a prior run's output.

pub mod config;
pub mod error;
pub mod graph;
pub mod groups;
pub mod introspection;
pub mod resolver;

pub use config::{ExportFormat, VisConfig};
pub use error::{Result, VisError};
pub use graph::{build, BuildOptions, GraphEdge, GraphNode, ReferenceStats, VisGraph};
pub use groups::{GroupStyle, GroupTable, VisualGroup};
pub use introspection::{IntrospectionDocument, SchemaType, TypeKind, TypeRef};
