//! Visual graph model
//!
//! Output of the schema-to-graph transformation: an ordered node list and an
//! ordered edge list, built once per schema load and handed wholesale to the
//! rendering collaborator. Edges are directed, from the referencing node to
//! the referenced node, and deliberately not deduplicated — the same pair
//! appears once per distinct reference path, so multiplicity signals
//! reference strength to the layout and clustering side.

pub mod analysis;
pub mod builder;

pub use analysis::{ReferenceStats, to_dot};
pub use builder::{build, BuildOptions};

use serde::Serialize;

use crate::error::{Result, VisError};
use crate::groups::{GroupTable, VisualGroup};
use crate::introspection::{Field, SchemaType};

/// The schema entity a node was derived from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NodeSource {
    /// A top-level type definition (object, input object, interface).
    Type(SchemaType),
    /// A field: an operation on the query/mutation root, or a materialized
    /// field node when field expansion is enabled.
    Field(Field),
}

/// Icon spec understood by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IconSpec {
    pub face: String,
    pub code: String,
    pub color: String,
}

/// One node of the visual graph.
///
/// `id` is the type name for top-level entities and
/// `<parent>_<field>` for materialized field nodes, which keeps ids unique
/// even when the same field name recurs across types.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub group: VisualGroup,
    pub title: String,
    /// Group-derived color, set by the annotation pass.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Group-derived icon, set by the annotation pass.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconSpec>,
    /// The source entity; not part of the wire model.
    #[serde(skip)]
    pub source: NodeSource,
}

/// One directed edge, from a referencing node to a referenced node.
///
/// `to` may name a node that is not part of the graph (possible-type edges
/// are emitted by name regardless); the renderer tolerates dangling ids and
/// the analysis module filters them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
}

impl GraphEdge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// The built graph: ordered node and edge sequences plus the content hash
/// of the document they were derived from.
#[derive(Debug, Clone, Serialize)]
pub struct VisGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    /// SHA256 of the canonical document serialization.
    pub schema_hash: String,
    /// Style table captured at build time, used by presentation refresh.
    #[serde(skip)]
    groups: GroupTable,
}

impl VisGraph {
    pub(crate) fn new(
        nodes: Vec<GraphNode>,
        edges: Vec<GraphEdge>,
        schema_hash: String,
        groups: GroupTable,
    ) -> Self {
        Self {
            nodes,
            edges,
            schema_hash,
            groups,
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Find a node by id.
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// The style table this graph was built against.
    pub fn groups(&self) -> &GroupTable {
        &self.groups
    }

    /// Re-derive color and icon for one node (or all nodes when `id` is
    /// `None`) from the group table. Never alters the edge set.
    pub fn refresh_presentation(&mut self, id: Option<&str>) -> Result<()> {
        match id {
            Some(id) => {
                let node = self
                    .nodes
                    .iter_mut()
                    .find(|n| n.id == id)
                    .ok_or_else(|| VisError::UnknownNode(id.to_string()))?;
                annotate(node, &self.groups)
            }
            None => {
                for node in &mut self.nodes {
                    annotate(node, &self.groups)?;
                }
                Ok(())
            }
        }
    }

    /// Serialize the node/edge model for the rendering collaborator.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Apply the group-derived presentation to a single node.
pub(crate) fn annotate(node: &mut GraphNode, groups: &GroupTable) -> Result<()> {
    let style = groups.require(node.group)?;
    node.color = Some(style.color.clone());
    node.icon = Some(IconSpec {
        face: "FontAwesome".to_string(),
        code: style.icon.clone(),
        color: style.color.clone(),
    });
    Ok(())
}
