//! Schema-to-graph transformation
//!
//! Four deterministic passes over the introspection document:
//!
//! 1. Entity discovery — partition the type list into objects, input
//!    objects, and interfaces; pull the query/mutation root fields out as
//!    operations.
//! 2. Node creation — one node per entity, in a fixed order: objects,
//!    inputs, queries, mutations, then interfaces when enabled.
//! 3. Edge derivation — resolve every field, argument, and possible-type
//!    reference against a name index built once after pass 2; materialize
//!    field nodes when enabled.
//! 4. Metadata annotation — apply group-derived color and icon.
//!
//! Identical input and options always yield identical node and edge
//! sequences. Termination is structural: pass 3 iterates field lists, never
//! the type graph, so self-referential types simply produce self-edges.

use std::collections::{HashMap, HashSet};

use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::error::{Result, VisError};
use crate::graph::{annotate, GraphEdge, GraphNode, NodeSource, VisGraph};
use crate::groups::{GroupTable, VisualGroup};
use crate::introspection::{Field, IntrospectionDocument, SchemaType, TypeKind, TypeRef};
use crate::resolver;

/// Expansion policy for the transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildOptions {
    /// Materialize one Field-group node per field, plus a parent-to-field
    /// edge. Off by default.
    pub show_fields: bool,
    /// Materialize Interface-group nodes. Off by default.
    pub show_interfaces: bool,
}

/// Index from entity name to the ids of the pass-2 nodes carrying it,
/// in node-creation order. Built once, queried read-only during pass 3.
type NameIndex = HashMap<String, Vec<String>>;

/// Build the visual graph for one introspection document.
///
/// Pure with respect to its inputs: the document is only read, and every
/// call returns freshly allocated node and edge sequences.
pub fn build(
    doc: &IntrospectionDocument,
    options: &BuildOptions,
    groups: &GroupTable,
) -> Result<VisGraph> {
    let types = doc.types()?;
    let query_root = doc.data.schema.query_type.as_ref().map(|r| r.name.as_str());
    let mutation_root = doc.data.schema.mutation_type.as_ref().map(|r| r.name.as_str());

    // Pass 1: entity discovery. Root types are operation containers, not
    // plain types, so they are excluded from the object/input partitions.
    let is_root = |name: &str| Some(name) == query_root || Some(name) == mutation_root;

    let objects: Vec<&SchemaType> = types
        .iter()
        .filter(|t| t.kind == TypeKind::Object && !is_root(&t.name))
        .collect();
    let inputs: Vec<&SchemaType> = types
        .iter()
        .filter(|t| t.kind == TypeKind::InputObject && !is_root(&t.name))
        .collect();
    let interfaces: Vec<&SchemaType> = types
        .iter()
        .filter(|t| t.kind == TypeKind::Interface)
        .collect();

    let queries = root_fields(types, query_root, "query")?;
    let mutations = match root_fields(types, mutation_root, "mutation") {
        Ok(fields) => fields,
        Err(VisError::MissingRoot { name, .. }) => {
            // Only the query root is load-bearing; a dangling mutation root
            // degrades to an empty operation set.
            warn!(root = %name, "declared mutation root has no matching object type");
            &[]
        }
        Err(e) => return Err(e),
    };

    debug!(
        objects = objects.len(),
        inputs = inputs.len(),
        interfaces = interfaces.len(),
        queries = queries.len(),
        mutations = mutations.len(),
        "discovered schema entities"
    );

    // Pass 2: node creation, in fixed group order.
    let mut nodes: Vec<GraphNode> = Vec::with_capacity(types.len());
    for obj in &objects {
        nodes.push(type_node(obj, VisualGroup::Type));
    }
    for input in &inputs {
        nodes.push(type_node(input, VisualGroup::InputType));
    }
    for query in queries {
        nodes.push(field_node(query, query.name.clone(), VisualGroup::Query));
    }
    for mutation in mutations {
        nodes.push(field_node(mutation, mutation.name.clone(), VisualGroup::Mutation));
    }
    if options.show_interfaces {
        for iface in &interfaces {
            nodes.push(type_node(iface, VisualGroup::Interface));
        }
    }

    // Name index over the pass-2 nodes. Field nodes created below are
    // intentionally absent: they never receive reference edges.
    let mut index = NameIndex::with_capacity(nodes.len());
    for node in &nodes {
        index
            .entry(node.label.clone())
            .or_default()
            .push(node.id.clone());
    }

    // Pass 3: edge derivation.
    let mut edges: Vec<GraphEdge> = Vec::new();
    let mut field_nodes: Vec<GraphNode> = Vec::new();
    for node in &nodes {
        match &node.source {
            NodeSource::Type(ty) => {
                if let Some(fields) = &ty.fields {
                    for field in fields {
                        if options.show_fields {
                            let fid = format!("{}_{}", node.id, field.name);
                            field_nodes.push(field_node(field, fid.clone(), VisualGroup::Field));
                            edges.push(GraphEdge::new(&node.id, fid));
                        }
                        push_reference_edges(&mut edges, &index, &node.id, Some(&field.ty));
                    }
                }
                if let Some(possible) = &ty.possible_types {
                    // Implementations are already concrete names; edges are
                    // emitted directly, bypassing the resolver, whether or
                    // not a node exists for the target.
                    for pt in possible {
                        edges.push(GraphEdge::new(&node.id, &pt.name));
                    }
                }
            }
            NodeSource::Field(field) => {
                push_reference_edges(&mut edges, &index, &node.id, Some(&field.ty));
                for arg in &field.args {
                    push_reference_edges(&mut edges, &index, &node.id, Some(&arg.ty));
                }
            }
        }
    }
    nodes.extend(field_nodes);

    validate_unique_ids(&nodes)?;

    // Pass 4: metadata annotation. Fails fast on a group with no style.
    for node in &mut nodes {
        annotate(node, groups)?;
    }

    debug!(nodes = nodes.len(), edges = edges.len(), "graph built");

    Ok(VisGraph::new(nodes, edges, document_hash(doc)?, groups.clone()))
}

/// Fields of the declared root type for one operation kind.
///
/// An undeclared root yields an empty set; a declared root with no matching
/// object type is an error (the caller decides whether that is fatal).
fn root_fields<'a>(
    types: &'a [SchemaType],
    root: Option<&str>,
    operation: &str,
) -> Result<&'a [Field]> {
    let Some(root) = root else {
        return Ok(&[]);
    };
    let ty = types
        .iter()
        .find(|t| t.kind == TypeKind::Object && t.name == root)
        .ok_or_else(|| VisError::MissingRoot {
            operation: operation.to_string(),
            name: root.to_string(),
        })?;
    Ok(ty.fields.as_deref().unwrap_or(&[]))
}

fn type_node(ty: &SchemaType, group: VisualGroup) -> GraphNode {
    GraphNode {
        id: ty.name.clone(),
        label: ty.name.clone(),
        group,
        title: format!("Type: {}", ty.name),
        color: None,
        icon: None,
        source: NodeSource::Type(ty.clone()),
    }
}

fn field_node(field: &Field, id: String, group: VisualGroup) -> GraphNode {
    GraphNode {
        id,
        label: field.name.clone(),
        group,
        title: format!("Type: {}", resolver::signature(Some(&field.ty))),
        color: None,
        icon: None,
        source: NodeSource::Field(field.clone()),
    }
}

/// Emit one edge per indexed node the descriptor resolves to.
///
/// Scalar and enum leaves resolve to nothing and silently contribute no
/// edges. A type whose field refers back to itself yields a self-edge.
fn push_reference_edges(
    edges: &mut Vec<GraphEdge>,
    index: &NameIndex,
    from: &str,
    ty: Option<&TypeRef>,
) {
    let Some(leaf) = ty.and_then(named_leaf) else {
        return;
    };
    let Some(candidates) = index.get(leaf) else {
        return;
    };
    for id in candidates {
        // Indexed ids are entity names, so the resolver confirms the match.
        if resolver::matches(id, ty) {
            edges.push(GraphEdge::new(from, id));
        }
    }
}

/// Name of the concrete named leaf under a wrapper chain, if any.
fn named_leaf(ty: &TypeRef) -> Option<&str> {
    if ty.kind.is_concrete() {
        ty.name.as_deref()
    } else {
        ty.of_type.as_deref().and_then(named_leaf)
    }
}

fn validate_unique_ids(nodes: &[GraphNode]) -> Result<()> {
    let mut seen = HashSet::with_capacity(nodes.len());
    for node in nodes {
        if !seen.insert(node.id.as_str()) {
            return Err(VisError::DuplicateId(node.id.clone()));
        }
    }
    Ok(())
}

/// Content hash of the canonical document serialization, the determinism
/// anchor for downstream caching.
fn document_hash(doc: &IntrospectionDocument) -> Result<String> {
    let canonical = serde_json::to_string(doc)?;
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}
