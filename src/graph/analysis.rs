//! Reference analysis over a built graph
//!
//! Loads the node/edge sequences into a petgraph `DiGraph` for degree
//! queries and DOT export. Edge multiplicity is preserved: a type referenced
//! by three fields of the same parent counts three times, which is the
//! reference-strength signal the layout side keys on.
//!
//! Edges whose target id has no node (possible-type edges can point outside
//! the graph) are excluded from this view. They remain in `VisGraph.edges`.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

use crate::graph::VisGraph;

/// In/out reference counts per node id.
#[derive(Debug, Clone)]
pub struct ReferenceStats {
    fan_in: HashMap<String, usize>,
    fan_out: HashMap<String, usize>,
}

impl ReferenceStats {
    /// Compute degree statistics for every node of the graph.
    pub fn compute(graph: &VisGraph) -> Self {
        let (digraph, indices) = to_petgraph(graph);

        let mut fan_in = HashMap::with_capacity(graph.nodes.len());
        let mut fan_out = HashMap::with_capacity(graph.nodes.len());
        for (id, &idx) in &indices {
            fan_in.insert(
                id.clone(),
                digraph.edges_directed(idx, Direction::Incoming).count(),
            );
            fan_out.insert(
                id.clone(),
                digraph.edges_directed(idx, Direction::Outgoing).count(),
            );
        }

        Self { fan_in, fan_out }
    }

    /// How many edges point at this node.
    pub fn fan_in(&self, id: &str) -> usize {
        self.fan_in.get(id).copied().unwrap_or(0)
    }

    /// How many edges this node emits.
    pub fn fan_out(&self, id: &str) -> usize {
        self.fan_out.get(id).copied().unwrap_or(0)
    }

    /// Node ids ordered by descending fan-in, ties broken by name for a
    /// stable ordering.
    pub fn most_referenced(&self, limit: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .fan_in
            .iter()
            .map(|(id, &count)| (id.as_str(), count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(limit);
        ranked
    }
}

/// Mirror the graph into a petgraph `DiGraph`, skipping dangling edges.
pub fn to_petgraph(graph: &VisGraph) -> (DiGraph<String, ()>, HashMap<String, NodeIndex>) {
    let mut digraph = DiGraph::with_capacity(graph.nodes.len(), graph.edges.len());
    let mut indices = HashMap::with_capacity(graph.nodes.len());

    for node in &graph.nodes {
        let idx = digraph.add_node(node.id.clone());
        indices.insert(node.id.clone(), idx);
    }
    for edge in &graph.edges {
        if let (Some(&from), Some(&to)) = (indices.get(&edge.from), indices.get(&edge.to)) {
            digraph.add_edge(from, to, ());
        }
    }

    (digraph, indices)
}

/// Export the graph to GraphViz DOT, colored by group style.
pub fn to_dot(graph: &VisGraph) -> String {
    let mut output = String::new();

    output.push_str("digraph SchemaVis {\n");
    output.push_str("  rankdir=LR;\n");
    output.push_str("  node [shape=box, style=\"filled,rounded\", fontname=\"Helvetica\", fontsize=10];\n");
    output.push_str("  edge [color=\"#808080\"];\n");
    output.push('\n');

    for node in &graph.nodes {
        let color = node.color.as_deref().unwrap_or("#9E9E9E");
        output.push_str(&format!(
            "  \"{}\" [label=\"{}\", fillcolor=\"{}\", tooltip=\"{}\"];\n",
            dot_id(&node.id),
            node.label,
            color,
            node.title,
        ));
    }

    output.push('\n');

    for edge in &graph.edges {
        // Dangling targets have no node statement; skip them here too.
        if graph.node(&edge.to).is_some() && graph.node(&edge.from).is_some() {
            output.push_str(&format!(
                "  \"{}\" -> \"{}\";\n",
                dot_id(&edge.from),
                dot_id(&edge.to)
            ));
        }
    }

    output.push_str("}\n");
    output
}

fn dot_id(id: &str) -> String {
    id.replace(['"', '\\'], "_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{build, BuildOptions};
    use crate::groups::GroupTable;
    use crate::introspection::IntrospectionDocument;

    fn sample_graph() -> VisGraph {
        let doc = IntrospectionDocument::from_str(
            r#"{"data": {"__schema": {
                "queryType": {"name": "Query"},
                "types": [
                    {"name": "Query", "kind": "OBJECT", "fields": [
                        {"name": "user", "type": {"kind": "OBJECT", "name": "User"}},
                        {"name": "users", "type": {"kind": "LIST", "ofType": {"kind": "OBJECT", "name": "User"}}}
                    ]},
                    {"name": "User", "kind": "OBJECT", "fields": [
                        {"name": "friend", "type": {"kind": "OBJECT", "name": "User"}}
                    ]}
                ]
            }}}"#,
        )
        .unwrap();
        build(&doc, &BuildOptions::default(), &GroupTable::default()).unwrap()
    }

    #[test]
    fn test_fan_in_counts_multiplicity() {
        let graph = sample_graph();
        let stats = ReferenceStats::compute(&graph);
        // user, users, and the self-referential friend field all point at User.
        assert_eq!(stats.fan_in("User"), 3);
        assert_eq!(stats.fan_out("user"), 1);
    }

    #[test]
    fn test_most_referenced_ordering() {
        let graph = sample_graph();
        let stats = ReferenceStats::compute(&graph);
        let ranked = stats.most_referenced(1);
        assert_eq!(ranked, vec![("User", 3)]);
    }

    #[test]
    fn test_dot_export_contains_nodes_and_edges() {
        let graph = sample_graph();
        let dot = to_dot(&graph);
        assert!(dot.starts_with("digraph SchemaVis {"));
        assert!(dot.contains("\"User\" [label=\"User\""));
        assert!(dot.contains("\"user\" -> \"User\";"));
        assert!(dot.contains("\"User\" -> \"User\";"));
    }
}
