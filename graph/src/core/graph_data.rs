use super::{edge::GraphEdge, node::GraphNode};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Nodes and edges of a commit graph, plus the lane count the renderer
/// needs to size its canvas
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphData {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub lanes: usize,
}

impl GraphData {
    pub fn new(nodes: Vec<GraphNode>, edges: Vec<GraphEdge>, lanes: usize) -> Self {
        Self { nodes, edges, lanes }
    }

    /// Look up a node by commit id
    pub fn node(&self, sha: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|node| node.sha() == sha)
    }

    /// Count of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Count of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Get statistics about the graph
    pub fn stats(&self) -> GraphStats {
        let with_children: HashSet<&str> =
            self.edges.iter().map(|edge| edge.source.as_str()).collect();

        GraphStats {
            total_commits: self.nodes.len(),
            total_edges: self.edges.len(),
            merge_commits: self.nodes.iter().filter(|n| n.is_merge()).count(),
            root_commits: self.nodes.iter().filter(|n| n.commit.is_root()).count(),
            leaf_commits: self
                .nodes
                .iter()
                .filter(|n| !with_children.contains(n.sha()))
                .count(),
            lanes: self.lanes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub total_commits: usize,
    pub total_edges: usize,
    pub merge_commits: usize,
    pub root_commits: usize,
    pub leaf_commits: usize,
    pub lanes: usize,
}
