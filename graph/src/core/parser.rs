use super::{CommitSummary, GraphData, GraphEdge, GraphNode};
use std::collections::HashSet;

/// Convert a batch of commits into unpositioned graph nodes and
/// parent -> child edges.
///
/// Parents that are not part of the batch (a paginated window, a shallow
/// history) get no edge, and neither does a commit naming itself as a
/// parent. Every node keeps its input index as a placeholder
/// row until the builder runs.
pub fn parse_commit_graph(commits: &[CommitSummary]) -> GraphData {
    let known: HashSet<&str> = commits.iter().map(|c| c.sha.as_str()).collect();

    let mut edges = Vec::new();
    for commit in commits {
        for parent_id in &commit.parents {
            if parent_id != &commit.sha && known.contains(parent_id.as_str()) {
                edges.push(GraphEdge::new(parent_id.clone(), commit.sha.clone()));
            }
        }
    }

    let nodes = commits
        .iter()
        .enumerate()
        .map(|(row, commit)| GraphNode::unplaced(commit.clone(), row))
        .collect();

    GraphData::new(nodes, edges, 1)
}
