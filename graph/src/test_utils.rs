use crate::core::{CommitSummary, GraphData};
use crate::core::parse_commit_graph;
use crate::layout::build_graph_layout;
use chrono::Utc;

/// Build a commit with the given id and parents
pub(crate) fn commit(sha: &str, parents: &[&str]) -> CommitSummary {
    CommitSummary::new(
        sha.to_string(),
        parents.iter().map(|p| p.to_string()).collect(),
        Utc::now(),
        "Test".to_string(),
        format!("Commit {}", sha),
    )
}

/// Parse and lay out a batch of commits with a 10px lane width
pub(crate) fn laid_out(commits: &[CommitSummary]) -> GraphData {
    build_graph_layout(parse_commit_graph(commits), 10.0)
}

/// C1 forks into C2 and C3, which merge back into C4 (newest first)
pub(crate) fn fork_and_merge() -> Vec<CommitSummary> {
    vec![
        commit("C4", &["C2", "C3"]),
        commit("C3", &["C1"]),
        commit("C2", &["C1"]),
        commit("C1", &[]),
    ]
}
