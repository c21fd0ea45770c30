use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Length of the abbreviated commit id shown in labels
pub const SHORT_SHA_LEN: usize = 7;

/// A commit as handed over by the history provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitSummary {
    /// Full commit id (SHA)
    pub sha: String,
    /// Abbreviated commit id
    pub short_sha: String,
    /// Commit message (summary line)
    pub message: String,
    /// Author name
    pub author_name: String,
    /// Commit timestamp
    pub timestamp: DateTime<Utc>,
    /// Parent commit ids, first parent first
    pub parents: Vec<String>,
}

impl CommitSummary {
    pub fn new(
        sha: String,
        parents: Vec<String>,
        timestamp: DateTime<Utc>,
        author_name: String,
        message: String,
    ) -> Self {
        let short_sha = sha.get(..SHORT_SHA_LEN).unwrap_or(&sha).to_string();
        Self {
            sha,
            short_sha,
            message,
            author_name,
            timestamp,
            parents,
        }
    }

    /// Check if this is a root commit (no parents)
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    /// Check if this is a merge commit (multiple parents)
    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }
}

/// A commit with its position in the laid-out graph.
///
/// `y` is the row index in topological order, `x` the horizontal pixel
/// offset of the lane (`lane * lane_width`). The builder writes the three
/// layout fields; everything else is the commit as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    #[serde(flatten)]
    pub commit: CommitSummary,
    pub x: f64,
    pub y: usize,
    pub lane: usize,
}

impl GraphNode {
    /// Wrap a commit with placeholder layout fields
    pub fn unplaced(commit: CommitSummary, row: usize) -> Self {
        Self {
            commit,
            x: 0.0,
            y: row,
            lane: 0,
        }
    }

    pub fn sha(&self) -> &str {
        &self.commit.sha
    }

    pub fn parents(&self) -> &[String] {
        &self.commit.parents
    }

    pub fn is_merge(&self) -> bool {
        self.commit.is_merge()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_sha() {
        let commit = CommitSummary::new(
            "0123456789abcdef".to_string(),
            vec![],
            Utc::now(),
            "Alice".to_string(),
            "Initial".to_string(),
        );
        assert_eq!(commit.short_sha, "0123456");
        assert!(commit.is_root());

        // Ids shorter than the abbreviation are kept whole
        let short = CommitSummary::new(
            "c1".to_string(),
            vec!["c0".to_string(), "b0".to_string()],
            Utc::now(),
            "Bob".to_string(),
            "Merge".to_string(),
        );
        assert_eq!(short.short_sha, "c1");
        assert!(short.is_merge());
    }

    #[test]
    fn test_node_serializes_flat() {
        let commit = CommitSummary::new(
            "abc".to_string(),
            vec![],
            Utc::now(),
            "Alice".to_string(),
            "Initial".to_string(),
        );
        let node = GraphNode::unplaced(commit, 3);
        let value = serde_json::to_value(&node).unwrap();

        assert_eq!(value["sha"], "abc");
        assert_eq!(value["y"], 3);
        assert_eq!(value["lane"], 0);
    }
}
