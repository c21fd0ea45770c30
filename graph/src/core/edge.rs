use serde::{Deserialize, Serialize};

/// An edge connecting a parent commit to one of its children
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Parent commit ID
    pub source: String,
    /// Child commit ID
    pub target: String,
    #[serde(rename = "type")]
    pub edge_type: EdgeType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeType {
    /// Regular parent-child relationship
    #[default]
    Default,
    /// Edge into a merge commit
    Merge,
    /// Edge out of a branch point
    Fork,
}

impl GraphEdge {
    pub fn new(source: String, target: String) -> Self {
        Self {
            source,
            target,
            edge_type: EdgeType::Default,
        }
    }

    pub fn with_type(mut self, edge_type: EdgeType) -> Self {
        self.edge_type = edge_type;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_type_wire_name() {
        let edge = GraphEdge::new("p".to_string(), "c".to_string()).with_type(EdgeType::Merge);
        let value = serde_json::to_value(&edge).unwrap();
        assert_eq!(value["type"], "merge");
        assert_eq!(value["source"], "p");
        assert_eq!(value["target"], "c");
    }
}
