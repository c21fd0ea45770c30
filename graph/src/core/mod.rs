pub mod node;
pub mod edge;
pub mod graph_data;
pub mod parser;

pub use node::{CommitSummary, GraphNode, SHORT_SHA_LEN};
pub use edge::{GraphEdge, EdgeType};
pub use graph_data::{GraphData, GraphStats};
pub use parser::parse_commit_graph;
