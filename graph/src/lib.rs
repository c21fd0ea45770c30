pub mod core;
pub mod config;
pub mod error;
pub mod git_backend;
pub mod layout;
pub mod render;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;

pub use self::core::{CommitSummary, GraphNode, GraphEdge, EdgeType, GraphData, GraphStats, parse_commit_graph};
pub use config::GraphConfig;
pub use error::GraphError;
pub use git_backend::GitWalker;
pub use layout::{GraphBuilder, build_graph_layout};
pub use render::{
    EdgeRouter, EdgePath, EdgeGeometry, GraphCache, VisibleRange,
    calculate_edge_paths, calculate_visible_range, optimize_graph_data,
};
pub use ui::{InteractionController, PointerPosition, Tooltip};
