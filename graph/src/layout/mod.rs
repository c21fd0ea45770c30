pub mod lanes;
pub mod builder;

pub use lanes::LaneTable;
pub use builder::{GraphBuilder, build_graph_layout};
