pub mod router;
pub mod viewport;
pub mod optimizer;
pub mod cache;
pub mod text;

pub use router::{EdgeRouter, EdgePath, EdgeGeometry, Point, calculate_edge_paths};
pub use viewport::{VisibleRange, calculate_visible_range, DEFAULT_BUFFER};
pub use optimizer::{optimize_graph_data, DEFAULT_ZOOM_THRESHOLD};
pub use cache::{GraphCache, DEFAULT_CACHE_CAPACITY};
