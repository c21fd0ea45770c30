use crate::core::GraphData;
use crate::render::VisibleRange;
use std::borrow::Cow;
use std::collections::HashSet;
use tracing::debug;

/// Zoom level above which the full graph is drawn
pub const DEFAULT_ZOOM_THRESHOLD: f64 = 0.8;

/// Reduce a laid-out graph to what is worth drawing at `zoom_level`.
///
/// Above `zoom_threshold` the input is returned as is. Otherwise only nodes
/// whose row falls inside `range` survive, and only edges with both
/// endpoints among them. `lanes` is kept so the canvas width does not jump
/// while scrolling.
pub fn optimize_graph_data(
    data: &GraphData,
    range: VisibleRange,
    zoom_level: f64,
    zoom_threshold: f64,
) -> Cow<'_, GraphData> {
    if zoom_level > zoom_threshold {
        return Cow::Borrowed(data);
    }

    let nodes: Vec<_> = data
        .nodes
        .iter()
        .filter(|node| range.contains(node.y))
        .cloned()
        .collect();

    let kept: HashSet<&str> = nodes.iter().map(|node| node.sha()).collect();
    let edges: Vec<_> = data
        .edges
        .iter()
        .filter(|edge| kept.contains(edge.source.as_str()) && kept.contains(edge.target.as_str()))
        .cloned()
        .collect();

    debug!(
        start = range.start,
        end = range.end,
        nodes = nodes.len(),
        edges = edges.len(),
        "reduced graph for zoom {}",
        zoom_level
    );

    Cow::Owned(GraphData::new(nodes, edges, data.lanes))
}
