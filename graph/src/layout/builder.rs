use crate::core::{GraphData, GraphNode};
use crate::layout::LaneTable;
use smallvec::SmallVec;
use std::collections::HashMap;
use tracing::debug;

/// Node indices of a commit's parents or children
type Links = SmallVec<[usize; 2]>;

/// Assigns rows and lanes to parsed commit graphs
pub struct GraphBuilder {
    lane_width: f64,
}

impl GraphBuilder {
    pub fn new(lane_width: f64) -> Self {
        Self { lane_width }
    }

    /// Lay out a parsed graph.
    ///
    /// Nodes come back sorted by row, parents before children. Edges are
    /// passed through untouched.
    pub fn build(&self, data: GraphData) -> GraphData {
        let GraphData { nodes, edges, .. } = data;

        let (parents, first_parent, children) = {
            let mut index: HashMap<&str, usize> = HashMap::with_capacity(nodes.len());
            for (idx, node) in nodes.iter().enumerate() {
                index.entry(node.sha()).or_insert(idx);
            }

            let parents: Vec<Links> = nodes
                .iter()
                .map(|node| {
                    node.parents()
                        .iter()
                        .filter(|id| id.as_str() != node.sha())
                        .filter_map(|id| index.get(id.as_str()).copied())
                        .collect()
                })
                .collect();

            // Only the first listed parent can pass its lane down
            let first_parent: Vec<Option<usize>> = nodes
                .iter()
                .map(|node| {
                    node.parents()
                        .first()
                        .filter(|id| id.as_str() != node.sha())
                        .and_then(|id| index.get(id.as_str()).copied())
                })
                .collect();

            let mut children: Vec<Links> = vec![Links::new(); nodes.len()];
            for edge in &edges {
                if let (Some(&source), Some(&target)) = (
                    index.get(edge.source.as_str()),
                    index.get(edge.target.as_str()),
                ) {
                    children[source].push(target);
                }
            }

            (parents, first_parent, children)
        };

        let order = topological_order(&parents);
        let lanes = assign_lanes(&order, &parents, &first_parent, &children);

        let mut slots: Vec<Option<GraphNode>> = nodes.into_iter().map(Some).collect();
        let positioned: Vec<GraphNode> = order
            .iter()
            .enumerate()
            .filter_map(|(row, &idx)| {
                slots[idx].take().map(|mut node| {
                    node.y = row;
                    node.lane = lanes[idx];
                    node.x = lanes[idx] as f64 * self.lane_width;
                    node
                })
            })
            .collect();

        let lane_count = positioned.iter().map(|n| n.lane + 1).max().unwrap_or(0);

        debug!(
            nodes = positioned.len(),
            edges = edges.len(),
            lanes = lane_count,
            "built graph layout"
        );

        GraphData::new(positioned, edges, lane_count)
    }
}

/// Lay out a parsed graph with the given lane width
pub fn build_graph_layout(data: GraphData, lane_width: f64) -> GraphData {
    GraphBuilder::new(lane_width).build(data)
}

/// Depth-first ordering that emits every node after all of its parents.
///
/// Every unvisited node is used as a root, in input order. A node reached
/// again while it is still on the stack is skipped, so malformed input with
/// cycles still terminates and every node is emitted exactly once.
fn topological_order(parents: &[Links]) -> Vec<usize> {
    let count = parents.len();
    let mut sorted = Vec::with_capacity(count);
    let mut visited = vec![false; count];
    let mut in_progress = vec![false; count];
    // (node, next parent to visit)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..count {
        if visited[root] {
            continue;
        }

        in_progress[root] = true;
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let (node, next) = *frame;

            if let Some(&parent) = parents[node].get(next) {
                frame.1 += 1;
                if visited[parent] || in_progress[parent] {
                    continue;
                }
                in_progress[parent] = true;
                stack.push((parent, 0));
            } else {
                stack.pop();
                in_progress[node] = false;
                visited[node] = true;
                sorted.push(node);
            }
        }
    }

    sorted
}

/// Greedy lane assignment over nodes in row order.
///
/// A node keeps its first parent's lane when that lane is still held by the
/// parent (or already free); otherwise it takes the lowest free lane. A
/// parent's lane is released once all of its children have been placed.
fn assign_lanes(
    order: &[usize],
    parents: &[Links],
    first_parent: &[Option<usize>],
    children: &[Links],
) -> Vec<usize> {
    let mut assigned: Vec<Option<usize>> = vec![None; parents.len()];
    let mut table = LaneTable::new();

    for &node in order {
        let inherited = first_parent[node].and_then(|parent| {
            assigned[parent].filter(|&lane| table.is_available_to(lane, parent))
        });

        let lane = match inherited {
            Some(lane) => lane,
            None => table.first_free(),
        };

        assigned[node] = Some(lane);
        table.claim(lane, node);

        for &parent in &parents[node] {
            let Some(parent_lane) = assigned[parent] else {
                continue;
            };
            let done = children[parent].iter().all(|&child| assigned[child].is_some());
            if done && table.release_if_held(parent_lane, parent) {
                tracing::trace!(lane = parent_lane, "released lane");
            }
        }
    }

    assigned.into_iter().map(|lane| lane.unwrap_or(0)).collect()
}
