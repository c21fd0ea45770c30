use crate::core::{GraphEdge, GraphNode};
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// A point in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Routed shape of one edge
#[derive(Debug, Clone, PartialEq)]
pub enum EdgeGeometry {
    /// One endpoint could not be resolved
    Empty,
    /// Same-lane continuation
    Line { from: Point, to: Point },
    /// Lane change or edge into a merge commit
    Cubic {
        from: Point,
        ctrl1: Point,
        ctrl2: Point,
        to: Point,
    },
}

impl EdgeGeometry {
    pub fn is_empty(&self) -> bool {
        matches!(self, EdgeGeometry::Empty)
    }

    pub fn is_curve(&self) -> bool {
        matches!(self, EdgeGeometry::Cubic { .. })
    }

    /// Start and end points, if any
    pub fn endpoints(&self) -> Option<(Point, Point)> {
        match *self {
            EdgeGeometry::Empty => None,
            EdgeGeometry::Line { from, to } | EdgeGeometry::Cubic { from, to, .. } => {
                Some((from, to))
            }
        }
    }

    /// SVG path data (`d` attribute)
    pub fn to_svg_path(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for EdgeGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeGeometry::Empty => Ok(()),
            EdgeGeometry::Line { from, to } => {
                write!(f, "M {} {} L {} {}", from.x, from.y, to.x, to.y)
            }
            EdgeGeometry::Cubic { from, ctrl1, ctrl2, to } => write!(
                f,
                "M {} {} C {} {}, {} {}, {} {}",
                from.x, from.y, ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
            ),
        }
    }
}

fn serialize_svg<S: Serializer>(geometry: &EdgeGeometry, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(geometry)
}

/// Routed geometry for one graph edge
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgePath {
    pub edge: GraphEdge,
    #[serde(serialize_with = "serialize_svg")]
    pub path: EdgeGeometry,
    /// Drawn as a curve: the edge changes lane or ends in a merge commit
    pub is_merge: bool,
}

/// Computes edge geometry from node positions
pub struct EdgeRouter {
    row_height: f64,
    lane_width: f64,
}

impl EdgeRouter {
    pub fn new(row_height: f64, lane_width: f64) -> Self {
        Self {
            row_height,
            lane_width,
        }
    }

    /// Visual center of a node
    pub fn anchor(&self, node: &GraphNode) -> Point {
        Point::new(
            node.x + self.lane_width / 2.0,
            node.y as f64 * self.row_height + self.row_height / 2.0,
        )
    }

    /// Route every edge, one path per edge in input order
    pub fn route(&self, nodes: &[GraphNode], edges: &[GraphEdge]) -> Vec<EdgePath> {
        // A duplicated sha resolves to its first node, as in the builder
        let mut lookup: HashMap<&str, &GraphNode> = HashMap::with_capacity(nodes.len());
        for node in nodes {
            lookup.entry(node.sha()).or_insert(node);
        }

        edges
            .iter()
            .map(|edge| {
                let endpoints = lookup
                    .get(edge.source.as_str())
                    .zip(lookup.get(edge.target.as_str()));

                let (path, is_merge) = match endpoints {
                    Some((source, target)) => self.route_edge(source, target),
                    None => (EdgeGeometry::Empty, false),
                };

                EdgePath {
                    edge: edge.clone(),
                    path,
                    is_merge,
                }
            })
            .collect()
    }

    fn route_edge(&self, source: &GraphNode, target: &GraphNode) -> (EdgeGeometry, bool) {
        let from = self.anchor(source);
        let to = self.anchor(target);

        let lane_change = source.lane != target.lane;
        // Every edge converging on a merge commit is curved, even same-lane ones
        let into_merge = target.parents().len() > 1;

        if lane_change || into_merge {
            let half = (to.y - from.y) / 2.0;
            let geometry = EdgeGeometry::Cubic {
                from,
                ctrl1: Point::new(from.x, from.y + half),
                ctrl2: Point::new(to.x, to.y - half),
                to,
            };
            (geometry, true)
        } else {
            (EdgeGeometry::Line { from, to }, false)
        }
    }
}

/// Route `edges` over `nodes` with the given row height and lane width
pub fn calculate_edge_paths(
    nodes: &[GraphNode],
    edges: &[GraphEdge],
    row_height: f64,
    lane_width: f64,
) -> Vec<EdgePath> {
    EdgeRouter::new(row_height, lane_width).route(nodes, edges)
}
