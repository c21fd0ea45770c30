use crate::core::GraphNode;
use crate::render::text::truncate_to_width;
use std::time::{Duration, Instant};
use tracing::trace;

/// Delay before a tooltip appears over a hovered node
pub const DEFAULT_HOVER_DELAY: Duration = Duration::from_millis(300);

/// Pointer coordinates as reported by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Tooltip anchored at the raw pointer position. Keeping it inside the
/// viewport is up to the host.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub node: GraphNode,
    pub x: f64,
    pub y: f64,
}

impl Tooltip {
    /// One-line summary fitting `max_width` columns
    pub fn label(&self, max_width: usize) -> String {
        let commit = &self.node.commit;
        let text = format!("{} {}: {}", commit.short_sha, commit.author_name, commit.message);
        truncate_to_width(&text, max_width)
    }
}

/// Requests the controller hands back to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Open the detail view for a commit
    OpenDetails(String),
}

/// Tooltip waiting for its delay to elapse
#[derive(Debug)]
struct PendingTooltip {
    tooltip: Tooltip,
    due: Instant,
}

/// Hover, selection and tooltip state for a rendered graph.
///
/// The tooltip delay is a deadline rather than a timer thread: the host
/// calls [`poll`](Self::poll) from its render loop and the pending tooltip
/// is shown once the deadline has passed.
#[derive(Debug)]
pub struct InteractionController {
    hover_delay: Duration,
    hovered: Option<String>,
    selected: Option<String>,
    tooltip: Option<Tooltip>,
    pending: Option<PendingTooltip>,
    disposed: bool,
}

impl InteractionController {
    pub fn new(hover_delay: Duration) -> Self {
        Self {
            hover_delay,
            hovered: None,
            selected: None,
            tooltip: None,
            pending: None,
            disposed: false,
        }
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    /// True while a tooltip is waiting for its delay
    pub fn has_pending_tooltip(&self) -> bool {
        self.pending.is_some()
    }

    /// Pointer moved onto `node`, or off every node when `None`
    pub fn hover(&mut self, node: Option<&GraphNode>, pointer: PointerPosition) {
        self.hover_at(node, pointer, Instant::now());
    }

    pub fn hover_at(&mut self, node: Option<&GraphNode>, pointer: PointerPosition, now: Instant) {
        self.pending = None;

        match node {
            Some(node) => {
                self.hovered = Some(node.sha().to_string());
                if self.disposed {
                    return;
                }
                trace!(sha = node.sha(), "arming tooltip");
                self.pending = Some(PendingTooltip {
                    tooltip: Tooltip {
                        node: node.clone(),
                        x: pointer.x,
                        y: pointer.y,
                    },
                    due: now + self.hover_delay,
                });
            }
            None => {
                self.hovered = None;
                self.tooltip = None;
            }
        }
    }

    /// Show the pending tooltip if its delay has elapsed. Returns whether
    /// a tooltip was shown by this call.
    pub fn poll(&mut self) -> bool {
        self.poll_at(Instant::now())
    }

    pub fn poll_at(&mut self, now: Instant) -> bool {
        match self.pending.take() {
            Some(pending) if now >= pending.due => {
                self.tooltip = Some(pending.tooltip);
                true
            }
            other => {
                self.pending = other;
                false
            }
        }
    }

    /// Select `node`. Selection survives hover changes.
    pub fn click(&mut self, node: &GraphNode) {
        self.selected = Some(node.sha().to_string());
    }

    /// Hook for the host's detail view; leaves state untouched
    pub fn double_click(&self, node: &GraphNode) -> Action {
        Action::OpenDetails(node.sha().to_string())
    }

    /// Drop any pending tooltip. Nothing is armed after this.
    pub fn dispose(&mut self) {
        self.pending = None;
        self.disposed = true;
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(DEFAULT_HOVER_DELAY)
    }
}
