use serde::Serialize;

/// Rows kept above and below the viewport by default
pub const DEFAULT_BUFFER: usize = 10;

/// Inclusive window of row indices worth drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisibleRange {
    pub start: usize,
    pub end: usize,
}

impl VisibleRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Check if a row is inside the window
    pub fn contains(&self, row: usize) -> bool {
        row >= self.start && row <= self.end
    }

    /// Number of rows in the window
    pub fn len(&self) -> usize {
        (self.end + 1).saturating_sub(self.start)
    }
}

/// Convert a pixel scroll position into a row window, widened by `buffer`
/// rows on each side and clamped to `0..total_nodes`.
///
/// An empty history yields the degenerate window `0..=0`. A non-positive
/// row height cannot be mapped to rows, so the whole history is returned.
/// A viewport scrolled entirely above the first row collapses onto row 0.
pub fn calculate_visible_range(
    scroll_top: f64,
    viewport_height: f64,
    row_height: f64,
    total_nodes: usize,
    buffer: usize,
) -> VisibleRange {
    if total_nodes == 0 {
        return VisibleRange::new(0, 0);
    }
    let last_row = total_nodes - 1;

    if row_height.is_nan() || row_height <= 0.0 {
        return VisibleRange::new(0, last_row);
    }

    let top = if scroll_top.is_nan() { 0.0 } else { scroll_top };
    let bottom = top + viewport_height.max(0.0);

    // Float to int casts saturate: negative rows become 0, huge ones the last row
    let first_visible = (top / row_height).floor() as usize;
    let last_visible = (bottom / row_height).ceil() as usize;

    let end = last_visible.saturating_add(buffer).min(last_row);
    let start = first_visible.saturating_sub(buffer).min(end);

    VisibleRange::new(start, end)
}
