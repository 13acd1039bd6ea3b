//! Scroll-window geometry for a virtual list.
//!
//! Pure data component shared by the UI and the sentinel trigger: tracks a
//! clamped scroll offset over a row count and computes which rows are
//! visible, plus overflow counts for scroll indicators. Knows nothing about
//! rendering.

/// Information about the visible portion of the list.
#[derive(Debug, Clone)]
pub struct WindowInfo {
    /// Row indices visible in the current viewport, top to bottom.
    pub visible_rows: Vec<usize>,
    /// Count of rows above the viewport.
    pub rows_above: usize,
    /// Count of rows below the viewport.
    pub rows_below: usize,
    /// Whether there are rows above the viewport.
    pub show_above_indicator: bool,
    /// Whether there are rows below the viewport.
    pub show_below_indicator: bool,
}

impl WindowInfo {
    /// Window over an empty list.
    pub fn empty() -> Self {
        Self {
            visible_rows: vec![],
            rows_above: 0,
            rows_below: 0,
            show_above_indicator: false,
            show_below_indicator: false,
        }
    }
}

/// Scroll state over a list of rows.
#[derive(Debug, Clone)]
pub struct ScrollWindow {
    total_rows: usize,
    offset: usize,
}

impl ScrollWindow {
    pub fn new(total_rows: usize) -> Self {
        Self {
            total_rows,
            offset: 0,
        }
    }

    /// Update the row count, clamping the offset if the list shrank.
    pub fn set_total_rows(&mut self, total_rows: usize) {
        self.total_rows = total_rows;
        if self.offset >= total_rows && total_rows > 0 {
            self.offset = total_rows - 1;
        }
    }

    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        if self.total_rows == 0 {
            return;
        }
        self.offset = (self.offset + lines).min(self.total_rows - 1);
    }

    pub fn jump_to_top(&mut self) {
        self.offset = 0;
    }

    /// Scroll so the last row sits at the bottom of the viewport.
    pub fn jump_to_bottom(&mut self, viewport_height: usize) {
        self.offset = self.total_rows.saturating_sub(viewport_height.max(1));
    }

    /// Whether the last row is entirely inside the viewport.
    ///
    /// The feed renders a one-row marker after the final product; this is
    /// the "marker fully visible" test that drives the next-page trigger.
    pub fn last_row_visible(&self, viewport_height: usize) -> bool {
        if viewport_height == 0 || self.total_rows == 0 {
            return false;
        }
        self.offset + viewport_height >= self.total_rows
    }

    /// Get information about which rows to render.
    pub fn window(&self, viewport_height: usize) -> WindowInfo {
        if self.total_rows == 0 || viewport_height == 0 {
            return WindowInfo::empty();
        }

        let visible_rows: Vec<usize> = (0..viewport_height)
            .map(|i| self.offset + i)
            .filter(|&idx| idx < self.total_rows)
            .collect();

        let last_visible = visible_rows.last().copied().unwrap_or(0);
        let rows_above = self.offset;
        let rows_below = if visible_rows.is_empty() {
            self.total_rows.saturating_sub(self.offset)
        } else {
            self.total_rows.saturating_sub(last_visible + 1)
        };

        WindowInfo {
            visible_rows,
            rows_above,
            rows_below,
            show_above_indicator: rows_above > 0,
            show_below_indicator: rows_below > 0,
        }
    }
}

impl Default for ScrollWindow {
    fn default() -> Self {
        Self::new(0)
    }
}
