// Scroll state for list sections that can outgrow their viewport
//
// The owning component keeps the state; dimensions are synced from the
// draw pass (the only place that knows the real viewport height) and input
// moves the offset.

/// Scroll position over a list of `total` items shown `viewport` at a time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollState {
    /// Index of the first visible item
    offset: usize,

    /// Number of items in the content
    total: usize,

    /// Number of items visible at once
    viewport: usize,
}

impl ScrollState {
    /// Update content and viewport dimensions, clamping the offset
    pub fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.total = total;
        self.viewport = viewport;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.offset = (self.offset + 1).min(self.max_offset());
    }

    pub fn page_up(&mut self) {
        self.offset = self.offset.saturating_sub(self.viewport.max(1));
    }

    pub fn page_down(&mut self) {
        self.offset = (self.offset + self.viewport.max(1)).min(self.max_offset());
    }

    /// Visible half-open range `(start, end)`
    pub fn visible_range(&self) -> (usize, usize) {
        let end = (self.offset + self.viewport).min(self.total);
        (self.offset.min(end), end)
    }

    /// Whether some items are out of view
    pub fn overflows(&self) -> bool {
        self.total > self.viewport
    }

    fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scroll(total: usize, viewport: usize) -> ScrollState {
        let mut state = ScrollState::default();
        state.update_dimensions(total, viewport);
        state
    }

    #[test]
    fn test_page_down_stops_at_last_page() {
        let mut state = scroll(10, 4);
        state.page_down();
        assert_eq!(state.visible_range(), (4, 8));
        state.page_down();
        assert_eq!(state.visible_range(), (6, 10));
        state.page_down();
        assert_eq!(state.visible_range(), (6, 10));

        state.page_up();
        state.page_up();
        assert_eq!(state.visible_range(), (0, 4));
    }

    #[test]
    fn test_line_scroll_is_bounded() {
        let mut state = scroll(3, 2);
        state.scroll_up();
        assert_eq!(state.visible_range(), (0, 2));
        state.scroll_down();
        state.scroll_down();
        assert_eq!(state.visible_range(), (1, 3));
    }

    #[test]
    fn test_growing_viewport_clamps_offset() {
        let mut state = scroll(10, 4);
        state.page_down();
        state.page_down();
        state.update_dimensions(10, 20);
        assert_eq!(state.visible_range(), (0, 10));
        assert!(!state.overflows());
    }

    #[test]
    fn test_fits_without_scrolling() {
        let mut state = scroll(2, 5);
        state.page_down();
        assert_eq!(state.visible_range(), (0, 2));
        assert!(!state.overflows());
    }
}
