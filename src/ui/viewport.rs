//! Viewport management for scrolling.
//!
//! The [`Viewport`] tracks which buffer rows fit on screen and scrolls
//! just enough to keep the cursor row visible.

/// Manages the visible portion of the buffer.
///
/// The viewport tracks:
/// - Height of the text area in rows
/// - Current scroll offset (first visible row)
/// - Total number of rows in the buffer
///
/// # Example
///
/// ```
/// use tined::ui::viewport::Viewport;
///
/// let mut vp = Viewport::new(10, 100);
/// assert_eq!(vp.offset(), 0);
///
/// vp.follow(25);
/// assert_eq!(vp.offset(), 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    height: u16,
    offset: usize,
    total_lines: usize,
}

impl Viewport {
    /// Create a new viewport scrolled to the top.
    ///
    /// # Arguments
    ///
    /// * `height` - Rows available for buffer text
    /// * `total_lines` - Rows in the buffer
    pub const fn new(height: u16, total_lines: usize) -> Self {
        Self {
            height,
            offset: 0,
            total_lines,
        }
    }

    /// Get the current scroll offset.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Get the viewport height.
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Scroll the minimum distance that brings `row` on screen.
    pub const fn follow(&mut self, row: usize) {
        let height = self.height as usize;
        if height == 0 {
            return;
        }
        if row < self.offset {
            self.offset = row;
        } else if row >= self.offset + height {
            self.offset = row + 1 - height;
        }
    }

    /// Resize the viewport.
    pub fn resize(&mut self, height: u16) {
        self.height = height;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Update the total number of rows (e.g., after an edit).
    pub fn set_total_lines(&mut self, total: usize) {
        self.total_lines = total;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Calculate the maximum valid offset.
    const fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.height as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shows(vp: &Viewport, row: usize) -> bool {
        row >= vp.offset() && row < vp.offset() + vp.height() as usize
    }

    #[test]
    fn test_new_viewport_starts_at_top() {
        let vp = Viewport::new(24, 100);
        assert_eq!(vp.offset(), 0);
    }

    #[test]
    fn test_follow_row_on_screen_does_not_scroll() {
        let mut vp = Viewport::new(24, 100);
        vp.follow(23);
        assert_eq!(vp.offset(), 0);
    }

    #[test]
    fn test_follow_below_scrolls_down_minimally() {
        let mut vp = Viewport::new(24, 100);
        vp.follow(24);
        assert_eq!(vp.offset(), 1);
        vp.follow(60);
        assert_eq!(vp.offset(), 37);
    }

    #[test]
    fn test_follow_above_scrolls_up_to_row() {
        let mut vp = Viewport::new(24, 100);
        vp.follow(60);
        vp.follow(10);
        assert_eq!(vp.offset(), 10);
    }

    #[test]
    fn test_follow_with_zero_height_is_noop() {
        let mut vp = Viewport::new(0, 100);
        vp.follow(50);
        assert_eq!(vp.offset(), 0);
    }

    #[test]
    fn test_resize_keeps_valid_offset() {
        let mut vp = Viewport::new(24, 100);
        vp.follow(73);
        assert_eq!(vp.offset(), 50);
        vp.resize(60);
        assert_eq!(vp.offset(), 40); // max_offset is now 40
    }

    #[test]
    fn test_set_total_lines_adjusts_offset() {
        let mut vp = Viewport::new(24, 100);
        vp.follow(99);
        vp.set_total_lines(50);
        assert_eq!(vp.offset(), 26); // max_offset is now 26
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn follow_keeps_row_visible(
                total_lines in 1..10000usize,
                height in 1..100u16,
                rows in prop::collection::vec(0..10000usize, 1..20),
            ) {
                let mut vp = Viewport::new(height, total_lines);
                for row in rows {
                    let row = row % total_lines;
                    vp.follow(row);
                    prop_assert!(shows(&vp, row));
                }
            }

            #[test]
            fn offset_within_bounds(
                total_lines in 0..10000usize,
                height in 1..100u16,
                row in 0..10000usize,
            ) {
                let mut vp = Viewport::new(height, total_lines);
                vp.follow(row);
                vp.set_total_lines(total_lines);

                prop_assert!(vp.offset() <= total_lines.saturating_sub(height as usize));
            }
        }
    }
}
