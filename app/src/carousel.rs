//! Hero carousel position.

use std::time::Duration;

/// Delay between automatic slide changes.
pub const SLIDE_INTERVAL: Duration = Duration::from_millis(5000);

/// Index into a cyclic slide sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    /// A carousel over `len` slides, starting at the first.
    pub const fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Position of the visible slide.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Whether there are no slides at all.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Move to the next slide, wrapping after the last.
    pub fn advance(&mut self) {
        if !self.is_empty() {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Jump to slide `index`. Out-of-range indices are ignored.
    ///
    /// Returns `true` if the position changed.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len || index == self.index {
            return false;
        }
        self.index = index;
        true
    }

    /// Whether slide `index` is the visible one.
    pub const fn is_active(&self, index: usize) -> bool {
        !self.is_empty() && self.index == index
    }

    /// CSS opacity of slide `index`: only the active slide is visible.
    pub const fn opacity(&self, index: usize) -> u8 {
        if self.is_active(index) { 1 } else { 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_first_slide() {
        let carousel = Carousel::new(2);
        assert_eq!(carousel.index(), 0);
        assert!(carousel.is_active(0));
        assert!(!carousel.is_active(1));
    }

    #[test]
    fn test_two_slides_alternate() {
        let mut carousel = Carousel::new(2);
        let mut seen = Vec::new();
        for _ in 0..5 {
            carousel.advance();
            seen.push(carousel.index());
        }
        assert_eq!(seen, vec![1, 0, 1, 0, 1]);
    }

    #[test]
    fn test_select_then_advance_continues_from_selection() {
        let mut carousel = Carousel::new(3);
        assert!(carousel.select(2));
        assert_eq!(carousel.index(), 2);
        carousel.advance();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut carousel = Carousel::new(2);
        assert!(!carousel.select(5));
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_select_current_reports_no_change() {
        let mut carousel = Carousel::new(2);
        assert!(!carousel.select(0));
    }

    #[test]
    fn test_empty_carousel_never_advances() {
        let mut carousel = Carousel::new(0);
        carousel.advance();
        assert_eq!(carousel.index(), 0);
        assert!(carousel.is_empty());
        assert!(!carousel.is_active(0));
    }

    #[test]
    fn test_only_active_slide_is_opaque() {
        let mut carousel = Carousel::new(2);
        carousel.advance();
        assert_eq!(carousel.opacity(0), 0);
        assert_eq!(carousel.opacity(1), 1);
    }

    #[test]
    fn test_slide_interval() {
        assert_eq!(SLIDE_INTERVAL.as_millis(), 5000);
    }
}
