//! Header elevation and mobile menu state.

/// Vertical scroll offset, in CSS pixels, past which the header gains a shadow.
pub const ELEVATION_THRESHOLD_PX: f64 = 10.0;

/// Whether the header is elevated at vertical scroll offset `offset`.
pub fn is_elevated(offset: f64) -> bool {
    offset > ELEVATION_THRESHOLD_PX
}

/// Open/closed state of the mobile navigation panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the panel (menu button).
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Close the panel (any click inside it).
    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elevation_boundary() {
        assert!(!is_elevated(0.0));
        assert!(!is_elevated(10.0));
        assert!(is_elevated(11.0));
        assert!(is_elevated(10.5));
    }

    #[test]
    fn test_menu_closed_by_default() {
        assert!(!MobileMenu::default().is_open());
    }

    #[test]
    fn test_toggle_then_click_inside_closes() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_toggle_twice_closes() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let mut menu = MobileMenu::default();
        menu.close();
        assert!(!menu.is_open());
    }
}
