//! Open/closed state for the collapsible category overlay.

/// Visibility cell for the category menu.
///
/// Owned by the navbar instance and independent of which category (if any) is
/// active: closing the menu never clears the active category, and selecting a
/// category never reopens the menu.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CategoryMenu {
    open: bool,
}

impl CategoryMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The toggle control strictly flips the flag.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Selecting a category always leaves the menu closed, whatever its prior
    /// state.
    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!CategoryMenu::default().is_open());
    }

    #[test]
    fn toggle_strictly_flips() {
        let mut menu = CategoryMenu::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn even_number_of_toggles_restores_initial_state() {
        let mut menu = CategoryMenu::default();
        for _ in 0..6 {
            menu.toggle();
        }
        assert_eq!(menu, CategoryMenu::default());
    }

    #[test]
    fn close_wins_from_either_state() {
        let mut open = CategoryMenu::default();
        open.toggle();
        open.close();
        assert!(!open.is_open());

        let mut closed = CategoryMenu::default();
        closed.close();
        assert!(!closed.is_open());
    }
}
