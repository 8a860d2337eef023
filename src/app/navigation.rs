// SPDX-License-Identifier: MPL-2.0
//! Navigation stack and the selected color.
//!
//! [`Navigator`] is the only owner of the selection. The screens never talk
//! to each other: the picker reports a choice, the main screen asks to open
//! the picker or clear the selection, and `App::update` forwards those
//! requests here.
//!
//! The stack always has [`Screen::Main`] at its root and holds at most one
//! [`Screen::Picker`] above it, so the reachable states are exactly
//! `Main` and `Picker`.

use super::Screen;
use crate::domain::color::ColorItem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Screen>,
    selected: Option<ColorItem>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: vec![Screen::Main],
            selected: None,
        }
    }

    /// The screen on top of the stack.
    #[must_use]
    pub fn active_screen(&self) -> Screen {
        self.stack.last().copied().unwrap_or(Screen::Main)
    }

    #[must_use]
    pub fn selected(&self) -> Option<&ColorItem> {
        self.selected.as_ref()
    }

    #[cfg(test)]
    fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Shows the picker. Leaves the selection untouched.
    pub fn open_picker(&mut self) {
        if self.active_screen() == Screen::Picker {
            return;
        }
        self.stack.push(Screen::Picker);
        log::debug!("navigate: {} -> {}", Screen::Main.route(), Screen::Picker.route());
    }

    /// Stores the chosen color and pops back to the main screen.
    pub fn on_color_chosen(&mut self, item: ColorItem) {
        self.selected = Some(item);
        self.pop_to_root();
        log::info!("picked color {} ({})", item.name(), item.color());
    }

    /// Forgets the selection. Calling it again is a no-op.
    pub fn clear_selection(&mut self) {
        if self.selected.take().is_some() {
            log::info!("selection cleared");
        }
    }

    fn pop_to_root(&mut self) {
        let from = self.active_screen();
        self.stack.truncate(1);
        if from != Screen::Main {
            log::debug!("navigate: {} -> {}", from.route(), Screen::Main.route());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::color::{self, PALETTE};

    fn blue() -> ColorItem {
        color::find("Blue").expect("blue is in the palette")
    }

    #[test]
    fn starts_on_main_without_selection() {
        let nav = Navigator::new();
        assert_eq!(nav.active_screen(), Screen::Main);
        assert!(nav.selected().is_none());
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn open_picker_keeps_empty_selection() {
        let mut nav = Navigator::new();
        nav.open_picker();
        assert_eq!(nav.active_screen(), Screen::Picker);
        assert!(nav.selected().is_none());
    }

    #[test]
    fn open_picker_keeps_existing_selection() {
        let mut nav = Navigator::new();
        nav.on_color_chosen(blue());
        nav.open_picker();
        assert_eq!(nav.active_screen(), Screen::Picker);
        assert_eq!(nav.selected(), Some(&blue()));
    }

    #[test]
    fn open_picker_twice_does_not_stack_pickers() {
        let mut nav = Navigator::new();
        nav.open_picker();
        nav.open_picker();
        assert_eq!(nav.depth(), 2);
        nav.on_color_chosen(blue());
        assert_eq!(nav.active_screen(), Screen::Main);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn choosing_any_palette_color_stores_it_and_returns_to_main() {
        for item in PALETTE {
            let mut nav = Navigator::new();
            nav.open_picker();
            nav.on_color_chosen(item);
            assert_eq!(nav.selected(), Some(&item));
            assert_eq!(nav.active_screen(), Screen::Main);
        }
    }

    #[test]
    fn choosing_replaces_previous_selection() {
        let mut nav = Navigator::new();
        nav.open_picker();
        nav.on_color_chosen(PALETTE[0]);
        nav.open_picker();
        nav.on_color_chosen(PALETTE[9]);
        assert_eq!(nav.selected().map(ColorItem::name), Some("Orange"));
    }

    #[test]
    fn clear_selection_empties_state() {
        let mut nav = Navigator::new();
        nav.on_color_chosen(blue());
        nav.clear_selection();
        assert!(nav.selected().is_none());
        assert_eq!(nav.active_screen(), Screen::Main);
    }

    #[test]
    fn clear_selection_is_idempotent() {
        let mut once = Navigator::new();
        once.on_color_chosen(blue());
        once.clear_selection();

        let mut twice = Navigator::new();
        twice.on_color_chosen(blue());
        twice.clear_selection();
        twice.clear_selection();

        assert_eq!(once, twice);
    }

    #[test]
    fn clear_selection_on_empty_state_is_noop() {
        let mut nav = Navigator::new();
        nav.clear_selection();
        assert_eq!(nav, Navigator::new());
    }
}
