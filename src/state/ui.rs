//! Local UI chrome state for sidebar rows.
//!
//! DESIGN
//! ======
//! Menu open/closed flags are transient presentation state owned by one
//! component instance. They are never persisted and reset on remount.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use std::collections::HashMap;

/// Per-board "options menu is open" flags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardsMenuState {
    open: HashMap<String, bool>,
}

impl BoardsMenuState {
    /// Whether the options menu for `board_id` is open. Unknown ids are closed.
    pub fn is_open(&self, board_id: &str) -> bool {
        self.open.get(board_id).copied().unwrap_or(false)
    }

    /// Copy of this state with `board_id` set to `open`; other entries are kept.
    #[must_use]
    pub fn with_toggled(&self, board_id: &str, open: bool) -> Self {
        let mut next = self.clone();
        next.open.insert(board_id.to_owned(), open);
        next
    }

    /// CSS class for the menu wrapper of `board_id`.
    pub fn wrapper_class(&self, board_id: &str) -> &'static str {
        if self.is_open(board_id) { "menuOpen" } else { "x" }
    }
}
