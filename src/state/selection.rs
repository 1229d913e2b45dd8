//! Read-only selection context consumed by sidebar rows.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host page owns this state and provides it through Leptos context.
//! Sidebar items never write to it; selection changes flow through the
//! `show_board` / `show_view` callbacks instead.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use crate::state::board::BoardView;

/// The team the user is currently working in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Team {
    pub id: String,
}

/// Current team, the active board's views, and the active view.
#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    pub current_team: Option<Team>,
    pub current_board_views: Vec<BoardView>,
    pub current_view_id: Option<String>,
}

impl SelectionState {
    /// Team id for outbound mutations. An unresolved team yields `""`.
    pub fn team_id_or_empty(&self) -> String {
        self.current_team
            .as_ref()
            .map(|team| team.id.clone())
            .unwrap_or_default()
    }

    /// Whether `view_id` is the active view.
    pub fn is_current_view(&self, view_id: &str) -> bool {
        self.current_view_id.as_deref() == Some(view_id)
    }
}
