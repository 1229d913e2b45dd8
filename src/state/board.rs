//! Board and board-view blocks as read by the sidebar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Boards and views are created and deleted by the backend-backed store.
//! The sidebar only reads them, so these types stay plain data.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use serde::{Deserialize, Serialize};

/// A top-level board shown as one sidebar row.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Unique board identifier.
    pub id: String,
    /// Display title; may be empty.
    #[serde(default)]
    pub title: String,
    /// Emoji or glyph rendered before the title.
    #[serde(default)]
    pub icon: String,
}

/// Visual arrangement of a board's content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    #[default]
    Board,
    Table,
    Gallery,
    Calendar,
    /// Any tag outside the known set.
    #[serde(other)]
    Other,
}

impl ViewType {
    /// Glyph shown next to a view row. Unknown types get a blank glyph.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Board => "▦",
            Self::Table => "☷",
            Self::Gallery => "▣",
            Self::Calendar => "▤",
            Self::Other => "",
        }
    }

    /// CSS modifier for the icon element.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Board => "view-icon view-icon--board",
            Self::Table => "view-icon view-icon--table",
            Self::Gallery => "view-icon view-icon--gallery",
            Self::Calendar => "view-icon view-icon--calendar",
            Self::Other => "view-icon view-icon--blank",
        }
    }
}

/// Per-view settings carried in the `fields` object on the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardViewFields {
    #[serde(default)]
    pub view_type: ViewType,
}

/// One view of a board, listed under the active board row.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub fields: BoardViewFields,
}
