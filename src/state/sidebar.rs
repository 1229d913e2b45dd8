//! User-defined board categories shown as sidebar groups.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::state::board::{Board, BoardView};

/// A named grouping of boards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBlocks {
    pub id: String,
    pub name: String,
    /// Board identifiers that belong to this category, in display order.
    #[serde(default)]
    pub block_ids: Vec<String>,
}

impl CategoryBlocks {
    /// Whether `board_id` is a member of this category.
    pub fn contains(&self, board_id: &str) -> bool {
        self.block_ids.iter().any(|id| id == board_id)
    }
}

/// Props for one rendered sidebar row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarItem {
    pub category: CategoryBlocks,
    pub board: Board,
    pub is_active: bool,
}

/// `<For>` key for a sidebar row: category id, the board itself, and the
/// active flag. Membership changes elsewhere never re-key a row.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SidebarItemKey {
    pub category_id: String,
    pub board: Board,
    pub is_active: bool,
}

impl SidebarItem {
    pub fn key(&self) -> SidebarItemKey {
        SidebarItemKey {
            category_id: self.category.id.clone(),
            board: self.board.clone(),
            is_active: self.is_active,
        }
    }
}

/// Category id and name, the `<For>` key for a category group.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CategoryHeader {
    pub id: String,
    pub name: String,
}

/// Categories, boards, and per-board views known to the sidebar host.
#[derive(Clone, Debug, Default)]
pub struct SidebarState {
    pub categories: Vec<CategoryBlocks>,
    pub boards: Vec<Board>,
    pub views: HashMap<String, Vec<BoardView>>,
}

impl SidebarState {
    /// One header per category, in display order.
    pub fn category_headers(&self) -> Vec<CategoryHeader> {
        self.categories
            .iter()
            .map(|c| CategoryHeader {
                id: c.id.clone(),
                name: c.name.clone(),
            })
            .collect()
    }

    /// Rows for the category `category_id`, in the category's own order.
    /// Ids with no loaded board are skipped; an unknown category has no rows.
    pub fn items_for(&self, category_id: &str, active_board_id: Option<&str>) -> Vec<SidebarItem> {
        let Some(category) = self.categories.iter().find(|c| c.id == category_id) else {
            return Vec::new();
        };
        category
            .block_ids
            .iter()
            .filter_map(|id| self.boards.iter().find(|b| &b.id == id))
            .map(|board| SidebarItem {
                category: category.clone(),
                board: board.clone(),
                is_active: active_board_id == Some(board.id.as_str()),
            })
            .collect()
    }

    /// Views of `board_id`, or none if they are not loaded.
    pub fn views_for(&self, board_id: &str) -> Vec<BoardView> {
        self.views.get(board_id).cloned().unwrap_or_default()
    }

    /// Reassign `block_id` from `from_category_id` to `to_category_id`.
    ///
    /// The block is appended to the destination unless already there. An
    /// unknown destination leaves the source untouched.
    pub fn move_block(&mut self, block_id: &str, from_category_id: &str, to_category_id: &str) {
        if from_category_id == to_category_id {
            return;
        }
        let Some(to) = self.categories.iter_mut().find(|c| c.id == to_category_id) else {
            return;
        };
        if !to.contains(block_id) {
            to.block_ids.push(block_id.to_owned());
        }
        if let Some(from) = self.categories.iter_mut().find(|c| c.id == from_category_id) {
            from.block_ids.retain(|id| id != block_id);
        }
    }

    /// Drop a deleted board and every reference to it.
    pub fn remove_board(&mut self, board_id: &str) {
        self.boards.retain(|b| b.id != board_id);
        for category in &mut self.categories {
            category.block_ids.retain(|id| id != board_id);
        }
        self.views.remove(board_id);
    }
}
