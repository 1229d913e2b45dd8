//! Localized sidebar strings.
//!
//! A `Messages` catalog maps stable message ids to translated text. Ids with
//! no override resolve to the built-in English default, so a missing catalog
//! never leaks a raw id into the UI.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use std::collections::HashMap;

/// Stable identifiers for every string the sidebar renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageId {
    UntitledBoard,
    UntitledView,
    DeleteBoard,
    MoveTo,
    DeleteBoardConfirmTitle,
    DeleteBoardConfirmBody,
    Cancel,
}

impl MessageId {
    /// Catalog key for this message.
    pub fn key(self) -> &'static str {
        match self {
            Self::UntitledBoard => "Sidebar.untitled-board",
            Self::UntitledView => "Sidebar.untitled-view",
            Self::DeleteBoard => "Sidebar.delete-board",
            Self::MoveTo => "SidebarCategories.BlocksMenu.Move",
            Self::DeleteBoardConfirmTitle => "DeleteBoardDialog.confirm-title",
            Self::DeleteBoardConfirmBody => "DeleteBoardDialog.confirm-info",
            Self::Cancel => "DeleteBoardDialog.cancel",
        }
    }

    /// English text used when the catalog has no override.
    pub fn default_message(self) -> &'static str {
        match self {
            Self::UntitledBoard => "(Untitled Board)",
            Self::UntitledView => "(Untitled View)",
            Self::DeleteBoard => "Delete Board",
            Self::MoveTo => "Move To...",
            Self::DeleteBoardConfirmTitle => "Confirm Delete Board",
            Self::DeleteBoardConfirmBody => "Are you sure you want to delete this board?",
            Self::Cancel => "Cancel",
        }
    }
}

/// Message catalog keyed by `MessageId::key`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Messages {
    overrides: HashMap<String, String>,
}

impl Messages {
    /// Build a catalog from `(key, text)` pairs, e.g. a loaded locale file.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            overrides: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Resolve `id` to its localized text.
    pub fn format(&self, id: MessageId) -> String {
        self.overrides
            .get(id.key())
            .filter(|text| !text.is_empty())
            .cloned()
            .unwrap_or_else(|| id.default_message().to_owned())
    }

    /// `title` unless it is empty, else the localized placeholder `id`.
    pub fn title_or(&self, title: &str, id: MessageId) -> String {
        if title.is_empty() {
            self.format(id)
        } else {
            title.to_owned()
        }
    }
}

/// Catalog from context, or the English defaults if none was provided.
pub fn use_messages() -> Messages {
    leptos::prelude::use_context::<Messages>().unwrap_or_default()
}
