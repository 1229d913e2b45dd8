//! Outbound board mutations triggered from the sidebar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sidebar rows describe *what* should change (`MoveBlockRequest`) and hand
//! it to a `MutationDispatcher`. Dispatch is fire-and-forget: the row never
//! observes completion, and two requests sent back to back carry no ordering
//! guarantee from this side.

#[cfg(test)]
#[path = "mutator_test.rs"]
mod mutator_test;

use std::sync::Arc;

use leptos::prelude::RwSignal;

use crate::state::selection::SelectionState;
use crate::state::sidebar::SidebarState;

/// Reassign a block (board) from one category to another.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveBlockRequest {
    pub team_id: String,
    pub block_id: String,
    pub to_category_id: String,
    pub from_category_id: String,
}

impl MoveBlockRequest {
    /// Request moving `board_id` from `from_category_id` to `to_category_id`
    /// within the selection's current team.
    pub fn for_board(
        selection: &SelectionState,
        board_id: &str,
        to_category_id: &str,
        from_category_id: &str,
    ) -> Self {
        Self {
            team_id: selection.team_id_or_empty(),
            block_id: board_id.to_owned(),
            to_category_id: to_category_id.to_owned(),
            from_category_id: from_category_id.to_owned(),
        }
    }
}

/// Reflect a move the server accepted in the local sidebar state.
pub fn apply_completed_move(sidebar: &mut SidebarState, request: &MoveBlockRequest) {
    sidebar.move_block(&request.block_id, &request.from_category_id, &request.to_category_id);
}

/// Applies sidebar mutations on behalf of components.
pub trait MutationDispatcher {
    fn move_block_to_category(&self, request: MoveBlockRequest);
}

/// Dispatcher backed by the REST API.
///
/// When bound to the host's `SidebarState`, a successful move is applied
/// there so the board shows up under its new category.
#[derive(Clone, Copy, Debug, Default)]
pub struct RestMutator {
    sidebar: Option<RwSignal<SidebarState>>,
}

impl RestMutator {
    pub fn with_sidebar(sidebar: RwSignal<SidebarState>) -> Self {
        Self { sidebar: Some(sidebar) }
    }
}

impl MutationDispatcher for RestMutator {
    fn move_block_to_category(&self, request: MoveBlockRequest) {
        #[cfg(feature = "hydrate")]
        {
            let sidebar = self.sidebar;
            leptos::task::spawn_local(async move {
                let result = crate::net::api::move_block_to_category(
                    &request.team_id,
                    &request.block_id,
                    &request.to_category_id,
                    &request.from_category_id,
                )
                .await;
                match result {
                    Ok(()) => {
                        if let Some(sidebar) = sidebar {
                            use leptos::prelude::Update;
                            sidebar.update(|s| apply_completed_move(s, &request));
                        }
                    }
                    Err(e) => leptos::logging::warn!(
                        "move block {} to category {} failed: {e}",
                        request.block_id,
                        request.to_category_id
                    ),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self.sidebar;
            leptos::logging::log!(
                "skipping move of block {} outside the browser",
                request.block_id
            );
        }
    }
}

/// Shared dispatcher handle provided through Leptos context.
#[derive(Clone)]
pub struct Mutator(pub Arc<dyn MutationDispatcher + Send + Sync>);

impl Mutator {
    pub fn new(dispatcher: impl MutationDispatcher + Send + Sync + 'static) -> Self {
        Self(Arc::new(dispatcher))
    }
}

impl Default for Mutator {
    fn default() -> Self {
        Self::new(RestMutator::default())
    }
}

impl MutationDispatcher for Mutator {
    fn move_block_to_category(&self, request: MoveBlockRequest) {
        self.0.move_block_to_category(request);
    }
}
