//! Workspace sidebar page hosting one `SidebarBoardItem` per board.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route decides which board and view are active. This page mirrors that
//! into `SelectionState`, turns row callbacks into navigation, and owns the
//! delete confirmation flow.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::sidebar_board_item::SidebarBoardItem;
use crate::i18n::{MessageId, use_messages};
use crate::state::board::Board;
use crate::state::selection::SelectionState;
use crate::state::sidebar::{SidebarItem, SidebarState};

fn board_path(board_id: &str) -> String {
    format!("/board/{board_id}")
}

fn view_path(board_id: &str, view_id: &str) -> String {
    format!("/board/{board_id}/{view_id}")
}

/// Sidebar listing every category and its boards.
#[component]
pub fn SidebarPage() -> impl IntoView {
    let sidebar = expect_context::<RwSignal<SidebarState>>();
    let selection = expect_context::<RwSignal<SelectionState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    let active_board_id = Memo::new(move |_| params.with(|p| p.get("board_id")));
    let active_view_id = Memo::new(move |_| params.with(|p| p.get("view_id")));

    Effect::new(move || {
        let views = active_board_id
            .get()
            .map(|id| sidebar.with(|s| s.views_for(&id)))
            .unwrap_or_default();
        let view_id = active_view_id.get();
        selection.update(|s| {
            s.current_board_views = views;
            s.current_view_id = view_id;
        });
    });

    let show_board = Callback::new({
        let navigate = navigate.clone();
        move |board_id: String| navigate(&board_path(&board_id), NavigateOptions::default())
    });
    let show_view = Callback::new({
        let navigate = navigate.clone();
        move |(view_id, board_id): (String, String)| {
            navigate(&view_path(&board_id, &view_id), NavigateOptions::default());
        }
    });

    let pending_delete = RwSignal::new(None::<Board>);
    let on_delete_request = Callback::new(move |board: Board| pending_delete.set(Some(board)));
    let on_delete_cancel = Callback::new(move |()| pending_delete.set(None));

    let all_categories = Memo::new(move |_| sidebar.with(|s| s.categories.clone()));

    view! {
        <div class="octo-sidebar">
            <For
                each=move || sidebar.with(SidebarState::category_headers)
                key=|header| header.clone()
                let:header
            >
                <div class="SidebarCategory">
                    <div class="octo-sidebar-item category">{header.name.clone()}</div>
                    <For
                        each={
                            let category_id = header.id.clone();
                            move || sidebar.with(|s| s.items_for(&category_id, active_board_id.get().as_deref()))
                        }
                        key=SidebarItem::key
                        let:item
                    >
                        <SidebarBoardItem
                            is_active=item.is_active
                            category_blocks=item.category
                            board=item.board
                            all_categories=all_categories
                            on_delete_request=on_delete_request
                            show_board=show_board
                            show_view=show_view
                        />
                    </For>
                </div>
            </For>
            <Show when=move || pending_delete.get().is_some()>
                <DeleteBoardDialog board=pending_delete on_cancel=on_delete_cancel sidebar=sidebar/>
            </Show>
        </div>
    }
}

/// Confirmation dialog shown before a board is deleted.
#[component]
fn DeleteBoardDialog(
    board: RwSignal<Option<Board>>,
    on_cancel: Callback<()>,
    sidebar: RwSignal<SidebarState>,
) -> impl IntoView {
    let messages = use_messages();
    let submit = Callback::new(move |()| {
        let Some(target) = board.get_untracked() else {
            return;
        };
        on_cancel.run(());
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_board(&target.id).await {
                    Ok(()) => sidebar.update(|s| s.remove_board(&target.id)),
                    Err(e) => leptos::logging::warn!("delete board {} failed: {e}", target.id),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (target, sidebar);
        }
    });

    let heading = messages.format(MessageId::DeleteBoardConfirmTitle);
    let body = messages.format(MessageId::DeleteBoardConfirmBody);
    let cancel_label = messages.format(MessageId::Cancel);
    let delete_label = messages.format(MessageId::DeleteBoard);
    let subject = move || {
        board
            .get()
            .map(|b| messages.title_or(&b.title, MessageId::UntitledBoard))
            .unwrap_or_default()
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{heading}</h2>
                <p class="dialog__danger">{body}</p>
                <p class="dialog__subject">{subject}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        {cancel_label}
                    </button>
                    <button class="btn btn--danger" on:click=move |_| submit.run(())>
                        {delete_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
