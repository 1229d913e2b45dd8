//! Sidebar row for one board, its options menu, and its view rows.
//!
//! DESIGN
//! ======
//! Everything the row displays is derived by `SidebarBoardItemModel` from
//! props plus the read-only `SelectionState`, and every click is expressed
//! as a `SidebarAction`. The Leptos component only wires those two pieces
//! to the DOM, which keeps the rendering contract testable without a browser.
//!
//! The component body runs once per mount and keeps the model in a `Memo`.
//! Only active rows read the selection context, and the move-to list and
//! view rows re-render only when their slice of the model changes.

#[cfg(test)]
#[path = "sidebar_board_item_test.rs"]
mod sidebar_board_item_test;

use leptos::prelude::*;

use crate::components::menu::{MenuText, MenuWrapper, SubMenu, SubMenuPosition};
use crate::components::permission_gate::BoardPermissionGate;
use crate::i18n::{MessageId, Messages, use_messages};
use crate::mutator::{MoveBlockRequest, MutationDispatcher, Mutator};
use crate::permissions::Permission;
use crate::state::board::{Board, ViewType};
use crate::state::selection::SelectionState;
use crate::state::sidebar::CategoryBlocks;
use crate::state::ui::BoardsMenuState;

const DELETE_ICON: &str = "🗑";
const MOVE_TO_ICON: &str = "🗀";

/// Marker shown next to each "Move To..." destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryIcon {
    /// The board already lives in this category.
    Check,
    Folder,
}

impl CategoryIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Check => "✓",
            Self::Folder => "📁",
        }
    }
}

/// The board's own row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardRow {
    pub board_id: String,
    pub icon: String,
    pub title: String,
    pub active: bool,
}

impl BoardRow {
    fn class(&self) -> &'static str {
        if self.active {
            "SidebarBoardItem subitem active"
        } else {
            "SidebarBoardItem subitem"
        }
    }
}

/// One destination in the "Move To..." submenu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveToEntry {
    pub category_id: String,
    pub name: String,
    pub icon: CategoryIcon,
}

/// One view listed under the active board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewRow {
    pub view_id: String,
    pub title: String,
    pub view_type: ViewType,
    pub active: bool,
}

impl ViewRow {
    fn class(&self) -> &'static str {
        if self.active {
            "SidebarBoardItem sidebar-view-item active"
        } else {
            "SidebarBoardItem sidebar-view-item"
        }
    }
}

/// Everything one `SidebarBoardItem` renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarBoardItemModel {
    pub board_row: BoardRow,
    pub move_to: Vec<MoveToEntry>,
    pub view_rows: Vec<ViewRow>,
}

impl SidebarBoardItemModel {
    pub fn build(
        messages: &Messages,
        is_active: bool,
        category_blocks: &CategoryBlocks,
        board: &Board,
        all_categories: &[CategoryBlocks],
        selection: &SelectionState,
    ) -> Self {
        Self {
            board_row: board_row(messages, board, is_active),
            move_to: move_to_entries(all_categories, category_blocks),
            view_rows: view_rows(messages, is_active, selection),
        }
    }
}

pub fn board_row(messages: &Messages, board: &Board, is_active: bool) -> BoardRow {
    BoardRow {
        board_id: board.id.clone(),
        icon: board.icon.clone(),
        title: messages.title_or(&board.title, MessageId::UntitledBoard),
        active: is_active,
    }
}

/// Every category as a move destination, checkmarking the current one.
pub fn move_to_entries(all_categories: &[CategoryBlocks], current: &CategoryBlocks) -> Vec<MoveToEntry> {
    all_categories
        .iter()
        .map(|category| MoveToEntry {
            category_id: category.id.clone(),
            name: category.name.clone(),
            icon: if category.id == current.id {
                CategoryIcon::Check
            } else {
                CategoryIcon::Folder
            },
        })
        .collect()
}

/// View rows for the current board; empty unless the board is active.
pub fn view_rows(messages: &Messages, is_active: bool, selection: &SelectionState) -> Vec<ViewRow> {
    if !is_active {
        return Vec::new();
    }
    selection
        .current_board_views
        .iter()
        .map(|view| ViewRow {
            view_id: view.id.clone(),
            title: messages.title_or(&view.title, MessageId::UntitledView),
            view_type: view.fields.view_type,
            active: selection.is_current_view(&view.id),
        })
        .collect()
}

/// Selection for building the model. Inactive rows never call `read`, so
/// they do not subscribe to selection changes.
pub fn selection_if_active(is_active: bool, read: impl FnOnce() -> SelectionState) -> SelectionState {
    if is_active { read() } else { SelectionState::default() }
}

/// Action for a chosen "Move To..." option. The option id is the
/// destination category id; the row's own category is the source.
pub fn move_action(
    selection: &SelectionState,
    board_id: &str,
    option_id: &str,
    current_category: &CategoryBlocks,
) -> SidebarAction {
    SidebarAction::MoveToCategory(MoveBlockRequest::for_board(
        selection,
        board_id,
        option_id,
        &current_category.id,
    ))
}

/// A user intent raised by the row or its menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SidebarAction {
    ShowBoard(String),
    ShowView { view_id: String, board_id: String },
    RequestDelete(Board),
    MoveToCategory(MoveBlockRequest),
}

/// Routes each `SidebarAction` to exactly one collaborator.
pub struct SidebarHandlers<'a> {
    pub show_board: &'a dyn Fn(String),
    pub show_view: &'a dyn Fn(String, String),
    pub on_delete_request: &'a dyn Fn(Board),
    pub mutator: &'a dyn MutationDispatcher,
}

impl SidebarHandlers<'_> {
    pub fn dispatch(&self, action: SidebarAction) {
        match action {
            SidebarAction::ShowBoard(board_id) => (self.show_board)(board_id),
            SidebarAction::ShowView { view_id, board_id } => (self.show_view)(view_id, board_id),
            SidebarAction::RequestDelete(board) => (self.on_delete_request)(board),
            SidebarAction::MoveToCategory(request) => self.mutator.move_block_to_category(request),
        }
    }
}

/// One board entry in the sidebar, plus its views when `is_active`.
///
/// `all_categories` is a signal so the move-to list follows category
/// changes without remounting the row.
#[component]
pub fn SidebarBoardItem(
    is_active: bool,
    category_blocks: CategoryBlocks,
    board: Board,
    #[prop(into)] all_categories: Signal<Vec<CategoryBlocks>>,
    on_delete_request: Callback<Board>,
    show_board: Callback<String>,
    show_view: Callback<(String, String)>,
) -> impl IntoView {
    let messages = use_messages();
    let selection = expect_context::<RwSignal<SelectionState>>();
    let mutator = use_context::<Mutator>().unwrap_or_default();
    let menu_state = RwSignal::new(BoardsMenuState::default());

    let delete_label = messages.format(MessageId::DeleteBoard);
    let move_label = messages.format(MessageId::MoveTo);

    let model = Memo::new({
        let category_blocks = category_blocks.clone();
        let board = board.clone();
        move |_| {
            let current = selection_if_active(is_active, || selection.get());
            all_categories.with(|categories| {
                SidebarBoardItemModel::build(&messages, is_active, &category_blocks, &board, categories, &current)
            })
        }
    });
    let move_to = Memo::new(move |_| model.with(|m| m.move_to.clone()));
    let view_rows = Memo::new(move |_| model.with(|m| m.view_rows.clone()));

    let dispatch = move |action: SidebarAction| {
        SidebarHandlers {
            show_board: &|board_id| show_board.run(board_id),
            show_view: &|view_id, board_id| show_view.run((view_id, board_id)),
            on_delete_request: &|board| on_delete_request.run(board),
            mutator: &mutator,
        }
        .dispatch(action);
    };

    let row = model.with_untracked(|m| m.board_row.clone());
    let row_class = row.class();
    let BoardRow { board_id, icon, title, .. } = row;
    let title_attr = title.clone();

    let on_row_click = {
        let dispatch = dispatch.clone();
        let board_id = board_id.clone();
        move |_: leptos::ev::MouseEvent| dispatch(SidebarAction::ShowBoard(board_id.clone()))
    };

    let wrapper_class = {
        let board_id = board_id.clone();
        Signal::derive(move || menu_state.get().wrapper_class(&board_id).to_owned())
    };
    let on_toggle = Callback::new({
        let board_id = board_id.clone();
        move |open: bool| menu_state.update(|state| *state = state.with_toggled(&board_id, open))
    });

    let on_delete = Callback::new({
        let dispatch = dispatch.clone();
        move |_: String| dispatch(SidebarAction::RequestDelete(board.clone()))
    });

    let move_items = {
        let dispatch = dispatch.clone();
        let board_id = board_id.clone();
        move || {
            move_to
                .get()
                .into_iter()
                .map(|entry| {
                    let dispatch = dispatch.clone();
                    let board_id = board_id.clone();
                    let current_category = category_blocks.clone();
                    let on_click = Callback::new(move |option_id: String| {
                        dispatch(move_action(
                            &selection.get_untracked(),
                            &board_id,
                            &option_id,
                            &current_category,
                        ));
                    });
                    view! {
                        <MenuText
                            id=entry.category_id
                            name=entry.name
                            icon=entry.icon.glyph()
                            on_click=on_click
                        />
                    }
                })
                .collect_view()
        }
    };

    let rendered_views = {
        let board_id = board_id.clone();
        move || {
            view_rows
                .get()
                .into_iter()
                .map(|row| {
                    let class = row.class();
                    let ViewRow { view_id, title, view_type, .. } = row;
                    let title_attr = title.clone();
                    let dispatch = dispatch.clone();
                    let action = SidebarAction::ShowView {
                        view_id,
                        board_id: board_id.clone(),
                    };
                    view! {
                        <div class=class on:click=move |_| dispatch(action.clone())>
                            <span class=view_type.icon_class()>{view_type.icon()}</span>
                            <div class="octo-sidebar-title" title=title_attr>
                                {title}
                            </div>
                        </div>
                    }
                })
                .collect_view()
        }
    };

    view! {
        <div class=row_class on:click=on_row_click>
            <div class="octo-sidebar-icon">{icon}</div>
            <div class="octo-sidebar-title" title=title_attr>
                {title}
            </div>
            <MenuWrapper class=wrapper_class stop_propagation_on_toggle=true on_toggle=on_toggle>
                <BoardPermissionGate board_id=board_id permissions=vec![Permission::DeleteBoard]>
                    <MenuText id="deleteBlock" name=delete_label icon=DELETE_ICON on_click=on_delete/>
                </BoardPermissionGate>
                <SubMenu id="moveBlock" name=move_label icon=MOVE_TO_ICON position=SubMenuPosition::Bottom>
                    {move_items}
                </SubMenu>
            </MenuWrapper>
        </div>
        {rendered_views}
    }
}
