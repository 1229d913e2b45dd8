use super::*;
use crate::state::board::{Board, BoardView};

#[test]
fn contains_checks_membership() {
    let category = CategoryBlocks {
        id: "c1".to_owned(),
        name: "Todo".to_owned(),
        block_ids: vec!["b1".to_owned(), "b2".to_owned()],
    };
    assert!(category.contains("b2"));
    assert!(!category.contains("b3"));
}

#[test]
fn block_ids_default_to_empty() {
    let category: CategoryBlocks =
        serde_json::from_value(serde_json::json!({ "id": "c1", "name": "Todo" })).expect("category");
    assert!(category.block_ids.is_empty());
}

#[test]
fn block_ids_read_camel_case() {
    let category: CategoryBlocks = serde_json::from_value(serde_json::json!({
        "id": "c1",
        "name": "Todo",
        "blockIds": ["b1"]
    }))
    .expect("category");
    assert_eq!(category.block_ids, vec!["b1".to_owned()]);
}

fn sample_state() -> SidebarState {
    let todo = CategoryBlocks {
        id: "c1".to_owned(),
        name: "Todo".to_owned(),
        block_ids: vec!["b2".to_owned(), "b1".to_owned(), "missing".to_owned()],
    };
    let done = CategoryBlocks {
        id: "c2".to_owned(),
        name: "Done".to_owned(),
        block_ids: vec!["b3".to_owned()],
    };
    let board = |id: &str| Board {
        id: id.to_owned(),
        title: id.to_uppercase(),
        icon: String::new(),
    };
    let mut views = HashMap::new();
    views.insert(
        "b1".to_owned(),
        vec![BoardView {
            id: "v1".to_owned(),
            ..BoardView::default()
        }],
    );
    SidebarState {
        categories: vec![todo, done],
        boards: vec![board("b1"), board("b2"), board("b3")],
        views,
    }
}

#[test]
fn items_follow_category_order_and_skip_unknown_ids() {
    let state = sample_state();
    let items = state.items_for("c1", Some("b1"));
    let ids: Vec<&str> = items.iter().map(|i| i.board.id.as_str()).collect();
    assert_eq!(ids, vec!["b2", "b1"]);
    assert!(!items[0].is_active);
    assert!(items[1].is_active);
}

#[test]
fn items_without_active_board_are_all_inactive() {
    let state = sample_state();
    assert!(state.items_for("c1", None).iter().all(|i| !i.is_active));
}

#[test]
fn unchanged_items_share_keys() {
    let state = sample_state();
    let a: Vec<SidebarItemKey> = state.items_for("c2", None).iter().map(SidebarItem::key).collect();
    let b: Vec<SidebarItemKey> = state.items_for("c2", None).iter().map(SidebarItem::key).collect();
    assert_eq!(a, b);
    let c: Vec<SidebarItemKey> = state.items_for("c2", Some("b3")).iter().map(SidebarItem::key).collect();
    assert_ne!(a, c);
}

#[test]
fn deleting_a_board_elsewhere_keeps_row_keys() {
    let mut state = sample_state();
    let keys = |state: &SidebarState, category_id: &str| -> Vec<SidebarItemKey> {
        state.items_for(category_id, None).iter().map(SidebarItem::key).collect()
    };
    let before = keys(&state, "c1");
    state.remove_board("b3");
    assert_eq!(before, keys(&state, "c1"));

    let b1_before = keys(&state, "c1")[1].clone();
    state.remove_board("b2");
    assert_eq!(keys(&state, "c1"), vec![b1_before]);
}

#[test]
fn renamed_board_gets_new_key() {
    let mut state = sample_state();
    let before = state.items_for("c2", None)[0].key();
    state.boards[2].title = "Renamed".to_owned();
    assert_ne!(before, state.items_for("c2", None)[0].key());
}

#[test]
fn unknown_category_has_no_items() {
    assert!(sample_state().items_for("nope", None).is_empty());
}

#[test]
fn views_for_unknown_board_is_empty() {
    let state = sample_state();
    assert_eq!(state.views_for("b1").len(), 1);
    assert!(state.views_for("b2").is_empty());
}

#[test]
fn remove_board_clears_every_reference() {
    let mut state = sample_state();
    state.remove_board("b1");
    assert!(state.boards.iter().all(|b| b.id != "b1"));
    assert!(!state.categories[0].contains("b1"));
    assert!(state.views_for("b1").is_empty());
    assert_eq!(state.boards.len(), 2);
}

#[test]
fn move_block_reassigns_membership() {
    let mut state = sample_state();
    state.move_block("b1", "c1", "c2");
    assert!(!state.categories[0].contains("b1"));
    assert_eq!(state.categories[1].block_ids, vec!["b3".to_owned(), "b1".to_owned()]);
    let moved = state.items_for("c2", Some("b1"));
    assert_eq!(moved[1].board.id, "b1");
    assert_eq!(moved[1].category.id, "c2");
}

#[test]
fn move_block_does_not_duplicate_existing_member() {
    let mut state = sample_state();
    state.categories[1].block_ids.push("b1".to_owned());
    state.move_block("b1", "c1", "c2");
    assert_eq!(state.categories[1].block_ids.iter().filter(|id| *id == "b1").count(), 1);
    assert!(!state.categories[0].contains("b1"));
}

#[test]
fn move_block_to_unknown_category_is_ignored() {
    let mut state = sample_state();
    state.move_block("b1", "c1", "missing-category");
    assert!(state.categories[0].contains("b1"));
}

#[test]
fn move_block_to_same_category_is_a_no_op() {
    let mut state = sample_state();
    let before = state.categories.clone();
    state.move_block("b1", "c1", "c1");
    assert_eq!(state.categories, before);
}

#[test]
fn category_headers_ignore_membership() {
    let mut state = sample_state();
    let before = state.category_headers();
    assert_eq!(before[0], CategoryHeader { id: "c1".to_owned(), name: "Todo".to_owned() });
    state.remove_board("b3");
    state.move_block("b1", "c1", "c2");
    assert_eq!(state.category_headers(), before);
}
