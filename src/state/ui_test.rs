use super::*;

#[test]
fn unknown_board_menu_is_closed() {
    let state = BoardsMenuState::default();
    assert!(!state.is_open("b1"));
    assert_eq!(state.wrapper_class("b1"), "x");
}

#[test]
fn toggling_one_board_keeps_other_entries() {
    let state = BoardsMenuState::default()
        .with_toggled("b2", true)
        .with_toggled("b1", true)
        .with_toggled("b1", false);
    assert!(!state.is_open("b1"));
    assert!(state.is_open("b2"));
    assert_eq!(state.wrapper_class("b2"), "menuOpen");
}

#[test]
fn with_toggled_leaves_original_untouched() {
    let original = BoardsMenuState::default().with_toggled("b1", false);
    let next = original.with_toggled("b1", true);
    assert!(!original.is_open("b1"));
    assert!(next.is_open("b1"));
}
