use super::*;

#[test]
fn view_type_deserializes_known_tags() {
    let parsed: Vec<ViewType> =
        serde_json::from_str(r#"["board","table","gallery","calendar"]"#).expect("tags");
    assert_eq!(
        parsed,
        vec![ViewType::Board, ViewType::Table, ViewType::Gallery, ViewType::Calendar]
    );
}

#[test]
fn view_type_unknown_tag_maps_to_other() {
    let parsed: ViewType = serde_json::from_str(r#""kanban""#).expect("tag");
    assert_eq!(parsed, ViewType::Other);
}

#[test]
fn view_type_icons_are_distinct_for_known_types() {
    let icons = [
        ViewType::Board.icon(),
        ViewType::Table.icon(),
        ViewType::Gallery.icon(),
        ViewType::Calendar.icon(),
    ];
    for (i, a) in icons.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &icons[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn other_view_type_has_blank_icon() {
    assert_eq!(ViewType::Other.icon(), "");
    assert!(ViewType::Other.icon_class().ends_with("--blank"));
}

#[test]
fn board_view_reads_camel_case_fields() {
    let view: BoardView = serde_json::from_value(serde_json::json!({
        "id": "v1",
        "title": "My View",
        "fields": { "viewType": "table" }
    }))
    .expect("view");
    assert_eq!(view.id, "v1");
    assert_eq!(view.fields.view_type, ViewType::Table);
}

#[test]
fn board_missing_title_and_icon_default_to_empty() {
    let board: Board = serde_json::from_value(serde_json::json!({ "id": "b1" })).expect("board");
    assert_eq!(board.title, "");
    assert_eq!(board.icon, "");
}
