use std::sync::Mutex;

use super::*;
use crate::state::selection::Team;

#[derive(Default)]
struct Recording(Mutex<Vec<MoveBlockRequest>>);

impl MutationDispatcher for Recording {
    fn move_block_to_category(&self, request: MoveBlockRequest) {
        self.0.lock().expect("lock").push(request);
    }
}

#[test]
fn for_board_uses_current_team() {
    let selection = SelectionState {
        current_team: Some(Team { id: "t1".to_owned() }),
        ..SelectionState::default()
    };
    let request = MoveBlockRequest::for_board(&selection, "b1", "c2", "c1");
    assert_eq!(
        request,
        MoveBlockRequest {
            team_id: "t1".to_owned(),
            block_id: "b1".to_owned(),
            to_category_id: "c2".to_owned(),
            from_category_id: "c1".to_owned(),
        }
    );
}

#[test]
fn for_board_without_team_sends_empty_team_id() {
    let request = MoveBlockRequest::for_board(&SelectionState::default(), "b1", "c2", "c1");
    assert_eq!(request.team_id, "");
    assert_eq!(request.block_id, "b1");
}

#[test]
fn shared_handle_forwards_every_request() {
    let recording = Arc::new(Recording::default());
    let mutator = Mutator(recording.clone());
    let selection = SelectionState::default();

    mutator.move_block_to_category(MoveBlockRequest::for_board(&selection, "b1", "c2", "c1"));
    mutator.move_block_to_category(MoveBlockRequest::for_board(&selection, "b1", "c3", "c1"));

    let seen = recording.0.lock().expect("lock");
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].to_category_id, "c2");
    assert_eq!(seen[1].to_category_id, "c3");
}

#[test]
fn completed_move_updates_sidebar_membership() {
    use crate::state::sidebar::CategoryBlocks;

    let mut sidebar = SidebarState {
        categories: vec![
            CategoryBlocks {
                id: "c1".to_owned(),
                name: "Todo".to_owned(),
                block_ids: vec!["b1".to_owned()],
            },
            CategoryBlocks {
                id: "c2".to_owned(),
                name: "Done".to_owned(),
                block_ids: Vec::new(),
            },
        ],
        ..SidebarState::default()
    };
    let request = MoveBlockRequest::for_board(&SelectionState::default(), "b1", "c2", "c1");
    apply_completed_move(&mut sidebar, &request);
    assert!(!sidebar.categories[0].contains("b1"));
    assert!(sidebar.categories[1].contains("b1"));
}
