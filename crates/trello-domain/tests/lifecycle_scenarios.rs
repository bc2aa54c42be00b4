use trello_core::{first_visible, TrelloError};
use trello_domain::{
    Board, BoardSnapshot, BoardState, Card, CardId, FailureKind, FetchFailure, Label, List,
    NavigationPosition,
};

fn card(id: CardId, pos: f64) -> Card {
    Card::new(id, format!("card {id}"), format!("description of {id}"), pos)
}

fn board(lists: Vec<(&str, Vec<Card>)>) -> Board {
    let lists = lists
        .into_iter()
        .enumerate()
        .map(|(idx, (name, cards))| List::new(format!("list-{idx}"), name, cards))
        .collect();
    Board::new("X", "The X board", lists)
}

fn assert_selection_valid(state: &BoardState) {
    if let Some(loaded) = state.loaded() {
        if let Some(id) = loaded.navigation.selected_card_id {
            assert!(loaded.board.contains_card(id), "selected card {id} missing");
        } else {
            assert!(loaded.board.is_empty);
        }
    }
}

#[test]
fn scenario_a_first_load_selects_first_card() {
    let state = BoardState::loading("X").online(board(vec![
        ("A", vec![card(1, 1.0), card(2, 2.0)]),
        ("B", vec![]),
    ]));

    assert!(matches!(state, BoardState::Online { .. }));
    let nav = &state.loaded().unwrap().navigation;
    assert_eq!(nav.selected_list_index, 0);
    assert_eq!(nav.selected_card_id, Some(1));
    assert_eq!(state.header_title(), "X - online");
    assert_eq!(state.header_subtitle(), "The X board");
}

#[test]
fn scenario_b_offline_keeps_selection_and_reports_error() {
    let online = BoardState::loading("X").online(board(vec![("A", vec![card(1, 1.0)])]));
    let offline = online.offline(FetchFailure::other("timeout"));

    assert!(matches!(offline, BoardState::Offline { .. }));
    assert_eq!(offline.selected_card_id(), Some(1));
    assert!(offline.header_subtitle().contains("timeout"));
    assert_eq!(offline.header_title(), "X - offline");
    assert_eq!(offline.lists_len(), 1);
}

#[test]
fn scenario_c_recovery_reselects_when_card_is_gone() {
    let offline = BoardState::loading("X")
        .online(board(vec![("A", vec![card(1, 1.0)])]))
        .offline(FetchFailure::other("boom"));

    let recovered = offline.online(board(vec![("A", vec![card(3, 1.0)])]));
    assert!(matches!(recovered, BoardState::Online { .. }));
    assert_eq!(recovered.selected_card_id(), Some(3));
}

#[test]
fn scenario_d_windowing() {
    assert_eq!(first_visible(7, 3, 10, 0), 5);
}

#[test]
fn loading_offline_then_recover() {
    let failed = BoardState::loading("X").offline(&TrelloError::BoardNotFound("X".into()));
    assert!(matches!(failed, BoardState::LoadingOffline { .. }));
    assert_eq!(failed.header_title(), "X - offline");
    assert!(failed.header_subtitle().contains("was not found"));
    assert_eq!(failed.failure().unwrap().kind, FailureKind::BoardNotFound);

    let failed_again = failed.offline(FetchFailure::other("second"));
    assert!(matches!(failed_again, BoardState::LoadingOffline { .. }));
    assert_eq!(failed_again.failure().unwrap().message, "second");

    let online = failed_again.online(board(vec![("A", vec![]), ("B", vec![card(4, 1.0)])]));
    assert_eq!(online.selected_card_id(), Some(4));
    assert!(online.is_list_selected(1));
}

#[test]
fn offline_is_idempotent() {
    let online = BoardState::loading("X").online(board(vec![(
        "A",
        vec![card(1, 1.0), card(2, 2.0)],
    )]))
    .move_down();
    let first = online.offline(FetchFailure::other("err1"));
    let second = first.offline(FetchFailure::other("err2"));

    let (
        BoardState::Offline {
            loaded: l1,
            since: s1,
            ..
        },
        BoardState::Offline {
            loaded: l2,
            since: s2,
            failure,
            ..
        },
    ) = (&first, &second)
    else {
        panic!("expected offline states");
    };
    assert_eq!(l1, l2);
    assert_eq!(s1, s2);
    assert_eq!(failure.message, "err2");
    assert_eq!(second.selected_card_id(), Some(2));
}

#[test]
fn refresh_preserves_valid_selection_and_popup() {
    let state = BoardState::loading("X")
        .online(board(vec![("A", vec![card(1, 1.0), card(2, 2.0)])]))
        .move_down()
        .open_card_popup()
        .offline(FetchFailure::other("flaky"));
    assert!(state.is_card_popup_open());

    let refreshed = state.online(board(vec![("A", vec![card(2, 2.0), card(5, 3.0)])]));
    assert_eq!(refreshed.selected_card_id(), Some(2));
    assert!(refreshed.is_card_popup_open());
}

#[test]
fn refresh_to_empty_board_selects_nothing() {
    let state = BoardState::loading("X")
        .online(board(vec![("A", vec![card(1, 1.0)])]))
        .open_card_popup()
        .online(board(vec![("A", vec![])]));
    assert_eq!(state.selected_card_id(), None);
    assert!(!state.is_card_popup_open());
    assert_selection_valid(&state);
}

#[test]
fn loading_answers_empty_and_ignores_commands() {
    let state = BoardState::loading("X");
    assert_eq!(state.header_title(), "X - loading");
    assert_eq!(state.lists_len(), 0);
    assert_eq!(state.list_name(0), "");
    assert!(state.list_card_ids(0).is_empty());
    assert_eq!(state.card_name(1), "");
    assert!(state.card_labels(1).is_empty());
    assert_eq!(state.first_visible_list_index(3), 0);
    assert_eq!(state.first_visible_card_index(0, 3), 0);

    let moved = state.move_right().move_down().open_card_popup();
    assert_eq!(moved, state);
    assert!(state.settle_windows(2, 2).is_none());
}

#[test]
fn empty_board_commands_are_noops() {
    let state = BoardState::loading("X").online(board(vec![("A", vec![]), ("B", vec![])]));
    let moved = state
        .move_left()
        .move_right()
        .move_up()
        .move_down()
        .open_card_popup();
    assert_eq!(moved, state);
    assert_eq!(moved.selected_card_id(), None);
}

#[test]
fn card_queries_resolve_through_the_board() {
    let labelled = card(9, 1.0).with_labels([Label::new("bug", "red")]);
    let state = BoardState::loading("X").online(board(vec![("Todo", vec![labelled])]));
    assert_eq!(state.list_name(0), "Todo");
    assert_eq!(state.list_card_ids(0), &[9]);
    assert_eq!(state.card_name(9), "card 9");
    assert_eq!(state.card_description(9), "description of 9");
    assert_eq!(state.card_labels(9), &[Label::new("bug", "red")]);
    assert!(state.is_card_selected(9));
    assert!(!state.is_card_selected(10));
}

#[test]
fn commands_do_not_mutate_the_published_state() {
    let state = BoardState::loading("X").online(board(vec![(
        "A",
        vec![card(1, 1.0), card(2, 2.0)],
    )]));
    let before = state.clone();
    let _ = state.move_down();
    assert_eq!(state, before);
}

#[test]
fn selection_stays_valid_across_random_walk() {
    let boards = [
        board(vec![("A", vec![card(1, 1.0), card(2, 2.0)]), ("B", vec![card(3, 1.0)])]),
        board(vec![("A", vec![]), ("B", vec![card(3, 1.0), card(4, 0.5)])]),
        board(vec![("A", vec![])]),
        board(vec![("C", vec![card(7, 1.0)]), ("A", vec![card(2, 1.0)])]),
    ];
    let mut state = BoardState::loading("X");
    for step in 0..64usize {
        state = match step % 7 {
            0 => state.online(boards[(step / 7) % boards.len()].clone()),
            1 => state.move_right(),
            2 => state.move_down(),
            3 => state.offline(FetchFailure::other("net")),
            4 => state.move_left(),
            5 => state.move_up(),
            _ => state.open_card_popup(),
        };
        assert_selection_valid(&state);
        if let Some(loaded) = state.loaded() {
            assert_eq!(
                loaded.navigation.first_visible_card_indices.len(),
                loaded.board.lists_len()
            );
        }
    }
}

#[test]
fn windows_contain_selection_after_settle() {
    let cards: Vec<Card> = (0..10).map(|i| card(i, i as f64)).collect();
    let mut state = BoardState::loading("X").online(board(vec![("A", cards)]));
    for _ in 0..7 {
        state = state.move_down();
    }
    assert_eq!(state.first_visible_card_index(0, 3), 5);
    let settled = state.settle_windows(1, 3).unwrap();
    assert_eq!(settled.loaded().unwrap().navigation.first_visible_card_indices[0], 5);
    assert!(settled.settle_windows(1, 3).is_none());
}

#[test]
fn seeded_loading_recovers_stale_board_when_offline() {
    let seed_board = board(vec![("A", vec![card(1, 1.0), card(2, 2.0)])]);
    let mut navigation = NavigationPosition::initial(&seed_board);
    navigation.move_down(&seed_board);
    let snapshot = BoardSnapshot::new("X", seed_board, navigation);

    let loading = BoardState::seeded("X", Some(snapshot.clone()));
    assert_eq!(loading.lists_len(), 0);
    assert_eq!(loading.snapshot().map(|s| s.board), Some(snapshot.board.clone()));

    let offline = loading.offline(FetchFailure::other("no network"));
    assert!(matches!(offline, BoardState::Offline { .. }));
    assert_eq!(offline.selected_card_id(), Some(2));

    let online = loading.online(board(vec![("A", vec![card(2, 2.0)])]));
    assert_eq!(online.selected_card_id(), Some(2));
}

#[test]
fn seed_for_other_board_is_ignored() {
    let snapshot = BoardSnapshot::new(
        "Other",
        board(vec![("A", vec![card(1, 1.0)])]),
        NavigationPosition::default(),
    );
    let loading = BoardState::seeded("X", Some(snapshot));
    assert_eq!(loading, BoardState::loading("X"));
    assert!(matches!(
        loading.offline(FetchFailure::other("x")),
        BoardState::LoadingOffline { .. }
    ));
}

#[test]
fn unselected_list_window_stays_in_bounds_when_it_shrinks() {
    fn settle(state: BoardState) -> BoardState {
        state.settle_windows(2, 3).unwrap_or(state)
    }
    let tall: Vec<Card> = (11..=20).map(|id| card(id, id as f64)).collect();
    let mut state = BoardState::loading("X").online(board(vec![
        ("A", vec![card(1, 1.0), card(2, 2.0)]),
        ("B", tall.clone()),
    ]));

    state = state.move_right();
    for _ in 0..9 {
        state = state.move_down();
    }
    assert_eq!(state.selected_card_id(), Some(20));
    state = settle(state);
    assert_eq!(state.first_visible_card_index(1, 3), 7);

    state = settle(state.move_left());
    assert_eq!(state.selected_card_id(), Some(1));

    let refreshed = state.online(board(vec![
        ("A", vec![card(1, 1.0), card(2, 2.0)]),
        ("B", tall[..5].to_vec()),
    ]));
    assert_eq!(refreshed.selected_card_id(), Some(1));

    let total = refreshed.list_card_ids(1).len();
    let first = refreshed.first_visible_card_index(1, 3);
    assert_eq!(first, total - 3);
    assert!(first + 3 <= total);
}
