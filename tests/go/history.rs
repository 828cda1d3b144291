use go_ladder::board::Player;
use go_ladder::go::{EmptyHistory, GameState, Move, Rules, Tile};

use crate::util::moves;

#[test]
fn undo_restores_every_intermediate_state() {
    let mut state = GameState::new(5, Rules::default());
    let mut snapshots = vec![state.clone()];

    // ends with black capturing the white stone at B1 and taking a ko
    for mv in moves(&["A1", "B1", "B2", "C2", "E5", "D1", "C1"]) {
        state.do_move(mv).unwrap();
        snapshots.push(state.clone());
    }
    assert_eq!(state.ko_tile(), Some(Tile::new(1, 0)));
    assert_eq!(state.prisoners(Player::Black), 1);
    assert_eq!(state.move_count(), 7);

    while let Some(expected) = snapshots.pop() {
        assert_eq!(state, expected);
        state.chains().assert_valid();
        if snapshots.is_empty() {
            break;
        }
        state.undo_move().unwrap();
    }

    assert_eq!(state, GameState::new(5, Rules::default()));
    assert_eq!(state.undo_move(), Err(EmptyHistory));
}

#[test]
fn entries_record_moves() {
    let mut state = GameState::new(9, Rules::default());
    let played = moves(&["E5", "PASS", "C3"]);
    for &mv in &played {
        state.do_move(mv).unwrap();
    }
    state.do_move_as(Move::Place(Tile::new(0, 0)), Player::Black).unwrap();

    let history = state.history();
    assert_eq!(history.len(), 4);
    assert!(!history.is_empty());

    let recorded: Vec<(Player, Move)> = history.moves().collect();
    assert_eq!(
        recorded,
        vec![
            (Player::Black, played[0]),
            (Player::White, played[1]),
            (Player::Black, played[2]),
            (Player::Black, Move::Place(Tile::new(0, 0))),
        ]
    );

    let last = history.entries().last().unwrap();
    assert_eq!(last.prev_next_player, Player::White);
    assert!(last.placement.is_some());
    assert!(history.entries()[1].placement.is_none());

    // the empty board was seen before the first move
    assert!(history.contains_position(GameState::new(9, Rules::default()).chains().zobrist()));
    assert!(!history.contains_position(state.chains().zobrist()));

    assert_eq!(state.undo_move(), Ok(Move::Place(Tile::new(0, 0))));
    assert_eq!(state.next_player(), Player::White);
}

#[test]
fn undo_restores_merged_groups() {
    let mut state = GameState::new(5, Rules::default());
    for mv in moves(&["B2", "E5", "D2", "E4", "C3", "E3"]) {
        state.do_move(mv).unwrap();
    }
    let before = state.clone();
    let ids: Vec<_> = ["B2", "D2", "C3"]
        .iter()
        .map(|s| state.chains().group_id_at(s.parse::<Tile>().unwrap().to_flat(5)))
        .collect();

    // C2 joins three separate black stones
    state.do_move("C2".parse().unwrap()).unwrap();
    assert_eq!(state.group_size(Tile::new(2, 1)), 4);
    assert_eq!(state.group_stones(Tile::new(1, 1)).count(), 4);
    state.chains().assert_valid();

    state.undo_move().unwrap();
    assert_eq!(state, before);
    for (name, id) in ["B2", "D2", "C3"].iter().zip(ids) {
        let tile: Tile = name.parse().unwrap();
        assert_eq!(state.chains().group_id_at(tile.to_flat(5)), id);
        assert_eq!(state.group_size(tile), 1);
    }
}
