use internal_iterator::InternalIterator;

use go_ladder::go::{GameState, Move, Tile};

mod chains;
mod history;
mod ladder;
mod properties;

/// Check the internal consistency of a state and the agreement between the different legality queries.
pub fn state_test_main(state: &GameState) {
    state.chains().assert_valid();

    let legal: Vec<Move> = state.legal_moves().collect();
    if state.is_done() {
        assert!(legal.is_empty());
        return;
    }
    assert_eq!(legal.first(), Some(&Move::Pass));

    for tile in Tile::all(state.size()) {
        let mv = Move::Place(tile);
        assert_eq!(legal.contains(&mv), state.is_legal(mv), "Legality mismatch for {} on\n{}", mv, state);
        assert_eq!(state.is_legal(mv), state.simulate(tile).is_ok());
    }
}

/// Play the given moves on `start`, checking and printing the state after every move.
pub fn print_state_with_moves(start: GameState, moves: &[Move]) -> GameState {
    let mut state = start;
    println!("{}", state);
    for &mv in moves {
        println!("Playing {}", mv);
        state.do_move(mv).unwrap_or_else(|e| panic!("Failed to play {} on {}: {}", mv, state, e));
        println!("{}", state);
        state.chains().assert_valid();
    }
    state
}
