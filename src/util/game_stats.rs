//! Utilities for collecting game statistics and testing the state implementation.
use internal_iterator::InternalIterator;

use crate::go::{GameState, Move};

/// The number of legal move sequences of length `depth`, including transpositions.
/// See <https://www.chessprogramming.org/Perft>.
///
/// Moves are applied and undone on `state` itself, so this also exercises undo.
pub fn perft(state: &mut GameState, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves: Vec<Move> = state.legal_moves().collect();
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut total = 0;
    for mv in moves {
        state.do_move(mv).expect("legal moves can be played");
        total += perft(state, depth - 1);
        state.undo_move().expect("move was just played");
    }
    total
}
