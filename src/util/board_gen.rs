//! Utilities to generate a [GameState] in a random state.
use internal_iterator::InternalIterator;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::go::{GameState, Move};

/// Play the given moves, starting from `start`.
///
/// # Panics
/// If any of the moves is not legal.
pub fn state_with_moves(start: GameState, moves: &[Move]) -> GameState {
    let mut curr = start;
    for &mv in moves {
        if let Err(e) = curr.do_move(mv) {
            panic!("Failed to play {} on {}: {}", mv, curr, e);
        }
    }
    curr
}

/// Play a uniformly random legal move, returns `None` if the game is over.
pub fn play_random_move(state: &mut GameState, rng: &mut impl Rng) -> Option<Move> {
    let moves: Vec<Move> = state.legal_moves().collect();
    let &mv = moves.choose(rng)?;
    state.do_move(mv).expect("legal moves can be played");
    Some(mv)
}

/// Generate a [GameState] by playing `n` random moves on `start`.
/// Passes are only played when there is nothing else left, so games end rarely.
pub fn random_state_with_moves(start: &GameState, n: u32, rng: &mut impl Rng) -> GameState {
    'new_try: loop {
        let mut state = start.clone();
        for _ in 0..n {
            let placements: Vec<Move> = state.legal_moves().filter(|&mv| mv != Move::Pass).collect();
            let mv = placements.choose(rng).copied().unwrap_or(Move::Pass);
            if state.do_move(mv).is_err() {
                continue 'new_try;
            }
        }
        return state;
    }
}
