//! Randomized checks of the invariants that must hold in every reachable position.

use internal_iterator::InternalIterator;
use proptest::prelude::*;

use go_ladder::go::{GameState, Move, Rules, Tile};
use go_ladder::util::board_gen::{play_random_move, random_state_with_moves};
use go_ladder::util::tiny::seeded_rng;

fn arb_rules() -> impl Strategy<Value = Rules> {
    prop_oneof![Just(Rules::simple_ko()), Just(Rules::positional_superko())]
}

/// Play up to `max_moves` uniformly random legal moves, calling `f` on every position reached.
fn random_game(size: u8, rules: Rules, seed: u64, max_moves: u32, mut f: impl FnMut(&mut GameState)) {
    let mut rng = seeded_rng(seed);
    let mut state = GameState::new(size, rules);
    f(&mut state);

    for _ in 0..max_moves {
        if play_random_move(&mut state, &mut rng).is_none() {
            break;
        }
        f(&mut state);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn groups_stay_exact(seed in any::<u64>(), size in 2u8..=9, rules in arb_rules()) {
        random_game(size, rules, seed, 120, |state| {
            state.chains().assert_valid();

            let stones: u16 = state.chains().groups().map(|(_, g)| g.stone_count()).sum();
            assert_eq!(stones + state.chains().empty_count(), state.area());
            for (_, group) in state.chains().groups() {
                assert!(group.liberty_count() > 0);
            }
        });
    }

    #[test]
    fn do_undo_is_identity(seed in any::<u64>(), size in 2u8..=7, rules in arb_rules()) {
        random_game(size, rules, seed, 40, |state| {
            let before = state.clone();
            let moves: Vec<Move> = state.legal_moves().collect();
            for mv in moves {
                state.do_move(mv).unwrap();
                state.chains().assert_valid();
                assert_eq!(state.undo_move(), Ok(mv));
                assert_eq!(*state, before, "undo of {} did not restore the state", mv);
            }
        });
    }

    #[test]
    fn accepted_placements_keep_liberties(seed in any::<u64>(), size in 2u8..=6) {
        random_game(size, Rules::default(), seed, 80, |state| {
            let before = state.clone();
            for tile in Tile::all(state.size()) {
                if state.do_move(Move::Place(tile)).is_err() {
                    assert_eq!(*state, before);
                    continue;
                }

                assert!(state.liberty_count(tile) > 0, "placement at {} left its group without liberties", tile);
                state.undo_move().unwrap();
                assert_eq!(*state, before);
            }
        });
    }

    #[test]
    fn ladder_queries_leave_state_unchanged(seed in any::<u64>(), n in 0u32..60) {
        let mut rng = seeded_rng(seed);
        let mut state = random_state_with_moves(&GameState::new(9, Rules::default()), n, &mut rng);
        let before = state.clone();

        for tile in Tile::all(state.size()) {
            let capture = state.is_ladder_capture(tile);
            let escape = state.is_ladder_escape(tile, None);
            prop_assert!(capture.is_ok() && escape.is_ok());
            prop_assert_eq!(&state, &before);
        }
        state.chains().assert_valid();
    }
}
