use go_ladder::board::Player;
use go_ladder::go::{GameState, LadderConfig, LadderError, LadderSearch, Move, Tile};

use crate::util::{diagram, init_tracing};

/// Run a ladder query and check that it left the state exactly as it was.
fn query(state: &mut GameState, f: impl FnOnce(&mut GameState) -> Result<bool, LadderError>) -> bool {
    let before = state.clone();
    let result = f(state).unwrap();
    assert_eq!(*state, before, "ladder query modified the state");
    state.chains().assert_valid();
    result
}

fn capture(state: &mut GameState, tile: Tile) -> bool {
    query(state, |s| s.is_ladder_capture(tile))
}

fn escape(state: &mut GameState, tile: Tile) -> bool {
    query(state, |s| s.is_ladder_escape(tile, None))
}

fn play(state: &mut GameState, tile: Tile) {
    state.do_move(Move::Place(tile)).unwrap();
    state.chains().assert_valid();
}

#[test]
fn captured_1() {
    init_tracing();
    let (mut state, m) = diagram(
        "d b c . . . .|\
         B W a . . . .|\
         . B . . . . .|\
         . . . . . . .|\
         . . . . . . .|\
         . . . . . W .|",
    );

    assert!(capture(&mut state, m[&'a']));
    assert!(!capture(&mut state, m[&'b']));

    play(&mut state, m[&'a']);
    assert!(!escape(&mut state, m[&'b']));

    play(&mut state, m[&'b']);
    assert!(capture(&mut state, m[&'c']));
    // self-atari
    assert!(!capture(&mut state, m[&'d']));
}

#[test]
fn breaker_1() {
    init_tracing();
    let (mut state, m) = diagram(
        ". B . . . . .|\
         B W a . . W .|\
         B b . . . . .|\
         . c . . . . .|\
         . . . . . . .|\
         . . . . . W .|\
         . . . . . . .|",
    );

    assert!(!capture(&mut state, m[&'a']));
    assert!(!capture(&mut state, m[&'b']));

    play(&mut state, m[&'a']);
    assert!(escape(&mut state, m[&'b']));

    play(&mut state, m[&'b']);
    assert!(!capture(&mut state, m[&'c']));
}

#[test]
fn missing_ladder_breaker_1() {
    init_tracing();
    let (mut state, m) = diagram(
        ". B . . . . .|\
         B W B . . W .|\
         B a c . . . .|\
         . b . . . . .|\
         . . . . . . .|\
         . W . . . . .|\
         . . . . . . .|",
    );
    state.set_next_player(Player::White);

    assert!(!escape(&mut state, m[&'a']));

    play(&mut state, m[&'a']);
    assert!(capture(&mut state, m[&'b']));
    assert!(!capture(&mut state, m[&'c']));
}

#[test]
fn capture_to_escape_1() {
    init_tracing();
    let (mut state, m) = diagram(
        ". O X . . .|\
         . X O X . .|\
         . . O X . .|\
         . . a . . .|\
         . O . . . .|\
         . . . . . .|",
    );

    // white can answer the atari by capturing
    assert!(!capture(&mut state, m[&'a']));
}

#[test]
fn throw_in_1() {
    init_tracing();
    let (mut state, m) = diagram(
        "X a O X . .|\
         b O O X . .|\
         O O X X . .|\
         X X . . . .|\
         . . . . . .|\
         . . . O . .|",
    );

    assert!(capture(&mut state, m[&'a']));
    assert!(capture(&mut state, m[&'b']));

    play(&mut state, m[&'a']);
    assert!(!escape(&mut state, m[&'b']));
}

#[test]
fn snapback_1() {
    init_tracing();
    let (mut state, m) = diagram(
        ". . . . . . . . .|\
         . . . . . . . . .|\
         . . X X X . . . .|\
         . . O . . . . . .|\
         . . O X . . . . .|\
         . . X O a . . . .|\
         . . X O X . . . .|\
         . . . X . . . . .|\
         . . . . . . . . .|",
    );
    state.set_next_player(Player::White);

    assert!(!escape(&mut state, m[&'a']));
}

#[test]
fn two_captures() {
    init_tracing();
    let (mut state, m) = diagram(
        ". . . . . .|\
         . . . . . .|\
         . . a b . .|\
         . X O O X .|\
         . . X X . .|\
         . . . . . .|",
    );

    assert!(capture(&mut state, m[&'a']));
    assert!(capture(&mut state, m[&'b']));
}

#[test]
fn two_escapes() {
    init_tracing();
    let (mut state, m) = diagram(
        ". . X . . .|\
         . X O a . .|\
         . X c X . .|\
         . O X b . .|\
         . . O . . .|\
         . . . . . .|",
    );

    state.do_move_as(Move::Place(m[&'c']), Player::White).unwrap();
    state.set_next_player(Player::White);

    assert!(escape(&mut state, m[&'a']));
    let (b, c) = (m[&'b'], m[&'c']);
    assert!(query(&mut state, |s| s.is_ladder_escape(b, Some(c))));
}

#[test]
fn explicit_prey() {
    let (mut state, m) = diagram(
        "d b c . . . .|\
         B W a . . . .|\
         . B . . . . .|",
    );
    let (a, prey) = (m[&'a'], Tile::new(1, 17));

    let mut search = LadderSearch::new(&mut state, LadderConfig::default());
    assert_eq!(search.is_capture(a, Some(prey)), Ok(true));
    assert_eq!(search.is_capture(m[&'b'], Some(prey)), Ok(false));
}

#[test]
fn depth_limit_favors_hunter() {
    let (mut state, m) = diagram(
        "d b c . . . .|\
         B W a . . . .|\
         . B . . . . .|\
         . . . . . . .|\
         . . . . . . .|\
         . . . . . W .|",
    );
    let b = m[&'b'];
    assert!(!capture(&mut state, b));

    let before = state.clone();
    let config = LadderConfig { max_depth: 1 };
    assert_eq!(LadderSearch::new(&mut state, config).is_capture(b, None), Ok(true));
    assert_eq!(state, before);
}

#[test]
fn no_prey_nearby() {
    let mut state = GameState::new(19, Default::default());
    let center = Tile::new(9, 9);
    assert!(!capture(&mut state, center));
    assert!(!escape(&mut state, center));
}

#[test]
fn invalid_queries() {
    let (mut state, m) = diagram(
        "d b c . . . .|\
         B W a . . . .|\
         . B . . . . .|",
    );
    let a = m[&'a'];
    let white = Tile::new(1, 17);
    let black = Tile::new(0, 17);
    let outside = Tile::new(19, 0);
    let before = state.clone();

    assert_eq!(state.is_ladder_capture(outside), Err(LadderError::OutOfBounds(outside)));
    assert_eq!(state.is_ladder_escape(outside, None), Err(LadderError::OutOfBounds(outside)));
    assert_eq!(state.is_ladder_escape(a, Some(outside)), Err(LadderError::OutOfBounds(outside)));

    // black is next, so only white stones can be chased
    let mut search = LadderSearch::new(&mut state, LadderConfig::default());
    assert_eq!(search.is_capture(a, Some(black)), Err(LadderError::InvalidTarget(black)));
    assert_eq!(search.is_capture(a, Some(a)), Err(LadderError::InvalidTarget(a)));
    assert_eq!(search.is_escape(a, Some(white)), Err(LadderError::InvalidTarget(white)));

    assert_eq!(state, before);
}
