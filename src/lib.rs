#![warn(missing_debug_implementations)]
#![allow(clippy::new_without_default)]
#![allow(clippy::len_without_is_empty)]

//! Exact Go game state with incremental group and liberty tracking, exact undo and ladder reading.
//!
//! The main entry point is [GameState](crate::go::GameState):
//! * moves are validated and applied with [do_move](crate::go::GameState::do_move)
//!     and reverted with [undo_move](crate::go::GameState::undo_move).
//! * groups and their liberties are maintained incrementally by [Chains](crate::go::Chains).
//! * [is_ladder_capture](crate::go::GameState::is_ladder_capture)
//!     and [is_ladder_escape](crate::go::GameState::is_ladder_escape) read out ladders
//!     by playing hypothetical moves on the state itself, leaving it unchanged afterwards.
//!
//! # Examples
//!
//! ## Read a ladder
//!
//! ```
//! use go_ladder::go::{GameState, Rules};
//!
//! let (mut state, marks) = GameState::from_diagram(
//!     19,
//!     Rules::default(),
//!     "d b c . . . .|B W a . . . .|. B . . . . .|. . . . . . .|. . . . . . .|. . . . . W .",
//! ).unwrap();
//!
//! assert!(state.is_ladder_capture(marks[&'a']).unwrap());
//! assert!(!state.is_ladder_capture(marks[&'b']).unwrap());
//! ```
//!
//! ## Play and undo moves
//!
//! ```
//! use go_ladder::go::{GameState, Move, Rules};
//!
//! let mut state = GameState::new(9, Rules::default());
//! let before = state.clone();
//!
//! state.do_move("E5".parse::<Move>().unwrap()).unwrap();
//! assert_eq!(state.undo_move(), Ok("E5".parse().unwrap()));
//! assert_eq!(state, before);
//! ```

pub mod board;
pub mod go;
pub mod util;
