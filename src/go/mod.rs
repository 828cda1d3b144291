//! Go game state with incremental group and liberty tracking, exact undo and ladder reading.
//!
//! The central type is [GameState], which owns a [Chains] (the groups and their liberties),
//! the ko and pass state and a [History] of every applied move.
//! Ladder queries ([GameState::is_ladder_capture], [GameState::is_ladder_escape]) explore
//! hypothetical continuations through the same do/undo primitives as real play.

use static_assertions::const_assert;

pub use capture::*;
pub use chains::*;
pub use error::*;
pub use hash::*;
pub use history::*;
pub use io::*;
pub use ladder::*;
pub use rules::*;
pub use state::*;
pub use tile::*;
pub use tile_set::*;

include!(concat!(env!("OUT_DIR"), "/go_consts.rs"));

// tile sets are fixed-size bitsets
const_assert!(GO_MAX_AREA as usize <= TILE_SET_WORDS * 64);
// ensure there are some sentinel values available (u16::MAX is used by StackVec4)
const_assert!(GO_MAX_AREA < u16::MAX - 8);

mod capture;
mod chains;
mod error;
mod hash;
mod history;
mod io;
mod ladder;
mod rules;
mod stack_vec;
mod state;
mod tile;
mod tile_set;
