//! Various utility functions.
pub mod board_gen;
pub mod game_stats;

pub mod bits;
pub mod tiny;
