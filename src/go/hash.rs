use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};

use static_assertions::const_assert;

use crate::board::Player;
use crate::go::{FlatTile, State, GO_MAX_AREA};

/// Zobrist hash of (part of) a position.
/// The tables are generated at build time from a fixed seed, so hashes are stable between runs.
#[derive(Default, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct Zobrist(Inner);

include!(concat!(env!("OUT_DIR"), "/go_hash_code.rs"));

// one value per tile for each color
const_assert!(HASH_DATA_COLOR_TILE[0].len() == GO_MAX_AREA as usize);

impl Zobrist {
    pub fn for_color_tile(color: Player, tile: FlatTile) -> Zobrist {
        Zobrist(HASH_DATA_COLOR_TILE[color.index() as usize][tile.index() as usize])
    }

    pub fn for_color_turn(color: Player) -> Zobrist {
        Zobrist(HASH_DATA_TURN[color.index() as usize])
    }

    pub fn for_pass_state(state: State) -> Zobrist {
        let index = match state {
            State::Normal => 0,
            State::Passed => 1,
            State::Done => 2,
        };
        Zobrist(HASH_DATA_PASS[index])
    }
}

impl Debug for Zobrist {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // print hex, full-width with leading 0x
        write!(f, "Zobrist({:#018x})", self.0)
    }
}

impl std::ops::BitXor for Zobrist {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        Zobrist(self.0 ^ rhs.0)
    }
}

impl std::ops::BitXorAssign for Zobrist {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl nohash_hasher::IsEnabled for Zobrist {}

impl Hash for Zobrist {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.0);
    }
}
