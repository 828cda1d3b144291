use std::fmt::{Debug, Formatter};
use std::ops::{BitAnd, BitOr, BitOrAssign};

use crate::go::{FlatTile, GO_MAX_AREA};
use crate::util::bits::BitIter;

pub const TILE_SET_WORDS: usize = (GO_MAX_AREA as usize + 63) / 64;

/// A set of [FlatTile]s, stored as a fixed-size bitset that covers the largest board.
///
/// Used both for the stones of a group and for its liberties, so merging two groups is a simple union.
#[derive(Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TileSet {
    words: [u64; TILE_SET_WORDS],
}

impl TileSet {
    pub const EMPTY: TileSet = TileSet {
        words: [0; TILE_SET_WORDS],
    };

    pub fn single(tile: FlatTile) -> Self {
        let mut result = TileSet::EMPTY;
        result.insert(tile);
        result
    }

    /// The set of all tiles on a board with the given size.
    pub fn full(size: u8) -> Self {
        let mut result = TileSet::EMPTY;
        for tile in FlatTile::all(size) {
            result.insert(tile);
        }
        result
    }

    fn split(tile: FlatTile) -> (usize, u64) {
        let index = tile.index() as usize;
        (index / 64, 1 << (index % 64))
    }

    pub fn contains(&self, tile: FlatTile) -> bool {
        let (word, mask) = Self::split(tile);
        self.words[word] & mask != 0
    }

    /// Returns whether the tile was newly inserted.
    pub fn insert(&mut self, tile: FlatTile) -> bool {
        let (word, mask) = Self::split(tile);
        let fresh = self.words[word] & mask == 0;
        self.words[word] |= mask;
        fresh
    }

    /// Returns whether the tile was present.
    pub fn remove(&mut self, tile: FlatTile) -> bool {
        let (word, mask) = Self::split(tile);
        let present = self.words[word] & mask != 0;
        self.words[word] &= !mask;
        present
    }

    pub fn len(&self) -> u16 {
        self.words.iter().map(|w| w.count_ones() as u16).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    pub fn first(&self) -> Option<FlatTile> {
        self.words
            .iter()
            .enumerate()
            .find(|(_, &w)| w != 0)
            .map(|(i, w)| FlatTile::new((i * 64) as u16 + w.trailing_zeros() as u16))
    }

    pub fn pop_first(&mut self) -> Option<FlatTile> {
        let first = self.first()?;
        self.remove(first);
        Some(first)
    }

    pub fn is_disjoint(&self, other: &TileSet) -> bool {
        self.words.iter().zip(&other.words).all(|(a, b)| a & b == 0)
    }

    /// Iterate over the tiles in increasing index order.
    pub fn iter(self) -> impl Iterator<Item = FlatTile> {
        self.words.into_iter().enumerate().flat_map(|(i, w)| {
            BitIter::new(w).map(move |bit| FlatTile::new((i * 64) as u16 + bit as u16))
        })
    }
}

impl BitOr for TileSet {
    type Output = TileSet;

    fn bitor(mut self, rhs: Self) -> Self::Output {
        self |= rhs;
        self
    }
}

impl BitOrAssign for TileSet {
    fn bitor_assign(&mut self, rhs: Self) {
        for (a, b) in self.words.iter_mut().zip(rhs.words) {
            *a |= b;
        }
    }
}

impl BitAnd for TileSet {
    type Output = TileSet;

    fn bitand(mut self, rhs: Self) -> Self::Output {
        for (a, b) in self.words.iter_mut().zip(rhs.words) {
            *a &= b;
        }
        self
    }
}

impl FromIterator<FlatTile> for TileSet {
    fn from_iter<T: IntoIterator<Item = FlatTile>>(iter: T) -> Self {
        let mut result = TileSet::EMPTY;
        for tile in iter {
            result.insert(tile);
        }
        result
    }
}

impl Debug for TileSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter().map(|t| t.index())).finish()
    }
}
