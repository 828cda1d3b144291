use crate::board::Player;
use crate::go::{FlatTile, Move, PlacementUndo, State, Zobrist};

/// One applied move, with everything needed to exactly revert it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct HistoryEntry {
    pub mv: Move,
    pub player: Player,

    pub prev_next_player: Player,
    pub prev_ko: Option<FlatTile>,
    pub prev_state: State,
    pub prev_prisoners: [u32; 2],

    /// The board hash before this move was applied.
    pub zobrist_before: Zobrist,
    /// `None` for passes.
    pub placement: Option<PlacementUndo>,
}

/// Stack of applied moves, consumed in strict LIFO order by undo.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// The moves in the order they were played.
    pub fn moves(&self) -> impl DoubleEndedIterator<Item = (Player, Move)> + '_ {
        self.entries.iter().map(|e| (e.player, e.mv))
    }

    /// Did the board (without side to move) look like `zobrist` before any of the recorded moves?
    pub fn contains_position(&self, zobrist: Zobrist) -> bool {
        // repetitions are typically close in time, so scan backwards
        self.entries.iter().rev().any(|e| e.zobrist_before == zobrist)
    }
}
