use thiserror::Error;

use crate::go::{Move, Tile};

/// A move was rejected, the state was not modified.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
#[error("illegal move {mv}: {kind}")]
pub struct IllegalMove {
    pub mv: Move,
    pub kind: IllegalMoveKind,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum IllegalMoveKind {
    #[error("tile is outside the board")]
    OutOfBounds,
    #[error("tile is already occupied")]
    Occupied,
    #[error("placed group would have no liberties")]
    Suicide,
    #[error("immediate recapture of a ko")]
    KoViolation,
    #[error("board position would repeat")]
    Superko,
    #[error("game is already over")]
    GameOver,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
#[error("there is no move to undo")]
pub struct EmptyHistory;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum LadderError {
    #[error("tile {0} is outside the board")]
    OutOfBounds(Tile),
    #[error("tile {0} does not hold a stone that can be chased")]
    InvalidTarget(Tile),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum InvalidFen {
    #[error("expected `tiles next pass`")]
    Syntax,
    #[error("invalid character")]
    InvalidChar,
    #[error("board too large")]
    TooLarge,
    #[error("board is not square")]
    InvalidShape,
    #[error("board contains groups without liberties")]
    HasDeadStones,
}

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum InvalidDiagram {
    #[error("diagram does not fit on a board of size {size}")]
    TooLarge { size: u8 },
    #[error("mark {0:?} is used more than once")]
    DuplicateMark(char),
    #[error("diagram contains groups without liberties")]
    HasDeadStones,
}

#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Error)]
#[error("invalid tile")]
pub struct InvalidTile;

#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Error)]
#[error("invalid move")]
pub struct InvalidMove;

impl IllegalMove {
    pub fn new(mv: Move, kind: IllegalMoveKind) -> Self {
        IllegalMove { mv, kind }
    }
}
