use std::fmt::{Display, Formatter};

/// One of the two players.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Player {
    Black,
    White,
}

/// The content of a single point on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Color {
    Empty,
    Black,
    White,
}

impl Player {
    pub const BOTH: [Player; 2] = [Player::Black, Player::White];

    #[must_use]
    pub fn other(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            Player::Black => 0,
            Player::White => 1,
        }
    }

    pub fn to_symbol(self) -> char {
        match self {
            Player::Black => 'b',
            Player::White => 'w',
        }
    }
}

impl Color {
    pub fn player(self) -> Option<Player> {
        match self {
            Color::Empty => None,
            Color::Black => Some(Player::Black),
            Color::White => Some(Player::White),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Color::Empty
    }
}

impl From<Player> for Color {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Color::Black,
            Player::White => Color::White,
        }
    }
}

impl From<Option<Player>> for Color {
    fn from(player: Option<Player>) -> Self {
        player.map_or(Color::Empty, Color::from)
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Black => write!(f, "black"),
            Player::White => write!(f, "white"),
        }
    }
}
