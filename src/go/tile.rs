use crate::go::GO_MAX_SIZE;

/// A point on the board. `x` grows to the right and `y` grows upwards, `(0, 0)` is the bottom-left corner.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Tile {
    x: u8,
    y: u8,
}

/// A [Tile] flattened into a single index for a specific board size.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct FlatTile {
    index: u16,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
}

impl Tile {
    pub fn new(x: u8, y: u8) -> Self {
        assert!(
            x <= GO_MAX_SIZE && y <= GO_MAX_SIZE,
            "Coordinates ({}, {}) too large, max={}",
            x,
            y,
            GO_MAX_SIZE,
        );
        Tile { x, y }
    }

    pub fn to_flat(self, size: u8) -> FlatTile {
        assert!(size <= GO_MAX_SIZE);
        debug_assert!(self.exists(size), "{:?} does not exist on a board of size {}", self, size);
        FlatTile::new(size as u16 * self.y as u16 + self.x as u16)
    }

    pub fn x(&self) -> u8 {
        self.x
    }

    pub fn y(&self) -> u8 {
        self.y
    }

    pub fn all(size: u8) -> impl Iterator<Item = Tile> {
        (0..size).flat_map(move |y| (0..size).map(move |x| Tile::new(x, y)))
    }

    pub fn all_adjacent(self, size: u8) -> impl Iterator<Item = Tile> + Clone {
        Direction::ALL
            .iter()
            .filter_map(move |&dir| self.adjacent_in(dir, size))
    }

    pub fn adjacent_in(&self, dir: Direction, size: u8) -> Option<Tile> {
        let (x, y) = match dir {
            Direction::Up => (self.x, self.y.checked_add(1)?),
            Direction::Down => (self.x, self.y.checked_sub(1)?),
            Direction::Left => (self.x.checked_sub(1)?, self.y),
            Direction::Right => (self.x.checked_add(1)?, self.y),
        };
        if x < size && y < size {
            Some(Tile::new(x, y))
        } else {
            None
        }
    }

    pub fn exists(&self, size: u8) -> bool {
        self.x < size && self.y < size
    }
}

impl FlatTile {
    pub fn new(index: u16) -> Self {
        FlatTile { index }
    }

    pub fn to_tile(self, size: u8) -> Tile {
        assert!(size <= GO_MAX_SIZE);
        Tile::new((self.index % size as u16) as u8, (self.index / size as u16) as u8)
    }

    pub fn index(self) -> u16 {
        self.index
    }

    pub fn all(size: u8) -> impl Iterator<Item = FlatTile> {
        let area = (size as u16) * (size as u16);
        (0..area).map(|index| FlatTile { index })
    }

    pub fn all_adjacent(self, size: u8) -> impl Iterator<Item = FlatTile> + Clone {
        Direction::ALL
            .iter()
            .filter_map(move |&dir| self.adjacent_in(dir, size))
    }

    /// The diagonal neighbors that exist, together with the number of diagonals that fall off the board.
    pub fn all_diagonal(self, size: u8) -> (impl Iterator<Item = FlatTile> + Clone, usize) {
        let pairs = [
            (Direction::Up, Direction::Left),
            (Direction::Up, Direction::Right),
            (Direction::Down, Direction::Left),
            (Direction::Down, Direction::Right),
        ];
        let diagonals = pairs.map(|(a, b)| self.adjacent_in(a, size).and_then(|t| t.adjacent_in(b, size)));
        let missing = diagonals.iter().filter(|d| d.is_none()).count();
        (diagonals.into_iter().flatten(), missing)
    }

    pub fn adjacent_in(self, dir: Direction, size: u8) -> Option<FlatTile> {
        let index = match dir {
            Direction::Up => self.index.checked_add(size as u16)?,
            Direction::Down => self.index.checked_sub(size as u16)?,
            Direction::Left => {
                if self.index % size as u16 == 0 {
                    return None;
                }
                self.index.checked_sub(1)?
            }
            Direction::Right => {
                let after = self.index.checked_add(1)?;
                if after % size as u16 == 0 {
                    return None;
                }
                after
            }
        };

        if index < (size as u16) * (size as u16) {
            Some(FlatTile { index })
        } else {
            None
        }
    }
}
