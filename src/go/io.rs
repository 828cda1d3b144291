use std::collections::HashMap;
use std::fmt::{Alignment, Debug, Display, Formatter};
use std::str::FromStr;

use itertools::Itertools;

use crate::board::Player;
use crate::go::{
    Chains, GameState, InvalidDiagram, InvalidFen, InvalidMove, InvalidTile, Move, PlacementKind, Rules, State, Tile,
    TileOccupied, GO_MAX_SIZE,
};

impl Display for Tile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.x_disp(), self.y() as u32 + 1)
    }
}

impl Debug for Tile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile(({}, {}), {})", self.x(), self.y(), self)
    }
}

// By convention 'I' is skipped because it can be confused with "1".
const TILE_X_NAMES: &[u8] = b"ABCDEFGHJKLMNOPQRST";

impl Tile {
    pub fn x_disp(&self) -> TileX {
        TileX(self.x())
    }
}

/// The column letter of a tile.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq)]
pub struct TileX(pub u8);

impl FromStr for TileX {
    type Err = InvalidTile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match *s.as_bytes() {
            [c] => TILE_X_NAMES
                .iter()
                .position(|&cand| cand == c.to_ascii_uppercase())
                .map(|x| TileX(x as u8))
                .ok_or(InvalidTile),
            _ => Err(InvalidTile),
        }
    }
}

impl Display for TileX {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let width = f.width().unwrap_or(0);
        let c = TILE_X_NAMES.get(self.0 as usize).map_or('?', |&b| b as char);

        match f.align() {
            Some(Alignment::Left) => write!(f, "{:<width$}", c, width = width),
            Some(Alignment::Center | Alignment::Right) | None => write!(f, "{:>width$}", c, width = width),
        }
    }
}

impl FromStr for Tile {
    type Err = InvalidTile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        check(s.len() >= 2 && s.is_ascii(), InvalidTile)?;
        let split = s.bytes().take_while(|c| c.is_ascii_alphabetic()).count();

        let x = TileX::from_str(&s[..split])?.0;

        let y_1 = s[split..].parse::<u32>().map_err(|_| InvalidTile)?;
        check(y_1 > 0 && y_1 <= GO_MAX_SIZE as u32, InvalidTile)?;

        Ok(Tile::new(x, (y_1 - 1) as u8))
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Pass => write!(f, "PASS"),
            Move::Place(tile) => write!(f, "{}", tile),
        }
    }
}

impl FromStr for Move {
    type Err = InvalidMove;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("pass") {
            Ok(Move::Pass)
        } else {
            Tile::from_str(s).map(Move::Place).map_err(|InvalidTile| InvalidMove)
        }
    }
}

impl GameState {
    fn write_debug(&self, f: &mut Formatter, include_fen: bool) -> std::fmt::Result {
        let fen = match include_fen {
            true => format!(", fen={:?}", self.to_fen()),
            false => String::new(),
        };

        write!(
            f,
            "GameState(next={}, state={:?}, ko={:?}, moves={}, stones_b={}, stones_w={}, rules={:?}{})",
            self.next_player(),
            self.state(),
            self.ko_tile(),
            self.move_count(),
            self.chains().stone_count_from(Player::Black),
            self.chains().stone_count_from(Player::White),
            self.rules(),
            fen,
        )
    }

    pub fn to_fen(&self) -> String {
        let pass_counter = match self.state() {
            State::Normal => 0,
            State::Passed => 1,
            State::Done => 2,
        };
        format!(
            "{} {} {}",
            self.chains().to_fen(),
            self.next_player().to_symbol(),
            pass_counter
        )
    }

    /// The fen format: `"tiles next pass"`, with the rows of `tiles` from top to bottom separated by `/`.
    pub fn from_fen(fen: &str, rules: Rules) -> Result<GameState, InvalidFen> {
        let (tiles, next, pass) = match fen.split(' ').collect_vec().as_slice() {
            &[tiles, next, pass] => (tiles, next, pass),
            _ => return Err(InvalidFen::Syntax),
        };

        let chains = Chains::from_fen(tiles)?;
        check(chains.size() > 0, InvalidFen::InvalidShape)?;

        let next_player = match next {
            "b" => Player::Black,
            "w" => Player::White,
            _ => return Err(InvalidFen::InvalidChar),
        };

        let state = match pass {
            "0" => State::Normal,
            "1" => State::Passed,
            "2" => State::Done,
            _ => return Err(InvalidFen::InvalidChar),
        };

        Ok(GameState::from_parts(rules, chains, next_player, state))
    }

    /// Build a position from a diagram, placed in the top-left corner of a board of the given size.
    ///
    /// Rows are separated by `|` and whitespace is ignored.
    /// `.` is an empty tile, `X`/`B` a black stone and `O`/`W` a white stone.
    /// Any other character marks an empty tile, the marked tiles are returned by character.
    /// Black is the next player.
    pub fn from_diagram(
        size: u8,
        rules: Rules,
        diagram: &str,
    ) -> Result<(GameState, HashMap<char, Tile>), InvalidDiagram> {
        let too_large = InvalidDiagram::TooLarge { size };
        let diagram: String = diagram.chars().filter(|c| !c.is_whitespace()).collect();
        let rows = diagram.trim_end_matches('|').split('|').collect_vec();
        check((1..=GO_MAX_SIZE).contains(&size), too_large.clone())?;
        check(rows.len() <= size as usize, too_large.clone())?;

        let mut chains = Chains::new(size);
        let mut marks = HashMap::new();

        for (r, row) in rows.iter().enumerate() {
            check(row.chars().count() <= size as usize, too_large.clone())?;
            let y = size - 1 - r as u8;

            for (x, c) in row.chars().enumerate() {
                let tile = Tile::new(x as u8, y);
                let color = match c {
                    '.' => continue,
                    'X' | 'B' => Player::Black,
                    'O' | 'W' => Player::White,
                    mark => {
                        if marks.insert(mark, tile).is_some() {
                            return Err(InvalidDiagram::DuplicateMark(mark));
                        }
                        continue;
                    }
                };

                let prepared = match chains.prepare_place_stone(tile.to_flat(size), color) {
                    Ok(prepared) => prepared,
                    Err(TileOccupied) => unreachable!("each tile is visited once"),
                };
                check(prepared.kind == PlacementKind::Normal, InvalidDiagram::HasDeadStones)?;
                chains.place_prepared(prepared);
            }
        }

        let state = GameState::from_parts(rules, chains, Player::Black, State::Normal);
        Ok((state, marks))
    }
}

impl Debug for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.write_debug(f, true)
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.write_debug(f, false)?;
        writeln!(f)?;

        let size = self.size();
        let width_y = size.to_string().len();

        for y in (0..size).rev() {
            write!(f, "{:width$} ", y + 1, width = width_y)?;
            for x in 0..size {
                let c = match self.chains().stone_at(Tile::new(x, y).to_flat(size)) {
                    None => '.',
                    Some(player) => player.to_symbol(),
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }

        write!(f, "{:width$}", "", width = width_y + 1)?;
        for x in 0..size {
            write!(f, "{}", TileX(x))?;
        }
        writeln!(f)?;

        Ok(())
    }
}

impl Chains {
    pub fn to_fen(&self) -> String {
        let size = self.size();
        (0..size)
            .rev()
            .map(|y| {
                (0..size)
                    .map(|x| match self.stone_at(Tile::new(x, y).to_flat(size)) {
                        None => '.',
                        Some(player) => player.to_symbol(),
                    })
                    .collect::<String>()
            })
            .join("/")
    }

    pub fn from_fen(fen: &str) -> Result<Chains, InvalidFen> {
        check(fen.chars().all(|c| "/wb.".contains(c)), InvalidFen::InvalidChar)?;

        let lines = fen.split('/').collect_vec();
        let size = lines.len();
        check(size <= GO_MAX_SIZE as usize, InvalidFen::TooLarge)?;
        let size = size as u8;

        let mut chains = Chains::new(size);
        for (y_rev, line) in lines.iter().enumerate() {
            let y = size - 1 - y_rev as u8;
            check(line.len() == size as usize, InvalidFen::InvalidShape)?;

            for (x, value) in line.chars().enumerate() {
                let player = match value {
                    'b' => Player::Black,
                    'w' => Player::White,
                    _ => continue,
                };

                let tile = Tile::new(x as u8, y).to_flat(size);
                let prepared = match chains.prepare_place_stone(tile, player) {
                    Ok(prepared) => prepared,
                    Err(TileOccupied) => unreachable!("each tile is visited once"),
                };
                check(prepared.kind == PlacementKind::Normal, InvalidFen::HasDeadStones)?;
                chains.place_prepared(prepared);
            }
        }

        Ok(chains)
    }
}

impl Debug for Chains {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Chains({:?})", self.to_fen())
    }
}

impl Display for Chains {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Chains {{")?;
        writeln!(f, "  fen: {:?}", self.to_fen())?;

        writeln!(f, "  tiles:")?;
        let size = self.size();
        for y in (0..size).rev() {
            write!(f, "    {:2} ", y + 1)?;
            for x in 0..size {
                match self.group_id_at(Tile::new(x, y).to_flat(size)) {
                    None => write!(f, "   .")?,
                    Some(group) => write!(f, "{:4}", group)?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "       ")?;
        for x in 0..size {
            write!(f, "{:>4}", TileX(x))?;
        }
        writeln!(f)?;

        writeln!(f, "  groups:")?;
        for (id, group) in self.groups() {
            writeln!(
                f,
                "    group {}: {} stones={} liberties={}",
                id,
                group.color,
                group.stone_count(),
                group.liberty_count()
            )?;
        }

        writeln!(f, "}}")?;
        Ok(())
    }
}

fn check<E>(c: bool, e: E) -> Result<(), E> {
    match c {
        true => Ok(()),
        false => Err(e),
    }
}
