use std::hash::{Hash, Hasher};
use std::ops::ControlFlow;

use internal_iterator::InternalIterator;
use tracing::debug;

use crate::board::{Color, Player};
use crate::go::{
    Chains, EmptyHistory, FlatTile, Group, History, HistoryEntry, IllegalMove, IllegalMoveKind, PlacementKind,
    PreparedPlacement, Rules, SimulatedPlacement, Tile, TileSet, Zobrist, GO_MAX_SIZE,
};

/// The full state of a game of Go: the stones, the side to move, ko and pass state and the move history.
///
/// Every mutation goes through [GameState::do_move_as] and can be exactly reverted with [GameState::undo_move].
#[derive(Clone)]
pub struct GameState {
    rules: Rules,
    chains: Chains,
    next_player: Player,
    state: State,
    ko: Option<FlatTile>,
    prisoners: [u32; 2],
    history: History,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Move {
    Pass,
    Place(Tile),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum State {
    Normal,
    Passed,
    Done,
}

impl GameState {
    pub fn new(size: u8, rules: Rules) -> GameState {
        assert!(
            (1..=GO_MAX_SIZE).contains(&size),
            "Board size must be in 1..={}, got {}",
            GO_MAX_SIZE,
            size
        );
        GameState::from_parts(rules, Chains::new(size), Player::Black, State::Normal)
    }

    pub(super) fn from_parts(rules: Rules, chains: Chains, next_player: Player, state: State) -> GameState {
        GameState {
            rules,
            chains,
            next_player,
            state,
            ko: None,
            prisoners: [0; 2],
            history: History::default(),
        }
    }

    pub fn size(&self) -> u8 {
        self.chains.size()
    }

    pub fn area(&self) -> u16 {
        self.chains.area()
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    pub fn chains(&self) -> &Chains {
        &self.chains
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == State::Done
    }

    pub fn next_player(&self) -> Player {
        self.next_player
    }

    /// Override the side to move, for setting up positions.
    /// This is not recorded in the history.
    pub fn set_next_player(&mut self, player: Player) {
        self.next_player = player;
    }

    /// The tile where a single stone was just captured and that may not be played immediately.
    pub fn ko_tile(&self) -> Option<Tile> {
        self.ko.map(|ko| ko.to_tile(self.size()))
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// The number of stones captured by `player`.
    pub fn prisoners(&self, player: Player) -> u32 {
        self.prisoners[player.index() as usize]
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    fn flat(&self, tile: Tile) -> FlatTile {
        assert!(tile.exists(self.size()), "{:?} is outside the board", tile);
        tile.to_flat(self.size())
    }

    /// The content of `tile`.
    ///
    /// # Panics
    /// If `tile` does not exist on this board, check with [Tile::exists] first.
    pub fn stone_at(&self, tile: Tile) -> Color {
        Color::from(self.chains.stone_at(self.flat(tile)))
    }

    /// The group containing `tile`, `None` if the tile is empty.
    ///
    /// # Panics
    /// If `tile` does not exist on this board.
    pub fn group_at(&self, tile: Tile) -> Option<&Group> {
        self.chains.group_at(self.flat(tile))
    }

    /// The liberty count of the group at `tile`, zero if the tile is empty.
    ///
    /// # Panics
    /// If `tile` does not exist on this board.
    pub fn liberty_count(&self, tile: Tile) -> u16 {
        self.group_at(tile).map_or(0, |g| g.liberty_count())
    }

    /// The liberties of the group at `tile`, empty if the tile is empty.
    ///
    /// # Panics
    /// If `tile` does not exist on this board.
    pub fn liberties(&self, tile: Tile) -> impl Iterator<Item = Tile> {
        let size = self.size();
        let set = self.group_at(tile).map_or(TileSet::EMPTY, |g| g.liberties);
        set.iter().map(move |t| t.to_tile(size))
    }

    /// # Panics
    /// If `tile` does not exist on this board.
    pub fn group_size(&self, tile: Tile) -> u16 {
        self.group_at(tile).map_or(0, |g| g.stone_count())
    }

    /// # Panics
    /// If `tile` does not exist on this board.
    pub fn group_stones(&self, tile: Tile) -> impl Iterator<Item = Tile> {
        let size = self.size();
        let set = self.group_at(tile).map_or(TileSet::EMPTY, |g| g.stones);
        set.iter().map(move |t| t.to_tile(size))
    }

    /// Check whether `player` could play `mv` right now.
    /// For placements the prepared placement is returned so it does not need to be recomputed.
    pub fn check_move_as(&self, mv: Move, player: Player) -> Result<Option<PreparedPlacement>, IllegalMove> {
        let err = |kind| Err(IllegalMove::new(mv, kind));

        if self.state == State::Done {
            return err(IllegalMoveKind::GameOver);
        }

        let tile = match mv {
            Move::Pass => return Ok(None),
            Move::Place(tile) => tile,
        };
        if !tile.exists(self.size()) {
            return err(IllegalMoveKind::OutOfBounds);
        }
        let tile = tile.to_flat(self.size());

        let prepared = match self.chains.prepare_place_stone(tile, player) {
            Ok(prepared) => prepared,
            Err(_) => return err(IllegalMoveKind::Occupied),
        };
        if self.ko == Some(tile) {
            return err(IllegalMoveKind::KoViolation);
        }
        if prepared.kind == PlacementKind::Suicide {
            return err(IllegalMoveKind::Suicide);
        }
        if self.rules.positional_superko {
            let sim = self.chains.simulate_prepared(&prepared);
            if self.history.contains_position(sim.zobrist_next) {
                return err(IllegalMoveKind::Superko);
            }
        }

        Ok(Some(prepared))
    }

    pub fn check_move(&self, mv: Move) -> Result<(), IllegalMove> {
        self.check_move_as(mv, self.next_player).map(|_| ())
    }

    pub fn is_legal(&self, mv: Move) -> bool {
        self.check_move(mv).is_ok()
    }

    /// Simulate placing a stone for the next player without changing anything.
    pub fn simulate(&self, tile: Tile) -> Result<SimulatedPlacement, IllegalMove> {
        let prepared = self
            .check_move_as(Move::Place(tile), self.next_player)?
            .expect("placements are always prepared");
        Ok(self.chains.simulate_prepared(&prepared))
    }

    pub fn do_move(&mut self, mv: Move) -> Result<(), IllegalMove> {
        self.do_move_as(mv, self.next_player)
    }

    /// Play `mv` for `player`, which does not have to be the next player.
    /// Afterwards the other player is next. On error nothing is modified.
    pub fn do_move_as(&mut self, mv: Move, player: Player) -> Result<(), IllegalMove> {
        let prepared = self.check_move_as(mv, player)?;

        let mut entry = HistoryEntry {
            mv,
            player,
            prev_next_player: self.next_player,
            prev_ko: self.ko,
            prev_state: self.state,
            prev_prisoners: self.prisoners,
            zobrist_before: self.chains.zobrist(),
            placement: None,
        };

        match prepared {
            None => {
                self.ko = None;
                self.state = match self.state {
                    State::Normal => State::Passed,
                    State::Passed => State::Done,
                    State::Done => unreachable!("game over was checked"),
                };
            }
            Some(prepared) => {
                let undo = self.chains.place_prepared(prepared);

                let captured = undo.captured_stone_count();
                self.prisoners[player.index() as usize] += captured as u32;

                // a lone stone that captured a single stone and only has that tile as liberty forms a ko
                self.ko = None;
                if let [captured_group] = undo.captured() {
                    let placed = self.chains.group(undo.group_id()).expect("placed group is alive");
                    if captured == 1 && placed.stone_count() == 1 && placed.liberty_count() == 1 {
                        self.ko = captured_group.group.stones.first();
                    }
                }

                self.state = State::Normal;
                entry.placement = Some(undo);
            }
        }

        self.next_player = player.other();
        self.history.push(entry);

        debug!("{} played {}, ko={:?}", player, mv, self.ko_tile());
        Ok(())
    }

    /// Revert the last move, returning it.
    pub fn undo_move(&mut self) -> Result<Move, EmptyHistory> {
        let entry = self.history.pop().ok_or(EmptyHistory)?;

        if let Some(undo) = entry.placement {
            self.chains.undo_place(undo);
        }
        self.next_player = entry.prev_next_player;
        self.ko = entry.prev_ko;
        self.state = entry.prev_state;
        self.prisoners = entry.prev_prisoners;

        debug!("undid {} by {}", entry.mv, entry.player);
        Ok(entry.mv)
    }

    /// Iterator over the legal moves for the next player. Pass is always included unless the game is over.
    pub fn legal_moves(&self) -> LegalMovesIterator<'_> {
        LegalMovesIterator { state: self }
    }

    /// Is `tile` an empty tile completely surrounded by stones of `player`?
    ///
    /// # Panics
    /// If `tile` does not exist on this board.
    pub fn is_eyeish(&self, tile: Tile, player: Player) -> bool {
        let flat = self.flat(tile);
        self.chains.stone_at(flat).is_none()
            && flat
                .all_adjacent(self.size())
                .all(|adj| self.chains.stone_at(adj) == Some(player))
    }

    /// Is `tile` a true eye for `player`: eyeish, with at most one diagonal held by the opponent,
    /// or none if the tile is on the edge.
    pub fn is_eye(&self, tile: Tile, player: Player) -> bool {
        if !self.is_eyeish(tile, player) {
            return false;
        }

        let (diagonals, missing) = self.flat(tile).all_diagonal(self.size());
        let bad = diagonals
            .filter(|&d| self.chains.stone_at(d) == Some(player.other()))
            .count();
        let allowed = if missing > 0 { 0 } else { 1 };
        bad <= allowed
    }

    /// Full zobrist, including:
    /// * the tiles
    /// * the next player
    /// * the pass state
    pub fn zobrist_full(&self) -> Zobrist {
        let mut result = self.chains.zobrist();
        result ^= Zobrist::for_color_turn(self.next_player);
        result ^= Zobrist::for_pass_state(self.state);
        result
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new(19, Rules::default())
    }
}

#[derive(Debug, Clone)]
pub struct LegalMovesIterator<'a> {
    state: &'a GameState,
}

impl InternalIterator for LegalMovesIterator<'_> {
    type Item = Move;

    fn try_for_each<R, F>(self, mut f: F) -> ControlFlow<R>
    where
        F: FnMut(Self::Item) -> ControlFlow<R>,
    {
        let state = self.state;
        if state.is_done() {
            return ControlFlow::Continue(());
        }

        f(Move::Pass)?;
        for tile in state.chains.empty_tiles().iter() {
            let mv = Move::Place(tile.to_tile(state.size()));
            if state.is_legal(mv) {
                f(mv)?;
            }
        }

        ControlFlow::Continue(())
    }
}

impl Eq for GameState {}

impl PartialEq for GameState {
    fn eq(&self, other: &Self) -> bool {
        self.rules == other.rules
            && self.chains == other.chains
            && self.next_player == other.next_player
            && self.state == other.state
            && self.ko == other.ko
            && self.prisoners == other.prisoners
            && self.history == other.history
    }
}

impl Hash for GameState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.zobrist_full().hash(state);
    }
}
