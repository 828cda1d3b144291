//! Ladder reading: does a move force the capture of a group through a sequence of ataris,
//! or does it let a group in atari escape?
//!
//! The search alternates between two kinds of nodes:
//! * after a hunter move the prey must be in atari, the prey then tries every escape move,
//!   which are its remaining liberty and the liberties of adjacent hunter groups that are in atari themselves.
//! * after a prey move the prey has escaped with three or more liberties, is lost with a single liberty,
//!   and with exactly two liberties the hunter tries to play atari on either of them.
//!
//! A node succeeds if none of the opponent replies succeed. The recursion is run on an explicit stack,
//! every applied move is undone before the query returns.

use nohash_hasher::IntSet;
use tracing::{debug_span, trace};

use crate::board::Player;
use crate::go::{FlatTile, GameState, LadderError, Move, Tile, TileSet, Zobrist};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LadderConfig {
    /// The number of plies the search may look ahead.
    /// When exhausted, the hunter is assumed to capture.
    pub max_depth: u32,
}

impl Default for LadderConfig {
    fn default() -> Self {
        LadderConfig { max_depth: 80 }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Role {
    /// The hunter plays to put the prey in atari.
    Capture,
    /// The prey plays to get out of atari.
    Escape,
}

/// A node of the search whose move is currently applied to the state.
#[derive(Debug)]
struct Frame {
    role: Role,
    prey: FlatTile,
    /// Opponent replies that have not been tried yet.
    replies: TileSet,
    /// The depth left for the replies.
    child_depth: u32,
    position: Zobrist,
}

#[derive(Debug)]
enum Entered {
    Leaf(bool),
    Expanded(Frame),
}

/// Ladder search that temporarily plays moves on a borrowed [GameState].
#[derive(Debug)]
pub struct LadderSearch<'a> {
    state: &'a mut GameState,
    config: LadderConfig,
    hunter: Player,

    stack: Vec<Frame>,
    path: IntSet<Zobrist>,
}

impl<'a> LadderSearch<'a> {
    pub fn new(state: &'a mut GameState, config: LadderConfig) -> Self {
        let hunter = state.next_player();
        LadderSearch {
            state,
            config,
            hunter,
            stack: vec![],
            path: IntSet::default(),
        }
    }

    /// Is playing `tile` for the next player a ladder capture of `prey`?
    /// If `prey` is `None` every adjacent enemy group with two liberties is considered.
    pub fn is_capture(&mut self, tile: Tile, prey: Option<Tile>) -> Result<bool, LadderError> {
        self.hunter = self.state.next_player();
        self.query(Role::Capture, tile, prey)
    }

    /// Is playing `tile` for the next player an escape for `prey`?
    /// If `prey` is `None` every adjacent own group in atari is considered.
    pub fn is_escape(&mut self, tile: Tile, prey: Option<Tile>) -> Result<bool, LadderError> {
        self.hunter = self.state.next_player().other();
        self.query(Role::Escape, tile, prey)
    }

    fn prey_player(&self) -> Player {
        self.hunter.other()
    }

    fn player_for(&self, role: Role) -> Player {
        match role {
            Role::Capture => self.hunter,
            Role::Escape => self.prey_player(),
        }
    }

    fn query(&mut self, role: Role, tile: Tile, prey: Option<Tile>) -> Result<bool, LadderError> {
        let size = self.state.size();
        if !tile.exists(size) {
            return Err(LadderError::OutOfBounds(tile));
        }
        let flat = tile.to_flat(size);

        let candidates = match prey {
            Some(prey) => {
                if !prey.exists(size) {
                    return Err(LadderError::OutOfBounds(prey));
                }
                let prey_flat = prey.to_flat(size);
                if self.state.chains().stone_at(prey_flat) != Some(self.prey_player()) {
                    return Err(LadderError::InvalidTarget(prey));
                }
                vec![prey_flat]
            }
            None => self.adjacent_prey(role, flat),
        };

        let span = debug_span!("ladder", ?role, %tile, result = tracing::field::Empty);
        let _guard = span.enter();

        let mut result = false;
        for prey in candidates {
            if self.search(role, flat, prey) {
                result = true;
                break;
            }
        }

        span.record("result", result);
        Ok(result)
    }

    /// The prey groups next to `tile`, represented by one of their stones:
    /// groups with two liberties for a capture, groups in atari for an escape.
    fn adjacent_prey(&self, role: Role, tile: FlatTile) -> Vec<FlatTile> {
        let chains = self.state.chains();
        let wanted_liberties = match role {
            Role::Capture => 2,
            Role::Escape => 1,
        };

        let mut seen = vec![];
        let mut result = vec![];
        for adj in tile.all_adjacent(chains.size()) {
            if let (Some(id), Some(group)) = (chains.group_id_at(adj), chains.group_at(adj)) {
                if group.color == self.prey_player()
                    && group.liberty_count() == wanted_liberties
                    && !seen.contains(&id)
                {
                    seen.push(id);
                    result.push(adj);
                }
            }
        }
        result
    }

    fn search(&mut self, role: Role, tile: FlatTile, prey: FlatTile) -> bool {
        debug_assert!(self.stack.is_empty() && self.path.is_empty());
        self.path.insert(self.state.zobrist_full());

        let mut result = match self.enter(role, tile, prey, self.config.max_depth) {
            Entered::Leaf(value) => {
                self.path.clear();
                return value;
            }
            Entered::Expanded(frame) => {
                self.push(frame);
                None
            }
        };

        loop {
            let frame = self.stack.last_mut().expect("search stack is not empty");

            // a successful reply refutes this node
            let value = if result.take() == Some(true) {
                false
            } else {
                match frame.replies.pop_first() {
                    None => true,
                    Some(reply) => {
                        let child_role = match frame.role {
                            Role::Capture => Role::Escape,
                            Role::Escape => Role::Capture,
                        };
                        let (prey, depth) = (frame.prey, frame.child_depth);

                        match self.enter(child_role, reply, prey, depth) {
                            Entered::Leaf(value) => result = Some(value),
                            Entered::Expanded(child) => self.push(child),
                        }
                        continue;
                    }
                }
            };

            self.pop(value);
            if self.stack.is_empty() {
                self.path.clear();
                return value;
            }
            result = Some(value);
        }
    }

    /// Play `tile` for the given role and evaluate the result.
    /// Leaves are undone immediately, expanded frames keep their move applied until popped.
    fn enter(&mut self, role: Role, tile: FlatTile, prey: FlatTile, depth: u32) -> Entered {
        let size = self.state.size();
        let player = self.player_for(role);
        let mv = Move::Place(tile.to_tile(size));

        if self.state.check_move_as(mv, player).is_err() {
            trace!(?role, %mv, "illegal");
            return Entered::Leaf(false);
        }
        if depth == 0 {
            trace!(?role, %mv, "out of depth");
            return Entered::Leaf(role == Role::Capture);
        }

        self.play(mv, player);
        let position = self.state.zobrist_full();

        let leaf = if self.path.contains(&position) {
            // a repeated position is never a forcing sequence
            Some(role == Role::Escape)
        } else {
            match role {
                Role::Capture => self.after_capture(prey),
                Role::Escape => self.after_escape(prey),
            }
        };

        match leaf {
            Some(value) => {
                trace!(?role, %mv, value, "leaf");
                self.undo();
                Entered::Leaf(value)
            }
            None => {
                let replies = match role {
                    Role::Capture => self.escape_moves(prey),
                    Role::Escape => self.liberties(prey),
                };
                trace!(?role, %mv, replies = replies.len(), "expanded");
                Entered::Expanded(Frame {
                    role,
                    prey,
                    replies,
                    child_depth: depth - 1,
                    position,
                })
            }
        }
    }

    /// The hunter just played, `None` means the prey has to try to escape.
    fn after_capture(&self, prey: FlatTile) -> Option<bool> {
        match self.state.chains().group_at(prey) {
            // captured outright
            None => Some(true),
            Some(group) if group.liberty_count() != 1 => Some(false),
            Some(_) => None,
        }
    }

    /// The prey just played, `None` means the hunter has to try to capture.
    fn after_escape(&self, prey: FlatTile) -> Option<bool> {
        let liberties = self.liberties(prey).len();
        match liberties {
            0 | 1 => Some(false),
            2 => None,
            _ => Some(true),
        }
    }

    fn liberties(&self, prey: FlatTile) -> TileSet {
        self.state
            .chains()
            .group_at(prey)
            .map_or(TileSet::EMPTY, |g| g.liberties)
    }

    /// The last liberty of the prey, and the liberties of hunter groups in atari that touch the prey.
    fn escape_moves(&self, prey: FlatTile) -> TileSet {
        let chains = self.state.chains();
        let group = match chains.group_at(prey) {
            None => return TileSet::EMPTY,
            Some(group) => group,
        };

        let mut result = group.liberties;
        for stone in group.stones.iter() {
            for adj in stone.all_adjacent(chains.size()) {
                if let Some(adj_group) = chains.group_at(adj) {
                    if adj_group.color == self.hunter && adj_group.liberty_count() == 1 {
                        result |= adj_group.liberties;
                    }
                }
            }
        }
        result
    }

    fn play(&mut self, mv: Move, player: Player) {
        self.state
            .do_move_as(mv, player)
            .unwrap_or_else(|e| panic!("Move {} was checked but failed: {}", mv, e));
    }

    fn undo(&mut self) {
        self.state.undo_move().expect("ladder search moves are always undone in order");
    }

    fn push(&mut self, frame: Frame) {
        self.path.insert(frame.position);
        self.stack.push(frame);
    }

    fn pop(&mut self, value: bool) {
        let frame = self.stack.pop().expect("search stack is not empty");
        trace!(role = ?frame.role, depth = self.stack.len(), value, "finished");
        self.path.remove(&frame.position);
        self.undo();
    }
}

impl GameState {
    /// Does playing `tile` for the next player capture an adjacent enemy group in a ladder?
    /// The state is identical to before when this returns.
    pub fn is_ladder_capture(&mut self, tile: Tile) -> Result<bool, LadderError> {
        LadderSearch::new(self, LadderConfig::default()).is_capture(tile, None)
    }

    /// Does playing `tile` for the next player let `prey`, or any adjacent own group in atari if `None`,
    /// escape from a ladder? The state is identical to before when this returns.
    pub fn is_ladder_escape(&mut self, tile: Tile, prey: Option<Tile>) -> Result<bool, LadderError> {
        LadderSearch::new(self, LadderConfig::default()).is_escape(tile, prey)
    }
}
