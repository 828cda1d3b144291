use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use crate::board::Player;
use crate::go::stack_vec::StackVec4;
use crate::go::{CapturedGroup, FlatTile, TileSet, Zobrist};

/// The stones on the board, partitioned into groups that each track their own liberties.
///
/// Every mutation keeps the groups exact: a group is always a maximal connected set of stones of one color
/// and its liberty set is always exactly the set of empty tiles adjacent to it.
#[derive(Clone)]
pub struct Chains {
    size: u8,

    tiles: Vec<Option<u16>>,
    groups: Vec<Group>,

    // derived data
    empty: TileSet,
    zobrist: Zobrist,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Group {
    pub color: Player,
    pub stones: TileSet,
    pub liberties: TileSet,
    /// The combined hash of all stones in this group.
    /// Used to quickly remove the entire group from the hash.
    pub zobrist: Zobrist,
}

/// The result of investigating a placement without applying it yet.
#[derive(Debug, Clone)]
pub struct PreparedPlacement {
    pub tile: FlatTile,
    pub color: Player,
    pub kind: PlacementKind,

    pub merge_friendly: StackVec4,
    pub clear_enemy: StackVec4,

    /// The liberties of the merged group, not counting the tiles freed by captures.
    pub liberties_before_capture: TileSet,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SimulatedPlacement {
    pub kind: PlacementKind,
    pub zobrist_next: Zobrist,
    /// The number of enemy stones that would be captured.
    pub captured: u16,
    pub stone_count_next: u16,
    /// The liberties of the group containing the placed stone, after captures.
    pub liberties_after: TileSet,
    /// The single-stone recapture that would be forbidden after this placement.
    pub ko: Option<FlatTile>,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PlacementKind {
    Normal,
    Capture,
    Suicide,
}

/// Everything needed to exactly revert a placement, see [Chains::undo_place].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PlacementUndo {
    tile: FlatTile,
    color: Player,
    group_id: u16,
    survivor_before: Option<Group>,
    absorbed: Vec<(u16, Group)>,
    captured: Vec<CapturedGroup>,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TileOccupied;

impl Chains {
    pub fn new(size: u8) -> Self {
        assert!(size <= crate::go::GO_MAX_SIZE);
        let area = size as usize * size as usize;

        Chains {
            size,
            tiles: vec![None; area],
            groups: vec![],
            empty: TileSet::full(size),
            zobrist: Zobrist::default(),
        }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn area(&self) -> u16 {
        self.size as u16 * self.size as u16
    }

    pub fn stone_count(&self) -> u16 {
        self.area() - self.empty_count()
    }

    pub fn stone_count_from(&self, player: Player) -> u16 {
        self.groups()
            .filter(|(_, g)| g.color == player)
            .map(|(_, g)| g.stones.len())
            .sum()
    }

    pub fn empty_count(&self) -> u16 {
        self.empty.len()
    }

    pub fn empty_tiles(&self) -> &TileSet {
        &self.empty
    }

    pub fn zobrist(&self) -> Zobrist {
        self.zobrist
    }

    pub fn group_id_at(&self, tile: FlatTile) -> Option<u16> {
        self.tiles[tile.index() as usize]
    }

    /// The group with the given id, `None` if that group does not exist (anymore).
    pub fn group(&self, id: u16) -> Option<&Group> {
        self.groups.get(id as usize).filter(|g| !g.is_dead())
    }

    pub fn group_at(&self, tile: FlatTile) -> Option<&Group> {
        self.group_id_at(tile).map(|id| &self.groups[id as usize])
    }

    pub fn stone_at(&self, tile: FlatTile) -> Option<Player> {
        self.group_at(tile).map(|group| group.color)
    }

    /// Iterator over all of the groups that currently exist.
    /// The items are `(group_id, group)`. `group_id` is not necessarily continuous.
    pub fn groups(&self) -> impl Iterator<Item = (u16, &Group)> + '_ {
        self.groups
            .iter()
            .enumerate()
            .filter(|(_, group)| !group.is_dead())
            .map(|(id, group)| (id as u16, group))
    }

    fn allocate_group(&mut self, new: Group) -> u16 {
        match self.groups.iter().position(|g| g.is_dead()) {
            Some(id) => {
                self.groups[id] = new;
                id as u16
            }
            None => {
                let id = self.groups.len() as u16;
                self.groups.push(new);
                id
            }
        }
    }

    /// Place a stone and resolve the resulting captures.
    ///
    /// # Panics
    /// If the placement would be suicide, check [PlacementKind] with [Chains::prepare_place_stone] first.
    pub fn place_stone(&mut self, tile: FlatTile, color: Player) -> Result<PlacementUndo, TileOccupied> {
        let prepared = self.prepare_place_stone(tile, color)?;
        Ok(self.place_prepared(prepared))
    }

    pub fn place_prepared(&mut self, prepared: PreparedPlacement) -> PlacementUndo {
        let PreparedPlacement {
            tile,
            color,
            kind,
            merge_friendly,
            clear_enemy: _,
            liberties_before_capture,
        } = prepared;
        assert!(kind != PlacementKind::Suicide, "Cannot place suicide stone at {:?}", tile);
        debug_assert!(self.tiles[tile.index() as usize].is_none());

        let tile_zobrist = Zobrist::for_color_tile(color, tile);
        self.zobrist ^= tile_zobrist;
        self.empty.remove(tile);

        // the largest friendly group survives and absorbs the others
        let survivor = merge_friendly
            .iter()
            .max_by_key(|&id| (self.groups[id as usize].stones.len(), u16::MAX - id));

        let mut absorbed = vec![];
        let (group_id, survivor_before) = match survivor {
            None => {
                let id = self.allocate_group(Group {
                    color,
                    stones: TileSet::single(tile),
                    liberties: liberties_before_capture,
                    zobrist: tile_zobrist,
                });
                (id, None)
            }
            Some(survivor_id) => {
                let before = self.groups[survivor_id as usize];
                let mut merged = before;
                merged.stones.insert(tile);
                merged.zobrist ^= tile_zobrist;
                merged.liberties = liberties_before_capture;

                for other_id in merge_friendly.iter().filter(|&id| id != survivor_id) {
                    let other = self.groups[other_id as usize];
                    merged.stones |= other.stones;
                    merged.zobrist ^= other.zobrist;
                    for stone in other.stones.iter() {
                        self.tiles[stone.index() as usize] = Some(survivor_id);
                    }
                    self.groups[other_id as usize].mark_dead();
                    absorbed.push((other_id, other));
                }

                self.groups[survivor_id as usize] = merged;
                (survivor_id, Some(before))
            }
        };
        self.tiles[tile.index() as usize] = Some(group_id);

        // the tile is no longer a liberty of adjacent enemies
        for adj in tile.all_adjacent(self.size) {
            if let Some(adj_id) = self.tiles[adj.index() as usize] {
                let group = &mut self.groups[adj_id as usize];
                if group.color != color {
                    group.liberties.remove(tile);
                }
            }
        }

        let captured = self.resolve_captures(tile, color);
        debug_assert_eq!(captured.is_empty(), kind == PlacementKind::Normal);

        PlacementUndo {
            tile,
            color,
            group_id,
            survivor_before,
            absorbed,
            captured,
        }
    }

    /// Remove all stones of the given group from the board, giving their tiles back as liberties to adjacent groups.
    pub fn remove_group(&mut self, group_id: u16) -> Group {
        let group = self.groups[group_id as usize];
        assert!(!group.is_dead(), "Cannot remove dead group {}", group_id);

        self.zobrist ^= group.zobrist;
        for stone in group.stones.iter() {
            self.tiles[stone.index() as usize] = None;
        }
        self.empty |= group.stones;

        // all stones of the group are gone now, so any remaining neighbor belongs to another group
        for stone in group.stones.iter() {
            for adj in stone.all_adjacent(self.size) {
                if let Some(adj_id) = self.tiles[adj.index() as usize] {
                    self.groups[adj_id as usize].liberties.insert(stone);
                }
            }
        }

        self.groups[group_id as usize].mark_dead();
        group
    }

    /// Revert a placement. Placements must be reverted in the reverse order they were applied in.
    pub fn undo_place(&mut self, undo: PlacementUndo) {
        let PlacementUndo {
            tile,
            color,
            group_id,
            survivor_before,
            absorbed,
            captured,
        } = undo;
        let size = self.size;

        // put back captured groups under their original ids
        for CapturedGroup { id, group } in captured.into_iter().rev() {
            assert!(self.groups[id as usize].is_dead(), "Group slot {} was reused", id);
            self.groups[id as usize] = group;
            self.zobrist ^= group.zobrist;
            for stone in group.stones.iter() {
                self.tiles[stone.index() as usize] = Some(id);
                self.empty.remove(stone);
            }
            for stone in group.stones.iter() {
                for adj in stone.all_adjacent(size) {
                    if let Some(adj_id) = self.tiles[adj.index() as usize] {
                        if adj_id != id {
                            self.groups[adj_id as usize].liberties.remove(stone);
                        }
                    }
                }
            }
        }

        // split the merged group again
        match survivor_before {
            None => self.groups[group_id as usize].mark_dead(),
            Some(before) => self.groups[group_id as usize] = before,
        }
        for (id, group) in absorbed {
            self.groups[id as usize] = group;
            for stone in group.stones.iter() {
                self.tiles[stone.index() as usize] = Some(id);
            }
        }

        // clear the placed tile itself
        self.tiles[tile.index() as usize] = None;
        self.empty.insert(tile);
        self.zobrist ^= Zobrist::for_color_tile(color, tile);
        for adj in tile.all_adjacent(size) {
            if let Some(adj_id) = self.tiles[adj.index() as usize] {
                let group = &mut self.groups[adj_id as usize];
                if group.color != color {
                    group.liberties.insert(tile);
                }
            }
        }
    }

    pub fn simulate_prepared(&self, prepared: &PreparedPlacement) -> SimulatedPlacement {
        let &PreparedPlacement {
            tile,
            color,
            kind,
            ref merge_friendly,
            ref clear_enemy,
            liberties_before_capture,
        } = prepared;

        if kind == PlacementKind::Suicide {
            return SimulatedPlacement {
                kind,
                zobrist_next: self.zobrist,
                captured: 0,
                stone_count_next: self.stone_count(),
                liberties_after: TileSet::EMPTY,
                ko: None,
            };
        }

        let mut stones = TileSet::single(tile);
        for id in merge_friendly.iter() {
            stones |= self.groups[id as usize].stones;
        }

        let mut zobrist_next = self.zobrist ^ Zobrist::for_color_tile(color, tile);
        let mut captured_stones = TileSet::EMPTY;
        for id in clear_enemy.iter() {
            let group = &self.groups[id as usize];
            zobrist_next ^= group.zobrist;
            captured_stones |= group.stones;
        }

        // captured stones next to the new group become liberties
        let mut liberties_after = liberties_before_capture;
        for stone in captured_stones.iter() {
            if stone.all_adjacent(self.size).any(|adj| stones.contains(adj)) {
                liberties_after.insert(stone);
            }
        }

        let captured = captured_stones.len();
        let ko = if captured == 1 && stones.len() == 1 && liberties_after.len() == 1 {
            captured_stones.first()
        } else {
            None
        };

        SimulatedPlacement {
            kind,
            zobrist_next,
            captured,
            stone_count_next: self.stone_count() + 1 - captured,
            liberties_after,
            ko,
        }
    }

    pub fn prepare_place_stone(&self, tile: FlatTile, color: Player) -> Result<PreparedPlacement, TileOccupied> {
        if self.tiles[tile.index() as usize].is_some() {
            return Err(TileOccupied);
        }

        let mut liberties = TileSet::EMPTY;
        let mut merge_friendly = StackVec4::new();
        let mut clear_enemy = StackVec4::new();

        for adj in tile.all_adjacent(self.size) {
            match self.tiles[adj.index() as usize] {
                None => {
                    liberties.insert(adj);
                }
                Some(group_id) => {
                    let group = &self.groups[group_id as usize];
                    if group.color == color {
                        merge_friendly.insert(group_id);
                    } else if group.liberties.len() == 1 {
                        debug_assert!(group.liberties.contains(tile));
                        clear_enemy.insert(group_id);
                    }
                }
            }
        }

        for id in merge_friendly.iter() {
            liberties |= self.groups[id as usize].liberties;
        }
        liberties.remove(tile);

        let kind = if !clear_enemy.is_empty() {
            PlacementKind::Capture
        } else if liberties.is_empty() {
            PlacementKind::Suicide
        } else {
            PlacementKind::Normal
        };

        Ok(PreparedPlacement {
            tile,
            color,
            kind,
            merge_friendly,
            clear_enemy,
            liberties_before_capture: liberties,
        })
    }

    /// Recompute all derived data from scratch and check that it matches the incremental state.
    pub fn assert_valid(&self) {
        let size = self.size;
        assert_eq!(self.tiles.len(), self.area() as usize);

        // per-tile checks
        let mut empty = TileSet::EMPTY;
        let mut zobrist = Zobrist::default();
        let mut stones_per_group: HashMap<u16, TileSet> = HashMap::new();

        for tile in FlatTile::all(size) {
            match self.tiles[tile.index() as usize] {
                None => {
                    empty.insert(tile);
                }
                Some(id) => {
                    let group = self.group(id).unwrap_or_else(|| panic!("{:?} points to dead group {}", tile, id));
                    zobrist ^= Zobrist::for_color_tile(group.color, tile);
                    stones_per_group.entry(id).or_default().insert(tile);
                }
            }
        }
        assert_eq!(self.empty, empty, "Invalid empty set");
        assert_eq!(self.zobrist, zobrist, "Invalid zobrist hash");

        // per-group checks
        for (id, group) in self.groups.iter().enumerate() {
            let id = id as u16;

            if group.is_dead() {
                assert!(group.liberties.is_empty(), "Dead group {} has liberties", id);
                assert_eq!(group.zobrist, Zobrist::default(), "Dead group {} has a hash", id);
                assert!(!stones_per_group.contains_key(&id));
                continue;
            }

            assert_eq!(Some(&group.stones), stones_per_group.get(&id), "Group {} has wrong stones", id);

            let mut liberties = TileSet::EMPTY;
            let mut group_zobrist = Zobrist::default();
            for stone in group.stones.iter() {
                group_zobrist ^= Zobrist::for_color_tile(group.color, stone);
                for adj in stone.all_adjacent(size) {
                    match self.tiles[adj.index() as usize] {
                        None => {
                            liberties.insert(adj);
                        }
                        Some(adj_id) => {
                            // adjacent stones of the same color must be in the same group
                            let adj_color = self.groups[adj_id as usize].color;
                            assert!(
                                adj_color != group.color || adj_id == id,
                                "Groups {} and {} touch but are not merged",
                                id,
                                adj_id
                            );
                        }
                    }
                }
            }

            assert_eq!(group.liberties, liberties, "Group {} has wrong liberties", id);
            assert!(!liberties.is_empty(), "Group {} has no liberties", id);
            assert_eq!(group.zobrist, group_zobrist, "Group {} has wrong hash", id);
            assert!(self.is_connected(&group.stones), "Group {} is not connected", id);
        }
    }

    fn is_connected(&self, stones: &TileSet) -> bool {
        let start = match stones.first() {
            None => return true,
            Some(start) => start,
        };

        let mut reached = TileSet::single(start);
        let mut stack = vec![start];
        while let Some(curr) = stack.pop() {
            for adj in curr.all_adjacent(self.size) {
                if stones.contains(adj) && reached.insert(adj) {
                    stack.push(adj);
                }
            }
        }

        reached == *stones
    }
}

impl Group {
    fn mark_dead(&mut self) {
        self.stones = TileSet::EMPTY;
        self.liberties = TileSet::EMPTY;
        self.zobrist = Zobrist::default();
    }

    fn is_dead(&self) -> bool {
        self.stones.is_empty()
    }

    pub fn stone_count(&self) -> u16 {
        self.stones.len()
    }

    pub fn liberty_count(&self) -> u16 {
        self.liberties.len()
    }
}

impl PlacementUndo {
    pub fn tile(&self) -> FlatTile {
        self.tile
    }

    pub fn color(&self) -> Player {
        self.color
    }

    /// The id of the group that contains the placed stone.
    pub fn group_id(&self) -> u16 {
        self.group_id
    }

    pub fn captured(&self) -> &[CapturedGroup] {
        &self.captured
    }

    pub fn captured_stone_count(&self) -> u16 {
        self.captured.iter().map(|c| c.group.stones.len()).sum()
    }
}

impl PlacementKind {
    pub fn is_suicide(self) -> bool {
        self == PlacementKind::Suicide
    }

    pub fn removes_existing_stones(self) -> bool {
        self == PlacementKind::Capture
    }
}

impl Eq for Chains {}

impl PartialEq for Chains {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
            && self.zobrist() == other.zobrist()
            && FlatTile::all(self.size).all(|tile| self.stone_at(tile) == other.stone_at(tile))
    }
}

impl Hash for Chains {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.zobrist().hash(state);
    }
}
