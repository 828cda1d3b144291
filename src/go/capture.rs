use tracing::trace;

use crate::board::Player;
use crate::go::{Chains, FlatTile, Group};

/// A group removed by a capture, together with the id it had so undo can put it back in the same slot.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CapturedGroup {
    pub id: u16,
    pub group: Group,
}

impl Chains {
    /// Remove every enemy group next to `tile` that has no liberties left after `color` placed a stone there.
    ///
    /// The group containing the placed stone must have liberties once the captures are done,
    /// suicide placements are rejected before they reach this point.
    pub(super) fn resolve_captures(&mut self, tile: FlatTile, color: Player) -> Vec<CapturedGroup> {
        let size = self.size();
        let mut captured = vec![];

        for adj in tile.all_adjacent(size) {
            let id = match self.group_id_at(adj) {
                Some(id) => id,
                None => continue,
            };

            let group = self.group(id).expect("tile points to a live group");
            if group.color == color || !group.liberties.is_empty() {
                continue;
            }

            let group = self.remove_group(id);
            trace!("captured {} {} stones next to {:?}", group.stones.len(), group.color, tile);
            captured.push(CapturedGroup { id, group });
        }

        let own = self.group_at(tile).expect("placed stone must belong to a group");
        assert!(
            !own.liberties.is_empty(),
            "Placement at {:?} left its own group without liberties",
            tile
        );

        captured
    }
}
