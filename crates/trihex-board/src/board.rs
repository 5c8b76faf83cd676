//! Board occupancy and the placement validator.

use std::collections::BTreeSet;

use thiserror::Error;
use tracing::debug;

use trihex_combo::{Combo, EdgeColors};
use trihex_topology::{opposite, Junction, NeighborTable, EDGES_PER_TILE};

/// A committed tile: combo, chosen rotation and the resulting edge colors.
///
/// Immutable while on the board; removing it returns the tile to the
/// empty set.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// Tile index the placement occupies.
    pub tile: usize,
    /// The abstract combo.
    pub combo: Combo,
    /// Rotation step (0 for mono, 0..=2 for bi/tri).
    pub rotation: u8,
    /// Edge colors under that rotation.
    pub edges: EdgeColors,
}

impl Placement {
    /// Build a placement, expanding the combo under the rotation step.
    pub fn new(tile: usize, combo: Combo, rotation: u8) -> Self {
        let edges = combo.oriented_edges(rotation);
        Self {
            tile,
            combo,
            rotation,
            edges,
        }
    }
}

/// Why a commit was refused.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    /// The tile already carries a placement.
    #[error("tile {tile} is already occupied")]
    Occupied { tile: usize },

    /// An occupied neighbor shows a different color on the shared edge.
    #[error("edge conflict with neighbor of tile {tile} in direction {direction}")]
    EdgeConflict { tile: usize, direction: usize },

    /// The tile touches no occupied neighbor on a non-empty board.
    #[error("tile {tile} is not connected to any occupied tile")]
    Isolated { tile: usize },
}

/// The live board: one slot per tile plus the empty-index set.
///
/// Tile indices follow the grid the neighbor table was built from.
/// Indexing methods panic on out-of-range tiles; that is a caller bug,
/// not a recoverable condition.
#[derive(Debug, Clone)]
pub struct Board {
    neighbors: NeighborTable,
    slots: Vec<Option<Placement>>,
    empty: BTreeSet<usize>,
}

impl Board {
    /// An all-empty board over the given neighbor table.
    pub fn new(neighbors: NeighborTable) -> Self {
        let len = neighbors.len();
        Self {
            neighbors,
            slots: vec![None; len],
            empty: (0..len).collect(),
        }
    }

    /// Number of tiles on the board.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True for a zero-tile board.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of occupied tiles.
    pub fn occupied_count(&self) -> usize {
        self.slots.len() - self.empty.len()
    }

    /// True while no tile is occupied.
    pub fn is_blank(&self) -> bool {
        self.empty.len() == self.slots.len()
    }

    /// The placement on a tile, if any.
    pub fn placement(&self, tile: usize) -> Option<&Placement> {
        self.slots[tile].as_ref()
    }

    /// All placements, in tile-index order.
    pub fn placements(&self) -> impl Iterator<Item = &Placement> {
        self.slots.iter().flatten()
    }

    /// Empty tile indices, ascending.
    pub fn empty_tiles(&self) -> impl Iterator<Item = usize> + '_ {
        self.empty.iter().copied()
    }

    /// The neighbor table the board was built over.
    pub fn neighbors(&self) -> &NeighborTable {
        &self.neighbors
    }

    /// Decide whether `edges` may be placed on `tile`.
    ///
    /// Pure read, no side effects: occupied tiles refuse, any shared-edge
    /// color mismatch against an occupied neighbor refuses, and the
    /// candidate must touch at least one occupied neighbor unless the
    /// whole board is still blank.
    pub fn can_place(&self, tile: usize, edges: &EdgeColors) -> bool {
        self.check(tile, edges).is_ok()
    }

    /// Commit a placement through the same rule `can_place` applies.
    pub fn commit(&mut self, placement: Placement) -> Result<(), PlacementError> {
        self.check(placement.tile, &placement.edges)?;
        debug!(
            tile = placement.tile,
            rotation = placement.rotation,
            "placement committed"
        );
        self.empty.remove(&placement.tile);
        let tile = placement.tile;
        self.slots[tile] = Some(placement);
        Ok(())
    }

    /// Remove a placement, returning the tile to the empty set.
    pub fn remove(&mut self, tile: usize) -> Option<Placement> {
        let removed = self.slots[tile].take();
        if removed.is_some() {
            debug!(tile, "placement removed");
            self.empty.insert(tile);
        }
        removed
    }

    /// True once all three tiles of a junction are occupied; the game
    /// layer re-evaluates this after every commit and removal.
    pub fn junction_ready(&self, junction: &Junction) -> bool {
        junction.tiles.iter().all(|&t| self.slots[t].is_some())
    }

    fn check(&self, tile: usize, edges: &EdgeColors) -> Result<(), PlacementError> {
        if self.slots[tile].is_some() {
            return Err(PlacementError::Occupied { tile });
        }
        let mut touched = false;
        for direction in 0..EDGES_PER_TILE {
            let Some(neighbor) = self.neighbors.neighbor(tile, direction) else {
                continue;
            };
            let Some(placed) = &self.slots[neighbor] else {
                continue;
            };
            if placed.edges[opposite(direction)] != edges[direction] {
                return Err(PlacementError::EdgeConflict { tile, direction });
            }
            touched = true;
        }
        if touched || self.is_blank() {
            Ok(())
        } else {
            Err(PlacementError::Isolated { tile })
        }
    }
}
