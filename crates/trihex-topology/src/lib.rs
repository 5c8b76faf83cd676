//! Trihex Board Topology
//!
//! Hexagonal board topology for the Trihex layout engine.
//!
//! # Coordinate Model
//!
//! Tiles live on an axial hexagonal grid. A board of radius `r` contains
//! every coordinate with `max(|q|, |r|, |s|) <= r`, which is exactly
//! `3r(r+1) + 1` tiles. Enumeration order is deterministic and downstream
//! code relies on the resulting stable index assignment.
//!
//! # Derived Structures
//!
//! From the tile list this crate derives, once per board size:
//! - the neighbor table (6 directed neighbors per tile, `None` off-board),
//! - ring buckets ordered by polar angle (outward auto-fill order),
//! - junctions (board vertices shared by exactly 3 tiles).
//!
//! All of it is static data: computed once, never mutated afterwards.

mod grid;
mod hex;
mod junction;
mod rings;

pub use grid::{HexGrid, NeighborTable};
pub use hex::HexCoord;
pub use junction::{compute_junctions, Junction};
pub use rings::classify_rings;

/// Edges (and directed neighbors) per tile.
pub const EDGES_PER_TILE: usize = 6;

/// Number of tiles in a board of the given radius: `3r(r+1) + 1`.
pub const fn tile_count(radius: u32) -> usize {
    (3 * radius * (radius + 1) + 1) as usize
}

/// Opposite edge direction: the edge a neighbor sees us across.
#[inline]
pub const fn opposite(direction: usize) -> usize {
    (direction + 3) % EDGES_PER_TILE
}

// Compile-time assertion that each direction's opposite is its negation.
const _: () = {
    let mut d = 0;
    while d < EDGES_PER_TILE {
        let a = HexCoord::DIRECTIONS[d];
        let b = HexCoord::DIRECTIONS[opposite(d)];
        assert!(a.q + b.q == 0 && a.r + b.r == 0);
        d += 1;
    }
};
