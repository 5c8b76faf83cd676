//! Junction detection.
//!
//! A junction is a board vertex shared by exactly three tiles. Corner
//! positions are computed in pixel space, snapped to a fixed precision,
//! and grouped; groups with at least three distinct incident tiles are
//! the junctions. Boundary vertices collect fewer incidences and drop out.
//!
//! Corner parity is preserved across the three tiles meeting at a vertex
//! (a vertex that is an even-numbered corner of one tile is an
//! even-numbered corner of all three), so scanning only alternating
//! corners would find half the junctions. All six corners are scanned.

use std::collections::BTreeMap;

use crate::HexGrid;

/// Snap step for grouping corner positions, as a fraction of edge length.
const SNAP: f64 = 1e-3;

/// A board vertex shared by exactly three tiles.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Junction {
    /// Pixel-space position of the vertex.
    pub position: (f64, f64),
    /// The three incident tile indices, ascending.
    pub tiles: [usize; 3],
}

/// Detect all junctions of a grid, for pointy-top tiles of the given edge
/// length. Output order is deterministic (sorted by snapped position).
pub fn compute_junctions(grid: &HexGrid, edge: f64) -> Vec<Junction> {
    let snap = edge * SNAP;
    let mut groups: BTreeMap<(i64, i64), Vec<usize>> = BTreeMap::new();

    for (tile, coord) in grid.tiles().iter().enumerate() {
        let (cx, cy) = coord.pixel_center(edge);
        for corner in 0..6 {
            // Pointy-top corners sit at 60k + 30 degrees.
            let angle = (60.0 * corner as f64 + 30.0).to_radians();
            let x = cx + edge * angle.cos();
            let y = cy + edge * angle.sin();
            let key = ((x / snap).round() as i64, (y / snap).round() as i64);
            groups.entry(key).or_default().push(tile);
        }
    }

    groups
        .into_iter()
        .filter_map(|(key, mut tiles)| {
            tiles.sort_unstable();
            tiles.dedup();
            if tiles.len() < 3 {
                return None;
            }
            debug_assert_eq!(tiles.len(), 3);
            Some(Junction {
                position: (key.0 as f64 * snap, key.1 as f64 * snap),
                tiles: [tiles[0], tiles[1], tiles[2]],
            })
        })
        .collect()
}
