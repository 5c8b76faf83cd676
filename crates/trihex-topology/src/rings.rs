//! Ring classification for outward auto-fill.
//!
//! Tiles are bucketed by hex distance from the origin and each bucket is
//! sorted by the polar angle of the tile's pixel-space center. The angular
//! ordering keeps automated fills visually stable; nothing downstream
//! depends on it for correctness.

use crate::HexGrid;

/// Bucket tile indices by ring, each ring ordered by polar angle.
///
/// Bucket 0 holds only the origin tile; bucket `n` holds the `6n` tiles at
/// hex distance `n`, sorted by `atan2` of their centers.
pub fn classify_rings(grid: &HexGrid, edge: f64) -> Vec<Vec<usize>> {
    let mut buckets: Vec<Vec<usize>> = vec![Vec::new(); grid.radius() as usize + 1];
    for (i, coord) in grid.tiles().iter().enumerate() {
        buckets[coord.ring() as usize].push(i);
    }

    for bucket in &mut buckets {
        bucket.sort_by(|&a, &b| {
            let (ax, ay) = grid.coord(a).pixel_center(edge);
            let (bx, by) = grid.coord(b).pixel_center(edge);
            ay.atan2(ax).total_cmp(&by.atan2(bx))
        });
    }

    buckets
}
