//! The deterministic full-layout pipeline.
//!
//! Ties the static topology, the apportioned quotas and the combo
//! synthesis together into one per-tile assignment. Random choices all
//! flow through one seeded stream in a fixed consumption order (the
//! synthesis draws, one shuffle of the combo list, then one rotation draw
//! per tile), so equal seeds give bit-identical layouts.

use thiserror::Error;
use tracing::debug;

use trihex_combo::{
    shuffle, synthesize_cascade, SynthesisError, TypeQuota, UnitRng, XorShift32, PALETTE_COLORS,
};
use trihex_topology::{classify_rings, compute_junctions, HexGrid, Junction, NeighborTable};

use crate::board::Placement;
use crate::config::{ConfigError, LayoutConfig};

/// Errors while generating a layout.
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    /// The configuration failed validation.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// A percentage vector could not be apportioned.
    #[error("apportionment failed: {0}")]
    Apportion(#[from] trihex_apportion::ApportionError),

    /// Combo synthesis failed for the derived quotas.
    #[error("synthesis failed: {0}")]
    Synthesis(#[from] SynthesisError),
}

/// One generated board layout: static topology plus a placement per tile.
#[derive(Debug, Clone)]
pub struct Layout {
    /// The tile set.
    pub grid: HexGrid,
    /// Neighbor lookup for the grid.
    pub neighbors: NeighborTable,
    /// Ring buckets in angular order; concatenated, they give the
    /// placement order below.
    pub rings: Vec<Vec<usize>>,
    /// All 3-tile junctions of the grid.
    pub junctions: Vec<Junction>,
    /// Tile counts per type.
    pub quota: TypeQuota,
    /// Color units per palette color.
    pub unit_quota: [u32; PALETTE_COLORS],
    /// One placement per tile, in ring-major angular order.
    pub placements: Vec<Placement>,
}

/// Generate a complete layout from a validated configuration.
pub fn generate_layout(config: &LayoutConfig) -> Result<Layout, LayoutError> {
    config.validate()?;

    let grid = HexGrid::generate(config.radius);
    let neighbors = NeighborTable::build(&grid);
    let rings = classify_rings(&grid, config.edge_size);
    let junctions = compute_junctions(&grid, config.edge_size);

    let (quota, unit_quota) = config.quotas(grid.len() as u32)?;
    debug!(?quota, ?unit_quota, tiles = grid.len(), "quotas derived");

    let mut rng = XorShift32::seed(config.seed);
    let mut combos = synthesize_cascade(&quota, &unit_quota, &mut rng)?;

    // Synthesis groups combos by type; one shuffle decouples tile
    // position from that grouping.
    shuffle(&mut combos, &mut rng);

    let order: Vec<usize> = rings.iter().flatten().copied().collect();
    debug_assert_eq!(order.len(), combos.len());

    // One rotation draw per tile, mono included, so the stream position
    // never depends on which combo landed where.
    let placements = order
        .iter()
        .zip(combos)
        .map(|(&tile, combo)| {
            let steps = combo.rotation_steps();
            let pick = ((rng.next_unit() * steps.len() as f64) as usize).min(steps.len() - 1);
            Placement::new(tile, combo, steps[pick])
        })
        .collect();

    Ok(Layout {
        grid,
        neighbors,
        rings,
        junctions,
        quota,
        unit_quota,
        placements,
    })
}
