//! Layout configuration.
//!
//! Percentages follow the input convention of the configuration UI: each
//! vector sums to 100. Validation happens before any board work; a bad
//! vector never produces a partial board.

use thiserror::Error;

use trihex_apportion::largest_remainder;
use trihex_combo::{TypeQuota, PALETTE_COLORS, UNITS_PER_TILE};

/// Tolerance when checking that a percentage vector sums to 100.
const PERCENT_EPSILON: f64 = 1e-6;

/// Errors in a layout configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// A percentage vector does not sum to 100.
    #[error("{which} percentages sum to {sum}, expected 100")]
    PercentageSum { which: &'static str, sum: f64 },

    /// A percentage entry is negative.
    #[error("{which} percentage at index {index} is negative ({value})")]
    NegativePercentage {
        which: &'static str,
        index: usize,
        value: f64,
    },
}

/// Everything needed to generate one board layout.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConfig {
    /// Board radius; the board has `3r(r+1) + 1` tiles.
    pub radius: u32,
    /// Percentage of mono, bi and tri tiles, summing to 100.
    pub type_percentages: [f64; 3],
    /// Percentage of color units per palette color, summing to 100.
    pub color_percentages: [f64; PALETTE_COLORS],
    /// Edge length used for ring ordering and junction snapping.
    pub edge_size: f64,
    /// Seed for the deterministic random stream.
    pub seed: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            radius: 4,
            type_percentages: [50.0, 30.0, 20.0],
            color_percentages: [25.0; PALETTE_COLORS],
            edge_size: 10.0,
            seed: 0,
        }
    }
}

impl LayoutConfig {
    /// Check the percentage-input convention.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_vector("type", &self.type_percentages)?;
        check_vector("color", &self.color_percentages)?;
        Ok(())
    }

    /// Number of tiles this configuration's board will have.
    pub fn tile_count(&self) -> usize {
        trihex_topology::tile_count(self.radius)
    }

    /// Apportion the percentage vectors into exact integer quotas for a
    /// board of `tiles` tiles: type counts over `tiles`, color units over
    /// `3 * tiles`.
    pub fn quotas(
        &self,
        tiles: u32,
    ) -> Result<(TypeQuota, [u32; PALETTE_COLORS]), trihex_apportion::ApportionError> {
        let types = largest_remainder(tiles, &self.type_percentages)?;
        let units = largest_remainder(UNITS_PER_TILE * tiles, &self.color_percentages)?;

        let mut unit_quota = [0u32; PALETTE_COLORS];
        unit_quota.copy_from_slice(&units);
        Ok((TypeQuota::new(types[0], types[1], types[2]), unit_quota))
    }
}

fn check_vector(which: &'static str, percentages: &[f64]) -> Result<(), ConfigError> {
    for (index, &value) in percentages.iter().enumerate() {
        if value < 0.0 {
            return Err(ConfigError::NegativePercentage {
                which,
                index,
                value,
            });
        }
    }
    let sum: f64 = percentages.iter().sum();
    if (sum - 100.0).abs() > PERCENT_EPSILON {
        return Err(ConfigError::PercentageSum { which, sum });
    }
    Ok(())
}
