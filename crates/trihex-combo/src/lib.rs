//! Trihex Combo Synthesis
//!
//! Every tile of a Trihex board carries a **combo**: three abstract color
//! units split among 1-3 palette colors. A mono tile spends all 3 units on
//! one color, a bi tile splits 2+1 across two colors, a tri tile 1+1+1
//! across three. This crate turns integer tile-type quotas and per-color
//! unit quotas into one concrete combo per tile, consuming both quotas
//! exactly, and expands combos into the 6 per-edge colors a placement
//! shows to its neighbors.
//!
//! # Synthesis Strategies
//!
//! Two strategies solve the same assignment problem:
//!
//! - [`synthesize_cascade`]: specialized to the 4-color palette; three
//!   sequential capped apportionments (mono, bi-major, bi-minor) followed
//!   by greedy tri picks. This is the load-bearing path for full-board
//!   generation.
//! - [`synthesize_backtracking`]: general over any palette size; bounded
//!   depth-first search with weighted candidate sampling. Retained as the
//!   reference algorithm and equivalence-tested against the cascade.
//!
//! # Determinism
//!
//! All randomness flows through the [`UnitRng`] stream supplied by the
//! caller. The number and order of draws is part of the contract: equal
//! seeds produce bit-identical combo sequences.

mod backtrack;
mod cascade;
mod color;
mod combo;
mod edges;
mod rng;

pub use backtrack::synthesize_backtracking;
pub use cascade::synthesize_cascade;
pub use color::{ColorId, PALETTE_COLORS};
pub use combo::{unit_tally, Combo, ComboKind, TypeQuota, UNITS_PER_TILE};
pub use edges::{rotate, EdgeColors, ROTATION_EDGE_STEP};
pub use rng::{shuffle, UnitRng, XorShift32};

use thiserror::Error;

/// Result type for synthesis operations.
pub type Result<T> = std::result::Result<T, SynthesisError>;

/// Errors that can occur while synthesizing a combo set.
///
/// All of these are terminal for the given configuration; the caller must
/// not retry with the same inputs.
#[derive(Debug, Error, PartialEq)]
pub enum SynthesisError {
    /// A capped apportionment stage could not satisfy its ceilings.
    #[error("apportionment infeasible: {0}")]
    Apportion(#[from] trihex_apportion::ApportionError),

    /// The unit quota does not sum to 3 units per tile.
    #[error("unit quota sums to {actual}, expected {expected}")]
    UnitMismatch { expected: u32, actual: u32 },

    /// The tri-unit pool cannot cover three distinct colors.
    #[error("tri pool cannot cover 3 distinct colors")]
    TriColorsUnavailable,

    /// Bi-tile pairing kept colliding major against minor.
    #[error("major/minor pairs still collide after {attempts} reshuffles")]
    PairingExhausted { attempts: u32 },

    /// The backtracking search exhausted its global budget.
    #[error("backtracking budget of {limit} exhausted")]
    BacktrackLimit { limit: u32 },

    /// The backtracking search ran out of candidates everywhere.
    #[error("no feasible assignment for the given quotas")]
    SearchExhausted,

    /// The palette is too small for the requested tile types.
    #[error("palette has {colors} colors, need at least {needed}")]
    PaletteTooSmall { colors: usize, needed: usize },
}
