//! The combo data model.
//!
//! A combo is the type + color + unit description assigned to one tile.
//! The three variants carry their own fixed-arity color fields, so there
//! is nothing to length-check downstream: a `Bi` always has exactly one
//! major and one minor, a `Tri` always three distinct colors.

use crate::color::ColorId;

/// Color units every tile contributes to the global tally.
pub const UNITS_PER_TILE: u32 = 3;

/// Tile type: how many distinct colors the tile's 3 units are split over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComboKind {
    /// One color, 3 units.
    Mono,
    /// Two colors, 2 + 1 units.
    Bi,
    /// Three colors, 1 + 1 + 1 units.
    Tri,
}

/// The color/unit assignment of one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Combo {
    /// All three units on a single color.
    Mono { color: ColorId },
    /// Two units on `major`, one on `minor`; the colors are distinct.
    Bi { major: ColorId, minor: ColorId },
    /// One unit each on three distinct colors.
    Tri { colors: [ColorId; 3] },
}

impl Combo {
    /// Mono combo.
    pub const fn mono(color: ColorId) -> Self {
        Self::Mono { color }
    }

    /// Bi combo. `major` and `minor` must be distinct.
    pub fn bi(major: ColorId, minor: ColorId) -> Self {
        debug_assert_ne!(major, minor);
        Self::Bi { major, minor }
    }

    /// Tri combo. The three colors must be distinct.
    pub fn tri(colors: [ColorId; 3]) -> Self {
        debug_assert!(
            colors[0] != colors[1] && colors[1] != colors[2] && colors[0] != colors[2]
        );
        Self::Tri { colors }
    }

    /// The tile type of this combo.
    pub const fn kind(&self) -> ComboKind {
        match self {
            Self::Mono { .. } => ComboKind::Mono,
            Self::Bi { .. } => ComboKind::Bi,
            Self::Tri { .. } => ComboKind::Tri,
        }
    }

    /// Number of distinct colors (1, 2 or 3).
    pub const fn distinct_colors(&self) -> usize {
        match self {
            Self::Mono { .. } => 1,
            Self::Bi { .. } => 2,
            Self::Tri { .. } => 3,
        }
    }

    /// The combo's colors with their unit weights. Always sums to 3.
    pub fn color_units(&self) -> Vec<(ColorId, u8)> {
        match *self {
            Self::Mono { color } => vec![(color, 3)],
            Self::Bi { major, minor } => vec![(major, 2), (minor, 1)],
            Self::Tri { colors } => colors.iter().map(|&c| (c, 1)).collect(),
        }
    }

    /// Units this combo spends on the given color (0 if absent).
    pub fn units_of(&self, color: ColorId) -> u8 {
        self.color_units()
            .into_iter()
            .find(|&(c, _)| c == color)
            .map(|(_, units)| units)
            .unwrap_or(0)
    }
}

/// Integer tile counts per type. Produced by apportioning the type
/// percentage vector over the board's tile count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeQuota {
    /// Mono tile count.
    pub mono: u32,
    /// Bi tile count.
    pub bi: u32,
    /// Tri tile count.
    pub tri: u32,
}

impl TypeQuota {
    /// Create a quota from per-type counts.
    pub const fn new(mono: u32, bi: u32, tri: u32) -> Self {
        Self { mono, bi, tri }
    }

    /// Total tile count.
    pub const fn total(&self) -> u32 {
        self.mono + self.bi + self.tri
    }

    /// Total color units the quota demands: 3 per tile.
    pub const fn unit_total(&self) -> u32 {
        UNITS_PER_TILE * self.total()
    }
}

/// Per-color unit totals of a combo list.
pub fn unit_tally(combos: &[Combo], colors: usize) -> Vec<u32> {
    let mut tally = vec![0u32; colors];
    for combo in combos {
        for (color, units) in combo.color_units() {
            tally[color.index()] += units as u32;
        }
    }
    tally
}
