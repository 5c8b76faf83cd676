//! Hexagonal coordinate system using axial coordinates.
//!
//! Axial coordinates use two axes (q, r) at 60 degrees, with an implicit
//! third axis s = -q - r. This gives us efficient storage (2 values instead
//! of 3) while maintaining the hexagonal symmetry.

use std::ops::{Add, Neg, Sub};

/// A position on the hexagonal board plane.
///
/// Uses axial coordinates (q, r). The implicit third axis is s = -q - r,
/// so q + r + s = 0 holds for every coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexCoord {
    /// First axial coordinate
    pub q: i32,
    /// Second axial coordinate
    pub r: i32,
}

impl HexCoord {
    /// Origin of the coordinate system.
    pub const ORIGIN: Self = Self { q: 0, r: 0 };

    /// Create a new coordinate.
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Compute the implicit third axis: s = -q - r.
    pub const fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// Hexagonal distance between two coordinates.
    ///
    /// max(|dq|, |dr|, |ds|) where ds = -dq - dr.
    pub fn distance(&self, other: &Self) -> u32 {
        let dq = (self.q - other.q).unsigned_abs();
        let dr = (self.r - other.r).unsigned_abs();
        let ds = ((self.q - other.q) + (self.r - other.r)).unsigned_abs();
        dq.max(dr).max(ds)
    }

    /// Ring number: 0 = origin tile, 1 = first ring, etc.
    pub fn ring(&self) -> u32 {
        self.distance(&Self::ORIGIN)
    }

    /// The six neighbor directions, indexed 0..5.
    ///
    /// Direction `d` and direction `(d + 3) % 6` are negations of each
    /// other, so `(d + 3) % 6` is the edge a neighbor shares with us.
    pub const DIRECTIONS: [Self; 6] = [
        Self { q: 1, r: 0 },  // East
        Self { q: 1, r: -1 }, // Northeast
        Self { q: 0, r: -1 }, // Northwest
        Self { q: -1, r: 0 }, // West
        Self { q: -1, r: 1 }, // Southwest
        Self { q: 0, r: 1 },  // Southeast
    ];

    /// The neighbor one step in the given direction (0..5).
    pub fn neighbor(&self, direction: usize) -> Self {
        *self + Self::DIRECTIONS[direction % 6]
    }

    /// All six neighbors, in direction order.
    pub fn neighbors(&self) -> [Self; 6] {
        Self::DIRECTIONS.map(|d| *self + d)
    }

    /// Pixel-space center of this tile for a pointy-top hexagon with the
    /// given edge length. Shared by ring ordering and junction detection;
    /// the rendering collaborator uses its own geometry.
    pub fn pixel_center(&self, edge: f64) -> (f64, f64) {
        let sqrt3 = 3.0_f64.sqrt();
        let x = edge * sqrt3 * (self.q as f64 + self.r as f64 / 2.0);
        let y = edge * 1.5 * self.r as f64;
        (x, y)
    }
}

impl Add for HexCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            q: self.q + other.q,
            r: self.r + other.r,
        }
    }
}

impl Sub for HexCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            q: self.q - other.q,
            r: self.r - other.r,
        }
    }
}

impl Neg for HexCoord {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            q: -self.q,
            r: -self.r,
        }
    }
}

impl std::fmt::Display for HexCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}
