//! Orientation and edge expansion.
//!
//! A combo is abstract; a placement shows six concrete edge colors. The
//! base patterns put each color on a contiguous arc (mono 360°, bi
//! 240°/120°, tri 120°×3), and a rotation step turns the pattern in 120°
//! increments. The underlying patterns repeat with 3-fold symmetry, so
//! rotation is only ever exposed at 2-edge granularity; a 1-edge rotation
//! would split the arcs and has no major/minor reading.

use crate::color::ColorId;
use crate::combo::{Combo, ComboKind};

/// One color per hex edge direction (0..5).
pub type EdgeColors = [ColorId; 6];

/// Edge positions per rotation step: steps are 120°, edges 60°.
pub const ROTATION_EDGE_STEP: u8 = 2;

/// Cyclic rotation of an edge sequence by `steps` edge positions.
pub fn rotate(edges: EdgeColors, steps: usize) -> EdgeColors {
    let mut out = edges;
    for (i, &color) in edges.iter().enumerate() {
        out[(i + steps) % 6] = color;
    }
    out
}

impl Combo {
    /// The base (rotation 0) edge colors of this combo.
    ///
    /// Mono fills all six edges; bi shows four major edges then two minor
    /// edges; tri shows three two-edge arcs in color order.
    pub fn edges(&self) -> EdgeColors {
        match *self {
            Self::Mono { color } => [color; 6],
            Self::Bi { major, minor } => [major, major, major, major, minor, minor],
            Self::Tri { colors: [a, b, c] } => [a, a, b, b, c, c],
        }
    }

    /// Valid rotation steps for this combo's kind.
    ///
    /// A mono tile looks the same under any rotation, so only step 0 is
    /// exposed; bi and tri repeat after three 120° steps.
    pub fn rotation_steps(&self) -> &'static [u8] {
        match self.kind() {
            ComboKind::Mono => &[0],
            ComboKind::Bi | ComboKind::Tri => &[0, 1, 2],
        }
    }

    /// Edge colors under the given rotation step (120° increments).
    pub fn oriented_edges(&self, step: u8) -> EdgeColors {
        rotate(self.edges(), step as usize * ROTATION_EDGE_STEP as usize)
    }
}
