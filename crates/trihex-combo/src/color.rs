//! Palette color indices.

/// Size of the standard palette the cascade synthesis is specialized to.
///
/// The actual color values (hex strings, swatches) belong to the rendering
/// collaborator; the engine only ever sees indices.
pub const PALETTE_COLORS: usize = 4;

/// An opaque index into the ordered palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorId(pub u8);

impl ColorId {
    /// Create from a raw palette index.
    #[inline]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// The raw palette index as a usize, for array addressing.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u8> for ColorId {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for ColorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "c{}", self.0)
    }
}
