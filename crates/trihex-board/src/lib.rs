//! Trihex Board State
//!
//! The live board: which tiles carry which placements, which are empty,
//! and the rule that decides whether a candidate placement is acceptable.
//!
//! # Placement Rule
//!
//! A placement is acceptable when the tile is empty, every occupied
//! neighbor shows the same color across the shared edge, and the tile
//! touches at least one occupied neighbor, except on a completely empty
//! board, where the very first tile may go anywhere. The rule is a hard
//! constraint: a board filled through gated commits is edge-consistent by
//! construction, with no global repair step.
//!
//! # Ownership
//!
//! The board is an explicit value owned by the calling collaborator.
//! [`Board::can_place`] is a pure read; mutation happens only through
//! [`Board::commit`] and [`Board::remove`].
//!
//! The crate also hosts the layout configuration and the deterministic
//! full-board pipeline ([`generate_layout`]) that ties topology,
//! apportionment and synthesis together.

mod board;
mod config;
mod layout;

pub use board::{Board, Placement, PlacementError};
pub use config::{ConfigError, LayoutConfig};
pub use layout::{generate_layout, Layout, LayoutError};
