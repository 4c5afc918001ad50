//! CubeMaster: cube state model, move engine and cubie resolver
//!
//! The facelet state (54 sticker colors) is the single source of truth.
//! The move engine rewrites it in place, one quarter turn at a time, and the
//! cubie resolver projects it into a piece-centric view for renderers.

pub mod core;
pub mod types;

pub use types::{CubeError, Result};

// =============================================================================
// GEOMETRY [C]
// =============================================================================

/// Number of faces on the cube
pub const FACE_COUNT: usize = 6;

/// Stickers per face (3x3)
pub const STICKERS_PER_FACE: usize = 9;

/// Total stickers on the cube
pub const FACELET_COUNT: usize = FACE_COUNT * STICKERS_PER_FACE;

/// Index of the center sticker within a face
pub const CENTER_INDEX: usize = 4;

/// Corner slots
pub const CORNER_COUNT: usize = 8;

/// Edge slots
pub const EDGE_COUNT: usize = 12;

// =============================================================================
// DEFAULTS
// =============================================================================

/// Default address for `--serve`
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Default directory for saved states
pub const DEFAULT_STATE_DIR: &str = "./cube_states";

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
