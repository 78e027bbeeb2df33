//! Voxel scene description and its presentation.
//!
//! Parses the flat scene text into a grid, maps grid indices to world space,
//! resolves billboards once at load time and spawns the board and volume.

/// Billboard kinds, classification rules and load-time placement.
pub mod billboard;

/// Index to world-space mapping shared by the board and the volume.
pub mod coordinates;

/// Checkerboard ground plane mesh centred under the volume.
pub mod ground;

/// Scene text parser producing a uniformly shaped voxel grid.
///
/// Ragged input is padded with blanks after an explicit extent pass.
pub mod parser;

/// Volume root and billboard entity spawning.
pub mod volume;
