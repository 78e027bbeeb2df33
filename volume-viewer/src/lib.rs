//! Interactive viewer for layered voxel scenes.
//!
//! A flat `;`/newline/`,` delimited scene file becomes a voxel grid whose
//! populated cells are drawn as billboards over a checkerboard, seen through
//! a keyboard-driven orbit camera.

pub mod engine;

pub use engine::core::error::ViewerError;
pub use engine::scene::parser::{Cell, FormatError, SceneGrid, VoxelIndex, parse_scene};
