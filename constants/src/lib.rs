//! Shared constants for the volume viewer workspace.
//!
//! Grid geometry, camera defaults and limits, render settings and the
//! default file locations used at startup.

/// Orbit camera defaults, clamps and per-key steps.
pub mod camera;

/// Voxel grid geometry: footprint, cell size, layer spacing.
pub mod grid;

/// Default locations of the scene, configuration and billboard images.
pub mod path;

/// Projection, window and colour settings.
pub mod render_settings;
