//! Orbit camera for volume inspection.
//!
//! Converts yaw, pitch and zoom into an eye position around the volume,
//! and keeps the Bevy camera transform in step with the session state.

/// Orbit state, eye/target geometry and the camera sync system.
pub mod orbit_camera;
