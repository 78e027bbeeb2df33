//! Runtime systems that are not part of the camera or scene.

/// On-screen FPS and camera readout.
pub mod status_overlay;
