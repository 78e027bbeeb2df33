//! Startup loading of the scene description and billboard images.
//!
//! Runs before the Bevy app exists so that every failure is reported
//! and the process exits before a window opens.

/// Scene file reading with a synthesized fallback volume.
pub mod scene_loader;

/// Billboard image decoding into Bevy textures.
pub mod texture_loader;
