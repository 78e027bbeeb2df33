//! Core application setup and state management.
//!
//! Handles startup loading, configuration, the viewer session resource,
//! the host-agnostic frame loop and Bevy app construction.

/// Startup preparation and Bevy app construction.
///
/// Loads configuration, scene and images, then builds the app with
/// the input, camera and overlay systems.
pub mod app_setup;

/// Optional JSON configuration layered over the shared constants.
pub mod config;

/// Startup error taxonomy.
pub mod error;

/// Poll, update, present loop over an injected window host.
pub mod frame_loop;

/// Application state value shared with every system.
pub mod session;

/// Window title, size and present mode.
pub mod window_config;
