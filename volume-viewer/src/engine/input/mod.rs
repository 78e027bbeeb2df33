//! Keyboard input for the orbit camera.

/// Key to camera-state mapping and the keyboard system.
pub mod keymap;
