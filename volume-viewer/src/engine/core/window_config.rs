use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};

use super::config::WindowSettings;

pub fn create_window_config(settings: &WindowSettings) -> Window {
    Window {
        title: settings.title.clone(),
        resolution: WindowResolution::new(settings.width as f32, settings.height as f32),
        present_mode: PresentMode::AutoVsync,
        ..default()
    }
}
