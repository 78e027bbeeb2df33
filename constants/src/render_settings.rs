use bevy::color::Color;

/// Vertical field of view in degrees
pub const FIELD_OF_VIEW_DEGREES: f32 = 45.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 100.0;

pub const WINDOW_WIDTH: u32 = 1000;
pub const WINDOW_HEIGHT: u32 = 720;
pub const WINDOW_TITLE: &str = "Volume 3D com imagens (drone/caveira)";

pub const CLEAR_COLOUR: Color = Color::srgb(1.0, 1.0, 0.0);
pub const CHECKER_LIGHT: Color = Color::srgb(0.9, 0.9, 0.9);
pub const CHECKER_DARK: Color = Color::srgb(1.0, 1.0, 0.2);

pub const LIGHT_POSITION: [f32; 3] = [4.0, 10.0, 6.0];
pub const LIGHT_INTENSITY: f32 = 2_000_000.0;
pub const LIGHT_RANGE: f32 = 60.0;
