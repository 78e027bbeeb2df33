/// Initial horizontal orbit angle in degrees
pub const DEFAULT_YAW: f32 = 0.0;

/// Initial vertical orbit angle in degrees
pub const DEFAULT_PITCH: f32 = 25.0;

/// Initial distance from the origin
pub const DEFAULT_ZOOM: f32 = 14.0;

/// Pitch limits keep the up vector away from the view direction
pub const MIN_PITCH: f32 = -10.0;
pub const MAX_PITCH: f32 = 80.0;

/// Zoom limits keep the volume between the near plane and the far horizon
pub const MIN_ZOOM: f32 = 4.0;
pub const MAX_ZOOM: f32 = 40.0;

pub const YAW_STEP: f32 = 8.0;
pub const PITCH_STEP: f32 = 5.0;
pub const ZOOM_STEP: f32 = 1.0;
