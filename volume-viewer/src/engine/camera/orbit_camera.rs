use bevy::prelude::*;
use bevy::window::WindowResized;

use constants::camera::{
    DEFAULT_PITCH, DEFAULT_YAW, DEFAULT_ZOOM, MAX_PITCH, MAX_ZOOM, MIN_PITCH, MIN_ZOOM,
};
use constants::render_settings::{FAR_PLANE, FIELD_OF_VIEW_DEGREES, NEAR_PLANE};

use crate::engine::core::session::ViewerSession;

/// Orbit parameters in degrees and world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Horizontal angle, unbounded; wraps through the trigonometry
    pub yaw: f32,
    /// Vertical angle, kept within [MIN_PITCH, MAX_PITCH]
    pub pitch: f32,
    /// Distance from the origin, kept within [MIN_ZOOM, MAX_ZOOM]
    pub zoom: f32,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl CameraState {
    pub fn new(yaw: f32, pitch: f32, zoom: f32) -> Self {
        Self {
            yaw,
            pitch: pitch.clamp(MIN_PITCH, MAX_PITCH),
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
        }
    }

    pub fn rotate_yaw(&mut self, delta: f32) {
        self.yaw += delta;
    }

    pub fn tilt_pitch(&mut self, delta: f32) {
        self.pitch = (self.pitch + delta).clamp(MIN_PITCH, MAX_PITCH);
    }

    pub fn dolly(&mut self, delta: f32) {
        self.zoom = (self.zoom + delta).clamp(MIN_ZOOM, MAX_ZOOM);
    }
}

/// Spherical to Cartesian conversion of the orbit state.
pub fn eye_position(state: &CameraState) -> Vec3 {
    let yaw = state.yaw.to_radians();
    let pitch = state.pitch.to_radians();

    Vec3::new(
        state.zoom * yaw.sin() * pitch.cos(),
        state.zoom * pitch.sin(),
        state.zoom * yaw.cos() * pitch.cos(),
    )
}

/// Aim a quarter of the way up the stack so tall volumes stay framed.
pub fn look_target(stack_height: f32) -> Vec3 {
    Vec3::new(0.0, stack_height / 4.0, 0.0)
}

/// Viewport aspect ratio. A collapsed window height counts as one pixel.
pub fn projection_aspect(width: u32, height: u32) -> f32 {
    width as f32 / height.max(1) as f32
}

pub fn viewer_projection() -> Projection {
    Projection::Perspective(PerspectiveProjection {
        fov: FIELD_OF_VIEW_DEGREES.to_radians(),
        near: NEAR_PLANE,
        far: FAR_PLANE,
        ..default()
    })
}

#[derive(Component)]
pub struct ViewerCamera;

pub fn spawn_viewer_camera(commands: &mut Commands, session: &ViewerSession) {
    let view = session.frame_view();
    commands.spawn((
        Camera3d::default(),
        viewer_projection(),
        Transform::from_translation(view.eye).looking_at(view.target, Vec3::Y),
        ViewerCamera,
    ));
}

/// Place the camera from the session's orbit state every frame
pub fn sync_camera_transform(
    session: Res<ViewerSession>,
    mut camera_query: Query<&mut Transform, With<ViewerCamera>>,
) {
    let view = session.frame_view();
    for mut transform in &mut camera_query {
        *transform = Transform::from_translation(view.eye).looking_at(view.target, Vec3::Y);
    }
}

/// Reshape handling: keep the perspective aspect in step with the window
pub fn apply_viewport_aspect(
    mut resize_events: EventReader<WindowResized>,
    mut camera_query: Query<&mut Projection, With<ViewerCamera>>,
) {
    let Some(resized) = resize_events.read().last() else {
        return;
    };
    let aspect = projection_aspect(resized.width as u32, resized.height as u32);

    for mut projection in &mut camera_query {
        if let Projection::Perspective(perspective) = &mut *projection {
            perspective.aspect_ratio = aspect;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_eye_at_zero_angles() {
        let eye = eye_position(&CameraState::new(0.0, 0.0, 10.0));
        assert!(eye.abs_diff_eq(Vec3::new(0.0, 0.0, 10.0), EPSILON));
    }

    #[test]
    fn test_eye_distance_equals_zoom() {
        for (yaw, pitch) in [(0.0, 25.0), (137.0, -10.0), (-400.0, 80.0)] {
            let state = CameraState::new(yaw, pitch, 14.0);
            assert!((eye_position(&state).length() - 14.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_yaw_wraps_through_full_turn() {
        let a = eye_position(&CameraState::new(30.0, 25.0, 14.0));
        let b = eye_position(&CameraState::new(390.0, 25.0, 14.0));
        assert!(a.abs_diff_eq(b, EPSILON));
    }

    #[test]
    fn test_quarter_turn_yaw() {
        let eye = eye_position(&CameraState::new(90.0, 0.0, 10.0));
        assert!(eye.abs_diff_eq(Vec3::new(10.0, 0.0, 0.0), EPSILON));
    }

    #[test]
    fn test_pitch_clamp_is_idempotent() {
        let mut state = CameraState::new(0.0, MAX_PITCH, DEFAULT_ZOOM);
        for _ in 0..5 {
            state.tilt_pitch(5.0);
            assert_eq!(state.pitch, MAX_PITCH);
        }

        let mut state = CameraState::new(0.0, MIN_PITCH, DEFAULT_ZOOM);
        for _ in 0..5 {
            state.tilt_pitch(-5.0);
            assert_eq!(state.pitch, MIN_PITCH);
        }
    }

    #[test]
    fn test_zoom_clamp_is_idempotent() {
        let mut state = CameraState::new(0.0, 0.0, MIN_ZOOM);
        for _ in 0..5 {
            state.dolly(-1.0);
            assert_eq!(state.zoom, MIN_ZOOM);
        }

        let mut state = CameraState::new(0.0, 0.0, MAX_ZOOM);
        for _ in 0..5 {
            state.dolly(1.0);
            assert_eq!(state.zoom, MAX_ZOOM);
        }
    }

    #[test]
    fn test_look_target_quarter_stack() {
        assert!(look_target(4.8).abs_diff_eq(Vec3::new(0.0, 1.2, 0.0), EPSILON));
    }

    #[test]
    fn test_projection_aspect_guards_zero_height() {
        assert!((projection_aspect(1000, 500) - 2.0).abs() < EPSILON);
        assert_eq!(projection_aspect(640, 0), 640.0);
    }
}
