use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;

use crate::engine::camera::orbit_camera::CameraState;
use crate::engine::core::session::ViewerSession;

#[derive(Component)]
pub struct StatusText;

const KEY_HELP: &str = "A/D yaw  W/S pitch  +/- zoom  Esc quit";

pub fn format_status(camera: &CameraState, fps: Option<f64>) -> String {
    let fps = fps.map_or_else(|| "--".to_string(), |value| format!("{value:.1}"));
    format!(
        "FPS: {fps}\nyaw {:.0}  pitch {:.0}  zoom {:.0}\n{KEY_HELP}",
        camera.yaw, camera.pitch, camera.zoom
    )
}

pub fn spawn_status_overlay(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new(format_status(&CameraState::default(), None)),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.1, 0.1, 0.1)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                StatusText,
            ));
        });
}

pub fn status_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    session: Res<ViewerSession>,
    mut query: Query<&mut Text, With<StatusText>>,
) {
    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps| fps.smoothed());

    for mut text in &mut query {
        text.0 = format_status(&session.camera(), fps);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_without_fps_sample() {
        let status = format_status(&CameraState::default(), None);
        assert!(status.starts_with("FPS: --"));
        assert!(status.contains("yaw 0  pitch 25  zoom 14"));
    }

    #[test]
    fn test_status_with_fps_sample() {
        let status = format_status(&CameraState::new(-16.0, 30.0, 9.0), Some(59.94));
        assert!(status.starts_with("FPS: 59.9"));
        assert!(status.contains("yaw -16  pitch 30  zoom 9"));
    }
}
