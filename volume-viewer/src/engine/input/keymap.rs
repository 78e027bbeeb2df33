use bevy::input::ButtonState;
use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::prelude::*;
use bevy::window::RequestRedraw;

use constants::camera::{PITCH_STEP, YAW_STEP, ZOOM_STEP};

use crate::engine::camera::orbit_camera::CameraState;
use crate::engine::core::session::ViewerSession;

/// Keys the viewer reacts to. Anything else is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerKey {
    YawLeft,
    YawRight,
    PitchUp,
    PitchDown,
    ZoomIn,
    ZoomOut,
    Quit,
}

impl ViewerKey {
    /// Letters match in either case.
    pub fn from_character(character: &str) -> Option<Self> {
        match character.to_ascii_lowercase().as_str() {
            "a" => Some(ViewerKey::YawLeft),
            "d" => Some(ViewerKey::YawRight),
            "w" => Some(ViewerKey::PitchUp),
            "s" => Some(ViewerKey::PitchDown),
            "+" => Some(ViewerKey::ZoomIn),
            "-" => Some(ViewerKey::ZoomOut),
            _ => None,
        }
    }

    pub fn from_logical(key: &Key) -> Option<Self> {
        match key {
            Key::Escape => Some(ViewerKey::Quit),
            Key::Character(character) => Self::from_character(character),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Redraw,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyResponse {
    pub state: CameraState,
    pub outcome: KeyOutcome,
}

/// Camera state after one key press.
pub fn apply_key(state: CameraState, key: ViewerKey) -> KeyResponse {
    let mut next = state;
    let outcome = match key {
        ViewerKey::YawLeft => {
            next.rotate_yaw(-YAW_STEP);
            KeyOutcome::Redraw
        }
        ViewerKey::YawRight => {
            next.rotate_yaw(YAW_STEP);
            KeyOutcome::Redraw
        }
        ViewerKey::PitchUp => {
            next.tilt_pitch(PITCH_STEP);
            KeyOutcome::Redraw
        }
        ViewerKey::PitchDown => {
            next.tilt_pitch(-PITCH_STEP);
            KeyOutcome::Redraw
        }
        ViewerKey::ZoomIn => {
            next.dolly(-ZOOM_STEP);
            KeyOutcome::Redraw
        }
        ViewerKey::ZoomOut => {
            next.dolly(ZOOM_STEP);
            KeyOutcome::Redraw
        }
        ViewerKey::Quit => KeyOutcome::Quit,
    };

    KeyResponse {
        state: next,
        outcome,
    }
}

/// Apply pressed (and auto-repeated) keys to the session
pub fn handle_viewer_keys(
    mut keyboard_events: EventReader<KeyboardInput>,
    mut session: ResMut<ViewerSession>,
    mut redraw: EventWriter<RequestRedraw>,
    mut exit: EventWriter<AppExit>,
) {
    for event in keyboard_events.read() {
        if event.state != ButtonState::Pressed {
            continue;
        }
        let Some(key) = ViewerKey::from_logical(&event.logical_key) else {
            continue;
        };

        match session.handle_key(key) {
            KeyOutcome::Redraw => {
                redraw.write(RequestRedraw);
            }
            KeyOutcome::Quit => {
                info!("→ Quit key pressed, closing viewer");
                exit.write(AppExit::Success);
            }
        }
    }
}
