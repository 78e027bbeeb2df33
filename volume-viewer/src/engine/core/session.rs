use bevy::prelude::*;

use crate::engine::camera::orbit_camera::{CameraState, eye_position, look_target};
use crate::engine::input::keymap::{KeyOutcome, ViewerKey, apply_key};
use crate::engine::scene::billboard::{BillboardPlacement, BillboardRule, resolve_placements};
use crate::engine::scene::coordinates::GridGeometry;
use crate::engine::scene::parser::SceneGrid;

/// Everything one frame needs: where the eye is, what it looks at, what to draw.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub eye: Vec3,
    pub target: Vec3,
    pub billboards: &'a [BillboardPlacement],
}

/// Application state built once at startup and shared with every system.
#[derive(Resource, Debug, Clone)]
pub struct ViewerSession {
    camera: CameraState,
    geometry: GridGeometry,
    target: Vec3,
    placements: Vec<BillboardPlacement>,
}

impl ViewerSession {
    pub fn new(grid: &SceneGrid, geometry: GridGeometry, rule: &dyn BillboardRule) -> Self {
        Self {
            camera: CameraState::default(),
            geometry,
            target: look_target(geometry.stack_height(grid.layers())),
            placements: resolve_placements(grid, &geometry, rule),
        }
    }

    pub fn camera(&self) -> CameraState {
        self.camera
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    pub fn placements(&self) -> &[BillboardPlacement] {
        &self.placements
    }

    /// The only place camera state changes.
    pub fn handle_key(&mut self, key: ViewerKey) -> KeyOutcome {
        let response = apply_key(self.camera, key);
        self.camera = response.state;
        response.outcome
    }

    pub fn frame_view(&self) -> FrameView<'_> {
        FrameView {
            eye: eye_position(&self.camera),
            target: self.target,
            billboards: &self.placements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::scene::billboard::FrontRowRule;

    #[test]
    fn test_session_resolves_every_occupied_cell() {
        let grid = SceneGrid::filled(8, 8, 8, "x");
        let session = ViewerSession::new(&grid, GridGeometry::default(), &FrontRowRule);

        assert_eq!(session.placements().len(), 512);
        assert!((session.frame_view().target.y - 1.2).abs() < 1e-5);
    }

    #[test]
    fn test_keys_move_the_eye() {
        let grid: SceneGrid = "x".parse().unwrap();
        let mut session = ViewerSession::new(&grid, GridGeometry::default(), &FrontRowRule);
        let before = session.frame_view().eye;

        assert_eq!(session.handle_key(ViewerKey::YawRight), KeyOutcome::Redraw);
        let after = session.frame_view().eye;

        assert!((before.length() - after.length()).abs() < 1e-4);
        assert!(before.distance(after) > 0.1);
    }
}
