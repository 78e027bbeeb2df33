use std::collections::VecDeque;

use bevy::math::Vec3;

use volume_viewer::engine::core::config::ViewerConfig;
use volume_viewer::engine::core::frame_loop::{FrameHost, LoopExit, run_frame_loop};
use volume_viewer::engine::core::session::{FrameView, ViewerSession};
use volume_viewer::engine::input::keymap::ViewerKey;
use volume_viewer::engine::scene::billboard::BillboardKind;
use volume_viewer::{Cell, SceneGrid, VoxelIndex};

struct RecordingHost {
    script: VecDeque<Vec<ViewerKey>>,
    frames: Vec<(Vec3, Vec<BillboardKind>)>,
}

impl FrameHost for RecordingHost {
    fn poll(&mut self) -> Option<Vec<ViewerKey>> {
        self.script.pop_front()
    }

    fn present(&mut self, frame: &FrameView<'_>) {
        let kinds = frame.billboards.iter().map(|b| b.kind).collect();
        self.frames.push((frame.eye, kinds));
    }
}

#[test]
fn test_scene_text_drives_frames() {
    let grid: SceneGrid = "s,d\nd, ;\n ,s\nd,d".parse().unwrap();
    assert_eq!(grid.get(VoxelIndex::new(0, 1, 1)), Some(&Cell::Blank));

    let config = ViewerConfig::default();
    let rule = config.billboard_rule.build();
    let mut session = ViewerSession::new(&grid, config.geometry, rule.as_ref());

    let mut host = RecordingHost {
        script: VecDeque::from(vec![
            vec![],
            vec![ViewerKey::PitchDown; 10],
            vec![ViewerKey::Quit],
        ]),
        frames: Vec::new(),
    };

    let summary = run_frame_loop(&mut session, &mut host);

    assert_eq!(summary.exit, LoopExit::QuitKey);
    assert_eq!(host.frames.len(), 2);

    let (_, kinds) = &host.frames[0];
    assert_eq!(
        kinds,
        &vec![
            BillboardKind::Skull,
            BillboardKind::Skull,
            BillboardKind::Drone,
            BillboardKind::Skull,
            BillboardKind::Drone,
            BillboardKind::Drone,
        ]
    );

    // Pitch bottoms out at -10 degrees, so the eye dips just below the origin plane
    let (eye, _) = host.frames[1];
    assert!(eye.y < 0.0);
    assert!((eye.y - 14.0 * (-10.0f32).to_radians().sin()).abs() < 1e-4);
}

#[test]
fn test_label_rule_config_uses_cell_labels() {
    let config = ViewerConfig::from_json(
        r#"{ "billboard_rule": { "kind": "label", "labels": { "s": "skull", "d": "drone" } } }"#,
    )
    .unwrap();
    let grid: SceneGrid = "d,s\ns,?".parse().unwrap();
    let rule = config.billboard_rule.build();
    let session = ViewerSession::new(&grid, config.geometry, rule.as_ref());

    let kinds: Vec<BillboardKind> = session.placements().iter().map(|p| p.kind).collect();
    assert_eq!(
        kinds,
        vec![
            BillboardKind::Drone,
            BillboardKind::Skull,
            BillboardKind::Skull,
            BillboardKind::Drone,
        ]
    );
}
