/// Host-agnostic poll, update, present loop
use crate::engine::input::keymap::{KeyOutcome, ViewerKey};

use super::session::{FrameView, ViewerSession};

/// Window side of the loop: supplies input and shows finished frames.
pub trait FrameHost {
    /// Keys pressed since the last frame, or `None` once the window has closed.
    fn poll(&mut self) -> Option<Vec<ViewerKey>>;

    fn present(&mut self, frame: &FrameView<'_>);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    QuitKey,
    HostClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopSummary {
    pub exit: LoopExit,
    pub frames_presented: u64,
}

/// Drive the session until the quit key or the host closes.
///
/// Frames are presented every iteration whether or not input arrived,
/// matching an idle-redraw window loop.
pub fn run_frame_loop(session: &mut ViewerSession, host: &mut impl FrameHost) -> LoopSummary {
    let mut frames_presented = 0;

    loop {
        let Some(keys) = host.poll() else {
            return LoopSummary {
                exit: LoopExit::HostClosed,
                frames_presented,
            };
        };

        for key in keys {
            if session.handle_key(key) == KeyOutcome::Quit {
                return LoopSummary {
                    exit: LoopExit::QuitKey,
                    frames_presented,
                };
            }
        }

        host.present(&session.frame_view());
        frames_presented += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::scene::billboard::FrontRowRule;
    use crate::engine::scene::coordinates::GridGeometry;
    use crate::engine::scene::parser::SceneGrid;
    use bevy::math::Vec3;
    use std::collections::VecDeque;

    struct ScriptedHost {
        script: VecDeque<Vec<ViewerKey>>,
        eyes: Vec<Vec3>,
        billboard_counts: Vec<usize>,
    }

    impl ScriptedHost {
        fn new(script: Vec<Vec<ViewerKey>>) -> Self {
            Self {
                script: script.into(),
                eyes: Vec::new(),
                billboard_counts: Vec::new(),
            }
        }
    }

    impl FrameHost for ScriptedHost {
        fn poll(&mut self) -> Option<Vec<ViewerKey>> {
            self.script.pop_front()
        }

        fn present(&mut self, frame: &FrameView<'_>) {
            self.eyes.push(frame.eye);
            self.billboard_counts.push(frame.billboards.len());
        }
    }

    fn session() -> ViewerSession {
        let grid: SceneGrid = "a,b\nc, ".parse().unwrap();
        ViewerSession::new(&grid, GridGeometry::default(), &FrontRowRule)
    }

    #[test]
    fn test_quit_key_stops_before_presenting() {
        let mut session = session();
        let mut host = ScriptedHost::new(vec![vec![], vec![ViewerKey::YawLeft, ViewerKey::Quit]]);

        let summary = run_frame_loop(&mut session, &mut host);

        assert_eq!(summary.exit, LoopExit::QuitKey);
        assert_eq!(summary.frames_presented, 1);
        assert_eq!(session.camera().yaw, -8.0);
    }

    #[test]
    fn test_idle_frames_are_presented() {
        let mut session = session();
        let mut host = ScriptedHost::new(vec![vec![], vec![], vec![]]);

        let summary = run_frame_loop(&mut session, &mut host);

        assert_eq!(summary.exit, LoopExit::HostClosed);
        assert_eq!(summary.frames_presented, 3);
        assert_eq!(host.billboard_counts, vec![3, 3, 3]);
        assert!(host.eyes.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn test_input_changes_next_frame() {
        let mut session = session();
        let mut host = ScriptedHost::new(vec![vec![], vec![ViewerKey::ZoomIn, ViewerKey::ZoomIn]]);

        run_frame_loop(&mut session, &mut host);

        assert!((host.eyes[0].length() - 14.0).abs() < 1e-4);
        assert!((host.eyes[1].length() - 12.0).abs() < 1e-4);
    }
}
