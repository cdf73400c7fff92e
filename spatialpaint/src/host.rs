//! The frame loop: drains UI requests, snapshots parameters, and feeds each tracking frame to the session.

use spatialpaint_core::{
    params::{DrawParams, SharedParams},
    scene::{graph::NodeID, PrimitiveKind},
    session::{DrawingSession, EmptyUndo},
};

use crate::{
    graph::LoggingSceneGraph, requests::UiRequest, script::Script, tracking::TrackingEvent,
};

/// Outcome of playing one script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub frames: u64,
    pub boxes: usize,
    pub segments: usize,
    pub undo_depth: usize,
    /// Nodes the scene graph still holds. Always `boxes + segments`.
    pub live_nodes: usize,
}
impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} frames, {} boxes, {} segments, {} undoable gestures",
            self.frames, self.boxes, self.segments, self.undo_depth
        )
    }
}

pub struct Host {
    params: SharedParams,
    session: DrawingSession<NodeID>,
    graph: LoggingSceneGraph,
}
impl Host {
    #[must_use]
    pub fn new(params: DrawParams, empty_undo: EmptyUndo) -> Self {
        Self {
            params: SharedParams::new(params),
            session: DrawingSession::new(empty_undo),
            graph: LoggingSceneGraph::default(),
        }
    }
    pub fn apply(&mut self, request: UiRequest) {
        log::debug!("UI: {request:?}");
        match request {
            UiRequest::ToggleDrawing => {
                self.params.toggle_drawing();
            }
            UiRequest::Undo => {
                self.session.undo(&mut self.graph);
            }
            UiRequest::Clear => {
                self.session.clear(&mut self.graph);
            }
            UiRequest::SetMode(mode) => self.params.set_mode(mode),
            UiRequest::SetColor(color) => self.params.set_color(color),
            UiRequest::SetRadius(radius) => self.params.set_radius(radius),
            UiRequest::SetAnchorDistance(distance) => self.params.set_anchor_distance(distance),
        }
    }
    pub fn frame(&mut self, camera: &spatialpaint_core::math::Pose) {
        // One snapshot per frame, no matter what the UI does meanwhile.
        let params = self.params.snapshot();
        self.session.on_frame(camera, &params, &mut self.graph);
    }
    /// Play a script to completion on a tracking thread.
    pub fn run(&mut self, script: Script) -> anyhow::Result<Summary> {
        let player = crate::tracking::play(script)?;
        for event in &player.events {
            match event {
                TrackingEvent::Request(request) => self.apply(request),
                TrackingEvent::Frame(frame) => {
                    log::trace!("Tracking frame {}", frame.index);
                    self.frame(&frame.camera);
                }
            }
        }
        player
            .thread
            .join()
            .map_err(|_| anyhow::anyhow!("tracking thread panicked"))?;
        Ok(self.summary())
    }
    #[must_use]
    pub fn summary(&self) -> Summary {
        let count = |kind: PrimitiveKind| {
            self.session
                .scene()
                .iter()
                .filter(|primitive| primitive.kind == kind)
                .count()
        };
        Summary {
            frames: self.session.frame_count(),
            boxes: count(PrimitiveKind::Box),
            segments: count(PrimitiveKind::LineSegment),
            undo_depth: self.session.undo_depth(),
            live_nodes: self.graph.inner.live_count(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use spatialpaint_core::params::DrawMode;

    fn run(script: &str) -> Summary {
        let mut host = Host::new(DrawParams::default(), EmptyUndo::ClearAll);
        host.run(Script::parse(script).unwrap()).unwrap()
    }

    #[test]
    fn demo() {
        let mut host = Host::new(DrawParams::default(), EmptyUndo::ClearAll);
        let summary = host.run(Script::demo()).unwrap();
        // The line is undone, the ring of boxes stays.
        assert_eq!(
            summary,
            Summary {
                frames: 68,
                boxes: 45,
                segments: 0,
                undo_depth: 1,
                live_nodes: 45,
            }
        );
    }
    #[test]
    fn point_and_line() {
        let summary = run(r#"
            [[step]]
            do = "toggle"
            [[step]]
            do = "frames"
            count = 5
            [[step]]
            do = "toggle"
            [[step]]
            do = "mode"
            mode = "line"
            [[step]]
            do = "toggle"
            [[step]]
            do = "frames"
            count = 5
            "#);
        assert_eq!(summary.boxes, 5);
        assert_eq!(summary.segments, 1);
        assert_eq!(summary.undo_depth, 2);
    }
    #[test]
    fn trailing_clear() {
        let summary = run(r#"
            [[step]]
            do = "toggle"
            [[step]]
            do = "frames"
            count = 3
            [[step]]
            do = "clear"
            "#);
        assert_eq!(summary.boxes, 0);
        assert_eq!(summary.undo_depth, 0);
        assert_eq!(summary.live_nodes, 0);
    }
    #[test]
    fn requests_change_params() {
        let mut host = Host::new(DrawParams::default(), EmptyUndo::Ignore);
        host.apply(UiRequest::SetMode(DrawMode::Line));
        host.apply(UiRequest::SetRadius(1.0));
        host.apply(UiRequest::ToggleDrawing);
        let params = host.params.snapshot();
        assert_eq!(params.mode, DrawMode::Line);
        assert_eq!(params.radius, 0.05);
        assert!(params.drawing_active);

        host.frame(&cgmath::SquareMatrix::identity());
        host.apply(UiRequest::Undo);
        host.apply(UiRequest::Undo);
        assert_eq!(host.summary().segments, 0);
    }
}
