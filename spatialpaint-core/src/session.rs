//! # Drawing session
//!
//! Owns everything one drawing needs - placed primitives, the undo stack, the stroke state machine, and a frame
//! counter - and exposes the synchronous surface the host drives: [`DrawingSession::on_frame`],
//! [`DrawingSession::undo`], and [`DrawingSession::clear`]. Toggling the pen lives on the parameters
//! ([`crate::params::SharedParams::toggle_drawing`]), since the drawing flag is part of each frame's snapshot.

use crate::math::{self, Pose};
use crate::params::DrawParams;
use crate::scene::{graph::SceneGraph, PrimitiveIndex, SceneList};
use crate::stroke::{Edge, StrokeState, StrokeStateMachine};
use crate::undo::GroupUndoStack;

/// What `undo` does when there are no gestures left to undo.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::Display,
)]
#[strum(serialize_all = "snake_case")]
pub enum EmptyUndo {
    /// Truncate the scene to nothing, same as clear.
    #[default]
    ClearAll,
    /// Leave the scene alone.
    Ignore,
}

/// Summary of a single frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameReport {
    /// One-based index of this frame within the session.
    pub frame: u64,
    pub edge: Edge,
    pub created: Option<PrimitiveIndex>,
    pub updated: Option<PrimitiveIndex>,
}

pub struct DrawingSession<Handle> {
    scene: SceneList<Handle>,
    undo: GroupUndoStack,
    strokes: StrokeStateMachine,
    frame: u64,
    empty_undo: EmptyUndo,
}
impl<Handle> Default for DrawingSession<Handle> {
    fn default() -> Self {
        Self::new(EmptyUndo::default())
    }
}
impl<Handle> DrawingSession<Handle> {
    #[must_use]
    pub fn new(empty_undo: EmptyUndo) -> Self {
        Self {
            scene: SceneList::new(),
            undo: GroupUndoStack::new(),
            strokes: StrokeStateMachine::new(),
            frame: 0,
            empty_undo,
        }
    }
    #[must_use]
    pub fn scene(&self) -> &SceneList<Handle> {
        &self.scene
    }
    /// Number of gestures that can be undone.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame
    }
    #[must_use]
    pub fn stroke_state(&self) -> StrokeState {
        self.strokes.state()
    }
    #[must_use]
    pub fn empty_undo(&self) -> EmptyUndo {
        self.empty_undo
    }
    /// Process one tracking frame: refresh the cursor visual, then advance the stroke state machine.
    pub fn on_frame<Graph>(
        &mut self,
        camera: &Pose,
        params: &DrawParams,
        graph: &mut Graph,
    ) -> FrameReport
    where
        Graph: SceneGraph<Handle = Handle> + ?Sized,
    {
        self.frame += 1;

        let cursor = math::cursor_pose(camera, params.anchor_distance)
            * math::uniform_scale_matrix(params.radius);
        graph.update_cursor_visual(&cursor, params.color);

        let step = self
            .strokes
            .step(camera, params, &mut self.scene, &mut self.undo, graph);
        log::trace!("Frame {} {:?}", self.frame, step.edge);

        FrameReport {
            frame: self.frame,
            edge: step.edge,
            created: step.created,
            updated: step.updated,
        }
    }
    /// Remove every primitive placed by the most recent gesture. Returns how many were removed.
    pub fn undo<Graph>(&mut self, graph: &mut Graph) -> usize
    where
        Graph: SceneGraph<Handle = Handle> + ?Sized,
    {
        if self.undo.is_empty() && self.empty_undo == EmptyUndo::Ignore {
            log::debug!("Nothing to undo");
            return 0;
        }
        let marker = self.undo.pop();
        if marker < self.scene.len() {
            // The active gesture's primitives are about to go.
            self.strokes.cancel();
        }
        let removed = self.scene.truncate(marker, graph);
        log::debug!(
            "Undo to {marker}, removed {removed}, {} gestures remain",
            self.undo.len()
        );
        removed
    }
    /// Remove every primitive and forget all undo history. Returns how many were removed.
    pub fn clear<Graph>(&mut self, graph: &mut Graph) -> usize
    where
        Graph: SceneGraph<Handle = Handle> + ?Sized,
    {
        self.undo.reset();
        self.strokes.cancel();
        let removed = self.scene.clear(graph);
        log::debug!("Cleared {removed} primitives");
        removed
    }
}
