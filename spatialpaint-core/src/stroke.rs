//! # Stroke state machine
//!
//! Decides, once per frame, whether the pen starts a new primitive, extends the current one, or does nothing.
//! Driven by the drawing flag of this frame's [`DrawParams`] compared against the previous frame's.
//!
//! * Rising edge: push an undo marker, then place a box (point mode) or a zero-length segment (line mode).
//! * Held: point mode places another box; line mode re-stretches its one segment from the start point to the cursor.
//! * Falling edge: forget the gesture.
//!
//! The mode is latched on the rising edge. Switching modes mid-gesture takes effect on the next gesture.

use cgmath::Point3;

use crate::math::{self, Pose};
use crate::params::{DrawMode, DrawParams};
use crate::scene::{graph::SceneGraph, Primitive, PrimitiveIndex, SceneList};
use crate::undo::GroupUndoStack;

/// Frame-to-frame change of the drawing flag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Off, and was off.
    Released,
    /// Just turned on.
    Rising,
    /// On, and was on.
    Held,
    /// Just turned off.
    Falling,
}
impl Edge {
    #[must_use]
    pub fn classify(previous: bool, current: bool) -> Self {
        match (previous, current) {
            (false, false) => Self::Released,
            (false, true) => Self::Rising,
            (true, true) => Self::Held,
            (true, false) => Self::Falling,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StrokeState {
    Idle,
    /// Point gesture in progress.
    PointActive,
    /// Line gesture in progress, stretching `segment` from `start`.
    LineActive {
        start: Point3<f32>,
        segment: PrimitiveIndex,
    },
    /// The gesture's primitives were undone or cleared while drawing.
    /// Nothing more is placed until the drawing flag falls. This holds for point gestures too:
    /// their trail stops rather than growing past the undone marker.
    Cancelled,
}
impl StrokeState {
    /// Mode of the gesture in progress.
    #[must_use]
    pub fn mode(&self) -> Option<DrawMode> {
        match self {
            Self::PointActive => Some(DrawMode::Point),
            Self::LineActive { .. } => Some(DrawMode::Line),
            Self::Idle | Self::Cancelled => None,
        }
    }
}

/// What a single step did to the scene.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StepOutput {
    pub edge: Edge,
    pub created: Option<PrimitiveIndex>,
    pub updated: Option<PrimitiveIndex>,
}

pub struct StrokeStateMachine {
    state: StrokeState,
    was_drawing: bool,
}
impl Default for StrokeStateMachine {
    fn default() -> Self {
        Self {
            state: StrokeState::Idle,
            was_drawing: false,
        }
    }
}
impl StrokeStateMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    #[must_use]
    pub fn state(&self) -> StrokeState {
        self.state
    }
    /// Drawing flag as of the last step.
    #[must_use]
    pub fn was_drawing(&self) -> bool {
        self.was_drawing
    }
    /// Abandon the gesture in progress, if any. The drawing flag must fall before the next gesture can start.
    pub fn cancel(&mut self) {
        if self.state.mode().is_some() {
            log::debug!("Gesture cancelled");
            self.state = StrokeState::Cancelled;
        }
    }
    /// Advance one frame.
    pub fn step<Graph>(
        &mut self,
        camera: &Pose,
        params: &DrawParams,
        scene: &mut SceneList<Graph::Handle>,
        undo: &mut GroupUndoStack,
        graph: &mut Graph,
    ) -> StepOutput
    where
        Graph: SceneGraph + ?Sized,
    {
        let edge = Edge::classify(self.was_drawing, params.drawing_active);
        self.was_drawing = params.drawing_active;

        let mut output = StepOutput {
            edge,
            created: None,
            updated: None,
        };
        let cursor_local = math::cursor_local_pose(params.anchor_distance);
        let cursor = math::box_transform(camera, &cursor_local);

        match (edge, self.state) {
            (Edge::Rising, _) => {
                undo.push(scene.len());
                match params.mode {
                    DrawMode::Point => {
                        let cube = Primitive::cube(cursor, params.radius, params.color);
                        output.created = Some(scene.append(cube, graph));
                        self.state = StrokeState::PointActive;
                    }
                    DrawMode::Line => {
                        let start = math::translation_of(&cursor);
                        let segment = math::segment_transform(start, start, params.radius);
                        let segment =
                            scene.append(Primitive::segment(segment, params.color), graph);
                        output.created = Some(segment);
                        self.state = StrokeState::LineActive { start, segment };
                    }
                }
                log::debug!(
                    "{} gesture started, undo depth {}",
                    params.mode,
                    undo.len()
                );
            }
            (Edge::Held, StrokeState::PointActive) => {
                let cube = Primitive::cube(cursor, params.radius, params.color);
                output.created = Some(scene.append(cube, graph));
            }
            (Edge::Held, StrokeState::LineActive { start, segment }) => {
                let end = math::translation_of(&cursor);
                let placement = math::segment_transform(start, end, params.radius);
                match scene.replace_at(segment, Primitive::segment(placement, params.color), graph)
                {
                    Ok(()) => output.updated = Some(segment),
                    Err(e) => {
                        log::warn!("Line gesture lost its segment: {e}");
                        self.state = StrokeState::Cancelled;
                    }
                }
            }
            (Edge::Held, StrokeState::Idle | StrokeState::Cancelled) => (),
            (Edge::Falling, _) => {
                log::debug!("Gesture ended with {} primitives in scene", scene.len());
                self.state = StrokeState::Idle;
            }
            (Edge::Released, _) => self.state = StrokeState::Idle,
        }
        output
    }
}
