//! # Drawing parameters
//!
//! User-controlled settings, read by the core as one immutable [`DrawParams`] snapshot per frame.
//! [`SharedParams`] is the writable store the host's UI thread edits and the frame loop snapshots.

use crate::color::Color;

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
    strum::AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum DrawMode {
    /// Leave a box at the cursor every frame while drawing.
    #[default]
    #[strum(to_string = "point", serialize = "pen")]
    Point,
    /// Stretch a single segment from where drawing started to the cursor.
    #[strum(to_string = "line")]
    Line,
}

/// Snapshot of everything the user controls.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DrawParams {
    pub drawing_active: bool,
    pub mode: DrawMode,
    pub color: Color,
    /// Half-extent of placed boxes and segment thickness.
    pub radius: f32,
    /// Distance of the cursor in front of the camera.
    pub anchor_distance: f32,
}
impl DrawParams {
    pub const RADIUS_RANGE: std::ops::RangeInclusive<f32> = 0.0..=0.05;
    pub const ANCHOR_DISTANCE_RANGE: std::ops::RangeInclusive<f32> = 0.0..=1.0;

    pub fn toggle_drawing(&mut self) {
        self.drawing_active = !self.drawing_active;
    }
}
impl Default for DrawParams {
    fn default() -> Self {
        Self {
            drawing_active: false,
            mode: DrawMode::Point,
            color: Color::MAGENTA,
            radius: 0.01,
            anchor_distance: 0.4,
        }
    }
}

fn clamp_to(value: f32, range: &std::ops::RangeInclusive<f32>) -> f32 {
    crate::util::FiniteF32::saturating(value, *range.start(), *range.end()).get()
}

/// Thread-safe parameter store. Setters enforce [`DrawParams::RADIUS_RANGE`] and
/// [`DrawParams::ANCHOR_DISTANCE_RANGE`], so snapshots are always in range.
#[derive(Clone, Default)]
pub struct SharedParams {
    inner: std::sync::Arc<parking_lot::RwLock<DrawParams>>,
}
impl SharedParams {
    #[must_use]
    pub fn new(params: DrawParams) -> Self {
        let shared = Self::default();
        shared.set_all(params);
        shared
    }
    /// Copy out the current parameters. Take this once per frame.
    #[must_use]
    pub fn snapshot(&self) -> DrawParams {
        *self.inner.read()
    }
    /// Replace every parameter at once, clamping ranges.
    pub fn set_all(&self, params: DrawParams) {
        *self.inner.write() = DrawParams {
            radius: clamp_to(params.radius, &DrawParams::RADIUS_RANGE),
            anchor_distance: clamp_to(params.anchor_distance, &DrawParams::ANCHOR_DISTANCE_RANGE),
            ..params
        };
    }
    /// Flip the drawing flag, returning the new value.
    pub fn toggle_drawing(&self) -> bool {
        let mut write = self.inner.write();
        write.toggle_drawing();
        write.drawing_active
    }
    pub fn set_drawing(&self, active: bool) {
        self.inner.write().drawing_active = active;
    }
    pub fn set_mode(&self, mode: DrawMode) {
        self.inner.write().mode = mode;
    }
    pub fn set_color(&self, color: Color) {
        self.inner.write().color = color;
    }
    pub fn set_radius(&self, radius: f32) {
        self.inner.write().radius = clamp_to(radius, &DrawParams::RADIUS_RANGE);
    }
    pub fn set_anchor_distance(&self, distance: f32) {
        self.inner.write().anchor_distance = clamp_to(distance, &DrawParams::ANCHOR_DISTANCE_RANGE);
    }
}
