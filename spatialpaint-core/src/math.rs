//! # Transform math
//!
//! Stateless helpers for placing the cursor and stroke primitives. Matrices are column-major
//! `cgmath` matrices, and every pose is recomputed from the camera each frame - nothing here accumulates.

use cgmath::prelude::*;
use cgmath::{Matrix4, Point3, Quaternion, Vector3};

/// A rigid (or rigid + uniform scale) world-space transform.
pub type Pose = Matrix4<f32>;

/// Segments shorter than this are treated as having no direction.
pub const DEGENERATE_LENGTH: f32 = 1e-6;

/// Camera-local offset of the pen tip: `anchor_distance` along camera forward (-Z).
#[must_use]
pub fn cursor_local_pose(anchor_distance: f32) -> Pose {
    Matrix4::from_translation(Vector3::new(0.0, 0.0, -anchor_distance))
}
/// World-space pose of the cursor, used both for the cursor visual and as the stroke sample point.
#[must_use]
pub fn cursor_pose(camera: &Pose, anchor_distance: f32) -> Pose {
    camera * cursor_local_pose(anchor_distance)
}
/// `diag(radius, radius, radius, 1)`
#[must_use]
pub fn uniform_scale_matrix(radius: f32) -> Matrix4<f32> {
    Matrix4::from_scale(radius)
}
/// World transform of a point-mode box sampled at the cursor.
#[must_use]
pub fn box_transform(camera: &Pose, cursor_local: &Pose) -> Matrix4<f32> {
    camera * cursor_local
}
/// The translation part of a transform.
#[must_use]
pub fn translation_of(transform: &Matrix4<f32>) -> Point3<f32> {
    Point3::from_vec(transform.w.truncate())
}

/// Placement of a box spanning two points, long along its local Y.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    /// Full box extents, `(2r, length, 2r)`.
    pub size: Vector3<f32>,
    /// Translation to the midpoint times a rotation taking local +Y onto the segment direction.
    pub transform: Matrix4<f32>,
}
impl Segment {
    #[must_use]
    pub fn length(&self) -> f32 {
        self.size.y
    }
    #[must_use]
    pub fn midpoint(&self) -> Point3<f32> {
        translation_of(&self.transform)
    }
}

/// Rotation taking local +Y onto `direction`. Identity if `direction` is (nearly) zero.
#[must_use]
pub fn rotation_from_y(direction: Vector3<f32>) -> Quaternion<f32> {
    let length = direction.magnitude();
    if !(length > DEGENERATE_LENGTH) {
        // Also catches NaN input.
        return Quaternion::new(1.0, 0.0, 0.0, 0.0);
    }
    // Antiparallel case needs an explicit axis, any perpendicular to Y will do.
    Quaternion::from_arc(Vector3::unit_y(), direction / length, Some(Vector3::unit_x()))
}

/// Box placement spanning `start` to `end` with half-thickness `radius`.
/// A zero-length segment gets identity rotation and zero length, never NaN.
#[must_use]
pub fn segment_transform(start: Point3<f32>, end: Point3<f32>, radius: f32) -> Segment {
    let delta = end - start;
    let length = delta.magnitude();
    let (length, rotation) = if length > DEGENERATE_LENGTH {
        (length, rotation_from_y(delta))
    } else {
        (0.0, Quaternion::new(1.0, 0.0, 0.0, 0.0))
    };
    let midpoint = start + delta * 0.5;

    Segment {
        size: Vector3::new(2.0 * radius, length, 2.0 * radius),
        transform: Matrix4::from_translation(midpoint.to_vec()) * Matrix4::from(rotation),
    }
}
