//! # spatialpaint-core
//!
//! Frame-driven core of a spatial drawing tool: a tracked camera carries a cursor some distance in front of it,
//! and while the pen is down each frame places boxes (point mode) or stretches a segment (line mode) in world space.
//! Rendering, tracking, and UI are the host's business - see [`scene::graph::SceneGraph`].

pub mod color;
pub mod id;
pub mod math;
pub mod params;
pub mod scene;
pub mod session;
pub mod stroke;
pub mod undo;
pub mod util;

pub use id::SpatialID;
