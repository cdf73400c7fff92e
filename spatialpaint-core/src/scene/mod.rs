//! # Scene
//!
//! The ordered list of placed stroke primitives. Insertion order is drawing order, and the index of a primitive is
//! its removal key - the list is only ever appended to, edited in place, or truncated, never reordered.
//!
//! Each entry owns the handle of the render node the host created for it through a [`graph::SceneGraph`], so that
//! truncation can release those nodes.

pub mod graph;

use cgmath::{Matrix4, Vector3};
use graph::SceneGraph;

use crate::color::Color;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// A cube sampled at a single cursor position.
    Box,
    /// A box stretched between a gesture's start point and the cursor, long along local Y.
    LineSegment,
}

/// A single placed stroke object.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Primitive {
    pub kind: PrimitiveKind,
    /// World transform. Does not include `size`.
    pub transform: Matrix4<f32>,
    /// Full extents of the box along its local axes.
    pub size: Vector3<f32>,
    pub color: Color,
}
impl Primitive {
    /// A point-mode cube of half-extent `radius`.
    #[must_use]
    pub fn cube(transform: Matrix4<f32>, radius: f32, color: Color) -> Self {
        let edge = 2.0 * radius;
        Self {
            kind: PrimitiveKind::Box,
            transform,
            size: Vector3::new(edge, edge, edge),
            color,
        }
    }
    #[must_use]
    pub fn segment(segment: crate::math::Segment, color: Color) -> Self {
        Self {
            kind: PrimitiveKind::LineSegment,
            transform: segment.transform,
            size: segment.size,
            color,
        }
    }
}

/// Position of a primitive within a [`SceneList`]. Valid until the list is truncated below it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PrimitiveIndex(pub usize);

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneError {
    #[error("primitive {0:?} is not in the scene")]
    UnknownPrimitive(PrimitiveIndex),
}

struct Placed<Handle> {
    primitive: Primitive,
    node: Handle,
}

/// Ordered arena of placed primitives and their render nodes.
pub struct SceneList<Handle> {
    placed: Vec<Placed<Handle>>,
}
impl<Handle> Default for SceneList<Handle> {
    fn default() -> Self {
        Self { placed: Vec::new() }
    }
}
// Read access
impl<Handle> SceneList<Handle> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    #[must_use]
    pub fn len(&self) -> usize {
        self.placed.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }
    #[must_use]
    pub fn get(&self, index: PrimitiveIndex) -> Option<&Primitive> {
        self.placed.get(index.0).map(|placed| &placed.primitive)
    }
    /// Render node of the primitive at `index`.
    #[must_use]
    pub fn node(&self, index: PrimitiveIndex) -> Option<&Handle> {
        self.placed.get(index.0).map(|placed| &placed.node)
    }
    /// Iterate primitives in drawing order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Primitive> + '_ {
        self.placed.iter().map(|placed| &placed.primitive)
    }
}
// Mutation, mirrored onto the scene graph.
impl<Handle> SceneList<Handle> {
    /// Place a primitive at the end of the list, creating its render node.
    pub fn append<Graph>(&mut self, primitive: Primitive, graph: &mut Graph) -> PrimitiveIndex
    where
        Graph: SceneGraph<Handle = Handle> + ?Sized,
    {
        let node = graph.create_primitive(&primitive);
        let index = PrimitiveIndex(self.placed.len());
        self.placed.push(Placed { primitive, node });
        log::trace!("Appended {:?} at {index:?}", primitive.kind);
        index
    }
    /// Overwrite the primitive at `index` without changing the length of the list.
    pub fn replace_at<Graph>(
        &mut self,
        index: PrimitiveIndex,
        primitive: Primitive,
        graph: &mut Graph,
    ) -> Result<(), SceneError>
    where
        Graph: SceneGraph<Handle = Handle> + ?Sized,
    {
        let placed = self
            .placed
            .get_mut(index.0)
            .ok_or(SceneError::UnknownPrimitive(index))?;
        placed.primitive = primitive;
        graph.update_primitive(&placed.node, &placed.primitive);
        Ok(())
    }
    /// Remove every primitive at or past `len`, releasing their render nodes.
    /// Returns the number removed. A `len` past the end is a no-op.
    pub fn truncate<Graph>(&mut self, len: usize, graph: &mut Graph) -> usize
    where
        Graph: SceneGraph<Handle = Handle> + ?Sized,
    {
        if len >= self.placed.len() {
            return 0;
        }
        let removed = self.placed.len() - len;
        // Newest first.
        for placed in self.placed.drain(len..).rev() {
            graph.remove_primitive(placed.node);
        }
        removed
    }
    /// Remove everything. Returns the number removed.
    pub fn clear<Graph>(&mut self, graph: &mut Graph) -> usize
    where
        Graph: SceneGraph<Handle = Handle> + ?Sized,
    {
        self.truncate(0, graph)
    }
}

#[cfg(test)]
mod test {
    use super::graph::RecordingSceneGraph;
    use super::*;
    use cgmath::{vec3, SquareMatrix};

    fn cube_at(x: f32) -> Primitive {
        Primitive::cube(Matrix4::from_translation(vec3(x, 0.0, 0.0)), 0.01, Color::WHITE)
    }

    #[test]
    fn append_in_order() {
        let mut graph = RecordingSceneGraph::new();
        let mut scene = SceneList::new();
        let first = scene.append(cube_at(0.0), &mut graph);
        let second = scene.append(cube_at(1.0), &mut graph);
        assert_eq!(first, PrimitiveIndex(0));
        assert_eq!(second, PrimitiveIndex(1));
        assert_eq!(scene.len(), 2);
        assert_eq!(graph.live_count(), 2);
        assert_eq!(scene.get(second), Some(&cube_at(1.0)));
        // Render node mirrors the primitive.
        let node = scene.node(second).unwrap();
        assert_eq!(graph.get(node), Some(&cube_at(1.0)));
    }
    #[test]
    fn cube_size() {
        let cube = Primitive::cube(Matrix4::identity(), 0.25, Color::BLACK);
        assert_eq!(cube.size, vec3(0.5, 0.5, 0.5));
        assert_eq!(cube.kind, PrimitiveKind::Box);
    }
    #[test]
    fn replace_keeps_length() {
        let mut graph = RecordingSceneGraph::new();
        let mut scene = SceneList::new();
        let index = scene.append(cube_at(0.0), &mut graph);
        scene.replace_at(index, cube_at(5.0), &mut graph).unwrap();
        assert_eq!(scene.len(), 1);
        assert_eq!(scene.get(index), Some(&cube_at(5.0)));
        assert_eq!(graph.get(scene.node(index).unwrap()), Some(&cube_at(5.0)));
        assert_eq!(graph.stats().updated, 1);
    }
    #[test]
    fn replace_unknown() {
        let mut graph = RecordingSceneGraph::new();
        let mut scene = SceneList::new();
        assert_eq!(
            scene.replace_at(PrimitiveIndex(3), cube_at(0.0), &mut graph),
            Err(SceneError::UnknownPrimitive(PrimitiveIndex(3)))
        );
        assert_eq!(graph.stats().updated, 0);
    }
    #[test]
    fn truncate_releases_nodes() {
        let mut graph = RecordingSceneGraph::new();
        let mut scene = SceneList::new();
        for x in 0..5 {
            scene.append(cube_at(x as f32), &mut graph);
        }
        assert_eq!(scene.truncate(2, &mut graph), 3);
        assert_eq!(scene.len(), 2);
        assert_eq!(graph.live_count(), 2);
        assert_eq!(graph.stats().removed, 3);
        // Survivors are the oldest.
        assert_eq!(scene.iter().copied().collect::<Vec<_>>(), [cube_at(0.0), cube_at(1.0)]);

        // Past the end does nothing.
        assert_eq!(scene.truncate(10, &mut graph), 0);
        assert_eq!(scene.len(), 2);
    }
    #[test]
    fn clear() {
        let mut graph = RecordingSceneGraph::new();
        let mut scene = SceneList::new();
        scene.append(cube_at(0.0), &mut graph);
        scene.append(cube_at(1.0), &mut graph);
        assert_eq!(scene.clear(&mut graph), 2);
        assert!(scene.is_empty());
        assert_eq!(graph.live_count(), 0);
        assert_eq!(scene.clear(&mut graph), 0);
    }
}
