//! # Scene graph
//!
//! The drawing core never renders anything itself. It tells a host-provided [`SceneGraph`] which nodes to create,
//! edit, and drop, and where to draw the cursor.

use cgmath::Matrix4;

use super::Primitive;
use crate::color::Color;

/// Sink for render-side effects of the drawing core.
pub trait SceneGraph {
    /// Opaque reference to a render node owned by the graph.
    type Handle;
    fn create_primitive(&mut self, primitive: &Primitive) -> Self::Handle;
    /// Replace the node's transform, size, and color.
    fn update_primitive(&mut self, handle: &Self::Handle, primitive: &Primitive);
    fn remove_primitive(&mut self, handle: Self::Handle);
    /// Called once per frame. `transform` already includes the cursor's scale.
    fn update_cursor_visual(&mut self, transform: &Matrix4<f32>, color: Color);
}
impl<Graph> SceneGraph for &mut Graph
where
    Graph: SceneGraph + ?Sized,
{
    type Handle = Graph::Handle;
    fn create_primitive(&mut self, primitive: &Primitive) -> Self::Handle {
        (**self).create_primitive(primitive)
    }
    fn update_primitive(&mut self, handle: &Self::Handle, primitive: &Primitive) {
        (**self).update_primitive(handle, primitive);
    }
    fn remove_primitive(&mut self, handle: Self::Handle) {
        (**self).remove_primitive(handle);
    }
    fn update_cursor_visual(&mut self, transform: &Matrix4<f32>, color: Color) {
        (**self).update_cursor_visual(transform, color);
    }
}

/// Namespace for render node IDs.
pub struct Node;
pub type NodeID = crate::SpatialID<Node>;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CursorVisual {
    pub transform: Matrix4<f32>,
    pub color: Color,
}

/// Running totals of the calls a graph has received.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GraphStats {
    pub created: usize,
    pub updated: usize,
    pub removed: usize,
    pub cursor_updates: usize,
}

/// An in-memory graph that just remembers what it was told.
#[derive(Default)]
pub struct RecordingSceneGraph {
    nodes: hashbrown::HashMap<NodeID, Primitive>,
    cursor: Option<CursorVisual>,
    stats: GraphStats,
}
impl RecordingSceneGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    /// Number of nodes created and not yet removed.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.nodes.len()
    }
    #[must_use]
    pub fn get(&self, node: &NodeID) -> Option<&Primitive> {
        self.nodes.get(node)
    }
    pub fn iter(&self) -> impl Iterator<Item = (&NodeID, &Primitive)> + '_ {
        self.nodes.iter()
    }
    /// Cursor as of the most recent frame, if any frame has run.
    #[must_use]
    pub fn cursor(&self) -> Option<&CursorVisual> {
        self.cursor.as_ref()
    }
    #[must_use]
    pub fn stats(&self) -> GraphStats {
        self.stats
    }
}
impl SceneGraph for RecordingSceneGraph {
    type Handle = NodeID;
    fn create_primitive(&mut self, primitive: &Primitive) -> NodeID {
        let id = NodeID::default();
        self.nodes.insert(id, *primitive);
        self.stats.created += 1;
        id
    }
    fn update_primitive(&mut self, handle: &NodeID, primitive: &Primitive) {
        if let Some(node) = self.nodes.get_mut(handle) {
            *node = *primitive;
            self.stats.updated += 1;
        } else {
            log::warn!("Update of unknown node {handle}");
        }
    }
    fn remove_primitive(&mut self, handle: NodeID) {
        if self.nodes.remove(&handle).is_some() {
            self.stats.removed += 1;
        } else {
            log::warn!("Removal of unknown node {handle}");
        }
    }
    fn update_cursor_visual(&mut self, transform: &Matrix4<f32>, color: Color) {
        self.cursor = Some(CursorVisual {
            transform: *transform,
            color,
        });
        self.stats.cursor_updates += 1;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::scene::PrimitiveKind;
    use cgmath::{vec3, SquareMatrix};

    #[test]
    fn records_lifecycle() {
        let mut graph = RecordingSceneGraph::new();
        let cube = Primitive::cube(Matrix4::identity(), 0.1, Color::WHITE);
        let a = graph.create_primitive(&cube);
        let b = graph.create_primitive(&cube);
        assert_ne!(a, b);

        let moved = Primitive {
            transform: Matrix4::from_translation(vec3(0.0, 1.0, 0.0)),
            ..cube
        };
        graph.update_primitive(&b, &moved);
        graph.remove_primitive(a);
        // Double removal is ignored.
        graph.remove_primitive(a);

        assert_eq!(graph.live_count(), 1);
        assert_eq!(graph.get(&b).map(|p| p.transform), Some(moved.transform));
        assert_eq!(graph.get(&b).map(|p| p.kind), Some(PrimitiveKind::Box));
        assert_eq!(
            graph.stats(),
            GraphStats {
                created: 2,
                updated: 1,
                removed: 1,
                cursor_updates: 0,
            }
        );
    }
    #[test]
    fn through_mut_ref() {
        fn touch_cursor(mut graph: impl SceneGraph) {
            graph.update_cursor_visual(&Matrix4::from_scale(0.5), Color::BLACK);
        }
        let mut graph = RecordingSceneGraph::new();
        assert!(graph.cursor().is_none());
        touch_cursor(&mut graph);
        touch_cursor(&mut graph);
        assert_eq!(graph.cursor().map(|c| c.color), Some(Color::BLACK));
        assert_eq!(graph.stats().cursor_updates, 2);
    }
}
