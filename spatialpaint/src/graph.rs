//! Scene graph for the headless host: remembers everything, and logs as it goes.

use cgmath::Matrix4;
use spatialpaint_core::{
    color::Color,
    math,
    scene::{
        graph::{NodeID, RecordingSceneGraph, SceneGraph},
        Primitive,
    },
};

#[derive(Default)]
pub struct LoggingSceneGraph {
    pub inner: RecordingSceneGraph,
}
impl SceneGraph for LoggingSceneGraph {
    type Handle = NodeID;
    fn create_primitive(&mut self, primitive: &Primitive) -> NodeID {
        let node = self.inner.create_primitive(primitive);
        log::trace!(
            "Create {node} {:?} at {:?} size {:?} {}",
            primitive.kind,
            math::translation_of(&primitive.transform),
            primitive.size,
            primitive.color,
        );
        node
    }
    fn update_primitive(&mut self, handle: &NodeID, primitive: &Primitive) {
        log::trace!(
            "Update {handle} length {:.4} at {:?}",
            primitive.size.y,
            math::translation_of(&primitive.transform),
        );
        self.inner.update_primitive(handle, primitive);
    }
    fn remove_primitive(&mut self, handle: NodeID) {
        log::trace!("Remove {handle}");
        self.inner.remove_primitive(handle);
    }
    fn update_cursor_visual(&mut self, transform: &Matrix4<f32>, color: Color) {
        self.inner.update_cursor_visual(transform, color);
    }
}
