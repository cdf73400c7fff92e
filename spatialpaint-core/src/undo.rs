//! # Group undo
//!
//! Each gesture records the length of the [`SceneList`](crate::scene::SceneList) as it stood when the gesture began.
//! Undoing a gesture truncates the list back to that length, removing everything the gesture placed at once.

/// LIFO stack of scene lengths, one per gesture.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupUndoStack {
    markers: Vec<usize>,
}
impl GroupUndoStack {
    /// Value returned by [`Self::pop`] when there is nothing left to undo.
    pub const EMPTY_MARKER: usize = 0;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    /// Record the start of a gesture.
    pub fn push(&mut self, marker: usize) {
        self.markers.push(marker);
    }
    /// Remove and return the most recent marker, or [`Self::EMPTY_MARKER`] if empty.
    pub fn pop(&mut self) -> usize {
        self.markers.pop().unwrap_or(Self::EMPTY_MARKER)
    }
    /// Most recent marker, if any.
    #[must_use]
    pub fn peek(&self) -> Option<usize> {
        self.markers.last().copied()
    }
    pub fn reset(&mut self) {
        self.markers.clear();
    }
    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
