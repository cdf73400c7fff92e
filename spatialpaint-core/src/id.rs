//! # IDs
//! Process-unique IDs namespaced by a marker type, via [`SpatialID<T>`]. Render nodes created by
//! [`RecordingSceneGraph`](crate::scene::graph::RecordingSceneGraph) are keyed by these.
//!
//! Use the `Default` impl to allocate a fresh ID.

// Next available ID, per namespace.
static ID_SERVER: parking_lot::Mutex<
    std::collections::BTreeMap<std::any::TypeId, std::num::NonZeroU64>,
> = parking_lot::const_mutex(std::collections::BTreeMap::new());

/// ID that is unique within this execution of the program.
/// IDs of different namespaces may share a numeric value, but are never comparable.
pub struct SpatialID<T: std::any::Any> {
    id: std::num::NonZeroU64,
    _phantom: std::marker::PhantomData<T>,
}
impl<T: std::any::Any> Clone for SpatialID<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T: std::any::Any> Copy for SpatialID<T> {}
impl<T: std::any::Any> PartialEq for SpatialID<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl<T: std::any::Any> Eq for SpatialID<T> {}
// The ID does not own a T, so it shouldn't inherit T's thread safety.
unsafe impl<T: std::any::Any> Send for SpatialID<T> {}
unsafe impl<T: std::any::Any> Sync for SpatialID<T> {}

impl<T: std::any::Any> std::hash::Hash for SpatialID<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
impl<T: std::any::Any> SpatialID<T> {
    /// Raw numeric value. Values from different namespaces may collide!
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id.get()
    }
}
impl<T: std::any::Any> Default for SpatialID<T> {
    fn default() -> Self {
        let mut server = ID_SERVER.lock();
        let next = server
            .entry(std::any::TypeId::of::<T>())
            .or_insert(std::num::NonZeroU64::MIN);
        let id = *next;
        // A namespace would need to allocate for centuries to get here.
        *next = next.checked_add(1).unwrap_or_else(|| {
            log::error!("{} ID overflow! Aborting!", std::any::type_name::<T>());
            log::logger().flush();
            std::process::abort();
        });
        Self {
            id,
            _phantom: std::marker::PhantomData,
        }
    }
}
impl<T: std::any::Any> std::fmt::Display for SpatialID<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // rsplit always yields at least one element.
        write!(
            f,
            "{}#{}",
            std::any::type_name::<T>().rsplit("::").next().unwrap_or_default(),
            self.id
        )
    }
}
impl<T: std::any::Any> std::fmt::Debug for SpatialID<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as std::fmt::Display>::fmt(self, f)
    }
}

#[cfg(test)]
mod test {
    use super::SpatialID;
    // Tests share the global server, so each uses its own namespace.
    #[test]
    fn sequential_from_one() {
        struct Namespace;
        type TestID = SpatialID<Namespace>;

        let first = TestID::default();
        let second = TestID::default();
        // Not a stable guarantee!
        assert_eq!(first.id(), 1);
        assert_eq!(second.id(), 2);
        assert_ne!(first, second);
    }
    #[test]
    fn unique() {
        struct Namespace;
        type TestID = SpatialID<Namespace>;

        let mut ids: Vec<_> = std::iter::repeat_with(TestID::default).take(512).collect();
        ids.sort_unstable_by_key(SpatialID::id);
        let before = ids.len();
        ids.dedup();
        assert_eq!(before, ids.len(), "had duplicate ids");
    }
    #[test]
    fn display_names_namespace() {
        struct Marker;
        let id = SpatialID::<Marker>::default();
        assert_eq!(id.to_string(), format!("Marker#{}", id.id()));
    }
}
