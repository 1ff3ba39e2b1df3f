use std::{
    collections::HashSet,
    hash::{BuildHasher, Hash},
    marker::PhantomData,
    ops::{Deref, DerefMut},
};

use fixedbitset::FixedBitSet;

use crate::core::id::VertexId;

/// A set of visited vertices.
pub trait VisitSet<I> {
    /// Marks the element as visited.
    ///
    /// Returns `true` when this is the first time the element is visited.
    fn visit(&mut self, id: I) -> bool;

    /// Returns `true` if the element is marked as visited.
    fn is_visited(&self, id: &I) -> bool;

    /// Returns the number of visited elements.
    fn visited_count(&self) -> usize;

    /// Resets the set of visited elements to be empty.
    fn reset_visited(&mut self);
}

impl<I: Hash + Eq, S: BuildHasher> VisitSet<I> for HashSet<I, S> {
    fn visit(&mut self, id: I) -> bool {
        self.insert(id)
    }

    fn is_visited(&self, id: &I) -> bool {
        self.contains(id)
    }

    fn visited_count(&self) -> usize {
        self.len()
    }

    fn reset_visited(&mut self) {
        self.clear()
    }
}

impl VisitSet<VertexId> for TypedBitSet<VertexId> {
    fn visit(&mut self, id: VertexId) -> bool {
        let index = id.as_usize();
        if index >= self.len() {
            // Vertices can be added to the graph while a visitor is detached
            // from it.
            self.grow(index + 1);
        }
        !self.put(index)
    }

    fn is_visited(&self, id: &VertexId) -> bool {
        self.contains(id.as_usize())
    }

    fn visited_count(&self) -> usize {
        self.count_ones(..)
    }

    fn reset_visited(&mut self) {
        self.clear()
    }
}

/// Tiny [`FixedBitSet`] wrapper adding a generic type of the elements the set
/// holds.
#[derive(Debug, Clone)]
pub struct TypedBitSet<T> {
    inner: FixedBitSet,
    ty: PhantomData<T>,
}

impl<T> TypedBitSet<T> {
    /// Creates a new empty bit set.
    pub fn new() -> Self {
        Self {
            inner: FixedBitSet::new(),
            ty: PhantomData,
        }
    }

    /// Creates a new empty bit set with given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: FixedBitSet::with_capacity(capacity),
            ty: PhantomData,
        }
    }
}

impl<T> Default for TypedBitSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for TypedBitSet<T> {
    type Target = FixedBitSet;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> DerefMut for TypedBitSet<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet;

    use super::*;

    #[test]
    fn bit_set_grows_on_visit() {
        let mut visited = TypedBitSet::<VertexId>::with_capacity(2);

        assert!(visited.visit(VertexId::new(1)));
        assert!(visited.visit(VertexId::new(10)));
        assert!(!visited.visit(VertexId::new(10)));

        assert!(visited.is_visited(&VertexId::new(10)));
        assert!(!visited.is_visited(&VertexId::new(42)));
        assert_eq!(visited.visited_count(), 2);

        visited.reset_visited();
        assert_eq!(visited.visited_count(), 0);
    }

    #[test]
    fn hash_set_visit() {
        let mut visited = FxHashSet::default();

        assert!(visited.visit("a"));
        assert!(!visited.visit("a"));
        assert_eq!(VisitSet::visited_count(&visited), 1);
    }
}
