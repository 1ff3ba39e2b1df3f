//! Identification of vertices.
//!
//! The caller identifies vertices by arbitrary values implementing
//! [`VertexKey`] (strings, integers, ...). Internally, the graph assigns each
//! distinct key a [`VertexId`], which is simply the position of the vertex in
//! the insertion order. Because vertices are never removed, these IDs stay
//! valid for the whole lifetime of the graph and can be used as indices into
//! contiguous arrays and bit sets.

use std::{fmt, hash::Hash, iter::FusedIterator, ops::Range};

/// A value that can identify a vertex.
///
/// This trait is implemented for every type that satisfies the bounds.
pub trait VertexKey: Clone + Eq + Hash {}

impl<T: Clone + Eq + Hash> VertexKey for T {}

/// Compact identifier of a vertex within a graph.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct VertexId(usize);

impl VertexId {
    /// Creates the ID from the index of the vertex in the insertion order.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the index of the vertex in the insertion order.
    pub const fn as_usize(&self) -> usize {
        self.0
    }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<VertexId> for usize {
    fn from(id: VertexId) -> Self {
        id.0
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Iterator over a contiguous range of vertex IDs.
#[derive(Debug, Clone)]
pub struct VertexIds(Range<usize>);

impl VertexIds {
    pub(crate) fn new(count: usize) -> Self {
        Self(0..count)
    }
}

impl Iterator for VertexIds {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(VertexId)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl DoubleEndedIterator for VertexIds {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(VertexId)
    }
}

impl ExactSizeIterator for VertexIds {}

impl FusedIterator for VertexIds {}
