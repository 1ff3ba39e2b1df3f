//! Core traits and types shared by the graph and the traversals.
//!
//! Traversals in [`visit`](crate::visit) and [`algo`](crate::algo) never
//! touch the storage of [`Graph`](crate::graph::Graph) directly. They only
//! need the compact [`VertexId`]s and the neighbor lists, which is what the
//! [`Neighbors`] trait provides.

pub mod error;
pub mod id;
pub mod marker;

use self::{
    id::{VertexId, VertexIds},
    marker::EdgeType,
};

/// Base information about a graph.
pub trait GraphBase {
    /// Directedness of the edges in the graph.
    type EdgeType: EdgeType;

    /// Returns the number of vertices in the graph.
    fn vertex_count(&self) -> usize;

    /// Returns an iterator over IDs of all vertices in insertion order.
    fn vertex_ids(&self) -> VertexIds {
        VertexIds::new(self.vertex_count())
    }

    /// Returns `true` if the vertex with given ID is in the graph.
    fn contains_vertex_id(&self, id: VertexId) -> bool {
        id.as_usize() < self.vertex_count()
    }

    /// Returns `true` if the edges in the graph are directed.
    fn is_directed(&self) -> bool {
        Self::EdgeType::is_directed()
    }
}

/// Access to the outgoing neighbors of a vertex.
pub trait Neighbors: GraphBase {
    /// Returns the IDs of the neighbors of given vertex in the order in which
    /// the edges were added.
    ///
    /// In undirected graphs, every edge appears in the neighbor lists of both
    /// its endpoints.
    ///
    /// # Panics
    ///
    /// Panics if the vertex is not in the graph.
    fn neighbor_ids(&self, from: VertexId) -> &[VertexId];
}
