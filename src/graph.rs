//! Adjacency-list graph keyed by caller-supplied vertex identifiers.
//!
//! # Examples
//!
//! ```
//! use stepgraph::Graph;
//!
//! let mut graph = Graph::new_undirected();
//!
//! graph.add_edge("A", "B");
//! graph.add_edge("A", "C");
//! graph.add_vertex("D");
//!
//! assert_eq!(graph.vertices(), &["A", "B", "C", "D"]);
//! assert_eq!(graph.neighbors(&"B").unwrap().collect::<Vec<_>>(), vec![&"A"]);
//! assert_eq!(graph.to_string(), "A -> B C \nB -> A \nC -> A \nD -> \n");
//! ```

use std::{
    borrow::Borrow,
    collections::hash_map::Entry,
    fmt,
    hash::Hash,
    iter::{FusedIterator, Zip},
    marker::PhantomData,
    ops::Index,
    slice,
};

use rustc_hash::FxHashMap;

use crate::core::{
    error::UnknownVertex,
    id::{VertexId, VertexIds, VertexKey},
    marker::{Directed, EdgeType, Undirected},
    GraphBase, Neighbors,
};

/// Graph stored as adjacency lists.
///
/// Vertices are kept in insertion order and every vertex has a (possibly
/// empty) list of neighbors in edge insertion order. The graph only grows:
/// there is no removal of vertices or edges.
///
/// Parallel edges and self-loops are allowed and stored as they were added.
/// In an undirected graph, an edge `(v, w)` puts `w` to the neighbors of `v`
/// and `v` to the neighbors of `w`. Consequently, an undirected self-loop
/// appears twice in the neighbors of its vertex.
#[derive(Debug, Clone)]
pub struct Graph<V, Ty = Undirected> {
    vertices: Vec<V>,
    ids: FxHashMap<V, VertexId>,
    adjacency: Vec<Vec<VertexId>>,
    endpoints: Vec<[VertexId; 2]>,
    ty: PhantomData<fn() -> Ty>,
}

impl<V, Ty: EdgeType> Graph<V, Ty> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            ids: FxHashMap::default(),
            adjacency: Vec::new(),
            endpoints: Vec::new(),
            ty: PhantomData,
        }
    }

    /// Creates an empty graph with preallocated space for given number of
    /// vertices and edges.
    pub fn with_capacity(vertex_capacity: usize, edge_capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_capacity),
            ids: FxHashMap::with_capacity_and_hasher(vertex_capacity, Default::default()),
            adjacency: Vec::with_capacity(vertex_capacity),
            endpoints: Vec::with_capacity(edge_capacity),
            ty: PhantomData,
        }
    }
}

impl<V> Graph<V, Undirected> {
    pub fn new_undirected() -> Self {
        Self::new()
    }
}

impl<V> Graph<V, Directed> {
    pub fn new_directed() -> Self {
        Self::new()
    }
}

impl<V, Ty: EdgeType> Default for Graph<V, Ty> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, Ty: EdgeType> Graph<V, Ty> {
    /// Returns `true` if the edges in the graph are directed.
    pub fn is_directed(&self) -> bool {
        Ty::is_directed()
    }

    /// Returns the vertices in the order in which they were added.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of successful [`add_edge`](Graph::add_edge) calls.
    pub fn edge_count(&self) -> usize {
        self.endpoints.len()
    }

    /// Returns the vertex with given ID, if it exists.
    pub fn vertex(&self, id: VertexId) -> Option<&V> {
        self.vertices.get(id.as_usize())
    }

    pub fn vertex_ids(&self) -> VertexIds {
        VertexIds::new(self.vertices.len())
    }

    /// Returns the IDs of the neighbors of given vertex.
    ///
    /// # Panics
    ///
    /// Panics if the ID does not belong to a vertex of this graph.
    pub fn neighbor_ids(&self, id: VertexId) -> &[VertexId] {
        &self.adjacency[id.as_usize()]
    }

    /// Returns an iterator over all vertices paired with their neighbors, in
    /// vertex insertion order.
    pub fn adjacency(&self) -> Adjacency<'_, V> {
        Adjacency {
            inner: self.vertices.iter().zip(self.adjacency.iter()),
            vertices: &self.vertices,
        }
    }

    /// Returns an iterator over all edges as `(from, to)` pairs, in the order
    /// in which they were added.
    ///
    /// Unlike [`adjacency`](Graph::adjacency), each edge of an undirected
    /// graph is reported once.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        self.endpoints.iter().map(|[from, to]| {
            (
                &self.vertices[from.as_usize()],
                &self.vertices[to.as_usize()],
            )
        })
    }

    pub(crate) fn edge_endpoints(&self) -> &[[VertexId; 2]] {
        &self.endpoints
    }
}

impl<V: VertexKey, Ty: EdgeType> Graph<V, Ty> {
    /// Adds a vertex to the graph and returns its ID.
    ///
    /// If the vertex is already present, nothing changes and the existing ID
    /// is returned.
    pub fn add_vertex(&mut self, vertex: V) -> VertexId {
        match self.ids.entry(vertex) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                let id = VertexId::new(self.vertices.len());
                self.vertices.push(entry.key().clone());
                self.adjacency.push(Vec::new());
                entry.insert(id);
                id
            }
        }
    }

    /// Adds an edge between two vertices.
    ///
    /// Endpoints that are not in the graph yet are added first (`from` before
    /// `to`). In an undirected graph, both endpoints get the other one as a
    /// neighbor.
    pub fn add_edge(&mut self, from: V, to: V) {
        let from = self.add_vertex(from);
        let to = self.add_vertex(to);

        self.adjacency[from.as_usize()].push(to);

        if !Ty::is_directed() {
            self.adjacency[to.as_usize()].push(from);
        }

        self.endpoints.push([from, to]);
    }

    pub fn extend_with_vertices<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = V>,
    {
        for vertex in iter {
            self.add_vertex(vertex);
        }
    }

    pub fn extend_with_edges<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (V, V)>,
    {
        for (from, to) in iter {
            self.add_edge(from, to);
        }
    }

    /// Returns the ID of given vertex, if it is in the graph.
    pub fn find_vertex<Q>(&self, vertex: &Q) -> Option<VertexId>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.ids.get(vertex).copied()
    }

    pub fn contains_vertex<Q>(&self, vertex: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.ids.contains_key(vertex)
    }

    /// Returns the ID of given vertex or [`UnknownVertex`] error if it has
    /// never been added.
    pub fn vertex_id(&self, vertex: &V) -> Result<VertexId, UnknownVertex<V>> {
        self.find_vertex(vertex)
            .ok_or_else(|| UnknownVertex(vertex.clone()))
    }

    /// Returns the neighbors of given vertex in edge insertion order.
    ///
    /// An isolated vertex has no neighbors, a vertex that has never been added
    /// results in [`UnknownVertex`] error.
    pub fn neighbors(&self, vertex: &V) -> Result<NeighborsIter<'_, V>, UnknownVertex<V>> {
        let id = self.vertex_id(vertex)?;
        Ok(NeighborsIter {
            ids: self.adjacency[id.as_usize()].iter(),
            vertices: &self.vertices,
        })
    }
}

impl<V, Ty: EdgeType> GraphBase for Graph<V, Ty> {
    type EdgeType = Ty;

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

impl<V, Ty: EdgeType> Neighbors for Graph<V, Ty> {
    fn neighbor_ids(&self, from: VertexId) -> &[VertexId] {
        &self.adjacency[from.as_usize()]
    }
}

impl<V, Ty> Index<VertexId> for Graph<V, Ty> {
    type Output = V;

    fn index(&self, id: VertexId) -> &Self::Output {
        &self.vertices[id.as_usize()]
    }
}

/// Renders each vertex followed by its neighbors, one vertex per line:
/// `"<vertex> -> <neighbor> <neighbor> \n"`.
impl<V: fmt::Display, Ty> fmt::Display for Graph<V, Ty> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, neighbors) in self.vertices.iter().zip(self.adjacency.iter()) {
            write!(f, "{vertex} -> ")?;
            for neighbor in neighbors {
                write!(f, "{} ", self.vertices[neighbor.as_usize()])?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Iterator over the neighbors of a vertex.
///
/// Returned by [`Graph::neighbors`].
#[derive(Debug, Clone)]
pub struct NeighborsIter<'a, V> {
    ids: slice::Iter<'a, VertexId>,
    vertices: &'a [V],
}

impl<'a, V> Iterator for NeighborsIter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.ids.next().map(|id| &self.vertices[id.as_usize()])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl<V> DoubleEndedIterator for NeighborsIter<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.ids.next_back().map(|id| &self.vertices[id.as_usize()])
    }
}

impl<V> ExactSizeIterator for NeighborsIter<'_, V> {}

impl<V> FusedIterator for NeighborsIter<'_, V> {}

/// Iterator over vertices and their neighbors.
///
/// Returned by [`Graph::adjacency`].
#[derive(Debug, Clone)]
pub struct Adjacency<'a, V> {
    inner: Zip<slice::Iter<'a, V>, slice::Iter<'a, Vec<VertexId>>>,
    vertices: &'a [V],
}

impl<'a, V> Iterator for Adjacency<'a, V> {
    type Item = (&'a V, NeighborsIter<'a, V>);

    fn next(&mut self) -> Option<Self::Item> {
        let (vertex, neighbors) = self.inner.next()?;
        let neighbors = NeighborsIter {
            ids: neighbors.iter(),
            vertices: self.vertices,
        };
        Some((vertex, neighbors))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Adjacency<'_, V> {}

impl<V> FusedIterator for Adjacency<'_, V> {}
