//! Find hop-count distances from a single source vertex and the tree of
//! [breadth-first search] predecessors.
//!
//! [breadth-first search]: https://en.wikipedia.org/wiki/Breadth-first_search
//!
//! # Examples
//!
//! ```
//! use stepgraph::{algo::BfsTree, Graph};
//!
//! let mut graph = Graph::new_undirected();
//!
//! graph.extend_with_edges([
//!     ("Prague", "Vienna"),
//!     ("Prague", "Nuremberg"),
//!     ("Vienna", "Bratislava"),
//!     ("Nuremberg", "Munich"),
//!     ("Munich", "Florence"),
//! ]);
//!
//! let tree = BfsTree::on(&graph).run(&"Prague").unwrap();
//!
//! assert_eq!(tree.dist(&"Florence"), Some(3));
//!
//! let path = tree.reconstruct(&"Florence").copied().collect::<Vec<_>>();
//! assert_eq!(path, vec!["Munich", "Nuremberg", "Prague"]);
//! ```

use std::marker::PhantomData;

use rustc_hash::FxHashMap;

use crate::{
    core::{
        error::UnknownVertex,
        id::{VertexId, VertexKey},
        marker::EdgeType,
    },
    graph::Graph,
    visit::raw::{RawBfs, RawVisit},
};

/// Distances and predecessors from a single source vertex.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct BfsTree<V> {
    source: V,
    dist: FxHashMap<V, usize>,
    pred: FxHashMap<V, V>,
    reached: Vec<V>,
}

impl<V: VertexKey> BfsTree<V> {
    /// Source vertex where the search was started.
    pub fn source(&self) -> &V {
        &self.source
    }

    /// Returns the number of edges on a shortest path from the source to
    /// given vertex, or `None` if the vertex is not reachable from the source
    /// (or is not in the graph at all).
    pub fn dist(&self, to: &V) -> Option<usize> {
        self.dist.get(to).copied()
    }

    /// Returns the vertex from which given vertex was discovered. The source
    /// and unreached vertices have no predecessor.
    pub fn predecessor(&self, of: &V) -> Option<&V> {
        self.pred.get(of)
    }

    /// Returns `true` if the vertex is reachable from the source.
    pub fn is_reached(&self, vertex: &V) -> bool {
        self.dist.contains_key(vertex)
    }

    /// Returns the reached vertices in the order in which they were visited,
    /// starting with the source.
    pub fn reached(&self) -> &[V] {
        &self.reached
    }

    /// Returns an iterator over vertices on the path between the given vertex
    /// and the source vertex, in this order. The given vertex itself is not
    /// included, the source is.
    ///
    /// The iterator is empty if the vertex is the source or is not reached.
    pub fn reconstruct(&self, to: &V) -> PathReconstruction<'_, V> {
        PathReconstruction {
            curr: self.pred.get(to),
            pred: &self.pred,
        }
    }
}

/// Iterator over the vertices on the path from a vertex to the source vertex.
///
/// Returned by [`BfsTree::reconstruct`].
pub struct PathReconstruction<'a, V> {
    curr: Option<&'a V>,
    pred: &'a FxHashMap<V, V>,
}

impl<'a, V: VertexKey> Iterator for PathReconstruction<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = self.curr?;
        self.curr = self.pred.get(vertex);
        Some(vertex)
    }
}

pub struct BfsTreeBuilder<'a, V, Ty> {
    graph: &'a Graph<V, Ty>,
    ty: PhantomData<fn() -> V>,
}

impl<V> BfsTree<V> {
    pub fn on<Ty: EdgeType>(graph: &Graph<V, Ty>) -> BfsTreeBuilder<'_, V, Ty> {
        BfsTreeBuilder {
            graph,
            ty: PhantomData,
        }
    }
}

impl<'a, V, Ty> BfsTreeBuilder<'a, V, Ty>
where
    V: VertexKey,
    Ty: EdgeType,
{
    /// Runs the search from given source.
    ///
    /// Fails with [`UnknownVertex`] before doing any work if the source is not
    /// in the graph.
    pub fn run(self, source: &V) -> Result<BfsTree<V>, UnknownVertex<V>> {
        self.run_with(source, |_| {})
    }

    /// Same as [`run`](BfsTreeBuilder::run), but calls `on_visit` with every
    /// reached vertex once all its neighbors have been examined.
    pub fn run_with<F>(self, source: &V, on_visit: F) -> Result<BfsTree<V>, UnknownVertex<V>>
    where
        F: FnMut(&V),
    {
        let root = self.graph.vertex_id(source)?;
        Ok(bfs_tree(self.graph, root, on_visit))
    }
}

fn bfs_tree<V, Ty, F>(graph: &Graph<V, Ty>, root: VertexId, mut on_visit: F) -> BfsTree<V>
where
    V: VertexKey,
    Ty: EdgeType,
    F: FnMut(&V),
{
    debug!(
        vertex_count = graph.vertex_count(),
        edge_count = graph.edge_count(),
        "bfs tree: start"
    );

    let n = graph.vertex_count();

    // Indexed by vertex ID during the traversal, converted to maps keyed by
    // the vertices at the end.
    let mut dist = vec![None; n];
    let mut pred = vec![None; n];
    let mut reached = Vec::new();

    let mut raw = RawVisit::<RawBfs>::new(n);
    raw.start(root);
    dist[root.as_usize()] = Some(0usize);

    while let Some(vertex) = raw.next(graph, |from, to| {
        dist[to.as_usize()] = dist[from.as_usize()].map(|d| d + 1);
        pred[to.as_usize()] = Some(from);
        trace!(from = from.as_usize(), to = to.as_usize(), "bfs tree: discovered");
    }) {
        on_visit(&graph[vertex]);
        reached.push(vertex);
    }

    debug!(reached = reached.len(), "bfs tree: finished");

    BfsTree {
        source: graph[root].clone(),
        dist: reached
            .iter()
            .filter_map(|&id| Some((graph[id].clone(), dist[id.as_usize()]?)))
            .collect(),
        pred: reached
            .iter()
            .filter_map(|&id| Some((graph[id].clone(), graph[pred[id.as_usize()]?].clone())))
            .collect(),
        reached: reached.into_iter().map(|id| graph[id].clone()).collect(),
    }
}
