//! Implementations of graph traversal methods.
//!
//! All traversal implementations in this module are **iterative**, that is,
//! they don't use recursion. This means that
//!
//! * &#128077; visitor is lazy and can be stopped without tricks,
//! * &#128077; visitor state is independent on the graph itself, allowing
//!   the graph to grow during traversal,
//! * &#128077; traversal is not limited by the size of the program stack.
//!
//! Neighbors of a vertex are always examined in the order in which the edges
//! were added, so the traversal order is fully determined by the graph.

pub mod bfs;
pub mod dfs;

pub(crate) mod raw;
mod visit_set;

#[doc(inline)]
pub use self::{
    bfs::Bfs,
    dfs::{Dfs, DfsEvents},
    visit_set::{TypedBitSet, VisitSet},
};

use crate::core::{
    id::{VertexId, VertexIds},
    GraphBase,
};

/// Trait for a specific graph traversal approach.
#[doc(alias = "Walker")]
pub trait Visitor<G> {
    /// The type of the elements being visited.
    type Item;

    /// Advances the visitor and returns the next visited element in given
    /// graph.
    ///
    /// The difference from the [`Iterator::next`] is that the visitor doesn't
    /// hold a reference to the graph and thus allows modifications to the graph
    /// between individual visitor steps or passing the visitor around without
    /// lifetime problems.
    ///
    /// # Examples
    ///
    /// ```
    /// use stepgraph::{
    ///     visit::{Bfs, Visitor},
    ///     Graph,
    /// };
    ///
    /// let mut graph = Graph::new_directed();
    /// graph.add_edge("a", "b");
    ///
    /// let a = graph.find_vertex("a").unwrap();
    ///
    /// let mut bfs = Bfs::new(&graph);
    /// let mut visitor = bfs.start(a);
    ///
    /// let mut visited = Vec::new();
    /// while let Some(id) = visitor.visit_next(&graph) {
    ///     let vertex = *graph.vertex(id).unwrap();
    ///     visited.push(vertex);
    ///
    ///     if vertex == "a" {
    ///         // Extend the graph during the traversal. Vertex "b" has been
    ///         // discovered but not explored yet.
    ///         graph.add_edge("b", "c");
    ///     }
    /// }
    ///
    /// assert_eq!(visited, vec!["a", "b", "c"]);
    /// ```
    fn visit_next(&mut self, graph: &G) -> Option<Self::Item>;

    /// Returns an [iterator](Iterator) that uses the visitor to iterate over
    /// the elements in given graph.
    fn iter<'a>(&'a mut self, graph: &'a G) -> Iter<'a, Self, G>
    where
        Self: Sized,
    {
        Iter {
            visitor: self,
            graph,
        }
    }

    /// Converts the visitor into an [iterator](Iterator) to visit the elements
    /// in given graph.
    fn into_iter(self, graph: &G) -> IntoIter<'_, Self, G>
    where
        Self: Sized,
    {
        IntoIter {
            visitor: self,
            graph,
        }
    }
}

/// Visitor iterator returned from [`Visitor::iter`].
pub struct Iter<'a, V, G> {
    visitor: &'a mut V,
    graph: &'a G,
}

impl<'a, V, G> Iterator for Iter<'a, V, G>
where
    V: Visitor<G>,
{
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.visitor.visit_next(self.graph)
    }
}

/// Visitor iterator returned from [`Visitor::into_iter`].
pub struct IntoIter<'a, V, G> {
    visitor: V,
    graph: &'a G,
}

impl<'a, V, G> Iterator for IntoIter<'a, V, G>
where
    V: Visitor<G>,
{
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.visitor.visit_next(self.graph)
    }
}

/// A collection of starting vertices for a graph traversal.
///
/// This trait is implemented for any [`Iterator`] over vertex IDs.
pub trait VisitRoots {
    /// Returns next ID to start the traversal from.
    ///
    /// Note that the returned ID might have already been visited. It is the
    /// responsibility of the visitor to ignore such elements.
    fn next_root(&mut self) -> Option<VertexId>;

    /// Returns `true` if the collection can determine that all remaining roots
    /// have already been visited based on the currently visited set.
    ///
    /// By default, `false` is returned which effectively delegates the
    /// indication of being done for [`VisitRoots::next_root`] by returning
    /// `None`.
    fn is_done(&mut self, _visited: &impl VisitSet<VertexId>) -> bool {
        false
    }
}

impl<T> VisitRoots for T
where
    T: Iterator<Item = VertexId>,
{
    fn next_root(&mut self) -> Option<VertexId> {
        self.next()
    }
}

/// A [`VisitRoots`] collection for visiting all vertices in a graph, in their
/// insertion order.
pub struct VisitAll<'a, G> {
    graph: &'a G,
    ids: VertexIds,
}

impl<'a, G> VisitAll<'a, G>
where
    G: GraphBase,
{
    /// Creates the collection from the given graph.
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            ids: graph.vertex_ids(),
        }
    }
}

impl<G> VisitRoots for VisitAll<'_, G>
where
    G: GraphBase,
{
    fn next_root(&mut self) -> Option<VertexId> {
        self.ids.next()
    }

    // Optimize the early return for cases when the whole graph was traversed
    // yet the `self.ids` iterator has not been exhausted.
    fn is_done(&mut self, visited: &impl VisitSet<VertexId>) -> bool {
        // Since we are holding a shared reference to the graph, it could not
        // have been mutated during traversal.
        visited.visited_count() == self.graph.vertex_count()
    }
}

/// Strictly monotonically increasing numbering of depth-first search events.
///
/// The counter starts at zero and is incremented before every discovery and
/// every finish, so the first discovered vertex gets time 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time(pub usize);

/// Depth-first search visitor event.
///
/// Use [`DfsEvents`] visitor to traverse a graph by reporting DFS events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DfsEvent {
    /// An edge of the tree formed by the traversal. Always immediately
    /// followed by the [`Open`](DfsEvent::Open) event of `to`.
    TreeEdge {
        /// Source endpoint of the edge.
        from: VertexId,

        /// Target endpoint of the edge.
        to: VertexId,
    },

    /// A new vertex was discovered.
    Open {
        /// Discovered vertex.
        vertex: VertexId,

        /// Discovery time.
        time: Time,
    },

    /// All neighbors of the vertex have been explored.
    Close {
        /// Finished vertex.
        vertex: VertexId,

        /// Finish time.
        time: Time,
    },
}

#[cfg(test)]
mod tests {
    use crate::{
        core::marker::{Directed, Undirected},
        graph::Graph,
    };

    use super::*;

    macro_rules! dfs_event {
        (open, $v:expr, $t:expr) => {
            DfsEvent::Open {
                vertex: $v,
                time: Time($t),
            }
        };
        (tree, ($u:expr, $v:expr)) => {
            DfsEvent::TreeEdge { from: $u, to: $v }
        };
        (close, $v:expr, $t:expr) => {
            DfsEvent::Close {
                vertex: $v,
                time: Time($t),
            }
        };
    }

    fn v(index: usize) -> VertexId {
        index.into()
    }

    fn create_connected_graph() -> Graph<usize, Undirected> {
        let mut graph = Graph::new_undirected();

        graph.extend_with_vertices(0..6);
        graph.extend_with_edges([(0, 1), (1, 2), (1, 3), (1, 4), (2, 5), (5, 4)]);

        graph
    }

    fn create_disconnected_graph() -> Graph<usize, Undirected> {
        let mut graph = Graph::new_undirected();

        graph.extend_with_vertices(0..6);
        graph.extend_with_edges([(0, 1), (1, 2), (3, 4)]);

        graph
    }

    #[test]
    fn bfs_connected() {
        let graph = create_connected_graph();

        let vertices = Bfs::new(&graph).start(v(0)).iter(&graph).collect::<Vec<_>>();

        assert_eq!(vertices, vec![v(0), v(1), v(2), v(3), v(4), v(5)]);
    }

    #[test]
    fn dfs_connected() {
        let graph = create_connected_graph();

        let vertices = Dfs::new(&graph).start(v(0)).iter(&graph).collect::<Vec<_>>();

        assert_eq!(vertices, vec![v(0), v(1), v(2), v(5), v(4), v(3)]);
    }

    #[test]
    fn bfs_disconnected() {
        let graph = create_disconnected_graph();

        let vertices = Bfs::new(&graph).start(v(3)).iter(&graph).collect::<Vec<_>>();

        assert_eq!(vertices, vec![v(3), v(4)]);
    }

    #[test]
    fn dfs_disconnected() {
        let graph = create_disconnected_graph();

        let vertices = Dfs::new(&graph).start(v(1)).iter(&graph).collect::<Vec<_>>();

        assert_eq!(vertices, vec![v(1), v(0), v(2)]);
    }

    #[test]
    fn bfs_disconnected_all() {
        let graph = create_disconnected_graph();

        let vertices = Bfs::new(&graph)
            .start_all(&graph)
            .iter(&graph)
            .collect::<Vec<_>>();

        assert_eq!(vertices, vec![v(0), v(1), v(2), v(3), v(4), v(5)]);
    }

    #[test]
    fn dfs_disconnected_all() {
        let graph = create_disconnected_graph();

        let vertices = Dfs::new(&graph)
            .start_all(&graph)
            .iter(&graph)
            .collect::<Vec<_>>();

        assert_eq!(vertices, vec![v(0), v(1), v(2), v(3), v(4), v(5)]);
    }

    #[test]
    fn bfs_disconnected_multi() {
        let graph = create_disconnected_graph();

        let vertices = Bfs::new(&graph)
            .start_multi([v(3), v(1), v(0)].into_iter())
            .iter(&graph)
            .collect::<Vec<_>>();

        // v0 was already reached from v1, v5 is not among the roots.
        assert_eq!(vertices, vec![v(3), v(4), v(1), v(0), v(2)]);
    }

    #[test]
    fn dfs_multi_invalid_root_skipped() {
        let graph = create_disconnected_graph();

        let vertices = Dfs::new(&graph)
            .start_multi([v(42), v(5)].into_iter())
            .iter(&graph)
            .collect::<Vec<_>>();

        assert_eq!(vertices, vec![v(5)]);
    }

    #[test]
    fn bfs_graph_grows_during_visit() {
        let mut graph = Graph::new_directed();
        graph.add_edge(0, 1);

        let mut bfs = Bfs::new(&graph);
        let mut visitor = bfs.start(v(0));

        assert_eq!(visitor.visit_next(&graph), Some(v(0)));

        graph.add_edge(1, 2);

        assert_eq!(visitor.visit_next(&graph), Some(v(1)));
        assert_eq!(visitor.visit_next(&graph), Some(v(2)));
        assert_eq!(visitor.visit_next(&graph), None);
    }

    #[test]
    fn bfs_reset() {
        let graph = create_connected_graph();
        let mut bfs = Bfs::new(&graph);

        assert_eq!(bfs.start(v(0)).iter(&graph).count(), 6);
        assert_eq!(bfs.visited().visited_count(), 6);

        // Everything is visited already.
        assert_eq!(bfs.start(v(3)).iter(&graph).count(), 0);

        bfs.reset();
        assert_eq!(bfs.start(v(3)).iter(&graph).count(), 6);
    }

    #[test]
    fn bfs_start_visited_root() {
        let graph = create_disconnected_graph();
        let mut bfs = Bfs::new(&graph);

        assert_eq!(
            bfs.start(v(0)).iter(&graph).collect::<Vec<_>>(),
            vec![v(0), v(1), v(2)]
        );
        assert_eq!(bfs.start(v(2)).iter(&graph).next(), None);
        assert_eq!(
            bfs.start(v(3)).iter(&graph).collect::<Vec<_>>(),
            vec![v(3), v(4)]
        );
    }

    #[test]
    fn dfs_start_visited_root() {
        let graph = create_connected_graph();
        let mut dfs = Dfs::new(&graph);

        assert_eq!(dfs.start(v(0)).iter(&graph).count(), 6);
        assert_eq!(dfs.start(v(3)).iter(&graph).count(), 0);
    }

    #[test]
    fn dfs_events() {
        let graph = create_connected_graph();

        let events = DfsEvents::new(&graph)
            .start(v(0))
            .iter(&graph)
            .collect::<Vec<_>>();

        let expected = vec![
            dfs_event!(open, v(0), 1),
            dfs_event!(tree, (v(0), v(1))),
            dfs_event!(open, v(1), 2),
            dfs_event!(tree, (v(1), v(2))),
            dfs_event!(open, v(2), 3),
            dfs_event!(tree, (v(2), v(5))),
            dfs_event!(open, v(5), 4),
            dfs_event!(tree, (v(5), v(4))),
            dfs_event!(open, v(4), 5),
            dfs_event!(close, v(4), 6),
            dfs_event!(close, v(5), 7),
            dfs_event!(close, v(2), 8),
            dfs_event!(tree, (v(1), v(3))),
            dfs_event!(open, v(3), 9),
            dfs_event!(close, v(3), 10),
            dfs_event!(close, v(1), 11),
            dfs_event!(close, v(0), 12),
        ];

        assert_eq!(events, expected);
    }

    #[test]
    fn dfs_events_directed() {
        //                +-------------+
        //                v             |
        // (0) --> (1) --> (2) --> (3) -+
        //          |
        //          +----> (4)
        let mut graph = Graph::<_, Directed>::new();

        graph.extend_with_edges([(0, 1), (1, 2), (2, 3), (3, 2), (1, 4)]);

        let events = DfsEvents::new(&graph)
            .start(v(0))
            .iter(&graph)
            .collect::<Vec<_>>();

        let expected = vec![
            dfs_event!(open, v(0), 1),
            dfs_event!(tree, (v(0), v(1))),
            dfs_event!(open, v(1), 2),
            dfs_event!(tree, (v(1), v(2))),
            dfs_event!(open, v(2), 3),
            dfs_event!(tree, (v(2), v(3))),
            dfs_event!(open, v(3), 4),
            dfs_event!(close, v(3), 5),
            dfs_event!(close, v(2), 6),
            dfs_event!(tree, (v(1), v(4))),
            dfs_event!(open, v(4), 7),
            dfs_event!(close, v(4), 8),
            dfs_event!(close, v(1), 9),
            dfs_event!(close, v(0), 10),
        ];

        assert_eq!(events, expected);
    }

    #[test]
    fn dfs_events_isolated() {
        let mut graph = Graph::<_, Undirected>::new();

        let v0 = graph.add_vertex(());

        let events = DfsEvents::new(&graph)
            .start(v0)
            .iter(&graph)
            .collect::<Vec<_>>();

        let expected = vec![dfs_event!(open, v0, 1), dfs_event!(close, v0, 2)];

        assert_eq!(events, expected);
    }

    #[test]
    fn dfs_events_all_shared_time() {
        let graph = create_disconnected_graph();

        let events = DfsEvents::new(&graph)
            .start_all(&graph)
            .iter(&graph)
            .filter(|event| !matches!(event, DfsEvent::TreeEdge { .. }))
            .collect::<Vec<_>>();

        let expected = vec![
            dfs_event!(open, v(0), 1),
            dfs_event!(open, v(1), 2),
            dfs_event!(open, v(2), 3),
            dfs_event!(close, v(2), 4),
            dfs_event!(close, v(1), 5),
            dfs_event!(close, v(0), 6),
            dfs_event!(open, v(3), 7),
            dfs_event!(open, v(4), 8),
            dfs_event!(close, v(4), 9),
            dfs_event!(close, v(3), 10),
            dfs_event!(open, v(5), 11),
            dfs_event!(close, v(5), 12),
        ];

        assert_eq!(events, expected);
    }
}
