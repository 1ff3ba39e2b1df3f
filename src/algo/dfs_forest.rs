//! Build the [depth-first search] forest of a graph together with discovery
//! and finish times of all vertices.
//!
//! See available parameters [here](DfsForestBuilder#implementations).
//!
//! The search starts from every vertex that has not been discovered yet, in
//! vertex insertion order, so the forest covers all vertices. The times are
//! drawn from a single counter shared by all trees of the forest. For any two
//! vertices, their `[discovery, finish]` intervals are either disjoint or one
//! contains the other.
//!
//! [depth-first search]: https://en.wikipedia.org/wiki/Depth-first_search
//!
//! # Examples
//!
//! ```
//! use stepgraph::{algo::DfsForest, visit::Time, Graph};
//!
//! let mut graph = Graph::new_directed();
//!
//! graph.extend_with_edges([("shirt", "tie"), ("tie", "jacket"), ("trousers", "shoes")]);
//! graph.add_vertex("watch");
//!
//! let forest = DfsForest::on(&graph).run();
//!
//! assert_eq!(forest.roots(), &["shirt", "trousers", "watch"]);
//! assert_eq!(forest.interval(&"tie"), Some((Time(2), Time(5))));
//! assert!(forest.is_ancestor(&"shirt", &"jacket"));
//! ```

use rustc_hash::FxHashMap;

use crate::{
    core::{
        id::{VertexId, VertexKey},
        marker::EdgeType,
    },
    graph::Graph,
    visit::Time,
};

mod builder;
mod iterative;
mod recursive;

pub use builder::DfsForestBuilder;

/// Discovery times, finish times and predecessors of all vertices in a graph.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct DfsForest<V> {
    discovery: FxHashMap<V, Time>,
    finish: FxHashMap<V, Time>,
    pred: FxHashMap<V, V>,
    roots: Vec<V>,
    order: Vec<V>,
}

impl<V: VertexKey> DfsForest<V> {
    /// Returns the time at which the vertex was discovered, or `None` if it is
    /// not in the graph.
    pub fn discovery(&self, vertex: &V) -> Option<Time> {
        self.discovery.get(vertex).copied()
    }

    /// Returns the time at which all descendants of the vertex were finished.
    pub fn finish(&self, vertex: &V) -> Option<Time> {
        self.finish.get(vertex).copied()
    }

    /// Returns the discovery and finish time of the vertex.
    pub fn interval(&self, vertex: &V) -> Option<(Time, Time)> {
        Some((self.discovery(vertex)?, self.finish(vertex)?))
    }

    /// Returns the parent of the vertex in the forest. Roots have no parent.
    pub fn predecessor(&self, of: &V) -> Option<&V> {
        self.pred.get(of)
    }

    /// Returns the roots of the trees in the forest, in the order in which the
    /// trees were built.
    pub fn roots(&self) -> &[V] {
        &self.roots
    }

    /// Returns all vertices in the order of their discovery (preorder).
    pub fn discovered(&self) -> &[V] {
        &self.order
    }

    /// Returns `true` if `ancestor` is a proper ancestor of `descendant` in
    /// the forest.
    pub fn is_ancestor(&self, ancestor: &V, descendant: &V) -> bool {
        match (self.interval(ancestor), self.interval(descendant)) {
            (Some((d_a, f_a)), Some((d_d, f_d))) => d_a < d_d && f_d < f_a,
            _ => false,
        }
    }
}

impl<V: VertexKey> PartialEq for DfsForest<V> {
    fn eq(&self, other: &Self) -> bool {
        self.discovery == other.discovery
            && self.finish == other.finish
            && self.pred == other.pred
            && self.roots == other.roots
            && self.order == other.order
    }
}

impl<V: VertexKey> Eq for DfsForest<V> {}

/// Algorithm for [`DfsForest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Algo {
    /// Explicit stack of partially explored vertices.
    ///
    /// The depth of the search is not limited by the size of the program
    /// stack. This is the default.
    #[default]
    Iterative,

    /// Recursive visit function with the traversal state passed by reference
    /// through the calls.
    ///
    /// The depth of the recursion equals the depth of the deepest tree in the
    /// forest, so deep graphs can overflow the program stack. It produces the
    /// same forest as [`Iterative`](Algo::Iterative).
    Recursive,
}

// Search state indexed by vertex IDs, shared by both implementations.
#[derive(Debug)]
struct RawForest {
    discovery: Vec<Option<Time>>,
    finish: Vec<Option<Time>>,
    pred: Vec<Option<VertexId>>,
    roots: Vec<VertexId>,
    order: Vec<VertexId>,
}

impl RawForest {
    fn new(vertex_count: usize) -> Self {
        Self {
            discovery: vec![None; vertex_count],
            finish: vec![None; vertex_count],
            pred: vec![None; vertex_count],
            roots: Vec::new(),
            order: Vec::with_capacity(vertex_count),
        }
    }

    fn into_forest<V, Ty>(self, graph: &Graph<V, Ty>) -> DfsForest<V>
    where
        V: VertexKey,
        Ty: EdgeType,
    {
        let key = |id: VertexId| graph[id].clone();

        let times = |times: Vec<Option<Time>>| -> FxHashMap<V, Time> {
            times
                .into_iter()
                .enumerate()
                .filter_map(|(index, time)| Some((key(VertexId::new(index)), time?)))
                .collect()
        };

        DfsForest {
            discovery: times(self.discovery),
            finish: times(self.finish),
            pred: self
                .pred
                .into_iter()
                .enumerate()
                .filter_map(|(index, pred)| Some((key(VertexId::new(index)), key(pred?))))
                .collect(),
            roots: self.roots.into_iter().map(key).collect(),
            order: self.order.into_iter().map(key).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{
        core::marker::{Directed, Undirected},
        graph::tests::create_letters_graph,
        infra::{
            proptest::{graph_directed, graph_undirected},
            testing::check_dfs_forest,
        },
        visit::{Dfs, Visitor},
    };

    use super::*;

    fn create_forest_graph() -> Graph<u32, Directed> {
        //  0 --> 1 --> 2     3 --> 4     5
        //        ^     |
        //        +-----+
        let mut graph = Graph::new_directed();

        graph.extend_with_edges([(0, 1), (1, 2), (2, 1), (3, 4)]);
        graph.add_vertex(5);

        graph
    }

    #[test]
    fn dfs_forest_letters() {
        let graph = create_letters_graph();
        let forest = DfsForest::on(&graph).run();

        let expected = [
            ("A", 1, 18),
            ("B", 2, 9),
            ("E", 3, 6),
            ("I", 4, 5),
            ("F", 7, 8),
            ("C", 10, 17),
            ("D", 11, 16),
            ("G", 12, 13),
            ("H", 14, 15),
        ];

        for (vertex, discovery, finish) in expected {
            assert_eq!(
                forest.interval(&vertex),
                Some((Time(discovery), Time(finish))),
                "{vertex}"
            );
        }

        let pred = [
            ("B", "A"),
            ("C", "A"),
            ("D", "C"),
            ("E", "B"),
            ("F", "B"),
            ("G", "D"),
            ("H", "D"),
            ("I", "E"),
        ];

        for (vertex, parent) in pred {
            assert_eq!(forest.predecessor(&vertex), Some(&parent), "{vertex}");
        }

        assert_eq!(forest.predecessor(&"A"), None);
        assert_eq!(forest.roots(), &["A"]);
        assert_eq!(
            forest.discovered(),
            &["A", "B", "E", "I", "F", "C", "D", "G", "H"]
        );

        check_dfs_forest(&graph, &forest).unwrap();
    }

    #[test]
    fn dfs_forest_letters_recursive() {
        let graph = create_letters_graph();

        let iterative = DfsForest::on(&graph).iterative().run();
        let recursive = DfsForest::on(&graph).recursive().run();

        assert_eq!(iterative, recursive);
    }

    #[test]
    fn dfs_forest_disconnected_shared_time() {
        let graph = create_forest_graph();
        let forest = DfsForest::on(&graph).run();

        assert_eq!(forest.interval(&0), Some((Time(1), Time(6))));
        assert_eq!(forest.interval(&2), Some((Time(3), Time(4))));
        assert_eq!(forest.interval(&3), Some((Time(7), Time(10))));
        assert_eq!(forest.interval(&5), Some((Time(11), Time(12))));

        assert_eq!(forest.roots(), &[0, 3, 5]);
        assert_eq!(forest.predecessor(&1), Some(&0));
        assert_eq!(forest.predecessor(&3), None);

        assert!(forest.is_ancestor(&0, &2));
        assert!(!forest.is_ancestor(&2, &0));
        assert!(!forest.is_ancestor(&0, &4));
        assert!(!forest.is_ancestor(&0, &0));

        check_dfs_forest(&graph, &forest).unwrap();
    }

    #[test]
    fn dfs_forest_disconnected_recursive() {
        let graph = create_forest_graph();

        assert_eq!(
            DfsForest::on(&graph).run(),
            DfsForest::on(&graph).using(Algo::Recursive).run()
        );
    }

    #[test]
    fn dfs_forest_observer_preorder() {
        let graph = create_letters_graph();

        let mut visited = Vec::new();
        DfsForest::on(&graph).run_with(|v| visited.push(*v));

        let mut visited_recursive = Vec::new();
        DfsForest::on(&graph)
            .recursive()
            .run_with(|v| visited_recursive.push(*v));

        assert_eq!(visited, vec!["A", "B", "E", "I", "F", "C", "D", "G", "H"]);
        assert_eq!(visited, visited_recursive);
    }

    #[test]
    fn dfs_forest_empty() {
        let graph = Graph::<char, Undirected>::new();
        let forest = DfsForest::on(&graph).run();

        assert!(forest.roots().is_empty());
        assert!(forest.discovered().is_empty());
        assert_eq!(forest.discovery(&'a'), None);
    }

    #[test]
    fn dfs_forest_deep_path_iterative() {
        let mut graph = Graph::new_directed();
        graph.extend_with_edges((0..100_000u32).map(|i| (i, i + 1)));

        let forest = DfsForest::on(&graph).run();

        assert_eq!(forest.roots(), &[0]);
        assert_eq!(forest.interval(&100_000), Some((Time(100_001), Time(100_002))));
        assert_eq!(forest.finish(&0), Some(Time(200_002)));
    }

    proptest! {
        #[test]
        fn proptest_dfs_forest_undirected(graph in graph_undirected(32)) {
            let forest = DfsForest::on(&graph).run();

            prop_assert_eq!(check_dfs_forest(&graph, &forest), Ok(()));
            prop_assert_eq!(forest.discovered().len(), graph.vertex_count());
        }

        #[test]
        fn proptest_dfs_forest_directed(graph in graph_directed(32)) {
            let forest = DfsForest::on(&graph).run();

            prop_assert_eq!(check_dfs_forest(&graph, &forest), Ok(()));
        }

        #[test]
        fn proptest_dfs_forest_recursive_agree_undirected(graph in graph_undirected(32)) {
            prop_assert_eq!(
                DfsForest::on(&graph).iterative().run(),
                DfsForest::on(&graph).recursive().run()
            );
        }

        #[test]
        fn proptest_dfs_forest_recursive_agree_directed(graph in graph_directed(32)) {
            prop_assert_eq!(
                DfsForest::on(&graph).iterative().run(),
                DfsForest::on(&graph).recursive().run()
            );
        }

        #[test]
        fn proptest_dfs_forest_preorder_matches_visitor(graph in graph_directed(32)) {
            let forest = DfsForest::on(&graph).run();
            let preorder = Dfs::new(&graph)
                .start_all(&graph)
                .iter(&graph)
                .map(|v| graph[v])
                .collect::<Vec<_>>();

            prop_assert_eq!(forest.discovered(), preorder.as_slice());
        }
    }
}
