use proptest::{
    collection::vec,
    strategy::{Just, Strategy},
};

use crate::{
    core::marker::{Directed, EdgeType, Undirected},
    graph::Graph,
};

/// Generates graphs with vertices `0..n` for `n` in `1..=max_vertices` and up
/// to `2 * n` random edges. Self-loops and parallel edges are generated too.
pub fn graph<Ty: EdgeType>(max_vertices: usize) -> impl Strategy<Value = Graph<usize, Ty>>
where
    Ty: std::fmt::Debug,
{
    (1..=max_vertices.max(1))
        .prop_flat_map(|n| (Just(n), vec((0..n, 0..n), 0..=2 * n)))
        .prop_map(|(n, edges)| {
            let mut graph = Graph::with_capacity(n, edges.len());
            graph.extend_with_vertices(0..n);
            graph.extend_with_edges(edges);
            graph
        })
}

pub fn graph_undirected(max_vertices: usize) -> impl Strategy<Value = Graph<usize, Undirected>> {
    graph(max_vertices)
}

pub fn graph_directed(max_vertices: usize) -> impl Strategy<Value = Graph<usize, Directed>> {
    graph(max_vertices)
}
