use crate::{
    core::{id::VertexKey, marker::EdgeType},
    graph::Graph,
};

use super::{iterative::dfs_iterative, recursive::dfs_recursive, Algo, DfsForest};

pub struct DfsForestBuilder<'a, V, Ty> {
    graph: &'a Graph<V, Ty>,
    algo: Algo,
}

impl<V> DfsForest<V> {
    pub fn on<Ty: EdgeType>(graph: &Graph<V, Ty>) -> DfsForestBuilder<'_, V, Ty> {
        DfsForestBuilder {
            graph,
            algo: Algo::default(),
        }
    }
}

impl<'a, V, Ty> DfsForestBuilder<'a, V, Ty>
where
    Ty: EdgeType,
{
    pub fn iterative(self) -> Self {
        self.using(Algo::Iterative)
    }

    pub fn recursive(self) -> Self {
        self.using(Algo::Recursive)
    }

    pub fn using(self, algo: Algo) -> Self {
        Self { algo, ..self }
    }

    pub fn run(self) -> DfsForest<V>
    where
        V: VertexKey,
    {
        self.run_with(|_| {})
    }

    /// Same as [`run`](DfsForestBuilder::run), but calls `on_discover` with
    /// every vertex right when it is discovered, before any of its neighbors
    /// is examined.
    pub fn run_with<F>(self, mut on_discover: F) -> DfsForest<V>
    where
        V: VertexKey,
        F: FnMut(&V),
    {
        let graph = self.graph;

        debug!(
            vertex_count = graph.vertex_count(),
            edge_count = graph.edge_count(),
            algo = ?self.algo,
            "dfs forest: start"
        );

        let raw = match self.algo {
            Algo::Iterative => dfs_iterative(graph, |v| on_discover(&graph[v])),
            Algo::Recursive => dfs_recursive(graph, |v| on_discover(&graph[v])),
        };

        debug!(roots = raw.roots.len(), "dfs forest: finished");

        raw.into_forest(graph)
    }
}
