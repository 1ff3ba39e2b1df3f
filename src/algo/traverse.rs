use crate::{
    core::{error::UnknownVertex, id::VertexKey, marker::EdgeType},
    graph::Graph,
    visit::raw::{RawBfs, RawVisit},
};

use super::{BfsTree, DfsForest};

/// Breadth-first traversal from `source`, calling `on_visit` with every
/// reachable vertex once all its neighbors have been examined.
///
/// Vertices not reachable from the source are never passed to `on_visit`. If
/// the source is not in the graph, [`UnknownVertex`] is returned and
/// `on_visit` is not called at all.
///
/// # Examples
///
/// ```
/// use stepgraph::{algo::traverse_bfs, Graph};
///
/// let mut graph = Graph::new_undirected();
/// graph.extend_with_edges([("A", "B"), ("A", "C"), ("B", "D"), ("E", "F")]);
///
/// let mut visited = Vec::new();
/// traverse_bfs(&graph, &"A", |v| visited.push(*v)).unwrap();
///
/// assert_eq!(visited, vec!["A", "B", "C", "D"]);
/// ```
pub fn traverse_bfs<V, Ty, F>(
    graph: &Graph<V, Ty>,
    source: &V,
    mut on_visit: F,
) -> Result<(), UnknownVertex<V>>
where
    V: VertexKey,
    Ty: EdgeType,
    F: FnMut(&V),
{
    let root = graph.vertex_id(source)?;

    let mut raw = RawVisit::<RawBfs>::new(graph.vertex_count());
    raw.start(root);

    while let Some(vertex) = raw.next(graph, |_, _| {}) {
        on_visit(&graph[vertex]);
    }

    Ok(())
}

/// Breadth-first traversal from `source` recording hop-count distances and
/// predecessors.
///
/// Unreached vertices have no distance (see [`BfsTree::dist`]).
pub fn traverse_bfs_with_paths<V, Ty>(
    graph: &Graph<V, Ty>,
    source: &V,
) -> Result<BfsTree<V>, UnknownVertex<V>>
where
    V: VertexKey,
    Ty: EdgeType,
{
    BfsTree::on(graph).run(source)
}

/// Depth-first traversal of the whole graph, calling `on_visit` with every
/// vertex when it is discovered.
///
/// A new search is started from every vertex not discovered yet, in vertex
/// insertion order, so all vertices are visited exactly once regardless of
/// connectivity.
///
/// # Examples
///
/// ```
/// use stepgraph::{algo::traverse_dfs, Graph};
///
/// let mut graph = Graph::new_undirected();
/// graph.extend_with_edges([("A", "B"), ("A", "C"), ("B", "D"), ("E", "F")]);
///
/// let mut visited = Vec::new();
/// traverse_dfs(&graph, |v| visited.push(*v));
///
/// assert_eq!(visited, vec!["A", "B", "D", "C", "E", "F"]);
/// ```
pub fn traverse_dfs<V, Ty, F>(graph: &Graph<V, Ty>, on_visit: F)
where
    V: VertexKey,
    Ty: EdgeType,
    F: FnMut(&V),
{
    DfsForest::on(graph).run_with(on_visit);
}

/// Depth-first traversal of the whole graph recording discovery and finish
/// times and predecessors of all vertices.
pub fn traverse_dfs_with_timestamps<V, Ty>(graph: &Graph<V, Ty>) -> DfsForest<V>
where
    V: VertexKey,
    Ty: EdgeType,
{
    DfsForest::on(graph).run()
}
