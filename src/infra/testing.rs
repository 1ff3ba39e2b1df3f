use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::{
    algo::{BfsTree, DfsForest},
    core::{
        id::{VertexId, VertexKey},
        marker::EdgeType,
    },
    graph::Graph,
    visit::Time,
};

pub fn create_complete<Ty: EdgeType>(vertex_count: usize) -> Graph<usize, Ty> {
    let mut graph = Graph::with_capacity(vertex_count, vertex_count * vertex_count);
    graph.extend_with_vertices(0..vertex_count);

    for u in 0..vertex_count {
        for v in 0..vertex_count {
            if u == v {
                continue;
            }

            if !Ty::is_directed() && v > u {
                break;
            }

            graph.add_edge(u, v);
        }
    }

    graph
}

pub fn create_path<Ty: EdgeType>(vertex_count: usize) -> Graph<usize, Ty> {
    let mut graph = Graph::with_capacity(vertex_count, vertex_count.saturating_sub(1));
    graph.extend_with_vertices(0..vertex_count);
    graph.extend_with_edges((1..vertex_count).map(|v| (v - 1, v)));
    graph
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("vertex ids iterator count ({0}) is not equal to vertex count ({1})")]
    VertexIdsVertexCountMismatch(usize, usize),
    #[error("adjacency iterator count ({0}) is not equal to vertex count ({1})")]
    AdjacencyVertexCountMismatch(usize, usize),
    #[error("vertex {0:?} is not found under its own id")]
    VertexLookupMismatch(VertexId),
    #[error("neighbor {1:?} of vertex {0:?} does not exist")]
    NeighborOutOfBounds(VertexId, VertexId),
    #[error("edges iterator count ({0}) is not equal to edge count ({1})")]
    EdgesEdgeCountMismatch(usize, usize),
    #[error("sum of degrees ({0}) is not equal to doubled edge count ({1})")]
    HandshakingLemma(usize, usize),
    #[error("sum of out degrees ({0}) is not equal to edge count ({1})")]
    HandshakingLemmaDirected(usize, usize),
    #[error("vertex {0:?} is {2} times neighbor of {1:?}, but not the other way around")]
    UndirectedAsymmetry(VertexId, VertexId, usize),
}

pub fn check_consistency<V, Ty>(graph: &Graph<V, Ty>) -> Result<(), ConsistencyCheckError>
where
    V: VertexKey,
    Ty: EdgeType,
{
    fn cmp<F, E>(actual: usize, expected: usize, error: F) -> Result<(), E>
    where
        F: FnOnce(usize, usize) -> E,
    {
        if actual == expected {
            Ok(())
        } else {
            Err(error(actual, expected))
        }
    }

    let vertex_count = graph.vertex_count();
    let edge_count = graph.edge_count();

    cmp(
        graph.vertex_ids().count(),
        vertex_count,
        ConsistencyCheckError::VertexIdsVertexCountMismatch,
    )?;
    cmp(
        graph.adjacency().count(),
        vertex_count,
        ConsistencyCheckError::AdjacencyVertexCountMismatch,
    )?;
    cmp(
        graph.edges().count(),
        edge_count,
        ConsistencyCheckError::EdgesEdgeCountMismatch,
    )?;

    for id in graph.vertex_ids() {
        if graph.find_vertex(&graph[id]) != Some(id) {
            return Err(ConsistencyCheckError::VertexLookupMismatch(id));
        }

        for &neighbor in graph.neighbor_ids(id) {
            if neighbor.as_usize() >= vertex_count {
                return Err(ConsistencyCheckError::NeighborOutOfBounds(id, neighbor));
            }
        }
    }

    let degree_sum = graph
        .vertex_ids()
        .map(|id| graph.neighbor_ids(id).len())
        .sum::<usize>();

    if Ty::is_directed() {
        cmp(
            degree_sum,
            edge_count,
            ConsistencyCheckError::HandshakingLemmaDirected,
        )?;
    } else {
        cmp(
            degree_sum,
            2 * edge_count,
            ConsistencyCheckError::HandshakingLemma,
        )?;

        // Every undirected edge is recorded in both neighbor lists, so the
        // multiplicities must match in both directions.
        for u in graph.vertex_ids() {
            for &v in graph.neighbor_ids(u) {
                let forward = multiplicity(graph.neighbor_ids(u), v);
                let backward = multiplicity(graph.neighbor_ids(v), u);

                if forward != backward {
                    return Err(ConsistencyCheckError::UndirectedAsymmetry(v, u, forward));
                }
            }
        }
    }

    Ok(())
}

fn multiplicity(neighbors: &[VertexId], vertex: VertexId) -> usize {
    neighbors.iter().filter(|&&n| n == vertex).count()
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BfsTreeCheckError {
    #[error("source distance is {0:?} instead of zero")]
    SourceDistance(Option<usize>),
    #[error("source has a predecessor")]
    SourceHasPredecessor,
    #[error("neighbor {1:?} of reached vertex {0:?} is not reached")]
    NeighborNotReached(VertexId, VertexId),
    #[error("distance of {1:?} is more than one greater than distance of its neighbor {0:?}")]
    DistanceGap(VertexId, VertexId),
    #[error("reached vertex {0:?} has no predecessor")]
    MissingPredecessor(VertexId),
    #[error("predecessor of {0:?} does not have it as a neighbor")]
    PredecessorNotNeighbor(VertexId),
    #[error("distance of {0:?} is not one greater than distance of its predecessor")]
    TreeEdgeDistance(VertexId),
    #[error("unreached vertex {0:?} has a distance or a predecessor")]
    UnreachedHasPath(VertexId),
    #[error("reached vertices are not in non-decreasing order of distance")]
    ReachedOrder,
}

pub fn check_bfs_tree<V, Ty>(graph: &Graph<V, Ty>, tree: &BfsTree<V>) -> Result<(), BfsTreeCheckError>
where
    V: VertexKey,
    Ty: EdgeType,
{
    let source = tree.source();

    if tree.dist(source) != Some(0) {
        return Err(BfsTreeCheckError::SourceDistance(tree.dist(source)));
    }

    if tree.predecessor(source).is_some() {
        return Err(BfsTreeCheckError::SourceHasPredecessor);
    }

    for u in graph.vertex_ids() {
        let vertex = &graph[u];

        let Some(dist) = tree.dist(vertex) else {
            if tree.predecessor(vertex).is_some() {
                return Err(BfsTreeCheckError::UnreachedHasPath(u));
            }
            continue;
        };

        for &v in graph.neighbor_ids(u) {
            match tree.dist(&graph[v]) {
                Some(neighbor_dist) if neighbor_dist <= dist + 1 => {}
                Some(_) => return Err(BfsTreeCheckError::DistanceGap(u, v)),
                None => return Err(BfsTreeCheckError::NeighborNotReached(u, v)),
            }
        }

        if vertex == source {
            continue;
        }

        let pred = tree
            .predecessor(vertex)
            .ok_or(BfsTreeCheckError::MissingPredecessor(u))?;

        // Every vertex in the graph has an ID.
        let pred_id = graph
            .find_vertex(pred)
            .ok_or(BfsTreeCheckError::MissingPredecessor(u))?;

        if !graph.neighbor_ids(pred_id).contains(&u) {
            return Err(BfsTreeCheckError::PredecessorNotNeighbor(u));
        }

        if tree.dist(pred).map(|d| d + 1) != Some(dist) {
            return Err(BfsTreeCheckError::TreeEdgeDistance(u));
        }
    }

    let ordered = tree
        .reached()
        .windows(2)
        .all(|pair| tree.dist(&pair[0]) <= tree.dist(&pair[1]));

    if !ordered {
        return Err(BfsTreeCheckError::ReachedOrder);
    }

    Ok(())
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DfsForestCheckError {
    #[error("vertex {0:?} was not discovered or not finished")]
    NotVisited(VertexId),
    #[error("vertex {0:?} is finished before it is discovered")]
    InvalidInterval(VertexId),
    #[error("times are not exactly 1..={0}")]
    TimesNotContiguous(usize),
    #[error("intervals of {0:?} and {1:?} partially overlap")]
    PartialOverlap(VertexId, VertexId),
    #[error("predecessor of {0:?} does not have it as a neighbor")]
    PredecessorNotNeighbor(VertexId),
    #[error("predecessor of {0:?} is not its ancestor")]
    PredecessorNotAncestor(VertexId),
    #[error("vertex {0:?} is either a root with a predecessor or a non-root without one")]
    RootMismatch(VertexId),
    #[error("neighbor {1:?} of {0:?} was discovered after {0:?} was finished")]
    UnexploredEdge(VertexId, VertexId),
}

pub fn check_dfs_forest<V, Ty>(
    graph: &Graph<V, Ty>,
    forest: &DfsForest<V>,
) -> Result<(), DfsForestCheckError>
where
    V: VertexKey,
    Ty: EdgeType,
{
    let intervals = graph
        .vertex_ids()
        .map(|id| {
            let (discovery, finish) = forest
                .interval(&graph[id])
                .ok_or(DfsForestCheckError::NotVisited(id))?;

            if discovery >= finish {
                return Err(DfsForestCheckError::InvalidInterval(id));
            }

            Ok((discovery, finish))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let max_time = 2 * graph.vertex_count();
    let times = intervals
        .iter()
        .flat_map(|&(discovery, finish)| [discovery, finish])
        .collect::<FxHashSet<_>>();

    if times.len() != max_time || times.iter().any(|&Time(t)| t == 0 || t > max_time) {
        return Err(DfsForestCheckError::TimesNotContiguous(max_time));
    }

    for u in graph.vertex_ids() {
        let (d_u, f_u) = intervals[u.as_usize()];

        for v in graph.vertex_ids().skip(u.as_usize() + 1) {
            let (d_v, f_v) = intervals[v.as_usize()];

            let disjoint = f_u < d_v || f_v < d_u;
            let nested = (d_u < d_v && f_v < f_u) || (d_v < d_u && f_u < f_v);

            if !disjoint && !nested {
                return Err(DfsForestCheckError::PartialOverlap(u, v));
            }
        }

        // The neighbor must be discovered at the latest while the vertex is
        // being explored.
        for &v in graph.neighbor_ids(u) {
            if intervals[v.as_usize()].0 > f_u {
                return Err(DfsForestCheckError::UnexploredEdge(u, v));
            }
        }

        let vertex = &graph[u];
        let is_root = forest.roots().contains(vertex);

        match forest.predecessor(vertex) {
            Some(_) if is_root => return Err(DfsForestCheckError::RootMismatch(u)),
            None if !is_root => return Err(DfsForestCheckError::RootMismatch(u)),
            None => {}
            Some(pred) => {
                let pred_id = graph
                    .find_vertex(pred)
                    .ok_or(DfsForestCheckError::PredecessorNotNeighbor(u))?;

                if !graph.neighbor_ids(pred_id).contains(&u) {
                    return Err(DfsForestCheckError::PredecessorNotNeighbor(u));
                }

                if !forest.is_ancestor(pred, vertex) {
                    return Err(DfsForestCheckError::PredecessorNotAncestor(u));
                }
            }
        }
    }

    Ok(())
}
