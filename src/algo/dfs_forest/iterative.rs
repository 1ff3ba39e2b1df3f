use crate::{
    core::{id::VertexId, Neighbors},
    visit::{DfsEvent, DfsEvents, Visitor},
};

use super::RawForest;

pub fn dfs_iterative<G, F>(graph: &G, mut on_discover: F) -> RawForest
where
    G: Neighbors,
    F: FnMut(VertexId),
{
    let mut forest = RawForest::new(graph.vertex_count());
    let mut dfs = DfsEvents::new(graph);

    for event in dfs.start_all(graph).iter(graph) {
        match event {
            // Always reported right before opening the target, so the
            // predecessor is known when the vertex is opened.
            DfsEvent::TreeEdge { from, to } => forest.pred[to.as_usize()] = Some(from),
            DfsEvent::Open { vertex, time } => {
                if forest.pred[vertex.as_usize()].is_none() {
                    forest.roots.push(vertex);
                }

                trace!(vertex = vertex.as_usize(), time = time.0, "dfs forest: open");

                forest.discovery[vertex.as_usize()] = Some(time);
                forest.order.push(vertex);
                on_discover(vertex);
            }
            DfsEvent::Close { vertex, time } => {
                forest.finish[vertex.as_usize()] = Some(time);
            }
        }
    }

    forest
}
