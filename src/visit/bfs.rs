use crate::core::{id::VertexId, GraphBase, Neighbors};

use super::{
    raw::{RawBfs, RawVisit, RawVisitMulti},
    VisitAll, VisitRoots, VisitSet, Visitor,
};

/// Breadth-first search.
///
/// A vertex is reported after all its neighbors have been examined and the
/// undiscovered ones queued. The vertices are therefore reported in
/// non-decreasing distance from the root.
pub struct Bfs {
    raw: RawVisit<RawBfs>,
}

pub struct BfsRooted<'a> {
    raw: &'a mut RawVisit<RawBfs>,
}

pub struct BfsMulti<'a, S>
where
    S: VisitRoots,
{
    raw: &'a mut RawVisit<RawBfs>,
    multi: RawVisitMulti<RawBfs, S>,
}

impl Bfs {
    pub fn new<G>(graph: &G) -> Self
    where
        G: GraphBase,
    {
        Self {
            raw: RawVisit::new(graph.vertex_count()),
        }
    }

    /// Starts the traversal from a single root. Only the vertices reachable
    /// from it are visited.
    ///
    /// The visited set is kept between walks, so starting from a vertex that
    /// was already visited yields nothing. Use [`reset`](Bfs::reset) to walk
    /// again.
    pub fn start(&mut self, root: VertexId) -> BfsRooted<'_> {
        self.raw.start(root);
        BfsRooted { raw: &mut self.raw }
    }

    /// Visits all vertices of the graph, starting a new search from every
    /// vertex not visited yet, in vertex insertion order.
    pub fn start_all<'a, G>(&'a mut self, graph: &'a G) -> BfsMulti<'a, VisitAll<'a, G>>
    where
        G: GraphBase,
    {
        BfsMulti {
            raw: &mut self.raw,
            multi: RawVisitMulti::new(VisitAll::new(graph)),
        }
    }

    pub fn start_multi<S>(&mut self, roots: S) -> BfsMulti<'_, S>
    where
        S: VisitRoots,
    {
        BfsMulti {
            raw: &mut self.raw,
            multi: RawVisitMulti::new(roots),
        }
    }

    pub fn reset(&mut self) {
        self.raw.reset();
    }

    pub fn visited(&self) -> &impl VisitSet<VertexId> {
        &self.raw.visited
    }
}

impl<G> Visitor<G> for BfsRooted<'_>
where
    G: Neighbors,
{
    type Item = VertexId;

    fn visit_next(&mut self, graph: &G) -> Option<Self::Item> {
        self.raw.next(graph, |_, _| {})
    }
}

impl<S, G> Visitor<G> for BfsMulti<'_, S>
where
    S: VisitRoots,
    G: Neighbors,
{
    type Item = VertexId;

    fn visit_next(&mut self, graph: &G) -> Option<Self::Item> {
        self.multi.next_multi(
            self.raw,
            |raw| raw.next(graph, |_, _| {}),
            |vertex| graph.contains_vertex_id(vertex),
        )
    }
}
