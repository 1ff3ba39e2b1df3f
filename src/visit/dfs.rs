use crate::core::{id::VertexId, GraphBase, Neighbors};

use super::{
    raw::{RawDfs, RawDfsEvent, RawVisit, RawVisitMulti},
    DfsEvent, Time, VisitAll, VisitRoots, VisitSet, Visitor,
};

/// Depth-first search in preorder.
///
/// A vertex is reported when it is discovered, before any of its neighbors
/// is explored.
pub struct Dfs {
    raw: RawVisit<RawDfs>,
}

pub struct DfsRooted<'a> {
    raw: &'a mut RawVisit<RawDfs>,
}

pub struct DfsMulti<'a, S>
where
    S: VisitRoots,
{
    raw: &'a mut RawVisit<RawDfs>,
    multi: RawVisitMulti<RawDfs, S>,
}

impl Dfs {
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
    /// was already visited yields nothing. Use [`reset`](Dfs::reset) to walk
    /// again.
    pub fn start(&mut self, root: VertexId) -> DfsRooted<'_> {
        self.raw.start(root);
        DfsRooted { raw: &mut self.raw }
    }

    /// Visits all vertices of the graph, starting a new search from every
    /// vertex not visited yet, in vertex insertion order.
    pub fn start_all<'a, G>(&'a mut self, graph: &'a G) -> DfsMulti<'a, VisitAll<'a, G>>
    where
        G: GraphBase,
    {
        DfsMulti {
            raw: &mut self.raw,
            multi: RawVisitMulti::new(VisitAll::new(graph)),
        }
    }

    pub fn start_multi<S>(&mut self, roots: S) -> DfsMulti<'_, S>
    where
        S: VisitRoots,
    {
        DfsMulti {
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

fn next_open<G>(raw: &mut RawVisit<RawDfs>, graph: &G) -> Option<VertexId>
where
    G: Neighbors,
{
    loop {
        if let RawDfsEvent::Open { vertex, .. } = raw.next(graph)? {
            return Some(vertex);
        }
    }
}

impl<G> Visitor<G> for DfsRooted<'_>
where
    G: Neighbors,
{
    type Item = VertexId;

    fn visit_next(&mut self, graph: &G) -> Option<Self::Item> {
        next_open(self.raw, graph)
    }
}

impl<S, G> Visitor<G> for DfsMulti<'_, S>
where
    S: VisitRoots,
    G: Neighbors,
{
    type Item = VertexId;

    fn visit_next(&mut self, graph: &G) -> Option<Self::Item> {
        self.multi.next_multi(
            self.raw,
            |raw| next_open(raw, graph),
            |vertex| graph.contains_vertex_id(vertex),
        )
    }
}

/// Depth-first search reporting [`DfsEvent`]s.
///
/// Discovery and finish times of all vertices visited by one rooted or
/// multi-rooted walk are drawn from one counter, so the intervals
/// `[open, close]` of any two vertices are either disjoint or nested.
///
/// # Examples
///
/// ```
/// use stepgraph::{
///     visit::{DfsEvent, DfsEvents, Time, Visitor},
///     Graph,
/// };
///
/// let mut graph = Graph::new_undirected();
/// graph.extend_with_edges([("a", "b"), ("b", "c")]);
///
/// let finish_order = DfsEvents::new(&graph)
///     .start_all(&graph)
///     .iter(&graph)
///     .filter_map(|event| match event {
///         DfsEvent::Close { vertex, time } => Some((*graph.vertex(vertex).unwrap(), time)),
///         _ => None,
///     })
///     .collect::<Vec<_>>();
///
/// assert_eq!(finish_order, vec![("c", Time(4)), ("b", Time(5)), ("a", Time(6))]);
/// ```
pub struct DfsEvents {
    raw: RawVisit<RawDfs>,
}

pub struct DfsEventsRooted<'a> {
    raw: &'a mut RawVisit<RawDfs>,
    pending: Option<DfsEvent>,
    time: usize,
}

pub struct DfsEventsMulti<'a, S>
where
    S: VisitRoots,
{
    raw: &'a mut RawVisit<RawDfs>,
    multi: RawVisitMulti<RawDfs, S>,
    pending: Option<DfsEvent>,
    time: usize,
}

impl DfsEvents {
    pub fn new<G>(graph: &G) -> Self
    where
        G: GraphBase,
    {
        Self {
            raw: RawVisit::new(graph.vertex_count()),
        }
    }

    pub fn start(&mut self, root: VertexId) -> DfsEventsRooted<'_> {
        self.raw.start(root);
        DfsEventsRooted {
            raw: &mut self.raw,
            pending: None,
            time: 0,
        }
    }

    pub fn start_all<'a, G>(&'a mut self, graph: &'a G) -> DfsEventsMulti<'a, VisitAll<'a, G>>
    where
        G: GraphBase,
    {
        DfsEventsMulti {
            raw: &mut self.raw,
            multi: RawVisitMulti::new(VisitAll::new(graph)),
            pending: None,
            time: 0,
        }
    }

    pub fn start_multi<S>(&mut self, roots: S) -> DfsEventsMulti<'_, S>
    where
        S: VisitRoots,
    {
        DfsEventsMulti {
            raw: &mut self.raw,
            multi: RawVisitMulti::new(roots),
            pending: None,
            time: 0,
        }
    }

    pub fn reset(&mut self) {
        self.raw.reset();
    }

    pub fn visited(&self) -> &impl VisitSet<VertexId> {
        &self.raw.visited
    }

    fn process_next(
        raw_event: RawDfsEvent,
        pending: &mut Option<DfsEvent>,
        time: &mut usize,
    ) -> DfsEvent {
        *time += 1;

        match raw_event {
            RawDfsEvent::Open { vertex, from } => {
                let open = DfsEvent::Open {
                    vertex,
                    time: Time(*time),
                };

                match from {
                    Some(from) => {
                        // Report the tree edge first, the open event goes
                        // right after it.
                        *pending = Some(open);
                        DfsEvent::TreeEdge { from, to: vertex }
                    }
                    None => open,
                }
            }
            RawDfsEvent::Close { vertex } => DfsEvent::Close {
                vertex,
                time: Time(*time),
            },
        }
    }
}

impl<G> Visitor<G> for DfsEventsRooted<'_>
where
    G: Neighbors,
{
    type Item = DfsEvent;

    fn visit_next(&mut self, graph: &G) -> Option<Self::Item> {
        if let Some(event) = self.pending.take() {
            return Some(event);
        }

        let raw_event = self.raw.next(graph)?;
        Some(DfsEvents::process_next(
            raw_event,
            &mut self.pending,
            &mut self.time,
        ))
    }
}

impl<S, G> Visitor<G> for DfsEventsMulti<'_, S>
where
    S: VisitRoots,
    G: Neighbors,
{
    type Item = DfsEvent;

    fn visit_next(&mut self, graph: &G) -> Option<Self::Item> {
        if let Some(event) = self.pending.take() {
            return Some(event);
        }

        let raw_event = self.multi.next_multi(
            self.raw,
            |raw| raw.next(graph),
            |vertex| graph.contains_vertex_id(vertex),
        )?;

        Some(DfsEvents::process_next(
            raw_event,
            &mut self.pending,
            &mut self.time,
        ))
    }
}
