use std::{collections::VecDeque, marker::PhantomData};

use crate::core::{id::VertexId, Neighbors};

use super::{TypedBitSet, VisitRoots, VisitSet};

pub trait TraversalCollection<T>: Default {
    fn push(&mut self, value: T);
    fn pop(&mut self) -> Option<T>;
    fn clear(&mut self);
}

pub struct Queue<T>(pub VecDeque<T>);

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self(VecDeque::new())
    }
}

impl<T> TraversalCollection<T> for Queue<T> {
    fn push(&mut self, value: T) {
        self.0.push_back(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

#[derive(Debug)]
pub struct Stack<T>(pub Vec<T>);

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> TraversalCollection<T> for Stack<T> {
    fn push(&mut self, value: T) {
        self.0.push(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop()
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

pub(crate) trait RawAlgo {
    type Item;
    type Collection: TraversalCollection<Self::Item>;

    fn start(id: VertexId) -> Self::Item;
    fn visit_on_start() -> bool;
}

pub(crate) struct RawVisit<A: RawAlgo> {
    pub collection: A::Collection,
    // Vertices are never removed from the graph, so a bit set indexed by the
    // vertex ID is always valid. It grows if the graph grows during visiting.
    pub visited: TypedBitSet<VertexId>,
}

impl<A: RawAlgo> RawVisit<A> {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            collection: A::Collection::default(),
            visited: TypedBitSet::with_capacity(vertex_count),
        }
    }

    pub fn start(&mut self, root: VertexId) {
        self.collection.clear();

        // A root reached by a previous walk starts an empty one.
        if A::visit_on_start() && !self.visited.visit(root) {
            return;
        }

        self.collection.push(A::start(root));
    }

    pub fn reset(&mut self) {
        self.collection.clear();
        self.visited.reset_visited();
    }
}

pub(crate) struct RawVisitMulti<A, S> {
    pub roots: S,
    ty: PhantomData<A>,
}

impl<A: RawAlgo, S: VisitRoots> RawVisitMulti<A, S> {
    pub fn new(roots: S) -> Self {
        Self {
            roots,
            ty: PhantomData,
        }
    }

    pub fn next_multi<F, R, G>(
        &mut self,
        raw: &mut RawVisit<A>,
        mut get_next: F,
        is_still_valid: G,
    ) -> Option<R>
    where
        F: FnMut(&mut RawVisit<A>) -> Option<R>,
        G: Fn(VertexId) -> bool,
    {
        match get_next(raw) {
            Some(next) => Some(next),
            None => {
                if self.roots.is_done(&raw.visited) {
                    return None;
                }

                // Get the next root that has not been visited yet if there is
                // any and that really belongs to the graph.
                let root = std::iter::from_fn(|| self.roots.next_root())
                    .find(|&v| !raw.visited.is_visited(&v) && is_still_valid(v))?;

                raw.start(root);
                get_next(raw)
            }
        }
    }
}

pub enum RawBfs {}

impl RawAlgo for RawBfs {
    type Item = VertexId;
    type Collection = Queue<VertexId>;

    fn start(id: VertexId) -> VertexId {
        id
    }

    fn visit_on_start() -> bool {
        true
    }
}

impl RawVisit<RawBfs> {
    /// Dequeues a vertex, discovers all its undiscovered neighbors and returns
    /// the vertex. The callback is called with `(from, to)` for every newly
    /// discovered vertex `to`.
    pub fn next<G, F>(&mut self, graph: &G, mut on_discover: F) -> Option<VertexId>
    where
        G: Neighbors,
        F: FnMut(VertexId, VertexId),
    {
        let v = self.collection.pop()?;

        for &u in graph.neighbor_ids(v) {
            if self.visited.visit(u) {
                on_discover(v, u);
                self.collection.push(u);
            }
        }

        Some(v)
    }
}

pub enum RawDfs {}

/// Vertex on the DFS stack together with the position of its next neighbor
/// to examine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawDfsFrame {
    vertex: VertexId,
    next: usize,
    opened: bool,
}

impl RawDfsFrame {
    fn root(vertex: VertexId) -> Self {
        Self {
            vertex,
            next: 0,
            opened: false,
        }
    }

    fn opened(vertex: VertexId) -> Self {
        Self {
            vertex,
            next: 0,
            opened: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawDfsEvent {
    Open {
        vertex: VertexId,
        from: Option<VertexId>,
    },
    Close {
        vertex: VertexId,
    },
}

// Stack of "iterators" as described in
// https://11011110.github.io/blog/2013/12/17/stack-based-graph-traversal.html.
// Each frame remembers how far the neighbors of its vertex were examined, so
// the order of opening and closing the vertices is exactly the same as in the
// recursive formulation.
impl RawAlgo for RawDfs {
    type Item = RawDfsFrame;
    type Collection = Stack<RawDfsFrame>;

    fn start(id: VertexId) -> RawDfsFrame {
        RawDfsFrame::root(id)
    }

    fn visit_on_start() -> bool {
        false
    }
}

impl RawVisit<RawDfs> {
    pub fn next<G>(&mut self, graph: &G) -> Option<RawDfsEvent>
    where
        G: Neighbors,
    {
        let mut frame = self.collection.pop()?;
        let v = frame.vertex;

        if !frame.opened {
            // The root was already reached by a previous walk. It is the only
            // frame on the stack, so there is nothing left to visit.
            if !self.visited.visit(v) {
                return None;
            }

            frame.opened = true;
            self.collection.push(frame);
            return Some(RawDfsEvent::Open {
                vertex: v,
                from: None,
            });
        }

        let neighbors = graph.neighbor_ids(v);

        while let Some(&u) = neighbors.get(frame.next) {
            frame.next += 1;

            if self.visited.visit(u) {
                // Not all neighbors processed yet. Return the vertex back to
                // the stack before pushing its neighbor.
                self.collection.push(frame);
                self.collection.push(RawDfsFrame::opened(u));
                return Some(RawDfsEvent::Open {
                    vertex: u,
                    from: Some(v),
                });
            }
        }

        // All neighbors exhausted.
        Some(RawDfsEvent::Close { vertex: v })
    }
}
