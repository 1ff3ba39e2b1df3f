use crate::{
    core::{id::VertexId, Neighbors},
    visit::Time,
};

use super::RawForest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Unvisited,
    Discovered,
    Finished,
}

// Everything the recursive calls share. The time counter lives here and not
// in any global state, so independent searches never interfere.
struct Context<'a, G, F> {
    graph: &'a G,
    color: Vec<Color>,
    time: usize,
    forest: RawForest,
    on_discover: F,
}

pub fn dfs_recursive<G, F>(graph: &G, on_discover: F) -> RawForest
where
    G: Neighbors,
    F: FnMut(VertexId),
{
    let vertex_count = graph.vertex_count();

    let mut ctx = Context {
        graph,
        color: vec![Color::Unvisited; vertex_count],
        time: 0,
        forest: RawForest::new(vertex_count),
        on_discover,
    };

    for root in graph.vertex_ids() {
        if ctx.color[root.as_usize()] == Color::Unvisited {
            ctx.forest.roots.push(root);
            ctx.visit(root);
        }
    }

    ctx.forest
}

impl<G, F> Context<'_, G, F>
where
    G: Neighbors,
    F: FnMut(VertexId),
{
    fn visit(&mut self, vertex: VertexId) {
        let index = vertex.as_usize();

        self.color[index] = Color::Discovered;
        self.time += 1;
        self.forest.discovery[index] = Some(Time(self.time));
        self.forest.order.push(vertex);
        (self.on_discover)(vertex);

        trace!(vertex = index, time = self.time, "dfs forest: open");

        let graph = self.graph;
        for &neighbor in graph.neighbor_ids(vertex) {
            if self.color[neighbor.as_usize()] == Color::Unvisited {
                self.forest.pred[neighbor.as_usize()] = Some(vertex);
                self.visit(neighbor);
            }
        }

        self.color[index] = Color::Finished;
        self.time += 1;
        self.forest.finish[index] = Some(Time(self.time));
    }
}
