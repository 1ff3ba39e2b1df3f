#![allow(dead_code)]

use fastrand::Rng;
use petgraph::prelude::*;

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

/// Generator of random edges `(v, w)` with `w < v` where each such pair is
/// included with probability `p`, skipping the excluded pairs geometrically.
pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_count: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_count,
            p,
        }
    }

    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n { Some((*v, *w)) } else { None }
    }
}

pub fn stepgraph_random<Ty: stepgraph::core::marker::EdgeType>(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> stepgraph::Graph<u32, Ty> {
    let mut graph = stepgraph::Graph::with_capacity(vertex_count, 0);

    graph.extend_with_vertices(0..vertex_count as u32);

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(u as u32, v as u32);
    }

    graph
}

pub fn petgraph_random<Ty: petgraph::EdgeType>(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> petgraph::Graph<u32, (), Ty> {
    let mut graph = petgraph::Graph::with_capacity(vertex_count, 0);

    for v in 0..vertex_count as u32 {
        graph.add_node(v);
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
    }

    graph
}

pub fn random_temperatures(count: usize, rng: &mut Rng) -> Vec<i32> {
    (0..count).map(|_| rng.i32(-30..40)).collect()
}
