use std::fmt;

use arbitrary::{Arbitrary, Unstructured};

use crate::{
    core::{id::VertexKey, marker::EdgeType},
    graph::Graph,
};

#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Index(pub usize);

impl Index {
    pub fn get(&self, m: usize) -> Option<usize> {
        if m > 0 {
            Some(self.0 % m)
        } else {
            None
        }
    }
}

#[derive(Debug, Arbitrary, Clone)]
pub enum MutOp<V> {
    /// Adds a vertex that may or may not be in the graph already.
    AddVertex(V),
    /// Adds an edge between two existing vertices chosen by their position.
    AddEdge(Index, Index),
    /// Adds an edge between two vertices that may not be in the graph yet.
    AddEdgeNew(V, V),
}

impl<V: VertexKey> MutOp<V> {
    pub fn apply<Ty: EdgeType>(self, graph: &mut Graph<V, Ty>) {
        let n = graph.vertex_count();

        match self {
            MutOp::AddVertex(vertex) => {
                graph.add_vertex(vertex);
            }
            MutOp::AddEdge(from, to) => {
                // Nothing to connect in an empty graph.
                if let (Some(from), Some(to)) = (from.get(n), to.get(n)) {
                    let from = graph.vertices()[from].clone();
                    let to = graph.vertices()[to].clone();
                    graph.add_edge(from, to);
                }
            }
            MutOp::AddEdgeNew(from, to) => graph.add_edge(from, to),
        }
    }
}

pub struct MutOpsSeq<V>(pub Vec<MutOp<V>>);

impl<V> IntoIterator for MutOpsSeq<V> {
    type Item = MutOp<V>;
    type IntoIter = std::vec::IntoIter<MutOp<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<V> MutOpsSeq<V> {
    pub fn apply<Ty: EdgeType>(self, graph: &mut Graph<V, Ty>)
    where
        V: VertexKey,
    {
        for op in self {
            op.apply(graph);
        }
    }

    pub fn replay<Ty: EdgeType>(self, graph: &mut Graph<V, Ty>)
    where
        V: VertexKey + fmt::Debug,
    {
        println!("let mut graph = Graph::new();");
        println!();

        for op in self {
            let n = graph.vertex_count();

            match &op {
                MutOp::AddVertex(vertex) => println!("graph.add_vertex({vertex:?});"),
                MutOp::AddEdge(from, to) => match (from.get(n), to.get(n)) {
                    (Some(from), Some(to)) => println!(
                        "graph.add_edge({:?}, {:?});",
                        graph.vertices()[from],
                        graph.vertices()[to]
                    ),
                    _ => println!("// edge in an empty graph skipped"),
                },
                MutOp::AddEdgeNew(from, to) => println!("graph.add_edge({from:?}, {to:?});"),
            }

            op.apply(graph);
        }

        println!();
        println!("check_consistency(&graph).unwrap();");
    }
}

impl<V: fmt::Debug> fmt::Debug for MutOpsSeq<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MutOpsSeq(vec![")?;

        for op in self.0.iter() {
            writeln!(f, "    MutOp::{:?},", op)?;
        }

        writeln!(f, "])")?;
        writeln!(f, ".replay(&mut graph);")?;
        writeln!(f)?;
        writeln!(f, "// use `cargo test fuzz_replay_mut_ops_seq`")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum OpKind {
    AddVertex,
    AddEdge,
    AddEdgeNew,
}

impl<'a, V> Arbitrary<'a> for MutOpsSeq<V>
where
    V: Arbitrary<'a>,
{
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let total = u.len();
        let mut seq = Vec::new();

        while !u.is_empty() {
            // Adding vertices is preferred at the beginning, edges between
            // existing vertices later on.
            let progress = (total - u.len()) as f64 / total as f64;

            let op = match arbitrary_op(u, progress) {
                Ok(op) => op,
                Err(_) => break,
            };

            seq.push(op);
        }

        Ok(MutOpsSeq(seq))
    }
}

fn arbitrary_op<'a, V>(u: &mut Unstructured<'a>, progress: f64) -> arbitrary::Result<MutOp<V>>
where
    V: Arbitrary<'a>,
{
    let wv = 1.0 - 0.8 * progress;
    let we = 0.5 + progress;

    u.choose_weighted(
        &[OpKind::AddVertex, OpKind::AddEdge, OpKind::AddEdgeNew],
        &[wv, we, 0.2],
    )
    .and_then(|kind| match kind {
        OpKind::AddVertex => Ok(MutOp::AddVertex(u.arbitrary()?)),
        OpKind::AddEdge => Ok(MutOp::AddEdge(u.arbitrary()?, u.arbitrary()?)),
        OpKind::AddEdgeNew => Ok(MutOp::AddEdgeNew(u.arbitrary()?, u.arbitrary()?)),
    })
}

trait UnstructuredExt {
    fn nice_f64(&mut self) -> arbitrary::Result<f64>;
    fn choose_weighted<'b, T>(
        &mut self,
        choices: &'b [T],
        weights: &'b [f64],
    ) -> arbitrary::Result<&'b T>;
}

impl<'a> UnstructuredExt for Unstructured<'a> {
    fn nice_f64(&mut self) -> arbitrary::Result<f64> {
        const RESOLUTION: u8 = 100;
        let int = self.int_in_range(0..=RESOLUTION)?;
        Ok(int as f64 / RESOLUTION as f64)
    }

    fn choose_weighted<'b, T>(
        &mut self,
        choices: &'b [T],
        weights: &'b [f64],
    ) -> arbitrary::Result<&'b T> {
        if choices.is_empty() || choices.len() != weights.len() {
            return Err(arbitrary::Error::EmptyChoose);
        }

        let weight_sum = weights.iter().copied().sum::<f64>();
        let bound = self.nice_f64()? * weight_sum;

        let mut acc = 0.0;
        for (choice, weight) in choices.iter().zip(weights.iter().copied()) {
            acc += weight;

            if acc >= bound {
                return Ok(choice);
            }
        }

        // Rounding errors in the sum.
        choices.last().ok_or(arbitrary::Error::EmptyChoose)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use fastrand::Rng;

    use crate::{
        core::marker::{Directed, Undirected},
        infra::testing::check_consistency,
    };

    use super::*;

    #[test]
    fn mut_ops_seq_arbitrary_sanity() {
        let mut frequency = HashMap::<_, usize>::new();
        let mut total = 0;

        for size in [500, 1000, 5000] {
            let mut raw = vec![0; size];

            for seed in [0, 3, 7, 13, 23, 42] {
                let mut rng = Rng::with_seed(seed);
                rng.fill(&mut raw);

                let mut u = Unstructured::new(&raw);
                let seq: MutOpsSeq<u8> = u.arbitrary().unwrap();

                total += seq.0.len();

                let mut graph = Graph::<_, Undirected>::new();
                for op in seq {
                    let kind = match op {
                        MutOp::AddVertex(_) => OpKind::AddVertex,
                        MutOp::AddEdge(_, _) => OpKind::AddEdge,
                        MutOp::AddEdgeNew(_, _) => OpKind::AddEdgeNew,
                    };

                    *frequency.entry(kind).or_default() += 1;
                    op.apply(&mut graph);
                }

                check_consistency(&graph).unwrap();
            }
        }

        assert!(total > 0);
        for kind in [OpKind::AddVertex, OpKind::AddEdge, OpKind::AddEdgeNew] {
            assert!(frequency.get(&kind).copied().unwrap_or_default() > 0, "{kind:?}");
        }
    }

    #[test]
    fn mut_op_edge_in_empty_graph_skipped() {
        let mut graph = Graph::<u8, Directed>::new();

        MutOp::AddEdge(Index(3), Index(7)).apply(&mut graph);
        assert_eq!(graph.vertex_count(), 0);

        MutOpsSeq(vec![
            MutOp::AddVertex(1),
            MutOp::AddVertex(2),
            MutOp::AddEdge(Index(3), Index(4)),
            MutOp::AddEdgeNew(2, 5),
        ])
        .apply(&mut graph);

        assert_eq!(graph.vertices(), &[1, 2, 5]);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.to_string(), "1 -> \n2 -> 1 5 \n5 -> \n");
    }

    #[test]
    #[ignore = "placeholder for fuzz findings"]
    fn fuzz_replay_mut_ops_seq() {
        // Replace with graph type under test.
        let mut graph = Graph::<u8, Directed>::new();

        MutOpsSeq(vec![
            MutOp::AddVertex(0),
            MutOp::AddEdge(Index(0), Index(0)),
            MutOp::AddEdgeNew(1, 0),
        ])
        .replay(&mut graph);

        panic!("check_consistency is required for reproduction");
    }
}
