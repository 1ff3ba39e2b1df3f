use std::{
    fmt::Display,
    io::{self, Write},
};

use crate::{core::marker::EdgeType, graph::Graph};

pub trait Export<G> {
    fn export<W: Write>(&self, graph: &G, out: &mut W) -> io::Result<()>;

    fn to_string(&self, graph: &G) -> String {
        let mut out = Vec::new();
        let result = self.export(graph, &mut out);
        debug_assert!(result.is_ok(), "writing into a vector failed: {result:?}");
        String::from_utf8_lossy(&out).into_owned()
    }
}

/// [Graphviz DOT](https://graphviz.org/doc/info/lang.html) format. Each edge
/// is written once, even in undirected graphs.
pub struct Dot<V> {
    name: String,
    get_vertex_label: Box<dyn Fn(&V) -> String>,
}

impl<V> Dot<V> {
    pub fn new<F>(name: Option<String>, get_vertex_label: F) -> Self
    where
        F: Fn(&V) -> String + 'static,
    {
        Self {
            name: name.unwrap_or_else(|| String::from("G")),
            get_vertex_label: Box::new(get_vertex_label),
        }
    }
}

impl<V: Display> Dot<V> {
    pub fn with_display(name: Option<String>) -> Self {
        Self::new(name, |v| format!("{v}"))
    }
}

impl<V, Ty: EdgeType> Export<Graph<V, Ty>> for Dot<V> {
    fn export<W: Write>(&self, graph: &Graph<V, Ty>, out: &mut W) -> io::Result<()> {
        if graph.is_directed() {
            out.write_all(b"digraph ")?;
        } else {
            out.write_all(b"graph ")?;
        }

        out.write_all(self.name.as_bytes())?;
        out.write_all(b" {\n")?;

        for (index, vertex) in graph.vertices().iter().enumerate() {
            writeln!(
                out,
                "    v{} [label={:?}];",
                index,
                (self.get_vertex_label)(vertex)
            )?;
        }

        let line = if graph.is_directed() { "->" } else { "--" };

        for [from, to] in graph.edge_endpoints() {
            writeln!(out, "    v{} {} v{};", from.as_usize(), line, to.as_usize())?;
        }

        out.write_all(b"}\n")?;

        Ok(())
    }
}

/// Plain text listing of every vertex followed by its neighbors, one vertex
/// per line: `"<vertex> -> <neighbor> <neighbor> \n"`.
///
/// With labels produced by [`Display`], the output is the same as the
/// `Display` implementation of [`Graph`].
pub struct AdjacencyText<V> {
    get_vertex_label: Box<dyn Fn(&V) -> String>,
}

impl<V> AdjacencyText<V> {
    pub fn new<F>(get_vertex_label: F) -> Self
    where
        F: Fn(&V) -> String + 'static,
    {
        Self {
            get_vertex_label: Box::new(get_vertex_label),
        }
    }
}

impl<V: Display> AdjacencyText<V> {
    pub fn with_display() -> Self {
        Self::new(|v| format!("{v}"))
    }
}

impl<V, Ty: EdgeType> Export<Graph<V, Ty>> for AdjacencyText<V> {
    fn export<W: Write>(&self, graph: &Graph<V, Ty>, out: &mut W) -> io::Result<()> {
        for (vertex, neighbors) in graph.adjacency() {
            write!(out, "{} -> ", (self.get_vertex_label)(vertex))?;
            for neighbor in neighbors {
                write!(out, "{} ", (self.get_vertex_label)(neighbor))?;
            }
            writeln!(out)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{core::marker::Directed, graph::tests::create_letters_graph};

    use super::*;

    #[test]
    fn dot_undirected_edges_once() {
        let mut graph = Graph::new_undirected();
        graph.extend_with_edges([("a", "b"), ("b", "c")]);

        let expected = "\
graph G {
    v0 [label=\"a\"];
    v1 [label=\"b\"];
    v2 [label=\"c\"];
    v0 -- v1;
    v1 -- v2;
}
";

        assert_eq!(Dot::with_display(None).to_string(&graph), expected);
    }

    #[test]
    fn dot_directed_custom_label() {
        let mut graph = Graph::<_, Directed>::new();
        graph.add_edge(1, 2);

        let dot = Dot::new(Some(String::from("numbers")), |v: &i32| format!("#{v}"));

        let expected = "\
digraph numbers {
    v0 [label=\"#1\"];
    v1 [label=\"#2\"];
    v0 -> v1;
}
";

        assert_eq!(dot.to_string(&graph), expected);
    }

    #[test]
    fn adjacency_text_matches_display() {
        let graph = create_letters_graph();

        assert_eq!(
            AdjacencyText::with_display().to_string(&graph),
            graph.to_string()
        );
    }

    #[test]
    fn to_string_same_as_export() {
        let graph = create_letters_graph();
        let dot = Dot::with_display(Some(String::from("letters")));

        let mut out = Vec::new();
        dot.export(&graph, &mut out).unwrap();

        assert_eq!(dot.to_string(&graph).into_bytes(), out);
        assert!(dot.to_string(&graph).starts_with("graph letters {\n"));
        assert_eq!(dot.to_string(&graph).matches(" -- ").count(), graph.edge_count());
    }

    #[test]
    fn adjacency_text_custom_label() {
        let mut graph = Graph::<_, Directed>::new();
        graph.extend_with_edges([(1, 2), (1, 3)]);

        let text = AdjacencyText::new(|v: &i32| format!("[{v}]"));

        assert_eq!(
            text.to_string(&graph),
            "[1] -> [2] [3] \n[2] -> \n[3] -> \n"
        );
    }
}
