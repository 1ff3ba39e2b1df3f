//! Growable adjacency-list graph with breadth-first and depth-first
//! traversals.
//!
//! Vertices are identified by arbitrary caller values (strings, integers,
//! ...). The [`Graph`] keeps them in insertion order and the traversals
//! examine neighbors in edge insertion order, so all results are fully
//! deterministic.
//!
//! * [`visit`] contains lazy, iterative visitors ([`Bfs`](visit::Bfs),
//!   [`Dfs`](visit::Dfs), [`DfsEvents`](visit::DfsEvents)) that do not borrow
//!   the graph between steps.
//! * [`algo`] builds on them: hop-count distances with
//!   [`BfsTree`](algo::BfsTree), discovery and finish times with
//!   [`DfsForest`](algo::DfsForest).
//!
//! # Examples
//!
//! ```
//! use stepgraph::{
//!     algo::{traverse_bfs_with_paths, traverse_dfs_with_timestamps},
//!     visit::Time,
//!     Graph,
//! };
//!
//! let mut graph = Graph::new_undirected();
//!
//! graph.extend_with_edges([("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")]);
//! graph.add_vertex("E");
//!
//! let paths = traverse_bfs_with_paths(&graph, &"A").unwrap();
//! assert_eq!(paths.dist(&"D"), Some(2));
//! assert_eq!(paths.dist(&"E"), None);
//!
//! let forest = traverse_dfs_with_timestamps(&graph);
//! assert_eq!(forest.interval(&"E"), Some((Time(9), Time(10))));
//! ```

#[macro_use]
mod log;

pub mod algo;
pub mod core;
pub mod graph;
pub mod infra;
pub mod visit;

pub use graph::Graph;

pub mod prelude {
    pub use crate::{graph::Graph, visit::Visitor};
}
