//! Collection of traversal-based algorithms.
//!
//! The algorithms follow the builder pattern, e.g.
//! `DfsForest::on(&graph).recursive().run()`. The plain functions
//! [`traverse_bfs`], [`traverse_bfs_with_paths`], [`traverse_dfs`] and
//! [`traverse_dfs_with_timestamps`] use the default parameters.

pub mod bfs_tree;
pub mod dfs_forest;

mod daily_temperatures;
mod traverse;

#[doc(inline)]
pub use self::{bfs_tree::BfsTree, dfs_forest::DfsForest};

pub use daily_temperatures::daily_temperatures;
pub use traverse::{traverse_bfs, traverse_bfs_with_paths, traverse_dfs, traverse_dfs_with_timestamps};
