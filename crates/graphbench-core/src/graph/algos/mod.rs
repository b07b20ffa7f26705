//! Graph algorithm implementations
//!
//! Each algorithm is written once against [`GraphProvider`](crate::graph::GraphProvider):
//! - `dijkstra`: shortest paths for non-negative weights
//! - `bellman_ford`: shortest paths tolerating negative weights
//! - `bfs`: unweighted discovery tree
//! - `shared`: the per-vertex result table and source validation

pub mod bellman_ford;
pub mod bfs;
pub mod dijkstra;
pub mod shared;

pub use bellman_ford::bellman_ford;
pub use bfs::bfs;
pub use dijkstra::dijkstra;
pub use shared::ShortestPaths;
