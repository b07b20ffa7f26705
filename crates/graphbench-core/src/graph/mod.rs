//! Graph stores and single-source algorithms
//!
//! Provides two storage forms and the algorithms that run on both:
//! - `dense`: adjacency matrix
//! - `sparse`: adjacency lists
//! - `algos`: Dijkstra, Bellman-Ford and BFS, generic over `GraphProvider`

pub mod algos;
pub mod dense;
pub mod sparse;
pub mod traversal;
pub mod types;

pub use algos::{bellman_ford, bfs, dijkstra, ShortestPaths};
pub use dense::DenseGraph;
pub use sparse::SparseGraph;
pub use traversal::{GraphProvider, GraphStore};
pub use types::{
    Algorithm, DiscoveryEdge, Distance, Edge, PathEntry, Representation, VertexId, Weight,
};
