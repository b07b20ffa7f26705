use crate::error::Result;
use crate::graph::types::{VertexId, Weight};

/// Trait for providing graph adjacency to the algorithms.
///
/// Each storage form implements this once; the algorithms are written once
/// against it and inherit the neighbor-iteration cost of the store.
pub trait GraphProvider {
    /// Number of vertices; valid ids are `0..vertex_count()`
    fn vertex_count(&self) -> usize;

    /// Call `f(target, weight)` for every edge leaving `vertex`.
    ///
    /// `vertex` must be in range; callers validate before iterating.
    fn for_each_outgoing_edge<F>(&self, vertex: VertexId, f: F)
    where
        F: FnMut(VertexId, Weight);
}

/// A graph store that can be built edge by edge
pub trait GraphStore: GraphProvider + Sized {
    /// Allocate a graph with `vertex_count` vertices and no edges
    fn with_vertices(vertex_count: usize) -> Result<Self>;

    /// Record the directed edge `from -> to`, replacing any previous weight
    fn set_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) -> Result<()>;

    /// Approximate memory usage in bytes.
    fn memory_usage(&self) -> usize;
}
