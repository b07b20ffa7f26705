//! Adjacency-list graph store

use crate::ensure_vertex;
use crate::error::Result;
use crate::graph::traversal::{GraphProvider, GraphStore};
use crate::graph::types::{Edge, VertexId, Weight};

/// Sparse graph: one list of outgoing `(target, weight)` entries per vertex.
///
/// Memory is O(V + E); enumerating a vertex's edges is O(degree).
/// Each ordered pair has at most one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseGraph {
    outgoing: Vec<Vec<Edge>>,
}

impl SparseGraph {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            outgoing: vec![Vec::new(); vertex_count],
        }
    }

    /// Set the directed edge `from -> to`, replacing any previous weight.
    ///
    /// Replacing searches the source's list, so this is O(degree(from)).
    pub fn set_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) -> Result<()> {
        let vertex_count = self.outgoing.len();
        ensure_vertex!(from, vertex_count);
        ensure_vertex!(to, vertex_count);

        let edges = &mut self.outgoing[from];
        match edges.iter_mut().find(|e| e.target == to) {
            Some(existing) => existing.weight = weight,
            None => edges.push(Edge { target: to, weight }),
        }
        Ok(())
    }

    /// Weight of `from -> to`, or `None` when absent or out of range.
    pub fn edge_weight(&self, from: VertexId, to: VertexId) -> Option<Weight> {
        self.outgoing
            .get(from)?
            .iter()
            .find(|e| e.target == to)
            .map(|e| e.weight)
    }

    /// Outgoing edges of `from` in insertion order
    pub fn neighbors(&self, from: VertexId) -> &[Edge] {
        self.outgoing.get(from).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn vertex_count(&self) -> usize {
        self.outgoing.len()
    }

    pub fn edge_count(&self) -> usize {
        self.outgoing.iter().map(|v| v.len()).sum()
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let lists = self.outgoing.len() * size_of::<Vec<Edge>>();
        let edges: usize = self
            .outgoing
            .iter()
            .map(|v| v.capacity() * size_of::<Edge>())
            .sum();
        lists + edges
    }
}

impl GraphProvider for SparseGraph {
    fn vertex_count(&self) -> usize {
        self.outgoing.len()
    }

    fn for_each_outgoing_edge<F>(&self, vertex: VertexId, mut f: F)
    where
        F: FnMut(VertexId, Weight),
    {
        for edge in self.neighbors(vertex) {
            f(edge.target, edge.weight);
        }
    }
}

impl GraphStore for SparseGraph {
    fn with_vertices(vertex_count: usize) -> Result<Self> {
        Ok(Self::new(vertex_count))
    }

    fn set_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) -> Result<()> {
        SparseGraph::set_edge(self, from, to, weight)
    }

    fn memory_usage(&self) -> usize {
        SparseGraph::memory_usage(self)
    }
}
