//! Adjacency-matrix graph store

use crate::{bail_invalid, ensure_vertex};
use crate::error::Result;
use crate::graph::traversal::{GraphProvider, GraphStore};
use crate::graph::types::{VertexId, Weight};

/// Dense graph: a `vertex_count x vertex_count` matrix of optional weights.
///
/// Edge lookup and update are O(1); enumerating the edges leaving a vertex
/// scans the whole row, O(V). Memory is O(V²) regardless of edge count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseGraph {
    vertex_count: usize,
    /// Row-major; `cells[from * vertex_count + to]`
    cells: Vec<Option<Weight>>,
}

impl DenseGraph {
    /// Allocate an edgeless matrix. Fails when `vertex_count²` overflows.
    pub fn new(vertex_count: usize) -> Result<Self> {
        let Some(cells) = vertex_count.checked_mul(vertex_count) else {
            bail_invalid!("vertex count (matrix size overflows)", vertex_count);
        };
        Ok(Self {
            vertex_count,
            cells: vec![None; cells],
        })
    }

    fn index(&self, from: VertexId, to: VertexId) -> usize {
        from * self.vertex_count + to
    }

    /// Set the directed edge `from -> to`, replacing any previous weight.
    pub fn set_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) -> Result<()> {
        ensure_vertex!(from, self.vertex_count);
        ensure_vertex!(to, self.vertex_count);
        let idx = self.index(from, to);
        self.cells[idx] = Some(weight);
        Ok(())
    }

    /// Weight of `from -> to`, or `None` when absent or out of range.
    pub fn edge_weight(&self, from: VertexId, to: VertexId) -> Option<Weight> {
        if from >= self.vertex_count || to >= self.vertex_count {
            return None;
        }
        self.cells[self.index(from, to)]
    }

    /// The full row of `from`, one optional weight per destination.
    /// Empty when `from` is out of range.
    pub fn row(&self, from: VertexId) -> &[Option<Weight>] {
        if from >= self.vertex_count {
            return &[];
        }
        let start = from * self.vertex_count;
        &self.cells[start..start + self.vertex_count]
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        self.cells.len() * std::mem::size_of::<Option<Weight>>()
    }
}

impl GraphProvider for DenseGraph {
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn for_each_outgoing_edge<F>(&self, vertex: VertexId, mut f: F)
    where
        F: FnMut(VertexId, Weight),
    {
        for (target, cell) in self.row(vertex).iter().enumerate() {
            if let Some(weight) = *cell {
                f(target, weight);
            }
        }
    }
}

impl GraphStore for DenseGraph {
    fn with_vertices(vertex_count: usize) -> Result<Self> {
        Self::new(vertex_count)
    }

    fn set_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) -> Result<()> {
        DenseGraph::set_edge(self, from, to, weight)
    }

    fn memory_usage(&self) -> usize {
        DenseGraph::memory_usage(self)
    }
}
