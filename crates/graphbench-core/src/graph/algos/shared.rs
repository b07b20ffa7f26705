use serde::Serialize;

use crate::ensure_vertex;
use crate::error::Result;
use crate::graph::types::{Distance, PathEntry, VertexId};
use crate::graph::GraphProvider;

/// Per-vertex distance and predecessor table produced by Dijkstra and
/// Bellman-Ford. `entries[v].vertex == v` for every vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    pub source: VertexId,
    pub entries: Vec<PathEntry>,
}

impl ShortestPaths {
    /// Table with the source at distance 0 and every other vertex unreached
    pub(crate) fn unreached(vertex_count: usize, source: VertexId) -> Self {
        let entries = (0..vertex_count)
            .map(|vertex| PathEntry {
                vertex,
                distance: if vertex == source {
                    Distance::Finite(0)
                } else {
                    Distance::Infinite
                },
                predecessor: None,
            })
            .collect();
        Self { source, entries }
    }

    pub fn distance(&self, vertex: VertexId) -> Option<Distance> {
        self.entries.get(vertex).map(|e| e.distance)
    }

    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.entries.get(vertex).and_then(|e| e.predecessor)
    }

    /// Number of vertices with a finite distance, source included
    pub fn reached_count(&self) -> usize {
        self.entries.iter().filter(|e| e.distance.is_finite()).count()
    }

    /// Follow predecessors from `target` back to the source.
    ///
    /// Returns the vertex sequence source..=target, or `None` when the target
    /// is unreached or the predecessor chain does not lead to the source
    /// (possible after Bellman-Ford on a graph with a negative cycle).
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        let entry = self.entries.get(target)?;
        if !entry.distance.is_finite() {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessor(current)?;
            path.push(current);
            if path.len() > self.entries.len() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }

    pub(crate) fn relax(&mut self, from: VertexId, to: VertexId, candidate: Distance) -> bool {
        if candidate < self.entries[to].distance {
            self.entries[to].distance = candidate;
            self.entries[to].predecessor = Some(from);
            true
        } else {
            false
        }
    }
}

/// Reject a source vertex outside the graph
pub(crate) fn check_source<G: GraphProvider + ?Sized>(graph: &G, source: VertexId) -> Result<()> {
    ensure_vertex!(source, graph.vertex_count());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreached_table() {
        let table = ShortestPaths::unreached(3, 1);
        assert_eq!(table.distance(1), Some(Distance::Finite(0)));
        assert_eq!(table.distance(0), Some(Distance::Infinite));
        assert_eq!(table.predecessor(1), None);
        assert_eq!(table.reached_count(), 1);
    }

    #[test]
    fn test_relax_only_improves() {
        let mut table = ShortestPaths::unreached(2, 0);
        assert!(table.relax(0, 1, Distance::Finite(5)));
        assert!(!table.relax(0, 1, Distance::Finite(5)));
        assert!(table.relax(0, 1, Distance::Finite(4)));
        assert_eq!(table.predecessor(1), Some(0));
    }

    #[test]
    fn test_path_to_follows_predecessors() {
        let mut table = ShortestPaths::unreached(3, 0);
        table.relax(0, 1, Distance::Finite(2));
        table.relax(1, 2, Distance::Finite(5));
        assert_eq!(table.path_to(2), Some(vec![0, 1, 2]));
        assert_eq!(table.path_to(0), Some(vec![0]));
    }

    #[test]
    fn test_path_to_unreached_is_none() {
        let table = ShortestPaths::unreached(2, 0);
        assert_eq!(table.path_to(1), None);
        assert_eq!(table.path_to(9), None);
    }

    #[test]
    fn test_path_to_detects_predecessor_loop() {
        let mut table = ShortestPaths::unreached(3, 0);
        table.relax(2, 1, Distance::Finite(-1));
        table.relax(1, 2, Distance::Finite(-2));
        assert_eq!(table.path_to(1), None);
    }
}
