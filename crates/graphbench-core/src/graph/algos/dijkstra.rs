use crate::error::Result;
use crate::graph::algos::shared::{check_source, ShortestPaths};
use crate::graph::types::{Distance, VertexId};
use crate::graph::GraphProvider;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Wrapper for BinaryHeap to use as min-heap (ordered by tentative distance)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapEntry {
    pub distance: i64,
    pub vertex: VertexId,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// Single-source shortest paths with a binary-heap frontier.
///
/// Only correct when every edge weight reachable from `source` is
/// non-negative. Negative weights are still relaxed (the run completes and a
/// warning is logged) but the distances may not be minimal; use
/// [`bellman_ford`](super::bellman_ford) for such graphs.
///
/// Stale heap entries are skipped on pop. Among equal distances the lower
/// vertex id is extracted first.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn dijkstra<G: GraphProvider>(graph: &G, source: VertexId) -> Result<ShortestPaths> {
    check_source(graph, source)?;

    let vertex_count = graph.vertex_count();
    let mut paths = ShortestPaths::unreached(vertex_count, source);
    let mut visited = vec![false; vertex_count];
    let mut heap = BinaryHeap::new();
    let mut negative_edges = 0usize;

    heap.push(Reverse(HeapEntry {
        distance: 0,
        vertex: source,
    }));

    while let Some(Reverse(HeapEntry { distance, vertex })) = heap.pop() {
        if visited[vertex] {
            continue;
        }
        visited[vertex] = true;

        let current = Distance::Finite(distance);
        graph.for_each_outgoing_edge(vertex, |target, weight| {
            if weight < 0 {
                negative_edges += 1;
            }
            if visited[target] {
                return;
            }
            let candidate = current.extend(weight);
            if paths.relax(vertex, target, candidate) {
                if let Distance::Finite(d) = candidate {
                    heap.push(Reverse(HeapEntry {
                        distance: d,
                        vertex: target,
                    }));
                }
            }
        });
    }

    if negative_edges > 0 {
        tracing::warn!(
            negative_edges,
            "dijkstra ran over negative edge weights; distances may not be shortest"
        );
    }

    Ok(paths)
}
