use crate::error::Result;
use crate::graph::algos::shared::check_source;
use crate::graph::types::{DiscoveryEdge, VertexId};
use crate::graph::GraphProvider;
use std::collections::VecDeque;

/// Perform BFS from `source`, ignoring edge weights.
///
/// Returns the discovery tree as `(parent, child)` edges in discovery order.
/// The source itself is implicit and vertices unreachable from it never
/// appear, so the result has exactly `reached - 1` entries.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn bfs<G: GraphProvider>(graph: &G, source: VertexId) -> Result<Vec<DiscoveryEdge>> {
    check_source(graph, source)?;

    let mut visited = vec![false; graph.vertex_count()];
    let mut queue = VecDeque::new();
    let mut discovered = Vec::new();

    visited[source] = true;
    queue.push_back(source);

    while let Some(parent) = queue.pop_front() {
        graph.for_each_outgoing_edge(parent, |child, _weight| {
            if !visited[child] {
                visited[child] = true;
                queue.push_back(child);
                discovered.push(DiscoveryEdge { parent, child });
            }
        });
    }

    Ok(discovered)
}
