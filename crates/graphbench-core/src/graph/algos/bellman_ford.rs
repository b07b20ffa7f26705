use crate::error::Result;
use crate::graph::algos::shared::{check_source, ShortestPaths};
use crate::graph::types::{Distance, VertexId, Weight};
use crate::graph::GraphProvider;

/// Single-source shortest paths tolerant of negative edge weights.
///
/// Runs at most `|V| - 1` relaxation passes over every edge and stops early
/// once a pass changes nothing. There is no detection pass: when a negative
/// cycle is reachable from `source` the result is simply the state after the
/// last pass, which is not a shortest-path table. No error is raised.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn bellman_ford<G: GraphProvider>(graph: &G, source: VertexId) -> Result<ShortestPaths> {
    check_source(graph, source)?;

    let vertex_count = graph.vertex_count();
    let mut paths = ShortestPaths::unreached(vertex_count, source);

    // Edge list built once; passes iterate it instead of the store
    let mut edges: Vec<(VertexId, VertexId, Weight)> = Vec::new();
    for from in 0..vertex_count {
        graph.for_each_outgoing_edge(from, |to, weight| edges.push((from, to, weight)));
    }

    let mut passes = 0usize;
    for _ in 0..vertex_count.saturating_sub(1) {
        passes += 1;
        let mut updated = false;
        for &(from, to, weight) in &edges {
            let base = paths.entries[from].distance;
            if base == Distance::Infinite {
                continue;
            }
            if paths.relax(from, to, base.extend(weight)) {
                updated = true;
            }
        }
        if !updated {
            break;
        }
    }

    tracing::trace!(passes, edges = edges.len(), "bellman_ford converged");
    Ok(paths)
}
