//! Benchmark sweep
//!
//! For every representation, size and density the sweep averages the wall
//! time of Dijkstra, Bellman-Ford and BFS over `runs` trials. Each trial uses
//! three freshly generated graphs (Bellman-Ford's may carry negative weights,
//! the other two never do) and one random source shared by all three.

use rand::Rng;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use crate::config::BenchConfig;
use crate::trace_time;
use crate::error::{GraphBenchError, Result};
use crate::generate::{generate, random_source, RandomGraphSpec};
use crate::graph::{
    bellman_ford, bfs, dijkstra, DenseGraph, GraphStore, Representation, SparseGraph,
};

/// Average timings for one (representation, size, density) cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BenchmarkRow {
    pub representation: Representation,
    pub size: usize,
    pub density: f64,
    pub dijkstra_ms: f64,
    pub bellman_ford_ms: f64,
    pub bfs_ms: f64,
}

/// Summed timings of the trials run so far for one cell
#[derive(Debug, Default, Clone, Copy)]
struct TrialTotals {
    dijkstra_ms: f64,
    bellman_ford_ms: f64,
    bfs_ms: f64,
}

impl TrialTotals {
    fn average(&self, runs: usize) -> (f64, f64, f64) {
        let runs = runs as f64;
        (
            self.dijkstra_ms / runs,
            self.bellman_ford_ms / runs,
            self.bfs_ms / runs,
        )
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

/// Run one trial on graph store `G`, adding each algorithm's time to `totals`
fn run_trial<G: GraphStore, R: Rng + ?Sized>(
    size: usize,
    density: f64,
    rng: &mut R,
    totals: &mut TrialTotals,
) -> Result<()> {
    let non_negative = RandomGraphSpec::new(size, density, false);
    let with_negative = RandomGraphSpec::new(size, density, true);

    let start = Instant::now();
    let dijkstra_graph: G = generate(&non_negative, rng)?;
    let bellman_ford_graph: G = generate(&with_negative, rng)?;
    let bfs_graph: G = generate(&non_negative, rng)?;
    let source = random_source(rng, size)?;
    trace_time!(start, "generate_trial_graphs", size = size, density = density);

    let start = Instant::now();
    let paths = dijkstra(&dijkstra_graph, source)?;
    totals.dijkstra_ms += elapsed_ms(start);
    std::hint::black_box(&paths);

    let start = Instant::now();
    let paths = bellman_ford(&bellman_ford_graph, source)?;
    totals.bellman_ford_ms += elapsed_ms(start);
    std::hint::black_box(&paths);

    let start = Instant::now();
    let tree = bfs(&bfs_graph, source)?;
    totals.bfs_ms += elapsed_ms(start);
    std::hint::black_box(&tree);

    Ok(())
}

/// Average `runs` trials for a single cell
pub fn measure_cell<R: Rng + ?Sized>(
    representation: Representation,
    size: usize,
    density: f64,
    runs: usize,
    rng: &mut R,
    interrupted: &AtomicBool,
) -> Result<BenchmarkRow> {
    if runs == 0 {
        return Err(GraphBenchError::invalid_value("runs (expected at least 1)", runs));
    }

    let mut totals = TrialTotals::default();
    for _ in 0..runs {
        if interrupted.load(Ordering::SeqCst) {
            return Err(GraphBenchError::Interrupted);
        }
        match representation {
            Representation::Dense => run_trial::<DenseGraph, R>(size, density, rng, &mut totals)?,
            Representation::Sparse => {
                run_trial::<SparseGraph, R>(size, density, rng, &mut totals)?
            }
        }
    }

    let (dijkstra_ms, bellman_ford_ms, bfs_ms) = totals.average(runs);
    Ok(BenchmarkRow {
        representation,
        size,
        density,
        dijkstra_ms,
        bellman_ford_ms,
        bfs_ms,
    })
}

/// Run the full sweep described by `config`.
///
/// `on_row` receives each row as soon as its cell completes, so a sink can
/// persist partial results. Setting `interrupted` stops the sweep between
/// trials with [`GraphBenchError::Interrupted`].
#[tracing::instrument(skip_all, fields(runs = config.runs, cells = config.sizes.len() * config.densities.len() * config.representations.len()))]
pub fn run_sweep<R, F>(
    config: &BenchConfig,
    rng: &mut R,
    interrupted: &AtomicBool,
    mut on_row: F,
) -> Result<Vec<BenchmarkRow>>
where
    R: Rng + ?Sized,
    F: FnMut(&BenchmarkRow) -> Result<()>,
{
    config.validate()?;

    let mut rows = Vec::new();
    for &representation in &config.representations {
        for &size in &config.sizes {
            for &density in &config.densities {
                let start = Instant::now();
                let row = measure_cell(representation, size, density, config.runs, rng, interrupted)
                    .inspect_err(|e| {
                        if matches!(e, GraphBenchError::Interrupted) {
                            tracing::info!(
                                completed = rows.len(),
                                %representation,
                                size,
                                density,
                                "Sweep interrupted"
                            );
                        }
                    })?;

                tracing::debug!(
                    %representation,
                    size,
                    density,
                    dijkstra_ms = row.dijkstra_ms,
                    bellman_ford_ms = row.bellman_ford_ms,
                    bfs_ms = row.bfs_ms,
                    elapsed = ?start.elapsed(),
                    "cell complete"
                );

                on_row(&row)?;
                rows.push(row);
            }
        }
    }

    Ok(rows)
}
