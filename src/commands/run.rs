//! `graphbench run` command - timing sweep over sizes and densities

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cli::{OutputFormat, RunArgs};
use crate::commands::dispatch::{trace_command, CommandContext};
use graphbench_core::bench::{run_sweep, BenchmarkRow};
use graphbench_core::config::BenchConfig;
use graphbench_core::error::Result;
use graphbench_core::graph::Representation;
use graphbench_core::records::CsvSink;

/// Apply command-line overrides on top of the loaded configuration
pub fn apply_overrides(mut config: BenchConfig, args: &RunArgs) -> Result<BenchConfig> {
    if let Some(runs) = args.runs {
        config.runs = runs;
    }
    if let Some(sizes) = &args.sizes {
        config.sizes = sizes.clone();
    }
    if let Some(densities) = &args.densities {
        config.densities = densities.clone();
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(output) = &args.output {
        config.output = output.clone();
    }
    if let Some(representation) = args.representation {
        config.representations = vec![representation];
    }
    config.validate()?;
    Ok(config)
}

fn print_human_row(row: &BenchmarkRow, previous: Option<Representation>) {
    if previous != Some(row.representation) {
        println!();
        println!("--- {} ---", row.representation.storage_name());
    }
    println!("Size: {} Density: {}", row.size, row.density);
    println!("  Dijkstra: {} ms", row.dijkstra_ms);
    println!("  Bellman - Ford: {} ms", row.bellman_ford_ms);
    println!("  BFS: {} ms", row.bfs_ms);
}

fn print_record_row(row: &BenchmarkRow) {
    println!(
        "R representation={} size={} density={} dijkstra_ms={} bellman_ford_ms={} bfs_ms={}",
        row.representation,
        row.size,
        row.density,
        row.dijkstra_ms,
        row.bellman_ford_ms,
        row.bfs_ms
    );
}

/// Execute the run command
pub fn execute(ctx: &CommandContext, args: &RunArgs) -> Result<()> {
    let cli = ctx.cli;
    let config = apply_overrides(ctx.load_config()?, args)?;

    // Open the sink first: an unwritable results file halts before any work
    let mut sink = CsvSink::create(&config.output)?;
    trace_command!(ctx.start, "open_sink");

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupted_clone = Arc::clone(&interrupted);
    let _ = ctrlc::set_handler(move || {
        interrupted_clone.store(true, Ordering::SeqCst);
    });

    match cli.format {
        OutputFormat::Human if !cli.quiet => {
            println!("PERFORMANCE TESTING OF GRAPH SEARCH ALGORITHMS");
            println!("=====================================");
        }
        OutputFormat::Records => {
            println!(
                "H graphbench=1 records=1 mode=run output={} runs={} seed={}",
                config.output.display(),
                config.runs,
                config
                    .seed
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "none".to_string())
            );
        }
        _ => {}
    }

    let mut previous: Option<Representation> = None;
    let rows = run_sweep(&config, &mut rng, &interrupted, |row| {
        sink.write_row(row)?;
        match cli.format {
            OutputFormat::Human => print_human_row(row, previous),
            OutputFormat::Records => print_record_row(row),
            OutputFormat::Json => {}
        }
        previous = Some(row.representation);
        Ok(())
    })?;
    trace_command!(ctx.start, "sweep");

    match cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "output": config.output.display().to_string(),
                    "runs": config.runs,
                    "seed": config.seed,
                    "rows": rows,
                }))?
            );
        }
        OutputFormat::Human if !cli.quiet => {
            println!();
            println!("Results have been saved to {}", config.output.display());
        }
        _ => {}
    }

    tracing::info!(rows = rows.len(), output = %config.output.display(), "run complete");
    Ok(())
}
