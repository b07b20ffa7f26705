//! `graphbench show` command - run one algorithm on one random graph

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cli::{Cli, ShowArgs};
use crate::output_by_format_result;
use graphbench_core::error::Result;
use graphbench_core::generate::{generate, random_source, RandomGraphSpec};
use graphbench_core::graph::{
    bellman_ford, bfs, dijkstra, Algorithm, DenseGraph, DiscoveryEdge, GraphProvider, GraphStore,
    Representation, ShortestPaths, SparseGraph, VertexId,
};
use graphbench_core::records::{render_paths, render_tree};

/// Result of the selected algorithm
enum Outcome {
    Paths(ShortestPaths),
    Tree(Vec<DiscoveryEdge>),
}

fn run_algorithm<G: GraphProvider>(
    graph: &G,
    algorithm: Algorithm,
    source: VertexId,
) -> Result<Outcome> {
    Ok(match algorithm {
        Algorithm::Dijkstra => Outcome::Paths(dijkstra(graph, source)?),
        Algorithm::BellmanFord => Outcome::Paths(bellman_ford(graph, source)?),
        Algorithm::Bfs => Outcome::Tree(bfs(graph, source)?),
    })
}

/// Generate the graph in store `G`, pick the source and run the algorithm.
/// Returns the chosen source, the edge count and the outcome.
fn generate_and_run<G: GraphStore>(
    args: &ShowArgs,
    rng: &mut StdRng,
) -> Result<(VertexId, usize, Outcome)> {
    let spec = RandomGraphSpec::new(args.size, args.density, args.negative);
    let graph: G = generate(&spec, rng)?;
    let source = match args.source {
        Some(source) => source,
        None => random_source(rng, args.size)?,
    };

    let mut edges = 0usize;
    for vertex in 0..graph.vertex_count() {
        graph.for_each_outgoing_edge(vertex, |_, _| edges += 1);
    }
    tracing::debug!(
        edges,
        memory_bytes = graph.memory_usage(),
        source,
        "graph generated"
    );

    let outcome = run_algorithm(&graph, args.algorithm, source)?;
    Ok((source, edges, outcome))
}

/// Execute the show command
pub fn execute(cli: &Cli, args: &ShowArgs) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let (source, edges, outcome) = match args.representation {
        Representation::Dense => generate_and_run::<DenseGraph>(args, &mut rng)?,
        Representation::Sparse => generate_and_run::<SparseGraph>(args, &mut rng)?,
    };

    output_by_format_result!(cli.format,
        json => {
            let result = match &outcome {
                Outcome::Paths(paths) => serde_json::to_value(&paths.entries)?,
                Outcome::Tree(tree) => serde_json::to_value(tree)?,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "algorithm": args.algorithm,
                    "representation": args.representation,
                    "size": args.size,
                    "density": args.density,
                    "edges": edges,
                    "source": source,
                    "result": result,
                }))?
            );
            Ok::<(), graphbench_core::error::GraphBenchError>(())
        },
        human => {
            if !cli.quiet {
                println!(
                    "# {} on {} graph: {} vertices, {} edges, source {}",
                    args.algorithm,
                    args.representation.storage_name(),
                    args.size,
                    edges,
                    source
                );
            }
            match &outcome {
                Outcome::Paths(paths) => print!("{}", render_paths(paths)),
                Outcome::Tree(tree) => print!("{}", render_tree(tree)),
            }
        },
        records => {
            println!(
                "H graphbench=1 records=1 mode=show algorithm={} representation={} size={} density={} edges={} source={}",
                args.algorithm, args.representation, args.size, args.density, edges, source
            );
            match &outcome {
                Outcome::Paths(paths) => {
                    for entry in &paths.entries {
                        println!(
                            "N vertex={} distance={} predecessor={}",
                            entry.vertex,
                            entry.distance,
                            entry
                                .predecessor
                                .map(|p| p.to_string())
                                .unwrap_or_else(|| "-".to_string())
                        );
                    }
                }
                Outcome::Tree(tree) => {
                    for edge in tree {
                        println!("E parent={} child={}", edge.parent, edge.child);
                    }
                }
            }
        }
    )?;

    Ok(())
}
