use super::parse::{parse_algorithm, parse_density, parse_representation};
use clap::Args;
use graphbench_core::graph::{Algorithm, Representation};
use std::path::PathBuf;

#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Trials averaged per (size, density) pair
    #[arg(long, short)]
    pub runs: Option<usize>,

    /// Vertex counts to test (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub sizes: Option<Vec<usize>>,

    /// Edge densities to test (comma-separated, each 0.0..=1.0)
    #[arg(long, value_delimiter = ',', value_parser = parse_density)]
    pub densities: Option<Vec<f64>>,

    /// Seed for the random source
    #[arg(long)]
    pub seed: Option<u64>,

    /// Results file path
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Only benchmark one storage form
    #[arg(long, value_parser = parse_representation)]
    pub representation: Option<Representation>,
}

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Number of vertices
    #[arg(long, short)]
    pub size: usize,

    /// Edge density (0.0..=1.0)
    #[arg(long, short, default_value = "1.0", value_parser = parse_density)]
    pub density: f64,

    /// Algorithm to run
    #[arg(long, short, default_value = "dijkstra", value_parser = parse_algorithm)]
    pub algorithm: Algorithm,

    /// Storage form
    #[arg(long, short, default_value = "dense", value_parser = parse_representation)]
    pub representation: Representation,

    /// Source vertex (random when omitted)
    #[arg(long)]
    pub source: Option<usize>,

    /// Seed for the random source
    #[arg(long)]
    pub seed: Option<u64>,

    /// Allow negative edge weights
    #[arg(long)]
    pub negative: bool,
}
