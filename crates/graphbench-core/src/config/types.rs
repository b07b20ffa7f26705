//! Configuration type definitions

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::graph::Representation;

/// Vertex counts swept by default
pub const DEFAULT_SIZES: [usize; 5] = [10, 50, 100, 200, 500];

/// Edge densities swept by default
pub const DEFAULT_DENSITIES: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

/// Trials averaged per (size, density) cell
pub const DEFAULT_RUNS: usize = 100;

/// CSV file written by `run`
pub const DEFAULT_OUTPUT: &str = "graphs_results.csv";

/// Benchmark sweep configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Vertex counts to test
    #[serde(default = "default_sizes")]
    pub sizes: Vec<usize>,

    /// Edge densities to test, each in 0.0..=1.0
    #[serde(default = "default_densities")]
    pub densities: Vec<f64>,

    /// Trials per (size, density) pair
    #[serde(default = "default_runs")]
    pub runs: usize,

    /// Seed for the random source (optional; entropy when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// CSV output path
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Storage forms to benchmark, in order
    #[serde(default = "default_representations")]
    pub representations: Vec<Representation>,
}

fn default_sizes() -> Vec<usize> {
    DEFAULT_SIZES.to_vec()
}

fn default_densities() -> Vec<f64> {
    DEFAULT_DENSITIES.to_vec()
}

fn default_runs() -> usize {
    DEFAULT_RUNS
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

fn default_representations() -> Vec<Representation> {
    Representation::ALL.to_vec()
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: default_sizes(),
            densities: default_densities(),
            runs: default_runs(),
            seed: None,
            output: default_output(),
            representations: default_representations(),
        }
    }
}
