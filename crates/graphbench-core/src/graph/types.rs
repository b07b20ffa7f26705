use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::GraphBenchError;

/// Vertex index in `0..vertex_count`
pub type VertexId = usize;

/// Integer edge weight; may be negative
pub type Weight = i32;

/// A directed, weighted edge as stored in an adjacency list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub target: VertexId,
    pub weight: Weight,
}

/// Best-known distance from the source.
///
/// Accumulated in `i64` so that sums of `Weight`s never overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Distance {
    Finite(i64),
    Infinite,
}

impl Distance {
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn value(&self) -> Option<i64> {
        match self {
            Distance::Finite(d) => Some(*d),
            Distance::Infinite => None,
        }
    }

    /// Distance after following an edge of `weight`; infinity absorbs.
    pub fn extend(self, weight: Weight) -> Distance {
        match self {
            Distance::Finite(d) => Distance::Finite(d + i64::from(weight)),
            Distance::Infinite => Distance::Infinite,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Infinite => write!(f, "inf"),
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Distance::Finite(d) => serializer.serialize_i64(*d),
            Distance::Infinite => serializer.serialize_none(),
        }
    }
}

/// Shortest-path result for a single vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PathEntry {
    pub vertex: VertexId,
    pub distance: Distance,
    /// `None` for the source and for unreached vertices
    pub predecessor: Option<VertexId>,
}

/// Edge by which BFS first reached `child`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiscoveryEdge {
    pub parent: VertexId,
    pub child: VertexId,
}

/// Storage representation of a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    /// Adjacency matrix
    Dense,
    /// Adjacency list
    Sparse,
}

impl Representation {
    pub const ALL: [Representation; 2] = [Representation::Dense, Representation::Sparse];

    /// Descriptive name used in reports
    pub fn storage_name(&self) -> &'static str {
        match self {
            Representation::Dense => "adjacency-matrix",
            Representation::Sparse => "adjacency-list",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Representation::Dense => write!(f, "dense"),
            Representation::Sparse => write!(f, "sparse"),
        }
    }
}

impl FromStr for Representation {
    type Err = GraphBenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dense" | "matrix" | "adjacency-matrix" => Ok(Representation::Dense),
            "sparse" | "list" | "adjacency-list" => Ok(Representation::Sparse),
            other => Err(GraphBenchError::invalid_value("representation", other)),
        }
    }
}

/// Algorithms under measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Dijkstra,
    BellmanFord,
    Bfs,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Dijkstra => write!(f, "dijkstra"),
            Algorithm::BellmanFord => write!(f, "bellman-ford"),
            Algorithm::Bfs => write!(f, "bfs"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = GraphBenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "bellman-ford" | "bellmanford" | "bellman_ford" => Ok(Algorithm::BellmanFord),
            "bfs" => Ok(Algorithm::Bfs),
            other => Err(GraphBenchError::invalid_value("algorithm", other)),
        }
    }
}
