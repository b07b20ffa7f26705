//! Graphbench Core Library
//!
//! Dense and sparse graph stores, Dijkstra / Bellman-Ford / BFS written once
//! over both, a seeded random graph generator and the timing sweep that
//! compares them.

pub mod bench;
pub mod config;
pub mod error;
pub mod generate;
pub mod graph;
pub mod logging;
pub mod records;
