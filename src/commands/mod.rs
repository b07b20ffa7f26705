//! CLI commands for graphbench

pub mod config;
pub mod dispatch;
pub mod run;
pub mod show;
