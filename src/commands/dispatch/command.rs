//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::{Cli, Commands};
use graphbench_core::config::BenchConfig;
use graphbench_core::error::Result;

use super::trace_command;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Configuration from `--config`, or the built-in defaults
    pub fn load_config(&self) -> Result<BenchConfig> {
        let config = match &self.cli.config {
            Some(path) => BenchConfig::load(path)?,
            None => BenchConfig::default(),
        };
        trace_command!(self.start, "load_config");
        Ok(config)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Run(args) => crate::commands::run::execute(ctx, args),
            Commands::Show(args) => crate::commands::show::execute(ctx.cli, args),
            Commands::Config => crate::commands::config::execute(ctx),
        }
    }
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("graphbench {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Timing comparison of Dijkstra, Bellman-Ford and BFS on dense and sparse graphs.");
        println!();
        println!("Run `graphbench --help` for usage information.");
        Ok(())
    }
}
