//! Command trait and context for dispatching commands

use std::time::Instant;

use tracing::debug;

use crate::cli::Cli;
use crate::commands::load;
use transit_graph_core::config::AnalysisConfig;
use transit_graph_core::error::Result;
use transit_graph_core::graph::TransitGraph;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Build the network named by `--network`, or the reference network
    pub fn load_network(&self) -> Result<TransitGraph> {
        let graph = load::load_network(self.cli.network.as_deref())?;
        debug!(elapsed = ?self.start.elapsed(), "load_network");
        Ok(graph)
    }

    /// Read `--config`, or fall back to unlimited defaults
    pub fn load_config(&self) -> Result<AnalysisConfig> {
        load::load_config(self.cli.config.as_deref())
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("transit-graph {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Metrics, traversal paths and shortest routes for a transport network.");
        println!();
        println!("Run `transit-graph --help` for usage information.");
        Ok(())
    }
}
