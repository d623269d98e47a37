//! Command implementations for all transit-graph commands

use tracing::debug;

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{all_pairs, metrics, path, shortest, stations};
use transit_graph_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let graph = ctx.load_network()?;

        let result = match self {
            Commands::Stations => stations::execute(ctx.cli, &graph),
            Commands::Metrics(args) => metrics::execute(ctx.cli, &graph, args),
            Commands::Path(args) => path::execute(ctx.cli, &graph, args),
            Commands::Shortest(args) => {
                let limits = ctx.load_config()?.search_limits();
                shortest::execute(ctx.cli, &graph, args, limits)
            }
            Commands::AllPairs => {
                let limits = ctx.load_config()?.search_limits();
                all_pairs::execute(ctx.cli, &graph, limits)
            }
        };

        debug!(elapsed = ?ctx.start.elapsed(), "execute_command");
        result
    }
}
