//! CLI argument parsing for transit-graph
//!
//! Global flags: --network, --config, --format, --quiet, --verbose,
//! --log-level, --log-json

pub mod args;
pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use args::{Algorithm, MetricsArgs, PathArgs, ShortestArgs};
use parse::parse_output_format;
use transit_graph_core::format::OutputFormat;

/// transit-graph - analyse a weighted transport network
#[derive(Parser, Debug)]
#[command(name = "transit-graph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Network feed (TOML); the built-in reference network when omitted
    #[arg(long, global = true, env = "TRANSIT_GRAPH_NETWORK")]
    pub network: Option<PathBuf>,

    /// Analysis configuration (TOML) with search limits
    #[arg(long, global = true, env = "TRANSIT_GRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (human or json)
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress headers and summaries
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Debug-level logging to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `info`, `transit_graph_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List stations with their degree
    Stations,

    /// Structural metrics: degree, density, diameter, clustering, centrality
    Metrics(MetricsArgs),

    /// Find a path between two stations with DFS, BFS, or both
    Path(PathArgs),

    /// Shortest weighted routes from a station
    Shortest(ShortestArgs),

    /// Shortest routes between every pair of stations
    AllPairs,
}
