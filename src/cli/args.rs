use clap::{Args, ValueEnum};

/// Traversal used by the `path` command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Depth-first search
    Dfs,
    /// Breadth-first search (fewest hops)
    Bfs,
    /// Run both and compare
    Compare,
}

#[derive(Args, Debug, Clone)]
pub struct MetricsArgs {
    /// How many stations of the centrality ranking to show
    #[arg(long, default_value_t = 10)]
    pub top: usize,
}

#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    /// Start station
    pub from: String,

    /// Destination station
    pub to: String,

    /// Traversal algorithm
    #[arg(long, short, value_enum, default_value_t = Algorithm::Compare)]
    pub algorithm: Algorithm,
}

#[derive(Args, Debug, Clone)]
pub struct ShortestArgs {
    /// Source station
    pub from: String,

    /// Only report the route to this station
    #[arg(long)]
    pub to: Option<String>,
}
