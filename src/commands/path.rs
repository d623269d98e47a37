//! `path` command: DFS, BFS, or both side by side

use serde_json::json;

use crate::cli::{Algorithm, Cli, PathArgs};
use crate::commands::format_route;
use transit_graph_core::error::Result;
use transit_graph_core::format::OutputFormat;
use transit_graph_core::graph::{
    compare_paths, find_path_bfs, find_path_dfs, PathComparison, PathResult, TransitGraph,
};

pub fn execute(cli: &Cli, graph: &TransitGraph, args: &PathArgs) -> Result<()> {
    match args.algorithm {
        Algorithm::Dfs => output_single(cli, "DFS", &find_path_dfs(graph, &args.from, &args.to)?),
        Algorithm::Bfs => output_single(cli, "BFS", &find_path_bfs(graph, &args.from, &args.to)?),
        Algorithm::Compare => output_comparison(cli, &compare_paths(graph, &args.from, &args.to)?),
    }
}

fn describe(label: &str, result: &PathResult) -> String {
    format!(
        "{label}: {} ({} hops, {} stations visited)",
        format_route(&result.path),
        result.hops(),
        result.visited_count()
    )
}

fn output_single(cli: &Cli, label: &str, result: &PathResult) -> Result<()> {
    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
        OutputFormat::Human => println!("{}", describe(label, result)),
    }
    Ok(())
}

fn output_comparison(cli: &Cli, comparison: &PathComparison) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let value = json!({
                "dfs": comparison.dfs,
                "bfs": comparison.bfs,
                "hop_difference": comparison.hop_difference(),
                "same_length": comparison.same_length(),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Human => {
            println!("{}", describe("DFS", &comparison.dfs));
            println!("{}", describe("BFS", &comparison.bfs));
            if !cli.quiet {
                if comparison.same_length() {
                    println!("Both paths have {} hops", comparison.bfs.hops());
                } else {
                    println!(
                        "BFS path is shorter by {} hops",
                        comparison.hop_difference()
                    );
                }
            }
        }
    }
    Ok(())
}
