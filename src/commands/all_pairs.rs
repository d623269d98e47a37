//! `all-pairs` command

use serde_json::json;

use crate::cli::Cli;
use crate::commands::format_route;
use transit_graph_core::error::Result;
use transit_graph_core::format::OutputFormat;
use transit_graph_core::graph::{all_pairs, Distance, SearchLimits, TransitGraph};

pub fn execute(cli: &Cli, graph: &TransitGraph, limits: SearchLimits) -> Result<()> {
    let report = all_pairs(graph, limits)?;

    match cli.format {
        OutputFormat::Json => {
            let value = json!({
                "routes": report.routes,
                "mean_distance_km": report.mean_distance_km,
                "unreachable_pairs": report.unreachable_pairs,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Human => {
            for route in &report.routes {
                println!(
                    "{} -> {}: {} ({})",
                    route.from,
                    route.to,
                    route.distance,
                    format_route(&route.path)
                );
            }
            if !cli.quiet {
                println!();
                match report.mean_distance_km {
                    Some(mean) => println!("Mean shortest distance: {}", Distance::new(mean)),
                    None => println!("Mean shortest distance: n/a (no connected pairs)"),
                }
                if report.unreachable_pairs > 0 {
                    println!("Unreachable pairs: {}", report.unreachable_pairs);
                }
            }
        }
    }
    Ok(())
}
