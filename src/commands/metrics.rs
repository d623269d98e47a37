//! `metrics` command

use crate::cli::{Cli, MetricsArgs};
use transit_graph_core::error::Result;
use transit_graph_core::format::OutputFormat;
use transit_graph_core::graph::{analyze, MetricsReport, TransitGraph};

pub fn execute(cli: &Cli, graph: &TransitGraph, args: &MetricsArgs) -> Result<()> {
    let report = analyze(graph)?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Human => output_human(cli, &report, args.top),
    }
    Ok(())
}

fn output_human(cli: &Cli, report: &MetricsReport, top: usize) {
    println!("Nodes: {}", report.node_count);
    println!("Edges: {}", report.edge_count);
    println!("Average degree: {:.2}", report.average_degree);
    println!("Density: {:.4}", report.density);
    println!("Diameter: {}", report.diameter);
    println!("Average path length: {:.4}", report.average_path_length);
    println!("Average clustering: {:.4}", report.average_clustering);

    if cli.quiet {
        return;
    }

    println!();
    println!("Stations:");
    for station in &report.stations {
        println!(
            "  {}: degree {}, clustering {:.3}, centrality {:.3}",
            station.station, station.degree, station.clustering, station.centrality
        );
    }

    println!();
    println!("Degree centrality ranking:");
    for (rank, (station, centrality)) in report.top_central(top).iter().enumerate() {
        println!("  {}. {station} {centrality:.3}", rank + 1);
    }
}
