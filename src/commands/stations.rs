//! `stations` command

use serde_json::json;

use crate::cli::Cli;
use transit_graph_core::error::Result;
use transit_graph_core::format::OutputFormat;
use transit_graph_core::graph::{GraphProvider, TransitGraph};

pub fn execute(cli: &Cli, graph: &TransitGraph) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let stations = graph
                .station_ids()
                .into_iter()
                .map(|id| {
                    Ok(json!({
                        "station": id,
                        "degree": graph.degree(id)?,
                        "neighbors": graph.neighbors(id)?,
                    }))
                })
                .collect::<Result<Vec<_>>>()?;
            println!("{}", serde_json::to_string_pretty(&stations)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!(
                    "{} stations, {} connections",
                    graph.station_count(),
                    graph.connection_count()
                );
            }
            for id in graph.station_ids() {
                let neighbors = graph.neighbors(id)?;
                println!("{id} (degree {}): {}", neighbors.len(), neighbors.join(", "));
            }
        }
    }
    Ok(())
}
