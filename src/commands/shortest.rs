//! `shortest` command: Dijkstra from one station

use serde_json::json;

use crate::cli::{Cli, ShortestArgs};
use crate::commands::format_route;
use transit_graph_core::error::Result;
use transit_graph_core::format::OutputFormat;
use transit_graph_core::graph::{
    routes_from, shortest_distances, shortest_path, GraphProvider, SearchLimits, ShortestPath,
    TransitGraph,
};

pub fn execute(
    cli: &Cli,
    graph: &TransitGraph,
    args: &ShortestArgs,
    limits: SearchLimits,
) -> Result<()> {
    if let Some(to) = &args.to {
        let route = shortest_path(graph, &args.from, to, limits)?;
        match cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&route)?),
            OutputFormat::Human => println!("{}", describe(&route)),
        }
        return Ok(());
    }

    let table = shortest_distances(graph, &args.from, limits)?;
    let routes = routes_from(graph, &table)?;
    let unreachable: Vec<&str> = graph
        .station_ids()
        .into_iter()
        .filter(|id| table.distance_to(id).is_none())
        .collect();

    match cli.format {
        OutputFormat::Json => {
            let value = json!({
                "source": table.source,
                "routes": routes,
                "unreachable": unreachable,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Shortest routes from {}:", table.source);
            }
            for route in &routes {
                println!("{}", describe(route));
            }
            for station in &unreachable {
                println!("{station}: unreachable");
            }
        }
    }
    Ok(())
}

fn describe(route: &ShortestPath) -> String {
    format!(
        "{}: {} ({})",
        route.to,
        route.distance,
        format_route(&route.path)
    )
}
