//! CLI commands for transit-graph

pub mod all_pairs;
pub mod dispatch;
pub mod load;
pub mod metrics;
pub mod path;
pub mod shortest;
pub mod stations;

/// Join a station sequence for human output
pub fn format_route(path: &[String]) -> String {
    path.join(" -> ")
}
