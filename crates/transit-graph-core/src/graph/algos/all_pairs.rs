use std::time::Instant;

use serde::Serialize;

use crate::error::Result;
use crate::graph::algos::dijkstra::{dijkstra_with_budget, route_in_table};
use crate::graph::algos::shared::SearchBudget;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{DistanceTable, SearchLimits, ShortestPath};
use crate::trace_time;

/// Shortest routes between every ordered pair of distinct stations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllPairsReport {
    /// One table per source, in station insertion order
    pub tables: Vec<DistanceTable>,
    /// Routes between reachable distinct pairs, grouped by source
    pub routes: Vec<ShortestPath>,
    /// Mean route distance, `None` when no distinct pair is reachable
    pub mean_distance_km: Option<f64>,
    /// Ordered distinct pairs with no route
    pub unreachable_pairs: usize,
}

impl AllPairsReport {
    pub fn table_for(&self, source: &str) -> Option<&DistanceTable> {
        self.tables.iter().find(|table| table.source == source)
    }

    pub fn route(&self, from: &str, to: &str) -> Option<&ShortestPath> {
        self.routes
            .iter()
            .find(|route| route.from == from && route.to == to)
    }
}

/// Run Dijkstra from every station.
///
/// The time budget in `limits` covers the whole call; `max_settled` applies
/// to each run separately.
#[tracing::instrument(skip_all, fields(stations = provider.station_count()))]
pub fn all_pairs(provider: &dyn GraphProvider, limits: SearchLimits) -> Result<AllPairsReport> {
    let started = Instant::now();
    let mut budget = SearchBudget::new(limits);
    let mut tables = Vec::with_capacity(provider.station_count());
    let mut routes = Vec::new();

    for source in provider.station_ids() {
        let table = dijkstra_with_budget(provider, source, &mut budget)?;
        routes.extend(routes_from(provider, &table)?);
        tables.push(table);
    }

    let count = provider.station_count();
    let ordered_pairs = count * count.saturating_sub(1);
    let unreachable_pairs = ordered_pairs - routes.len();
    let mean_distance_km = if routes.is_empty() {
        None
    } else {
        let total: f64 = routes.iter().map(|route| route.distance.km()).sum();
        Some(total / routes.len() as f64)
    };

    tracing::debug!(
        routes = routes.len(),
        unreachable_pairs,
        mean_distance_km,
        "all-pairs shortest paths computed"
    );
    trace_time!(started, "all_pairs");

    Ok(AllPairsReport {
        tables,
        routes,
        mean_distance_km,
        unreachable_pairs,
    })
}

/// Routes from a table's source to every other reached station, in station
/// insertion order.
///
/// A reached station whose predecessor chain does not lead back to the
/// source fails with `NoPath`.
pub fn routes_from(provider: &dyn GraphProvider, table: &DistanceTable) -> Result<Vec<ShortestPath>> {
    let mut routes = Vec::with_capacity(table.reached().saturating_sub(1));
    for target in provider.station_ids() {
        if target == table.source || table.distance_to(target).is_none() {
            continue;
        }
        routes.push(route_in_table(table, target)?);
    }
    Ok(routes)
}
