//! Structural metrics over the unweighted shape of the network
//!
//! Path-based metrics (diameter, average path length) count hops and ignore
//! connection distances; weighted routing lives in `algos::dijkstra`.

use std::cmp::Ordering;
use std::time::Instant;

use serde::Serialize;

use crate::error::{GraphError, Result};
use crate::graph::algos::shared::hop_distances;
use crate::graph::traversal::GraphProvider;
use crate::trace_time;

/// Per-station structural metrics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationMetrics {
    pub station: String,
    pub degree: usize,
    pub clustering: f64,
    pub centrality: f64,
}

/// Whole-network structural summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    pub node_count: usize,
    pub edge_count: usize,
    /// Stations in insertion order
    pub stations: Vec<StationMetrics>,
    pub average_degree: f64,
    pub density: f64,
    pub diameter: usize,
    pub average_path_length: f64,
    pub average_clustering: f64,
    /// `(station, centrality)`, highest first
    pub centrality_ranking: Vec<(String, f64)>,
}

impl MetricsReport {
    /// Highest-ranked `count` stations by degree centrality
    pub fn top_central(&self, count: usize) -> &[(String, f64)] {
        &self.centrality_ranking[..count.min(self.centrality_ranking.len())]
    }
}

/// Degree of every station, in insertion order
pub fn degrees<'g>(provider: &'g dyn GraphProvider) -> Result<Vec<(&'g str, usize)>> {
    provider
        .station_ids()
        .into_iter()
        .map(|id| Ok((id, provider.degree(id)?)))
        .collect()
}

/// `2|E| / |V|`, 0 for an empty graph
pub fn average_degree(provider: &dyn GraphProvider) -> f64 {
    let nodes = provider.station_count();
    if nodes == 0 {
        return 0.0;
    }
    2.0 * provider.connection_count() as f64 / nodes as f64
}

/// `|E| / (|V|(|V|-1)/2)`, 0 when there are fewer than two stations
pub fn density(provider: &dyn GraphProvider) -> f64 {
    let nodes = provider.station_count();
    if nodes <= 1 {
        return 0.0;
    }
    let possible = nodes * (nodes - 1) / 2;
    provider.connection_count() as f64 / possible as f64
}

/// Hop-distance statistics over all ordered distinct pairs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HopStats {
    pub diameter: usize,
    pub average_path_length: f64,
}

/// All-pairs BFS over the network.
///
/// Fails with `Disconnected` (counting unordered unreachable pairs) if any
/// station cannot reach another. Fewer than two stations yields zeros.
pub fn hop_stats(provider: &dyn GraphProvider) -> Result<HopStats> {
    let nodes = provider.station_count();
    if nodes <= 1 {
        tracing::debug!(nodes, "path-length metrics are zero for fewer than two stations");
        return Ok(HopStats {
            diameter: 0,
            average_path_length: 0.0,
        });
    }

    let mut diameter = 0;
    let mut total_hops = 0usize;
    let mut missing_ordered = 0usize;

    for source in provider.station_ids() {
        let hops = hop_distances(provider, source)?;
        missing_ordered += nodes - hops.len();
        for &distance in hops.values() {
            diameter = diameter.max(distance);
            total_hops += distance;
        }
    }

    if missing_ordered > 0 {
        return Err(GraphError::Disconnected {
            unreachable_pairs: missing_ordered / 2,
        });
    }

    let ordered_pairs = nodes * (nodes - 1);
    Ok(HopStats {
        diameter,
        average_path_length: total_hops as f64 / ordered_pairs as f64,
    })
}

pub fn diameter(provider: &dyn GraphProvider) -> Result<usize> {
    Ok(hop_stats(provider)?.diameter)
}

pub fn average_path_length(provider: &dyn GraphProvider) -> Result<f64> {
    Ok(hop_stats(provider)?.average_path_length)
}

/// Fraction of neighbor pairs of `id` that are themselves connected
pub fn clustering_coefficient(provider: &dyn GraphProvider, id: &str) -> Result<f64> {
    let neighbors = provider.neighbors(id)?;
    let k = neighbors.len();
    if k < 2 {
        return Ok(0.0);
    }

    let mut linked = 0usize;
    for (i, &first) in neighbors.iter().enumerate() {
        let around_first = provider.neighbors(first)?;
        linked += neighbors[i + 1..]
            .iter()
            .filter(|second| around_first.binary_search(*second).is_ok())
            .count();
    }

    Ok(linked as f64 / (k * (k - 1) / 2) as f64)
}

/// Mean clustering coefficient, 0 for an empty graph
pub fn average_clustering(provider: &dyn GraphProvider) -> Result<f64> {
    let ids = provider.station_ids();
    if ids.is_empty() {
        return Ok(0.0);
    }
    let mut total = 0.0;
    for id in &ids {
        total += clustering_coefficient(provider, id)?;
    }
    Ok(total / ids.len() as f64)
}

/// `degree / (|V| - 1)`, 0 when there are fewer than two stations
pub fn degree_centrality(provider: &dyn GraphProvider, id: &str) -> Result<f64> {
    let degree = provider.degree(id)?;
    let nodes = provider.station_count();
    if nodes <= 1 {
        return Ok(0.0);
    }
    Ok(degree as f64 / (nodes - 1) as f64)
}

/// Stations by descending centrality, ties by ascending identifier
pub fn rank_by_centrality(provider: &dyn GraphProvider) -> Result<Vec<(String, f64)>> {
    let mut ranking = provider
        .station_ids()
        .into_iter()
        .map(|id| Ok((id.to_string(), degree_centrality(provider, id)?)))
        .collect::<Result<Vec<_>>>()?;
    ranking.sort_by(|(a_id, a), (b_id, b)| match b.total_cmp(a) {
        Ordering::Equal => a_id.cmp(b_id),
        other => other,
    });
    Ok(ranking)
}

/// Compute every structural metric of the network
#[tracing::instrument(skip_all, fields(stations = provider.station_count()))]
pub fn analyze(provider: &dyn GraphProvider) -> Result<MetricsReport> {
    let started = Instant::now();
    let hops = hop_stats(provider)?;

    let stations = degrees(provider)?
        .into_iter()
        .map(|(id, degree)| {
            Ok(StationMetrics {
                station: id.to_string(),
                degree,
                clustering: clustering_coefficient(provider, id)?,
                centrality: degree_centrality(provider, id)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let report = MetricsReport {
        node_count: provider.station_count(),
        edge_count: provider.connection_count(),
        average_degree: average_degree(provider),
        density: density(provider),
        diameter: hops.diameter,
        average_path_length: hops.average_path_length,
        average_clustering: average_clustering(provider)?,
        centrality_ranking: rank_by_centrality(provider)?,
        stations,
    };

    tracing::debug!(
        nodes = report.node_count,
        edges = report.edge_count,
        diameter = report.diameter,
        "network metrics computed"
    );
    trace_time!(started, "analyze");
    Ok(report)
}
