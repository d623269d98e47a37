//! Weighted undirected transport network
//!
//! The graph is built once from a [`NetworkFeed`] (or incrementally with
//! [`TransitGraph::add_station`] / [`TransitGraph::add_connection`]) and is
//! treated as read-only afterwards. Algorithms only see it through
//! [`GraphProvider`].

use std::collections::{BTreeMap, HashMap};

use crate::bail_invalid_edge;
use crate::error::{GraphError, Result};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Connection, Distance, NetworkFeed};

/// Simple weighted undirected graph of stations
#[derive(Debug, Clone, Default)]
pub struct TransitGraph {
    /// Station identifiers in insertion order
    stations: Vec<String>,
    /// Neighbor map per station; `BTreeMap` keeps neighbors sorted by identifier
    adjacency: HashMap<String, BTreeMap<String, Distance>>,
    /// Accepted connections in insertion order
    connections: Vec<Connection>,
    /// Sum of every accepted distance; bounds any route length
    total_distance: Distance,
}

impl TransitGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a construction feed, failing on the first bad connection
    #[tracing::instrument(skip(feed), fields(stations = feed.stations.len(), connections = feed.connections.len()))]
    pub fn from_feed(feed: &NetworkFeed) -> Result<Self> {
        let mut graph = TransitGraph::new();
        for station in &feed.stations {
            graph.add_station(station);
        }
        for connection in &feed.connections {
            graph.add_connection(&connection.from, &connection.to, connection.distance_km)?;
        }
        tracing::debug!(
            stations = graph.station_count(),
            connections = graph.connection_count(),
            "network built"
        );
        Ok(graph)
    }

    /// Add a station; adding an existing station is a no-op
    pub fn add_station(&mut self, id: &str) {
        if self.adjacency.contains_key(id) {
            return;
        }
        self.stations.push(id.to_string());
        self.adjacency.insert(id.to_string(), BTreeMap::new());
    }

    /// Connect two known stations with a positive distance in kilometres.
    ///
    /// Fails without modifying the graph if the connection is a self-loop,
    /// the distance is not a positive finite number, an endpoint is unknown,
    /// the pair is already connected, or the network's total distance would
    /// no longer be finite.
    pub fn add_connection(&mut self, from: &str, to: &str, distance_km: f64) -> Result<()> {
        if from == to {
            bail_invalid_edge!(from, to, "a station cannot connect to itself");
        }
        let distance = Distance::new(distance_km);
        if !distance.is_valid_weight() {
            bail_invalid_edge!(
                from,
                to,
                format!("distance must be a positive number of kilometres, got {distance_km}")
            );
        }
        for endpoint in [from, to] {
            if !self.adjacency.contains_key(endpoint) {
                bail_invalid_edge!(from, to, format!("unknown station {endpoint}"));
            }
        }
        if self
            .adjacency
            .get(from)
            .is_some_and(|neighbors| neighbors.contains_key(to))
        {
            return Err(GraphError::DuplicateEdge {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        let total_distance = self.total_distance + distance;
        if !total_distance.km().is_finite() {
            bail_invalid_edge!(
                from,
                to,
                "total network distance would overflow to infinity"
            );
        }

        // Both endpoints were checked above, so both inserts land.
        if let Some(neighbors) = self.adjacency.get_mut(from) {
            neighbors.insert(to.to_string(), distance);
        }
        if let Some(neighbors) = self.adjacency.get_mut(to) {
            neighbors.insert(from.to_string(), distance);
        }
        self.connections.push(Connection::new(from, to, distance_km));
        self.total_distance = total_distance;
        Ok(())
    }

    /// Stations in insertion order
    pub fn stations(&self) -> &[String] {
        &self.stations
    }

    /// Connections in insertion order
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    fn adjacent(&self, id: &str) -> Result<&BTreeMap<String, Distance>> {
        self.adjacency
            .get(id)
            .ok_or_else(|| GraphError::unknown_node(id))
    }
}

impl GraphProvider for TransitGraph {
    fn station_ids(&self) -> Vec<&str> {
        self.stations.iter().map(String::as_str).collect()
    }

    fn contains_station(&self, id: &str) -> bool {
        self.contains(id)
    }

    fn neighbors(&self, id: &str) -> Result<Vec<&str>> {
        Ok(self.adjacent(id)?.keys().map(String::as_str).collect())
    }

    fn weighted_neighbors(&self, id: &str) -> Result<Vec<(&str, Distance)>> {
        Ok(self
            .adjacent(id)?
            .iter()
            .map(|(neighbor, distance)| (neighbor.as_str(), *distance))
            .collect())
    }

    fn weight(&self, from: &str, to: &str) -> Result<Distance> {
        if !self.contains(to) {
            return Err(GraphError::unknown_node(to));
        }
        self.adjacent(from)?
            .get(to)
            .copied()
            .ok_or_else(|| GraphError::NoSuchEdge {
                from: from.to_string(),
                to: to.to_string(),
            })
    }

    fn station_count(&self) -> usize {
        self.stations.len()
    }

    fn connection_count(&self) -> usize {
        self.connections.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::reference_network;

    fn triangle() -> TransitGraph {
        let mut graph = TransitGraph::new();
        for id in ["A", "B", "C"] {
            graph.add_station(id);
        }
        graph.add_connection("A", "B", 1.0).unwrap();
        graph.add_connection("B", "C", 2.0).unwrap();
        graph
    }

    #[test]
    fn test_add_station_idempotent() {
        let mut graph = TransitGraph::new();
        graph.add_station("A");
        graph.add_station("A");
        assert_eq!(graph.station_count(), 1);
        assert_eq!(graph.stations(), ["A".to_string()]);
    }

    #[test]
    fn test_connection_is_undirected() {
        let graph = triangle();
        assert_eq!(graph.weight("A", "B").unwrap(), Distance::new(1.0));
        assert_eq!(graph.weight("B", "A").unwrap(), Distance::new(1.0));
        assert_eq!(graph.neighbors("B").unwrap(), vec!["A", "C"]);
    }

    #[test]
    fn test_self_loop_rejected() {
        let mut graph = triangle();
        let err = graph.add_connection("A", "A", 1.0).unwrap_err();
        assert!(matches!(err, GraphError::InvalidEdge { .. }));
        assert_eq!(graph.connection_count(), 2);
    }

    #[test]
    fn test_non_positive_weight_rejected() {
        let mut graph = triangle();
        for bad in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let err = graph.add_connection("A", "C", bad).unwrap_err();
            assert!(matches!(err, GraphError::InvalidEdge { .. }), "{bad}");
        }
        assert!(graph.weight("A", "C").is_err());
        assert_eq!(graph.connection_count(), 2);
    }

    #[test]
    fn test_unknown_endpoint_rejected() {
        let mut graph = triangle();
        let err = graph.add_connection("A", "Z", 1.0).unwrap_err();
        assert!(matches!(err, GraphError::InvalidEdge { ref reason, .. } if reason.contains('Z')));
        assert!(!graph.contains("Z"));
        assert_eq!(graph.neighbors("A").unwrap(), vec!["B"]);
    }

    #[test]
    fn test_overflowing_total_distance_rejected() {
        let mut graph = triangle();
        graph.add_station("D");
        graph.add_connection("C", "D", f64::MAX).unwrap();
        let err = graph.add_connection("A", "D", f64::MAX).unwrap_err();
        assert!(matches!(err, GraphError::InvalidEdge { ref reason, .. } if reason.contains("overflow")));
        // Nothing changed, so routes through D stay finite
        assert!(graph.weight("A", "D").is_err());
        assert_eq!(graph.connection_count(), 3);
        assert_eq!(graph.neighbors("D").unwrap(), vec!["C"]);
    }

    #[test]
    fn test_duplicate_rejected_in_either_orientation() {
        let mut graph = triangle();
        let err = graph.add_connection("B", "A", 5.0).unwrap_err();
        assert!(matches!(err, GraphError::DuplicateEdge { .. }));
        // The first weight survives
        assert_eq!(graph.weight("A", "B").unwrap(), Distance::new(1.0));
        assert_eq!(graph.connection_count(), 2);
    }

    #[test]
    fn test_neighbors_unknown_node() {
        let graph = triangle();
        let err = graph.neighbors("Z").unwrap_err();
        assert!(matches!(err, GraphError::UnknownNode { ref id } if id == "Z"));
    }

    #[test]
    fn test_weight_errors() {
        let graph = triangle();
        assert!(matches!(
            graph.weight("A", "C").unwrap_err(),
            GraphError::NoSuchEdge { .. }
        ));
        assert!(matches!(
            graph.weight("A", "Z").unwrap_err(),
            GraphError::UnknownNode { .. }
        ));
        assert!(matches!(
            graph.weight("Z", "A").unwrap_err(),
            GraphError::UnknownNode { .. }
        ));
    }

    #[test]
    fn test_degree_matches_neighbor_count() {
        let graph = reference_network().unwrap();
        for station in graph.station_ids() {
            assert_eq!(
                graph.degree(station).unwrap(),
                graph.neighbors(station).unwrap().len()
            );
        }
    }

    #[test]
    fn test_reference_center_degree() {
        let graph = reference_network().unwrap();
        assert_eq!(graph.degree("Центр").unwrap(), 3);
        assert_eq!(
            graph.neighbors("Центр").unwrap(),
            vec!["Парк", "Ринок", "Університет"]
        );
    }

    #[test]
    fn test_from_feed_stops_at_bad_connection() {
        let feed = NetworkFeed {
            stations: vec!["A".into(), "B".into()],
            connections: vec![Connection::new("A", "B", 1.0), Connection::new("A", "C", 1.0)],
        };
        let err = TransitGraph::from_feed(&feed).unwrap_err();
        assert!(matches!(err, GraphError::InvalidEdge { .. }));
    }

    #[test]
    fn test_connections_keep_insertion_order() {
        let graph = triangle();
        let pairs: Vec<_> = graph
            .connections()
            .iter()
            .map(|c| (c.from.as_str(), c.to.as_str()))
            .collect();
        assert_eq!(pairs, vec![("A", "B"), ("B", "C")]);
    }
}
