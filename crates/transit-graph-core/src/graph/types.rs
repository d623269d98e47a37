use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Distance along a connection, in kilometres.
///
/// Connection distances are always finite and strictly positive; sums of
/// them (route distances) are finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distance(f64);

impl Distance {
    pub const ZERO: Distance = Distance(0.0);

    pub fn new(km: f64) -> Self {
        Distance(km)
    }

    pub fn km(&self) -> f64 {
        self.0
    }

    /// Whether this value is usable as a connection weight
    pub fn is_valid_weight(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }

    /// Total order used by the Dijkstra frontier
    pub fn total_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add for Distance {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Distance(self.0 + other.0)
    }
}

impl From<f64> for Distance {
    fn from(km: f64) -> Self {
        Distance(km)
    }
}

impl From<u32> for Distance {
    fn from(km: u32) -> Self {
        Distance(f64::from(km))
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} km", self.0)
    }
}

/// A weighted connection between two stations, as supplied by the feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub from: String,
    pub to: String,
    pub distance_km: f64,
}

impl Connection {
    pub fn new(from: impl Into<String>, to: impl Into<String>, distance_km: f64) -> Self {
        Connection {
            from: from.into(),
            to: to.into(),
            distance_km,
        }
    }
}

/// Graph-construction feed: ordered stations plus weighted connection triples
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkFeed {
    #[serde(default)]
    pub stations: Vec<String>,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

/// Path found by a traversal or by reconstructing a distance table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    pub from: String,
    pub to: String,
    /// Stations from `from` to `to`, inclusive
    pub path: Vec<String>,
    /// Every station the producing search touched
    pub visited: BTreeSet<String>,
}

impl PathResult {
    /// Number of connections on the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

/// Side-by-side DFS and BFS results for the same endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathComparison {
    pub dfs: PathResult,
    pub bfs: PathResult,
}

impl PathComparison {
    /// How many more hops the DFS path takes than the BFS path
    pub fn hop_difference(&self) -> usize {
        self.dfs.hops().abs_diff(self.bfs.hops())
    }

    pub fn same_length(&self) -> bool {
        self.dfs.hops() == self.bfs.hops()
    }
}

/// Shortest distances and predecessors from a single source
///
/// Only reached stations appear in `distances`; the source and unreached
/// stations have no predecessor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceTable {
    pub source: String,
    pub distances: BTreeMap<String, Distance>,
    pub predecessors: BTreeMap<String, String>,
}

impl DistanceTable {
    /// Distance to `station`, or `None` when it was not reached
    pub fn distance_to(&self, station: &str) -> Option<Distance> {
        self.distances.get(station).copied()
    }

    pub fn predecessor_of(&self, station: &str) -> Option<&str> {
        self.predecessors.get(station).map(String::as_str)
    }

    pub fn reached(&self) -> usize {
        self.distances.len()
    }
}

/// A reconstructed weighted route
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPath {
    pub from: String,
    pub to: String,
    pub path: Vec<String>,
    pub distance: Distance,
}

impl ShortestPath {
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Budget for shortest-path searches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchLimits {
    /// Maximum stations a single Dijkstra run may settle
    pub max_settled: Option<usize>,
    /// Wall-clock budget for the whole request
    pub time_budget: Option<Duration>,
}

impl SearchLimits {
    pub fn unlimited() -> Self {
        Self::default()
    }
}
