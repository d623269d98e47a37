//! Transport network model and graph algorithms
//!
//! - `model`: the weighted undirected station graph
//! - `metrics`: degree, density, diameter, clustering and centrality
//! - `algos`: DFS/BFS path discovery and Dijkstra shortest paths
//! - `path`: predecessor-chain path reconstruction
//! - `traversal`: the provider trait algorithms read the graph through

pub mod algos;
pub mod metrics;
pub mod model;
pub mod path;
pub mod traversal;
pub mod types;

pub use algos::{
    all_pairs, compare_paths, find_path_bfs, find_path_dfs, routes_from, shortest_distances,
    shortest_path, AllPairsReport,
};
pub use metrics::{analyze, MetricsReport, StationMetrics};
pub use model::TransitGraph;
pub use path::{reconstruct_path, reconstruct_path_from};
pub use traversal::GraphProvider;
pub use types::{
    Connection, Distance, DistanceTable, NetworkFeed, PathComparison, PathResult, SearchLimits,
    ShortestPath,
};
