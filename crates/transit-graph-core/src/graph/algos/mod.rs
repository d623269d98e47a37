//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `dfs`: Depth-first path discovery with an explicit stack
//! - `bfs`: Breadth-first path discovery (minimum hop count)
//! - `compare`: DFS and BFS side by side
//! - `dijkstra`: Weighted single-source shortest distances
//! - `all_pairs`: Dijkstra repeated from every station
//! - `shared`: Common utilities used by multiple algorithms

pub mod all_pairs;
pub mod bfs;
pub mod compare;
pub mod dfs;
pub mod dijkstra;
pub mod shared;

pub use all_pairs::{all_pairs, routes_from, AllPairsReport};
pub use bfs::find_path_bfs;
pub use compare::compare_paths;
pub use dfs::find_path_dfs;
pub use dijkstra::{shortest_distances, shortest_path};
pub use shared::{hop_distances, SearchBudget};
