//! Transit Graph Core Library
//!
//! Graph model and algorithms for analysing small weighted transport networks:
//! structural metrics, DFS/BFS traversal paths and Dijkstra shortest paths.

pub mod config;
pub mod dataset;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
