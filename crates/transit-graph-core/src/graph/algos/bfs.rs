use std::collections::{HashMap, HashSet, VecDeque};

use crate::error::{GraphError, Result};
use crate::graph::algos::shared::ensure_station;
use crate::graph::path::walk_back;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::PathResult;

/// Find the minimum-hop path from `start` to `end` with breadth-first search.
///
/// Stations are marked visited when enqueued, so each is enqueued at most
/// once. The search stops when `end` is dequeued; `visited` then holds every
/// station that was ever placed on the frontier.
#[tracing::instrument(skip_all, fields(start = %start, end = %end))]
pub fn find_path_bfs(provider: &dyn GraphProvider, start: &str, end: &str) -> Result<PathResult> {
    ensure_station(provider, start)?;
    ensure_station(provider, end)?;

    let mut visited: HashSet<&str> = HashSet::new();
    let mut predecessors: HashMap<&str, &str> = HashMap::new();
    let mut queue: VecDeque<&str> = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == end {
            let path = walk_back(start, end, visited.len(), |station| {
                predecessors.get(station).copied()
            })
            .ok_or_else(|| GraphError::no_path(start, end))?;

            tracing::debug!(hops = path.len() - 1, visited = visited.len(), "bfs path found");
            return Ok(PathResult {
                from: start.to_string(),
                to: end.to_string(),
                path,
                visited: visited.iter().map(|s| s.to_string()).collect(),
            });
        }

        for neighbor in provider.neighbors(current)? {
            if visited.insert(neighbor) {
                predecessors.insert(neighbor, current);
                queue.push_back(neighbor);
            }
        }
    }

    tracing::debug!(visited = visited.len(), "bfs exhausted frontier");
    Err(GraphError::no_path(start, end))
}
