use crate::error::Result;
use crate::graph::algos::{bfs::find_path_bfs, dfs::find_path_dfs};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::PathComparison;

/// Run DFS and BFS between the same endpoints
pub fn compare_paths(
    provider: &dyn GraphProvider,
    start: &str,
    end: &str,
) -> Result<PathComparison> {
    let dfs = find_path_dfs(provider, start, end)?;
    let bfs = find_path_bfs(provider, start, end)?;

    tracing::debug!(
        dfs_hops = dfs.hops(),
        bfs_hops = bfs.hops(),
        dfs_visited = dfs.visited_count(),
        bfs_visited = bfs.visited_count(),
        "compared traversal paths"
    );

    Ok(PathComparison { dfs, bfs })
}
