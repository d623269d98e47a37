use std::collections::HashSet;

use crate::error::{GraphError, Result};
use crate::graph::algos::shared::ensure_station;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::PathResult;

/// One level of the depth-first descent: a station and the neighbors not yet tried
struct Frame<'a> {
    station: &'a str,
    pending: std::vec::IntoIter<&'a str>,
}

/// Find a path from `start` to `end` with depth-first search.
///
/// Neighbors are explored in ascending identifier order and a station is
/// marked visited as soon as the search descends into it. The first path
/// reaching `end` is returned; it is not necessarily the shortest. The
/// explicit stack of frames keeps deep graphs off the call stack while
/// choosing exactly the path a recursive descent would.
#[tracing::instrument(skip_all, fields(start = %start, end = %end))]
pub fn find_path_dfs(provider: &dyn GraphProvider, start: &str, end: &str) -> Result<PathResult> {
    ensure_station(provider, start)?;
    ensure_station(provider, end)?;

    let mut visited: HashSet<&str> = HashSet::new();
    visited.insert(start);

    let found = |path: Vec<&str>, visited: &HashSet<&str>| {
        tracing::debug!(hops = path.len() - 1, visited = visited.len(), "dfs path found");
        PathResult {
            from: start.to_string(),
            to: end.to_string(),
            path: path.iter().map(|s| s.to_string()).collect(),
            visited: visited.iter().map(|s| s.to_string()).collect(),
        }
    };

    if start == end {
        return Ok(found(vec![start], &visited));
    }

    let mut stack = vec![Frame {
        station: start,
        pending: provider.neighbors(start)?.into_iter(),
    }];

    while let Some(frame) = stack.last_mut() {
        let Some(next) = frame.pending.next() else {
            stack.pop();
            continue;
        };
        if !visited.insert(next) {
            continue;
        }
        if next == end {
            let mut path: Vec<&str> = stack.iter().map(|f| f.station).collect();
            path.push(next);
            return Ok(found(path, &visited));
        }
        stack.push(Frame {
            station: next,
            pending: provider.neighbors(next)?.into_iter(),
        });
    }

    tracing::debug!(visited = visited.len(), "dfs exhausted reachable stations");
    Err(GraphError::no_path(start, end))
}
