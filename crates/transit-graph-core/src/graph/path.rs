//! Path reconstruction utilities for graph traversal

use std::collections::BTreeMap;

use crate::error::{GraphError, Result};
use crate::graph::types::DistanceTable;

/// Follow a predecessor chain back from `end` to `start`.
///
/// Returns the path in start-to-end order, or `None` if the chain breaks
/// before reaching `start`. `max_steps` bounds the walk so a malformed
/// (cyclic) predecessor map cannot loop forever.
pub(crate) fn walk_back<'p>(
    start: &str,
    end: &str,
    max_steps: usize,
    predecessor: impl Fn(&str) -> Option<&'p str>,
) -> Option<Vec<String>> {
    let mut path = vec![end.to_string()];
    let mut current = end.to_string();

    while current != start {
        if path.len() > max_steps {
            return None;
        }
        let prev = predecessor(&current)?;
        path.push(prev.to_string());
        current = prev.to_string();
    }

    path.reverse();
    Some(path)
}

/// Reconstruct the path from `start` to `end` out of a raw predecessor map.
///
/// Fails with `NoPath` if the chain ends before reaching `start`.
pub fn reconstruct_path_from(
    predecessors: &BTreeMap<String, String>,
    start: &str,
    end: &str,
) -> Result<Vec<String>> {
    walk_back(start, end, predecessors.len() + 1, |station| {
        predecessors.get(station).map(String::as_str)
    })
    .ok_or_else(|| GraphError::no_path(start, end))
}

/// Reconstruct the shortest path to `end` from a Dijkstra distance table
pub fn reconstruct_path(table: &DistanceTable, end: &str) -> Result<Vec<String>> {
    walk_back(&table.source, end, table.predecessors.len() + 1, |station| {
        table.predecessor_of(station)
    })
    .ok_or_else(|| GraphError::no_path(&table.source, end))
}
