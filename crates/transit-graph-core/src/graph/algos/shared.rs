use std::collections::{HashMap, VecDeque};
use std::time::Instant;

use crate::error::{GraphError, Result};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::SearchLimits;

/// Fail with `UnknownNode` unless `id` is a station of the graph
pub fn ensure_station(provider: &dyn GraphProvider, id: &str) -> Result<()> {
    if provider.contains_station(id) {
        Ok(())
    } else {
        Err(GraphError::unknown_node(id))
    }
}

/// Tracks search limits across one or more Dijkstra runs.
///
/// The settled-station count resets per run; the deadline is fixed when the
/// budget is created, so a shared budget bounds a whole all-pairs request.
#[derive(Debug, Clone)]
pub struct SearchBudget {
    limits: SearchLimits,
    deadline: Option<Instant>,
    settled: usize,
}

impl SearchBudget {
    pub fn new(limits: SearchLimits) -> Self {
        let deadline = limits
            .time_budget
            .and_then(|budget| Instant::now().checked_add(budget));
        Self {
            limits,
            deadline,
            settled: 0,
        }
    }

    pub fn begin_run(&mut self) {
        self.settled = 0;
    }

    pub fn settled(&self) -> usize {
        self.settled
    }

    /// Record one settled station, failing with `Timeout` past either limit
    pub fn settle(&mut self, operation: &str) -> Result<()> {
        self.settled += 1;

        if let Some(max) = self.limits.max_settled {
            if self.settled > max {
                return Err(GraphError::timeout(
                    operation,
                    format!("{max} settled stations"),
                ));
            }
        }

        if let (Some(deadline), Some(budget)) = (self.deadline, self.limits.time_budget) {
            if Instant::now() > deadline {
                return Err(GraphError::timeout(
                    operation,
                    format!("{} ms", budget.as_millis()),
                ));
            }
        }

        Ok(())
    }
}

/// Unweighted hop distance from `source` to every reachable station.
///
/// Unreachable stations are absent from the returned map.
pub fn hop_distances<'g>(
    provider: &'g dyn GraphProvider,
    source: &str,
) -> Result<HashMap<&'g str, usize>> {
    let mut distances: HashMap<&str, usize> = HashMap::with_capacity(provider.station_count());
    let mut queue: VecDeque<&str> = VecDeque::new();

    // Re-borrow the source from the provider so every key shares its lifetime.
    let Some(source) = provider.station_ids().into_iter().find(|id| *id == source) else {
        return Err(GraphError::unknown_node(source));
    };
    distances.insert(source, 0);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        let hops = distances.get(current).copied().unwrap_or_default();
        for neighbor in provider.neighbors(current)? {
            if !distances.contains_key(neighbor) {
                distances.insert(neighbor, hops + 1);
                queue.push_back(neighbor);
            }
        }
    }

    Ok(distances)
}
