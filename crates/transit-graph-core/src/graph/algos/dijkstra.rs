use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::time::Instant;

use crate::error::Result;
use crate::graph::algos::shared::{ensure_station, SearchBudget};
use crate::graph::path::reconstruct_path;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Distance, DistanceTable, SearchLimits, ShortestPath};
use crate::trace_time;

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated distance)
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry<'a> {
    pub station: &'a str,
    pub distance: Distance,
}

impl PartialEq for HeapEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry<'_> {}

impl PartialOrd for HeapEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry<'_> {
    // Ties on distance settle the lower identifier first
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.station.cmp(other.station))
    }
}

/// Single-source shortest distances and predecessors (Dijkstra).
///
/// The frontier is a binary heap with lazy re-insertion: improved distances
/// are pushed again and stale entries are skipped when popped. Stations that
/// are never reached stay out of the table.
#[tracing::instrument(skip_all, fields(start = %start))]
pub fn shortest_distances(
    provider: &dyn GraphProvider,
    start: &str,
    limits: SearchLimits,
) -> Result<DistanceTable> {
    let mut budget = SearchBudget::new(limits);
    dijkstra_with_budget(provider, start, &mut budget)
}

pub(crate) fn dijkstra_with_budget(
    provider: &dyn GraphProvider,
    start: &str,
    budget: &mut SearchBudget,
) -> Result<DistanceTable> {
    ensure_station(provider, start)?;
    let started = Instant::now();
    budget.begin_run();

    let mut best: HashMap<&str, Distance> = HashMap::with_capacity(provider.station_count());
    let mut predecessors: HashMap<&str, &str> = HashMap::new();
    let mut settled: HashSet<&str> = HashSet::with_capacity(provider.station_count());
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();

    best.insert(start, Distance::ZERO);
    heap.push(Reverse(HeapEntry {
        station: start,
        distance: Distance::ZERO,
    }));

    while let Some(Reverse(HeapEntry { station, distance })) = heap.pop() {
        // Skip stale entries left behind by later improvements
        if !settled.insert(station) {
            continue;
        }
        budget.settle("dijkstra")?;

        for (neighbor, weight) in provider.weighted_neighbors(station)? {
            if settled.contains(neighbor) {
                continue;
            }
            let candidate = distance + weight;
            let improves = best
                .get(neighbor)
                .is_none_or(|known| candidate.total_cmp(known) == Ordering::Less);
            if improves {
                best.insert(neighbor, candidate);
                predecessors.insert(neighbor, station);
                heap.push(Reverse(HeapEntry {
                    station: neighbor,
                    distance: candidate,
                }));
            }
        }
    }

    trace_time!(started, "dijkstra", settled = budget.settled());

    Ok(DistanceTable {
        source: start.to_string(),
        distances: best
            .into_iter()
            .map(|(station, distance)| (station.to_string(), distance))
            .collect(),
        predecessors: predecessors
            .into_iter()
            .map(|(station, prev)| (station.to_string(), prev.to_string()))
            .collect(),
    })
}

/// Shortest weighted route between two stations.
///
/// Fails with `UnknownNode` for absent endpoints and `NoPath` when `end` is
/// unreachable from `start`.
#[tracing::instrument(skip_all, fields(start = %start, end = %end))]
pub fn shortest_path(
    provider: &dyn GraphProvider,
    start: &str,
    end: &str,
    limits: SearchLimits,
) -> Result<ShortestPath> {
    ensure_station(provider, end)?;
    let table = shortest_distances(provider, start, limits)?;
    route_in_table(&table, end)
}

/// Reconstruct the route to `end` and pair it with its table distance
pub(crate) fn route_in_table(table: &DistanceTable, end: &str) -> Result<ShortestPath> {
    let path = reconstruct_path(table, end)?;
    let distance = table.distance_to(end).unwrap_or(Distance::ZERO);
    Ok(ShortestPath {
        from: table.source.clone(),
        to: end.to_string(),
        path,
        distance,
    })
}
