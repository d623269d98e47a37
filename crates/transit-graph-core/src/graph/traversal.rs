use crate::error::Result;
use crate::graph::types::Distance;

/// Trait for providing graph adjacency and connection weights
///
/// Implementations must report neighbors in ascending identifier order so
/// every algorithm built on top of this trait is reproducible.
pub trait GraphProvider {
    /// All stations, in insertion order
    fn station_ids(&self) -> Vec<&str>;

    fn contains_station(&self, id: &str) -> bool;

    /// Adjacent stations, sorted by identifier
    fn neighbors(&self, id: &str) -> Result<Vec<&str>>;

    /// Adjacent stations with connection distances, sorted by identifier
    fn weighted_neighbors(&self, id: &str) -> Result<Vec<(&str, Distance)>>;

    fn weight(&self, from: &str, to: &str) -> Result<Distance>;

    fn station_count(&self) -> usize;

    fn connection_count(&self) -> usize;

    fn degree(&self, id: &str) -> Result<usize> {
        Ok(self.neighbors(id)?.len())
    }
}
