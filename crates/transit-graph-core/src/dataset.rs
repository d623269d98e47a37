//! Built-in reference network: ten city stations joined by ten connections.

use crate::error::Result;
use crate::graph::{Connection, NetworkFeed, TransitGraph};

pub const REFERENCE_STATIONS: [&str; 10] = [
    "Центр",
    "Парк",
    "Університет",
    "Ринок",
    "Вокзал",
    "Аеропорт",
    "Стадіон",
    "Лікарня",
    "Торговий центр",
    "Бібліотека",
];

/// `(from, to, distance_km)`
pub const REFERENCE_CONNECTIONS: [(&str, &str, f64); 10] = [
    ("Центр", "Парк", 2.0),
    ("Центр", "Університет", 3.0),
    ("Центр", "Ринок", 1.0),
    ("Парк", "Стадіон", 2.0),
    ("Університет", "Лікарня", 4.0),
    ("Ринок", "Вокзал", 3.0),
    ("Вокзал", "Аеропорт", 8.0),
    ("Парк", "Бібліотека", 2.0),
    ("Ринок", "Торговий центр", 1.0),
    ("Торговий центр", "Університет", 3.0),
];

pub fn reference_feed() -> NetworkFeed {
    NetworkFeed {
        stations: REFERENCE_STATIONS.iter().map(|s| s.to_string()).collect(),
        connections: REFERENCE_CONNECTIONS
            .iter()
            .map(|&(from, to, km)| Connection::new(from, to, km))
            .collect(),
    }
}

pub fn reference_network() -> Result<TransitGraph> {
    TransitGraph::from_feed(&reference_feed())
}
