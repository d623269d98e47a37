//! Reading network feeds and analysis configuration from disk

use std::fs;
use std::path::Path;

use tracing::debug;

use transit_graph_core::config::AnalysisConfig;
use transit_graph_core::dataset::reference_feed;
use transit_graph_core::error::Result;
use transit_graph_core::graph::{NetworkFeed, TransitGraph};

/// Parse a TOML network feed
pub fn read_feed(path: &Path) -> Result<NetworkFeed> {
    let content = fs::read_to_string(path)?;
    let feed: NetworkFeed = toml::from_str(&content)?;
    debug!(
        path = %path.display(),
        stations = feed.stations.len(),
        connections = feed.connections.len(),
        "read network feed"
    );
    Ok(feed)
}

pub fn load_network(path: Option<&Path>) -> Result<TransitGraph> {
    let feed = match path {
        Some(path) => read_feed(path)?,
        None => {
            debug!("using built-in reference network");
            reference_feed()
        }
    };
    TransitGraph::from_feed(&feed)
}

pub fn load_config(path: Option<&Path>) -> Result<AnalysisConfig> {
    match path {
        Some(path) => AnalysisConfig::from_toml_str(&fs::read_to_string(path)?),
        None => Ok(AnalysisConfig::default()),
    }
}
