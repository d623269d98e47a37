//! Analysis configuration for transit-graph
//!
//! Configuration is TOML. Callers read the file themselves and hand the text
//! to [`AnalysisConfig::from_toml_str`]; the core never touches the file system.

pub mod types;

use std::time::Duration;

use crate::error::{GraphError, Result};
use crate::graph::SearchLimits;

pub use types::{AnalysisConfig, LimitsConfig};

impl AnalysisConfig {
    /// Parse and validate configuration text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: AnalysisConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject limits that could never be satisfied
    pub fn validate(&self) -> Result<()> {
        if self.limits.max_settled == Some(0) {
            return Err(GraphError::InvalidConfig {
                reason: "limits.max_settled must be at least 1".to_string(),
            });
        }
        if self.limits.time_budget_ms == Some(0) {
            return Err(GraphError::InvalidConfig {
                reason: "limits.time_budget_ms must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Search limits derived from the `[limits]` table
    pub fn search_limits(&self) -> SearchLimits {
        SearchLimits {
            max_settled: self.limits.max_settled,
            time_budget: self.limits.time_budget_ms.map(Duration::from_millis),
        }
    }
}
