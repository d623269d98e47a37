//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Analysis configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Budgets applied to shortest-path searches
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// Search budget configuration
///
/// Both limits are unset by default; the reference network is tiny and
/// never needs them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Maximum stations a single Dijkstra run may settle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_settled: Option<usize>,

    /// Wall-clock budget in milliseconds for one shortest-path request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_budget_ms: Option<u64>,
}
