//! Analyzer configuration types

use archscan_application::AnalysisOptions;
use archscan_domain::constants::DEFAULT_CONTENT_FETCH_CONCURRENCY;
use serde::{Deserialize, Serialize};

/// Analyzer tunables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Content fetches in flight at once (at least 1)
    pub content_fetch_concurrency: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            content_fetch_concurrency: DEFAULT_CONTENT_FETCH_CONCURRENCY,
        }
    }
}

impl From<&AnalysisConfig> for AnalysisOptions {
    fn from(config: &AnalysisConfig) -> Self {
        Self {
            content_fetch_concurrency: config.content_fetch_concurrency,
        }
    }
}
