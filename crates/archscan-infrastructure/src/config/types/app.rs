//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, GitHubConfig, LoggingConfig, StoreConfig};

/// Root of the configuration tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging output
    pub logging: LoggingConfig,
    /// GitHub API access
    pub github: GitHubConfig,
    /// Analyzer tunables
    pub analysis: AnalysisConfig,
    /// Persistence of finished analyses
    pub store: StoreConfig,
}
