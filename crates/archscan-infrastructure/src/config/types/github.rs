//! GitHub API configuration types

use std::fmt;

use archscan_providers::constants::GITHUB_API_BASE_URL;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_GITHUB_TIMEOUT_SECS;

/// GitHub API access
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// API root; GitHub Enterprise installs use `https://host/api/v3`
    pub api_base_url: String,
    /// Access token sent as a bearer credential
    pub token: Option<String>,
    /// Per-request timeout
    pub timeout_secs: u64,
    /// Overrides the default `archscan/<version>` user agent
    pub user_agent: Option<String>,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_base_url: GITHUB_API_BASE_URL.to_string(),
            token: None,
            timeout_secs: DEFAULT_GITHUB_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl fmt::Debug for GitHubConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHubConfig")
            .field("api_base_url", &self.api_base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
