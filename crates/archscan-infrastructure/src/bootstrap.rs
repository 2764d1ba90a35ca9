//! Component wiring
//!
//! Builds the analyzer and its collaborators from an [`AppConfig`].
//! Wiring is explicit constructor calls; there is no container.
//!
//! ```text
//! AppConfig ─┬─ github ──> GitHubRepositoryHost ─┐
//!            ├─ analysis ────────────────────────┴─> RepositoryAnalysisService
//!            └─ store ───> FileSystemAnalysisStore (optional)
//! ```

use std::sync::Arc;
use std::time::Duration;

use archscan_application::{AnalysisOptions, RepositoryAnalysisService};
use archscan_domain::error::Result;
use archscan_domain::ports::{AnalysisStore, RepositoryHostProvider};
use archscan_providers::{FileSystemAnalysisStore, GitHubRepositoryHost, HttpClientConfig};
use tracing::info;

use crate::config::AppConfig;

/// Everything a caller needs to run and persist analyses
pub struct AnalyzerComponents {
    /// The pipeline
    pub service: RepositoryAnalysisService,
    /// Repository host the pipeline reads from
    pub host: Arc<dyn RepositoryHostProvider>,
    /// Sink for finished analyses; `None` when the store is disabled
    pub store: Option<Arc<dyn AnalysisStore>>,
}

impl AnalyzerComponents {
    /// Wire the GitHub host and, if enabled, the filesystem store
    pub fn build(config: &AppConfig) -> Result<Self> {
        let mut http = HttpClientConfig::with_timeout(Duration::from_secs(config.github.timeout_secs));
        if let Some(user_agent) = &config.github.user_agent {
            http.user_agent.clone_from(user_agent);
        }

        let host = GitHubRepositoryHost::new(
            config.github.token.clone(),
            Some(config.github.api_base_url.clone()),
            http.build_client()?,
        );
        info!(
            base_url = host.base_url(),
            authenticated = host.is_authenticated(),
            "Repository host configured"
        );

        Ok(Self::with_host(config, Arc::new(host)))
    }

    /// Wire around an already constructed host
    pub fn with_host(config: &AppConfig, host: Arc<dyn RepositoryHostProvider>) -> Self {
        let store = config.store.enabled.then(|| {
            info!(directory = %config.store.directory.display(), "Analysis store enabled");
            Arc::new(FileSystemAnalysisStore::new(&config.store.directory)) as Arc<dyn AnalysisStore>
        });

        Self {
            service: RepositoryAnalysisService::new(
                Arc::clone(&host),
                AnalysisOptions::from(&config.analysis),
            ),
            host,
            store,
        }
    }
}
