//! Repository Analysis Use Case
//!
//! Orchestrates the fan-out/fan-in pipeline: metadata and tree fetch,
//! allow-listed content fetch, classification and aggregation.
//!
//! Required calls (descriptor, language histogram, tree) are fatal on
//! failure. Each content fetch has its own failure boundary and a failed
//! file is simply absent from the content map. There are no retries.

use std::sync::Arc;

use archscan_domain::constants::DEFAULT_CONTENT_FETCH_CONCURRENCY;
use archscan_domain::error::{Error, Result};
use archscan_domain::ports::RepositoryHostProvider;
use archscan_domain::{
    FileContentMap, RawFileContent, RepoIdentity, RepoMetadata, RepoTreeEntry, RepositoryAnalysis,
};
use chrono::Utc;
use futures::StreamExt;
use futures::stream;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::aggregator::{Facets, aggregate};
use crate::content_selection::select_content_paths;

/// Tunables for one service instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Content fetches in flight at once; values below 1 are treated as 1
    pub content_fetch_concurrency: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            content_fetch_concurrency: DEFAULT_CONTENT_FETCH_CONCURRENCY,
        }
    }
}

/// Metadata and tree fetched for one run
#[derive(Debug, Clone)]
pub struct RepositorySnapshot {
    pub metadata: RepoMetadata,
    pub tree: Vec<RepoTreeEntry>,
}

/// Analyzer entry point
pub struct RepositoryAnalysisService {
    host: Arc<dyn RepositoryHostProvider>,
    options: AnalysisOptions,
}

impl RepositoryAnalysisService {
    /// Create the service over a repository host
    pub fn new(host: Arc<dyn RepositoryHostProvider>, options: AnalysisOptions) -> Self {
        Self { host, options }
    }

    pub fn options(&self) -> AnalysisOptions {
        self.options
    }

    /// Analyze a repository; runs to completion
    pub async fn analyze_repository(&self, repo: &RepoIdentity) -> Result<RepositoryAnalysis> {
        self.analyze_repository_cancellable(repo, &CancellationToken::new())
            .await
    }

    /// Analyze a repository, stopping at either fetch phase once `cancel` fires
    #[tracing::instrument(skip(self, repo, cancel), fields(repo = %repo, host = self.host.provider_name()))]
    pub async fn analyze_repository_cancellable(
        &self,
        repo: &RepoIdentity,
        cancel: &CancellationToken,
    ) -> Result<RepositoryAnalysis> {
        let snapshot = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(Error::cancelled("metadata and tree fetch")),
            snapshot = self.fetch_snapshot(repo) => snapshot?,
        };
        info!(
            entries = snapshot.tree.len(),
            branch = %snapshot.metadata.default_branch,
            "Repository tree fetched"
        );

        let paths = select_content_paths(&snapshot.tree);
        let contents = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(Error::cancelled("content fetch")),
            contents = self.fetch_contents(repo, &paths) => contents,
        };
        info!(
            selected = paths.len(),
            fetched = contents.len(),
            "Allow-listed content fetched"
        );

        let analysis = Self::analyze_snapshot(snapshot, &contents);
        info!(
            pattern = %analysis.architecture.pattern,
            dependencies = analysis.dependencies.dependencies.len(),
            "Repository analysis complete"
        );
        Ok(analysis)
    }

    /// Classify an already fetched snapshot. Performs no I/O.
    pub fn analyze_snapshot(
        snapshot: RepositorySnapshot,
        contents: &FileContentMap,
    ) -> RepositoryAnalysis {
        let facets = Facets::classify(&snapshot.tree, contents);
        debug!(
            architecture = %facets.architecture.pattern,
            apis = ?facets.apis.styles,
            has_messaging = facets.messaging.has_messaging,
            "Facets classified"
        );
        aggregate(snapshot.metadata, facets, Utc::now())
    }

    /// Descriptor and language histogram concurrently, then the tree of the
    /// default branch. Any failure is fatal.
    pub async fn fetch_snapshot(&self, repo: &RepoIdentity) -> Result<RepositorySnapshot> {
        let (descriptor, languages) = tokio::try_join!(
            self.host.get_repo_descriptor(repo),
            self.host.get_language_histogram(repo),
        )?;
        let tree = self
            .host
            .get_tree_recursive(repo, &descriptor.default_branch)
            .await?;

        Ok(RepositorySnapshot {
            metadata: RepoMetadata::from_parts(descriptor, languages),
            tree,
        })
    }

    /// Fetch the given paths with bounded concurrency.
    ///
    /// Never fails: errors and binary files leave the path out of the map.
    pub async fn fetch_contents(&self, repo: &RepoIdentity, paths: &[String]) -> FileContentMap {
        let host = self.host.as_ref();
        let concurrency = self.options.content_fetch_concurrency.max(1);

        stream::iter(paths)
            .map(|path| async move {
                match host.get_file_raw_content(repo, path).await {
                    Ok(RawFileContent::Text(text)) => Some((path.clone(), text)),
                    Ok(RawFileContent::Binary(_)) => {
                        debug!(path = %path, "Skipping binary content");
                        None
                    }
                    Err(err) => {
                        warn!(path = %path, error = %err, "Content fetch failed; treating file as absent");
                        None
                    }
                }
            })
            .buffered(concurrency)
            .filter_map(|fetched| async move { fetched })
            .collect()
            .await
    }
}
