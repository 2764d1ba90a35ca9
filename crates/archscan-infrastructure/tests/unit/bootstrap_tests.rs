//! Component wiring tests

use std::sync::Arc;

use archscan_domain::ports::{AnalysisStore, RepositoryHostProvider};
use archscan_infrastructure::AnalyzerComponents;
use archscan_infrastructure::config::AppConfig;
use archscan_providers::{GitHubRepositoryHost, HttpClientConfig};

#[test]
fn test_build_with_defaults() {
    let mut config = AppConfig::default();
    config.store.enabled = false;

    let components = AnalyzerComponents::build(&config).unwrap();
    assert_eq!(components.host.provider_name(), "github");
    assert!(components.store.is_none());
    assert_eq!(components.service.options().content_fetch_concurrency, 8);
}

#[test]
fn test_store_and_options_follow_config() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = AppConfig::default();
    config.store.directory = dir.path().to_path_buf();
    config.analysis.content_fetch_concurrency = 2;

    let components = AnalyzerComponents::with_host(&config, Arc::new(github_host()));

    let store = components.store.expect("store enabled by default");
    assert_eq!(store.provider_name(), "filesystem");
    assert_eq!(components.service.options().content_fetch_concurrency, 2);
}

fn github_host() -> GitHubRepositoryHost {
    let http = HttpClientConfig::default().build_client().unwrap();
    GitHubRepositoryHost::new(None, None, http)
}
