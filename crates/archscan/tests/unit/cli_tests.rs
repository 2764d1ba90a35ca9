//! CLI parsing and end-to-end runs against a mock GitHub

use archscan::cli::{AnalyzeArgs, Cli, Command, OutputFormat, ShowArgs, analyze, show};
use archscan::infrastructure::AppConfig;
use archscan::RepositoryAnalysis;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use clap::Parser;
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;
use tempfile::TempDir;

const PACKAGE_JSON: &str = r#"{
  "name": "widgets",
  "dependencies": { "express": "^4.18.0", "pg": "^8.11.0" },
  "devDependencies": { "jest": "^29.0.0" }
}"#;

async fn mock_github(server: &mut ServerGuard) {
    server
        .mock("GET", "/repos/octo/widgets")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "name": "widgets",
                "description": "Widget service",
                "language": "TypeScript",
                "topics": [],
                "stargazers_count": 5,
                "forks_count": 1,
                "default_branch": "main",
                "created_at": "2023-01-01T00:00:00Z",
                "updated_at": "2024-01-01T00:00:00Z",
                "size": 100,
                "private": false,
                "license": null,
                "owner": {"login": "octo"}
            })
            .to_string(),
        )
        .create_async()
        .await;
    server
        .mock("GET", "/repos/octo/widgets/languages")
        .with_status(200)
        .with_body(json!({"TypeScript": 1000}).to_string())
        .create_async()
        .await;
    server
        .mock("GET", "/repos/octo/widgets/git/trees/main")
        .match_query(Matcher::UrlEncoded("recursive".into(), "1".into()))
        .with_status(200)
        .with_body(
            json!({
                "sha": "abc",
                "truncated": false,
                "tree": [
                    {"path": "package.json", "type": "blob", "size": 120, "sha": "1"},
                    {"path": "src", "type": "tree", "sha": "2"},
                    {"path": "src/index.ts", "type": "blob", "size": 80, "sha": "3"}
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;
    server
        .mock("GET", "/repos/octo/widgets/contents/package.json")
        .with_status(200)
        .with_body(
            json!({
                "type": "file",
                "encoding": "base64",
                "content": STANDARD.encode(PACKAGE_JSON),
            })
            .to_string(),
        )
        .create_async()
        .await;
    // Anything else the selector asks for does not exist
    server
        .mock("GET", Matcher::Regex("^/repos/octo/widgets/contents/.+".into()))
        .with_status(404)
        .with_body(json!({"message": "Not Found"}).to_string())
        .create_async()
        .await;
}

fn config(server: &ServerGuard, store_dir: &TempDir) -> AppConfig {
    let mut config = AppConfig::default();
    config.github.api_base_url = server.url();
    config.store.directory = store_dir.path().to_path_buf();
    config
}

fn analyze_args(format: OutputFormat, no_store: bool) -> AnalyzeArgs {
    AnalyzeArgs {
        repo: "octo/widgets".to_string(),
        token: None,
        format,
        user: "local".to_string(),
        no_store,
    }
}

#[test]
fn test_parse_analyze() {
    let cli = Cli::try_parse_from([
        "archscan",
        "analyze",
        "https://github.com/octo/widgets",
        "--format",
        "prompt",
        "--no-store",
    ])
    .unwrap();

    assert!(!cli.verbose);
    assert!(cli.config.is_none());
    let Command::Analyze(args) = cli.command else {
        panic!("expected analyze");
    };
    assert_eq!(args.repo, "https://github.com/octo/widgets");
    assert_eq!(args.format, OutputFormat::Prompt);
    assert_eq!(args.user, "local");
    assert!(args.no_store);
}

#[test]
fn test_parse_show_with_global_flags() {
    let cli = Cli::try_parse_from([
        "archscan",
        "show",
        "octo/widgets",
        "--user",
        "alice",
        "-v",
        "--config",
        "custom.toml",
    ])
    .unwrap();

    assert!(cli.verbose);
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("custom.toml")));
    let Command::Show(args) = cli.command else {
        panic!("expected show");
    };
    assert_eq!(args.format, OutputFormat::Json);
    assert_eq!(args.user, "alice");
}

#[test]
fn test_parse_rejects_unknown_format() {
    let result = Cli::try_parse_from(["archscan", "analyze", "octo/widgets", "--format", "yaml"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_requires_subcommand() {
    assert!(Cli::try_parse_from(["archscan"]).is_err());
}

#[tokio::test]
async fn test_analyze_saves_and_show_reads_back() {
    let mut server = Server::new_async().await;
    mock_github(&mut server).await;
    let store_dir = TempDir::new().unwrap();
    let config = config(&server, &store_dir);

    let output = analyze(config.clone(), analyze_args(OutputFormat::Json, false))
        .await
        .unwrap();
    let analysis: RepositoryAnalysis = serde_json::from_str(&output).unwrap();
    assert_eq!(analysis.metadata.name, "widgets");
    let names: Vec<&str> = analysis
        .dependencies
        .dependencies
        .iter()
        .map(|d| d.name.as_str())
        .collect();
    assert!(names.contains(&"express"));
    assert!(names.contains(&"jest"));

    assert!(store_dir.path().join("local").join("octo__widgets.json").exists());

    let shown = show(
        &config,
        &ShowArgs {
            repo: "octo/widgets".to_string(),
            format: OutputFormat::Json,
            user: "local".to_string(),
        },
    )
    .await
    .unwrap();
    let reloaded: RepositoryAnalysis = serde_json::from_str(&shown).unwrap();
    assert_eq!(reloaded, analysis);
}

#[tokio::test]
async fn test_analyze_without_store_renders_prompt() {
    let mut server = Server::new_async().await;
    mock_github(&mut server).await;
    let store_dir = TempDir::new().unwrap();
    let config = config(&server, &store_dir);

    let output = analyze(config, analyze_args(OutputFormat::Prompt, true))
        .await
        .unwrap();

    assert!(output.starts_with("# Repository Analysis: octo/widgets"));
    assert!(!store_dir.path().join("local").exists());
}

#[tokio::test]
async fn test_analyze_rejects_bad_repo_reference() {
    let store_dir = TempDir::new().unwrap();
    let mut config = AppConfig::default();
    config.store.directory = store_dir.path().to_path_buf();

    let mut args = analyze_args(OutputFormat::Json, true);
    args.repo = "not a repo".to_string();

    assert!(analyze(config, args).await.is_err());
}

#[tokio::test]
async fn test_analyze_reports_missing_repository() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", Matcher::Any)
        .with_status(404)
        .with_body(json!({"message": "Not Found"}).to_string())
        .create_async()
        .await;
    let store_dir = TempDir::new().unwrap();

    let err = analyze(
        config(&server, &store_dir),
        analyze_args(OutputFormat::Json, false),
    )
    .await
    .unwrap_err();
    assert!(err.to_string().contains("octo/widgets"));
}

#[tokio::test]
async fn test_show_without_saved_analysis() {
    let store_dir = TempDir::new().unwrap();
    let mut config = AppConfig::default();
    config.store.directory = store_dir.path().to_path_buf();

    let err = show(
        &config,
        &ShowArgs {
            repo: "octo/widgets".to_string(),
            format: OutputFormat::Json,
            user: "local".to_string(),
        },
    )
    .await
    .unwrap_err();
    assert!(err.to_string().contains("No saved analysis"));
}
