//! Command line interface
//!
//! ```text
//! archscan analyze <owner/repo | github-url> [--token T] [--format json|prompt] [--no-store]
//! archscan show    <owner/repo | github-url> [--format json|prompt]
//! ```

use std::path::PathBuf;

use anyhow::{Context, bail};
use archscan_application::format_analysis_as_prompt;
use archscan_domain::ports::{AnalysisKey, AnalysisStore};
use archscan_domain::{RepoIdentity, RepositoryAnalysis};
use archscan_infrastructure::constants::DEFAULT_STORE_USER;
use archscan_infrastructure::logging::init_logging;
use archscan_infrastructure::{AnalyzerComponents, AppConfig, ConfigLoader};
use archscan_providers::FileSystemAnalysisStore;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Structural analysis of GitHub repositories
#[derive(Parser, Debug)]
#[command(name = "archscan")]
#[command(about = "Infer the architecture of a GitHub repository from its layout and manifests")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level regardless of configuration
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a repository
    Analyze(AnalyzeArgs),
    /// Print a previously saved analysis
    Show(ShowArgs),
}

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Repository as `owner/repo` or a GitHub URL
    pub repo: String,

    /// GitHub access token
    #[arg(short, long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Owner of the saved analysis
    #[arg(long, default_value = DEFAULT_STORE_USER)]
    pub user: String,

    /// Do not save the analysis
    #[arg(long)]
    pub no_store: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Repository as `owner/repo` or a GitHub URL
    pub repo: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Owner of the saved analysis
    #[arg(long, default_value = DEFAULT_STORE_USER)]
    pub user: String,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed analysis document
    Json,
    /// Text context for the diagram generator
    Prompt,
}

/// Load configuration, install logging and dispatch
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let mut config = loader.load()?;
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    init_logging(&config.logging)?;

    let output = match cli.command {
        Command::Analyze(args) => analyze(config, args).await?,
        Command::Show(args) => show(&config, &args).await?,
    };
    println!("{output}");
    Ok(())
}

/// Run the pipeline, save the result when the store is enabled and render it.
///
/// Ctrl-C cancels the in-flight analysis.
pub async fn analyze(mut config: AppConfig, args: AnalyzeArgs) -> anyhow::Result<String> {
    let repo = RepoIdentity::parse(&args.repo)?;
    if let Some(token) = args.token {
        config.github.token = Some(token);
    }
    if args.no_store {
        config.store.enabled = false;
    }

    let components = AnalyzerComponents::build(&config)?;
    let cancel = CancellationToken::new();
    let interrupt = tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupt received, cancelling analysis");
                cancel.cancel();
            }
        }
    });

    let result = components
        .service
        .analyze_repository_cancellable(&repo, &cancel)
        .await;
    interrupt.abort();
    let analysis = result.with_context(|| format!("Failed to analyze {repo}"))?;

    if let Some(store) = &components.store {
        let key = AnalysisKey::new(&args.user, repo.clone());
        store
            .save(&key, &analysis)
            .await
            .with_context(|| format!("Failed to save analysis of {repo}"))?;
        info!(repo = %repo, user = %args.user, store = store.provider_name(), "Analysis saved");
    }

    render(args.format, &repo, &analysis)
}

/// Load and render a saved analysis
pub async fn show(config: &AppConfig, args: &ShowArgs) -> anyhow::Result<String> {
    let repo = RepoIdentity::parse(&args.repo)?;
    let store = FileSystemAnalysisStore::new(&config.store.directory);
    let key = AnalysisKey::new(&args.user, repo.clone());

    let Some(analysis) = store.load(&key).await? else {
        bail!(
            "No saved analysis of {repo} for user '{}' under {}",
            args.user,
            config.store.directory.display()
        );
    };
    render(args.format, &repo, &analysis)
}

/// Render an analysis in the requested format
pub fn render(
    format: OutputFormat,
    repo: &RepoIdentity,
    analysis: &RepositoryAnalysis,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(analysis).context("Failed to serialize analysis")
        }
        OutputFormat::Prompt => Ok(format_analysis_as_prompt(repo, analysis)),
    }
}
