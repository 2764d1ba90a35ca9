//! # Archscan
//!
//! Structural analysis of hosted source repositories. Given an
//! `owner/repo`, Archscan reads the repository metadata, its file tree and a
//! capped set of manifest-like files, and infers architecture, dependencies,
//! database, APIs, infrastructure, environment, tests and messaging. The
//! result is a JSON document, or a text prompt for an architecture-diagram
//! generator.
//!
//! ## Example
//!
//! ```ignore
//! use archscan::infrastructure::{AnalyzerComponents, ConfigLoader};
//! use archscan::RepoIdentity;
//!
//! let config = ConfigLoader::new().load()?;
//! let components = AnalyzerComponents::build(&config)?;
//! let repo = RepoIdentity::parse("rust-lang/cargo")?;
//! let analysis = components.service.analyze_repository(&repo).await?;
//! println!("{}", archscan::format_analysis_as_prompt(&repo, &analysis));
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Analysis model, ports and errors
//! - `application` - Classifiers, pipeline and prompt formatter
//! - `providers` - GitHub REST host and analysis stores
//! - `infrastructure` - Configuration, logging and wiring
//! - [`cli`] - The `archscan` command

/// Domain layer - analysis model, ports and errors
pub mod domain {
    pub use archscan_domain::*;
}

/// Application layer - classifiers, pipeline and prompt formatter
pub mod application {
    pub use archscan_application::*;
}

/// Provider implementations
pub mod providers {
    pub use archscan_providers::*;
}

/// Infrastructure layer - configuration, logging and wiring
pub mod infrastructure {
    pub use archscan_infrastructure::*;
}

pub mod cli;

pub use application::{RepositoryAnalysisService, format_analysis_as_prompt};
pub use domain::*;
