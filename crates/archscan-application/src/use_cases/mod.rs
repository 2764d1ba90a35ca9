//! Application use cases

pub mod analysis_service;

pub use analysis_service::{AnalysisOptions, RepositoryAnalysisService, RepositorySnapshot};
