//! Application Layer - Archscan
//!
//! Turns a fetched repository snapshot into a [`RepositoryAnalysis`].
//!
//! ## Pipeline
//!
//! 1. [`RepositoryAnalysisService`] fetches the descriptor and language
//!    histogram concurrently, then the recursive tree of the default branch.
//! 2. [`content_selection`] picks the allow-listed blobs (at most
//!    [`MAX_CONTENT_FILES`](archscan_domain::constants::MAX_CONTENT_FILES)) and
//!    their contents are fetched with per-file failure isolation.
//! 3. The eight [`classifiers`] derive one facet each from the tree and contents.
//! 4. [`aggregator`] merges metadata and facets into the final record.
//!
//! [`prompt`] renders the record as text for the diagram-generation model.
//!
//! [`RepositoryAnalysis`]: archscan_domain::RepositoryAnalysis

pub mod aggregator;
pub mod classifiers;
pub mod content_selection;
pub mod prompt;
pub mod use_cases;

pub use aggregator::{Facets, aggregate};
pub use prompt::format_analysis_as_prompt;
pub use use_cases::{AnalysisOptions, RepositoryAnalysisService};
