//! Infrastructure Ports

/// Analysis persistence port
pub mod analysis_store;

pub use analysis_store::{AnalysisKey, AnalysisStore};
