//! Domain Port Interfaces
//!
//! Boundary contracts between the analyzer and the outside world.
//!
//! ## Organization
//!
//! - **providers/** - Repository hosting API the analyzer reads from
//! - **infrastructure/** - Sinks the finished analysis is handed to

/// Infrastructure service ports
pub mod infrastructure;
/// External service provider ports
pub mod providers;

pub use infrastructure::{AnalysisKey, AnalysisStore};
pub use providers::RepositoryHostProvider;
