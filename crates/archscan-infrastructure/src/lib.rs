//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns for the analyzer.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Layered TOML + environment configuration |
//! | [`logging`] | Structured logging with tracing |
//! | [`bootstrap`] | Builds the analysis service and store from configuration |
//! | [`error_ext`] | Context helpers for foreign errors |
//! | [`constants`] | Configuration defaults |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use bootstrap::AnalyzerComponents;
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
