//! Configuration
//!
//! Sources merged in order, later overriding earlier:
//! 1. Built-in defaults
//! 2. `archscan.toml` (explicit path, current directory or user config dir)
//! 3. `ARCHSCAN_*` environment variables, `__` separating nested keys

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AnalysisConfig, AppConfig, GitHubConfig, LoggingConfig, StoreConfig};
