//! Configuration types, one module per section

mod analysis;
mod app;
mod github;
mod logging;
mod store;

pub use analysis::AnalysisConfig;
pub use app::AppConfig;
pub use github::GitHubConfig;
pub use logging::LoggingConfig;
pub use store::StoreConfig;
