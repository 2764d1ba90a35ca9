//! Classifier bank
//!
//! Eight independent, stateless classifiers. Each is a pure function over
//! the tree and/or the content map and produces one facet. None of them
//! performs I/O or fails: malformed input and missing files degrade to the
//! facet's "nothing detected" state.
//!
//! | Classifier | Input | Facet |
//! |------------|-------|-------|
//! | [`classify_architecture`] | tree | [`ArchitectureAnalysis`](archscan_domain::ArchitectureAnalysis) |
//! | [`classify_dependencies`] | contents | [`DependencyAnalysis`](archscan_domain::DependencyAnalysis) |
//! | [`classify_database`] | tree + contents | [`DatabaseAnalysis`](archscan_domain::DatabaseAnalysis) |
//! | [`classify_apis`] | tree | [`ApiAnalysis`](archscan_domain::ApiAnalysis) |
//! | [`classify_infrastructure`] | tree | [`InfrastructureAnalysis`](archscan_domain::InfrastructureAnalysis) |
//! | [`classify_environment`] | tree + contents | [`EnvironmentAnalysis`](archscan_domain::EnvironmentAnalysis) |
//! | [`classify_tests`] | tree + contents | [`TestAnalysis`](archscan_domain::TestAnalysis) |
//! | [`classify_messaging`] | tree + contents | [`MessagingAnalysis`](archscan_domain::MessagingAnalysis) |

pub mod api;
pub mod architecture;
pub mod database;
pub mod dependencies;
pub mod environment;
pub mod infrastructure;
pub mod messaging;
pub mod testing;

mod manifest;

pub use api::classify_apis;
pub use architecture::classify_architecture;
pub use database::classify_database;
pub use dependencies::classify_dependencies;
pub use environment::classify_environment;
pub use infrastructure::classify_infrastructure;
pub use messaging::classify_messaging;
pub use testing::classify_tests;

/// Compile a pattern literal. Patterns are constants, so failure is a bug.
pub(crate) fn pattern(source: &str) -> regex::Regex {
    regex::Regex::new(source).expect("Invalid regex")
}

/// Append `value` unless already present, keeping first-seen order
pub(crate) fn push_unique<T: PartialEq>(out: &mut Vec<T>, value: T) {
    if !out.contains(&value) {
        out.push(value);
    }
}
