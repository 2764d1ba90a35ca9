//! Aggregator
//!
//! Pure merge of the metadata and the eight facets into the final record.

use archscan_domain::{
    ApiAnalysis, ArchitectureAnalysis, DatabaseAnalysis, DependencyAnalysis, EnvironmentAnalysis,
    FileContentMap, InfrastructureAnalysis, MessagingAnalysis, RepoMetadata, RepoTreeEntry,
    RepositoryAnalysis, TestAnalysis,
};
use chrono::{DateTime, Utc};

use crate::classifiers::{
    classify_apis, classify_architecture, classify_database, classify_dependencies,
    classify_environment, classify_infrastructure, classify_messaging, classify_tests,
};

/// Output of the classifier bank
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    pub architecture: ArchitectureAnalysis,
    pub dependencies: DependencyAnalysis,
    pub database: DatabaseAnalysis,
    pub apis: ApiAnalysis,
    pub infrastructure: InfrastructureAnalysis,
    pub environment: EnvironmentAnalysis,
    pub tests: TestAnalysis,
    pub messaging: MessagingAnalysis,
}

impl Facets {
    /// Run every classifier over one snapshot.
    ///
    /// Classifiers do not depend on each other; their order is irrelevant.
    pub fn classify(tree: &[RepoTreeEntry], contents: &FileContentMap) -> Self {
        Self {
            architecture: classify_architecture(tree),
            dependencies: classify_dependencies(contents),
            database: classify_database(tree, contents),
            apis: classify_apis(tree),
            infrastructure: classify_infrastructure(tree),
            environment: classify_environment(tree, contents),
            tests: classify_tests(tree, contents),
            messaging: classify_messaging(tree, contents),
        }
    }
}

/// Build the immutable analysis record
pub fn aggregate(
    metadata: RepoMetadata,
    facets: Facets,
    analyzed_at: DateTime<Utc>,
) -> RepositoryAnalysis {
    RepositoryAnalysis {
        metadata,
        architecture: facets.architecture,
        dependencies: facets.dependencies,
        database: facets.database,
        apis: facets.apis,
        infrastructure: facets.infrastructure,
        environment: facets.environment,
        tests: facets.tests,
        messaging: facets.messaging,
        analyzed_at,
    }
}
