//! Allow-list of files whose content is fetched
//!
//! Only manifests, schemas, env templates, container descriptors and API
//! specs are downloaded, at most [`MAX_CONTENT_FILES`] per analysis, in tree
//! order so the selection is deterministic for a given tree.

use std::sync::LazyLock;

use archscan_domain::RepoTreeEntry;
use archscan_domain::constants::MAX_CONTENT_FILES;
use regex::Regex;

use crate::classifiers::environment::ENV_FILE_NAMES;

/// Manifest basenames across ecosystems
const MANIFEST_FILE_NAMES: &[&str] = &[
    "package.json",
    "requirements.txt",
    "pyproject.toml",
    "Pipfile",
    "go.mod",
    "Cargo.toml",
    "Gemfile",
    "composer.json",
    "pom.xml",
    "build.gradle",
    "build.gradle.kts",
];

static ALLOW_LISTED_NAME: LazyLock<Regex> = LazyLock::new(|| {
    crate::classifiers::pattern(
        r"(?i)^(schema\.prisma|Dockerfile.*|docker-compose[^/]*\.ya?ml|(openapi|swagger)[^/]*\.(json|ya?ml)|[^/]+\.graphql|[^/]+\.proto)$",
    )
});

/// Whether content for this path is worth fetching
pub fn is_allow_listed(path: &str) -> bool {
    let name = path.rsplit('/').next().unwrap_or(path);
    MANIFEST_FILE_NAMES.contains(&name)
        || ENV_FILE_NAMES.contains(&name)
        || ALLOW_LISTED_NAME.is_match(name)
}

/// Allow-listed blob paths, truncated to the fetch cap
pub fn select_content_paths(tree: &[RepoTreeEntry]) -> Vec<String> {
    select_content_paths_with_limit(tree, MAX_CONTENT_FILES)
}

pub(crate) fn select_content_paths_with_limit(tree: &[RepoTreeEntry], limit: usize) -> Vec<String> {
    tree.iter()
        .filter(|entry| entry.is_blob() && is_allow_listed(&entry.path))
        .take(limit)
        .map(|entry| entry.path.clone())
        .collect()
}
