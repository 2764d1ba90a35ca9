//! API classifier
//!
//! Styles are independent tags. Route files are a broad structural capture
//! for display; endpoints are not extracted.

use std::sync::LazyLock;

use archscan_domain::{ApiAnalysis, ApiSchemaFile, ApiSchemaType, ApiStyle, RepoTreeEntry};
use regex::Regex;

use super::pattern;

static REST_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(^|/)(routes|controllers|api)(/|$)"));
static GRAPHQL_FILE: LazyLock<Regex> = LazyLock::new(|| pattern(r"\.graphql$"));
static PROTO_FILE: LazyLock<Regex> = LazyLock::new(|| pattern(r"\.proto$"));
static OPENAPI_FILE: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?i)^(openapi|swagger)[^/]*\.(json|ya?ml)$"));

/// Classify API styles and API-bearing files
pub fn classify_apis(tree: &[RepoTreeEntry]) -> ApiAnalysis {
    let blobs = || tree.iter().filter(|entry| entry.is_blob());

    let mut styles = Vec::new();
    if tree.iter().any(|entry| REST_SEGMENT.is_match(&entry.path)) {
        styles.push(ApiStyle::Rest);
    }
    if blobs().any(|entry| GRAPHQL_FILE.is_match(&entry.path)) {
        styles.push(ApiStyle::GraphQl);
    }
    if blobs().any(|entry| PROTO_FILE.is_match(&entry.path)) {
        styles.push(ApiStyle::Grpc);
    }

    let route_files = blobs()
        .filter(|entry| {
            REST_SEGMENT.is_match(&entry.path)
                || GRAPHQL_FILE.is_match(&entry.path)
                || PROTO_FILE.is_match(&entry.path)
        })
        .map(|entry| entry.path.clone())
        .collect();

    let schemas = blobs()
        .filter(|entry| OPENAPI_FILE.is_match(entry.file_name()))
        .map(|entry| ApiSchemaFile {
            file: entry.path.clone(),
            schema_type: ApiSchemaType::OpenApi,
        })
        .collect();

    ApiAnalysis {
        styles,
        route_files,
        endpoints: Vec::new(),
        schemas,
    }
}
