//! Domain layer constants
//!
//! Limits that are part of the analyzer's observable behavior. Infrastructure
//! defaults (timeouts, URLs) live in `archscan_infrastructure::constants`.

// ============================================================================
// CONTENT FETCH CONSTANTS
// ============================================================================

/// Maximum number of allow-listed files whose content is fetched per analysis.
///
/// This is the only back-pressure against the repository host's rate limit.
pub const MAX_CONTENT_FILES: usize = 50;

/// Default number of content fetches in flight at once
pub const DEFAULT_CONTENT_FETCH_CONCURRENCY: usize = 8;

// ============================================================================
// CLASSIFIER CONSTANTS
// ============================================================================

/// Number of folders sampled for purpose tagging
pub const FOLDER_SAMPLE_LIMIT: usize = 20;

/// Well-known manifest keys looked up in the content map
pub const PACKAGE_JSON_PATH: &str = "package.json";

/// Python requirements manifest key
pub const REQUIREMENTS_TXT_PATH: &str = "requirements.txt";

/// Prisma schema key
pub const PRISMA_SCHEMA_PATH: &str = "prisma/schema.prisma";
