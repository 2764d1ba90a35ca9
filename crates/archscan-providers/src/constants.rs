//! Provider Constants
//!
//! Constants specific to provider implementations. Analyzer limits live in
//! `archscan_domain::constants`.

// ============================================================================
// GITHUB API CONSTANTS
// ============================================================================

/// Public GitHub REST API endpoint
pub const GITHUB_API_BASE_URL: &str = "https://api.github.com";

/// Media type for JSON responses
pub const GITHUB_ACCEPT_HEADER: &str = "application/vnd.github+json";

/// Pinned REST API version
pub const GITHUB_API_VERSION_HEADER: &str = "X-GitHub-Api-Version";

/// REST API version sent with every request
pub const GITHUB_API_VERSION: &str = "2022-11-28";

/// Header carrying the remaining request quota
pub const GITHUB_RATE_LIMIT_REMAINING_HEADER: &str = "x-ratelimit-remaining";

/// Encoding the contents endpoint uses for file bodies
pub const GITHUB_CONTENT_ENCODING_BASE64: &str = "base64";

// ============================================================================
// HTTP CONSTANTS
// ============================================================================

/// Default request timeout in seconds
pub const HTTP_DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default maximum idle connections per host
pub const HTTP_MAX_IDLE_PER_HOST: usize = 10;

/// Default idle connection timeout in seconds
pub const HTTP_IDLE_TIMEOUT_SECS: u64 = 90;

/// Default TCP keep-alive in seconds
pub const HTTP_KEEPALIVE_SECS: u64 = 60;

// ============================================================================
// STORE CONSTANTS
// ============================================================================

/// Separator between owner and repository in stored file names
pub const STORE_REPO_SEPARATOR: &str = "__";

/// Extension of stored analysis files
pub const STORE_FILE_EXTENSION: &str = "json";
