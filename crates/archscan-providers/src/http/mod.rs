//! HTTP Client Configuration
//!
//! Connection pool and timeout settings shared by API-based providers.

pub mod provider;

pub use provider::HttpClientConfig;
