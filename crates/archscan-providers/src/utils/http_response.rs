//! HTTP Response Utilities
//!
//! Maps repository host responses onto domain errors.

use archscan_domain::error::{Error, Result};
use reqwest::header::HeaderMap;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::constants::GITHUB_RATE_LIMIT_REMAINING_HEADER;

/// Utilities for processing HTTP responses
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status and parse the JSON body
    ///
    /// `resource` names what was requested, for error messages.
    pub async fn check_and_parse<T: DeserializeOwned>(
        response: Response,
        provider_name: &str,
        resource: &str,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let headers = response.headers().clone();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Self::status_error(
                status,
                &headers,
                provider_name,
                resource,
                &error_text,
            ));
        }

        response.json::<T>().await.map_err(|e| {
            Error::repository_host(
                status.as_u16(),
                format!("{provider_name} returned a malformed response for {resource}: {e}"),
            )
        })
    }

    /// Domain error for a non-success status
    pub fn status_error(
        status: StatusCode,
        headers: &HeaderMap,
        provider_name: &str,
        resource: &str,
        details: &str,
    ) -> Error {
        let code = status.as_u16();
        match code {
            401 => Error::authentication(format!(
                "{provider_name} rejected the access token for {resource}: {details}"
            )),
            403 if Self::quota_exhausted(headers) => Error::rate_limited(format!(
                "{provider_name} quota exhausted while fetching {resource}"
            )),
            429 => Error::rate_limited(format!(
                "{provider_name} throttled the request for {resource}: {details}"
            )),
            404 => Error::not_found(format!("{provider_name} {resource}")),
            _ => Error::repository_host(
                code,
                format!("{provider_name} request for {resource} failed: {details}"),
            ),
        }
    }

    fn quota_exhausted(headers: &HeaderMap) -> bool {
        headers
            .get(GITHUB_RATE_LIMIT_REMAINING_HEADER)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|remaining| remaining.trim() == "0")
    }
}
