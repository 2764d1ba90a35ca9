//! GitHub REST API provider

use archscan_domain::error::{Error, Result};
use archscan_domain::ports::RepositoryHostProvider;
use archscan_domain::{
    LanguageHistogram, RawFileContent, RepoDescriptor, RepoIdentity, RepoTreeEntry,
};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::responses::{ContentResponse, RepoResponse, TreeResponse};
use crate::constants::{
    GITHUB_ACCEPT_HEADER, GITHUB_API_BASE_URL, GITHUB_API_VERSION, GITHUB_API_VERSION_HEADER,
    GITHUB_CONTENT_ENCODING_BASE64,
};
use crate::utils::HttpResponseUtils;

const PROVIDER_NAME: &str = "github";

/// GitHub repository host
///
/// Every request carries the caller-supplied token as a bearer credential.
/// The token is resolved before construction; this type never stores or
/// refreshes credentials.
///
/// ## Example
///
/// ```rust,no_run
/// use archscan_providers::{GitHubRepositoryHost, HttpClientConfig};
///
/// fn example() -> archscan_domain::Result<()> {
///     let client = HttpClientConfig::default().build_client()?;
///     let host = GitHubRepositoryHost::new(Some("ghp_token".to_string()), None, client);
///     assert_eq!(host.base_url(), "https://api.github.com");
///     Ok(())
/// }
/// ```
pub struct GitHubRepositoryHost {
    token: Option<String>,
    base_url: String,
    http_client: Client,
}

impl GitHubRepositoryHost {
    /// Create a new GitHub provider
    ///
    /// # Arguments
    /// * `token` - Access token; anonymous requests are allowed but heavily rate-limited
    /// * `base_url` - API root, defaults to the public GitHub API
    /// * `http_client` - Pooled reqwest client
    pub fn new(token: Option<String>, base_url: Option<String>, http_client: Client) -> Self {
        let token = token
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty());
        let base_url = base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| GITHUB_API_BASE_URL.to_string());

        Self {
            token,
            base_url,
            http_client,
        }
    }

    /// API root used for every request
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether requests are authenticated
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Build `{base}/{segments...}`; each segment is percent-encoded
    fn endpoint<'a, I>(&self, segments: I) -> Result<Url>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            Error::configuration_with_source(
                format!("Invalid GitHub API base URL '{}'", self.base_url),
                e,
            )
        })?;
        url.path_segments_mut()
            .map_err(|()| {
                Error::config(format!(
                    "GitHub API base URL cannot carry a path: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// `{base}/repos/{owner}/{repo}/{rest...}`
    fn repo_endpoint(&self, repo: &RepoIdentity, rest: &[&str]) -> Result<Url> {
        self.endpoint(
            ["repos", repo.owner.as_str(), repo.name.as_str()]
                .into_iter()
                .chain(rest.iter().copied()),
        )
    }

    fn request(&self, url: Url) -> RequestBuilder {
        let builder = self
            .http_client
            .get(url)
            .header("Accept", GITHUB_ACCEPT_HEADER)
            .header(GITHUB_API_VERSION_HEADER, GITHUB_API_VERSION);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, resource: &str) -> Result<T> {
        debug!(provider = PROVIDER_NAME, url = %url, "GET");
        let response = self.request(url).send().await.map_err(|e| {
            if e.is_timeout() {
                Error::network_with_source(format!("Request for {resource} timed out"), e)
            } else {
                Error::network_with_source(format!("HTTP request for {resource} failed"), e)
            }
        })?;

        HttpResponseUtils::check_and_parse(response, "GitHub", resource).await
    }

    fn decode_content(path: &str, content: ContentResponse) -> Result<RawFileContent> {
        if content.item_type != "file" {
            return Err(Error::invalid_argument(format!(
                "'{path}' is a {}, not a file",
                content.item_type
            )));
        }
        if content.encoding != GITHUB_CONTENT_ENCODING_BASE64 {
            // Files over 1 MB come back with encoding "none" and no body
            return Err(Error::repository_host(
                200,
                format!("'{path}' has unsupported content encoding '{}'", content.encoding),
            ));
        }

        let compact: String = content
            .content
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        let bytes = STANDARD.decode(compact).map_err(|e| {
            Error::repository_host(200, format!("'{path}' has invalid base64 content: {e}"))
        })?;
        Ok(RawFileContent::from_bytes(bytes))
    }
}

#[async_trait]
impl RepositoryHostProvider for GitHubRepositoryHost {
    async fn get_repo_descriptor(&self, repo: &RepoIdentity) -> Result<RepoDescriptor> {
        let url = self.repo_endpoint(repo, &[])?;
        let response: RepoResponse = self
            .get_json(url, &format!("repository {repo}"))
            .await?;
        Ok(response.into())
    }

    async fn get_language_histogram(&self, repo: &RepoIdentity) -> Result<LanguageHistogram> {
        let url = self.repo_endpoint(repo, &["languages"])?;
        self.get_json(url, &format!("languages of {repo}")).await
    }

    async fn get_tree_recursive(
        &self,
        repo: &RepoIdentity,
        branch: &str,
    ) -> Result<Vec<RepoTreeEntry>> {
        let segments: Vec<&str> = ["git", "trees"].into_iter().chain(branch.split('/')).collect();
        let mut url = self.repo_endpoint(repo, &segments)?;
        url.query_pairs_mut().append_pair("recursive", "1");

        let response: TreeResponse = self
            .get_json(url, &format!("tree of {repo}@{branch}"))
            .await?;
        if response.truncated {
            warn!(
                repo = %repo,
                branch,
                entries = response.tree.len(),
                "GitHub truncated the recursive tree; analysis covers a partial listing"
            );
        }

        Ok(response
            .tree
            .into_iter()
            .filter_map(|item| item.into_entry())
            .collect())
    }

    async fn get_file_raw_content(
        &self,
        repo: &RepoIdentity,
        path: &str,
    ) -> Result<RawFileContent> {
        let segments: Vec<&str> = std::iter::once("contents").chain(path.split('/')).collect();
        let url = self.repo_endpoint(repo, &segments)?;
        let content: ContentResponse = self
            .get_json(url, &format!("{repo}:{path}"))
            .await?;
        Self::decode_content(path, content)
    }

    fn provider_name(&self) -> &str {
        PROVIDER_NAME
    }
}

impl std::fmt::Debug for GitHubRepositoryHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubRepositoryHost")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.token.is_some())
            .finish_non_exhaustive()
    }
}

