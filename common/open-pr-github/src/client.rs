//! GitHub client implementation
//!
//! `GitHubClient` owns the HTTP client, the credentials and the API root.
//! Endpoint groups extend it with `impl` blocks in their own modules:
//! - `pull_requests.rs` - pull request creation
//! - `labels.rs` - label lookup and attachment

use crate::auth::GitHubAuth;
use anyhow::{Context, Result, anyhow};
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Public GitHub REST API root
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

pub(crate) const DEFAULT_USER_AGENT: &str = concat!("open-pr/", env!("CARGO_PKG_VERSION"));
pub(crate) const ACCEPT_HEADER: &str = "application/vnd.github+json";
pub(crate) const API_VERSION: &str = "2022-11-28";

/// GitHub API client for making authenticated requests
#[derive(Debug)]
pub struct GitHubClient {
    pub(crate) client: Client,
    pub(crate) auth: GitHubAuth,
    pub(crate) api_base: Url,
}

impl GitHubClient {
    /// Create a client bound to [`DEFAULT_API_BASE`]
    ///
    /// # Errors
    /// Returns an error if the token is empty or the HTTP transport cannot
    /// be initialised.
    pub fn new(token: String) -> Result<Self> {
        let auth = GitHubAuth::new(token);
        auth.validate_token()?;

        let client = Client::builder()
            .build()
            .context("Failed to initialise HTTP client")?;

        Ok(Self {
            client,
            auth,
            api_base: Url::parse(DEFAULT_API_BASE)?,
        })
    }

    /// Point the client at another API root, such as a GitHub Enterprise
    /// `https://host/api/v3` endpoint
    pub fn with_api_base(mut self, api_base: &str) -> Result<Self> {
        let url = Url::parse(api_base)
            .with_context(|| format!("Invalid GitHub API base URL: {}", api_base))?;
        if url.cannot_be_a_base() {
            anyhow::bail!("Invalid GitHub API base URL: {}", api_base);
        }
        self.api_base = url;
        Ok(self)
    }

    pub fn api_base(&self) -> &Url {
        &self.api_base
    }

    pub fn token(&self) -> &str {
        self.auth.token()
    }

    /// Build an endpoint URL below the API root; each segment is
    /// percent-encoded on its own, so label names may contain `/` or spaces
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("Invalid GitHub API base URL: {}", self.api_base))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(crate) fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.client
            .request(method, url)
            .header(AUTHORIZATION, self.auth.get_auth_header())
            .header(USER_AGENT, DEFAULT_USER_AGENT)
            .header(ACCEPT, ACCEPT_HEADER)
            .header("X-GitHub-Api-Version", API_VERSION)
    }
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
    #[serde(default)]
    errors: Vec<ApiErrorDetail>,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: Option<String>,
    field: Option<String>,
    code: Option<String>,
}

/// Turn a GitHub error body into a single readable line
pub(crate) fn describe_error_body(body: &str) -> String {
    let body = body.trim();
    let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) else {
        return if body.is_empty() {
            "Unknown error".to_string()
        } else {
            body.to_string()
        };
    };

    let details: Vec<String> = parsed
        .errors
        .iter()
        .filter_map(|detail| match (&detail.message, &detail.field, &detail.code) {
            (Some(message), _, _) => Some(message.clone()),
            (None, Some(field), Some(code)) => Some(format!("{} {}", field, code)),
            _ => None,
        })
        .collect();

    if details.is_empty() {
        parsed.message
    } else {
        format!("{}: {}", parsed.message, details.join("; "))
    }
}

/// Decode a successful response or convert the failure into an error
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(anyhow!(
            "GitHub API error ({}): {}",
            status,
            describe_error_body(&body)
        ));
    }

    response
        .json()
        .await
        .with_context(|| format!("Failed to parse {} response", what))
}
