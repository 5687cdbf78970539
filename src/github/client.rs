//! Client construction and the live `PullRequestApi`

use crate::credentials::Credential;
use crate::error::StartupError;
use anyhow::Result;
use open_pr_github::{GitHubClient, Label, PullRequest, PullRequestParams, RepositoryId};
use super::api::PullRequestApi;

/// Build an authenticated client from `PRODUCT_GITHUB_TOKEN` or `GITHUB_TOKEN`
///
/// # Errors
/// [`StartupError::MissingCredential`] when neither variable is set, before
/// any HTTP client is built; [`StartupError::ClientInit`] when the transport
/// cannot start.
pub fn create_client() -> Result<GitHubClient, StartupError> {
    client_for(Credential::from_env()?)
}

/// [`create_client`] with a custom variable lookup
pub fn create_client_with<F>(lookup: F) -> Result<GitHubClient, StartupError>
where
    F: FnMut(&str) -> Option<String>,
{
    client_for(Credential::from_lookup(lookup)?)
}

/// Build a client bound to the public GitHub API for `credential`
pub fn client_for(credential: Credential) -> Result<GitHubClient, StartupError> {
    GitHubClient::new(credential.into_token()).map_err(StartupError::ClientInit)
}

#[async_trait::async_trait]
impl PullRequestApi for GitHubClient {
    async fn create_pull_request(&self, params: &PullRequestParams<'_>) -> Result<PullRequest> {
        GitHubClient::create_pull_request(self, params).await
    }

    async fn get_label(&self, repository: &RepositoryId, name: &str) -> Result<Label> {
        GitHubClient::get_label(self, repository, name).await
    }

    async fn add_labels(
        &self,
        repository: &RepositoryId,
        number: u64,
        labels: &[String],
    ) -> Result<Vec<Label>> {
        GitHubClient::add_labels(self, repository, number, labels).await
    }
}
