//! Pull request operations

use crate::client::{GitHubClient, read_json};
use crate::util::RepositoryId;
use anyhow::Result;
use reqwest::Method;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub(crate) struct CreatePullRequestPayload<'a> {
    title: &'a str,
    head: &'a str,
    base: &'a str,
    body: &'a str,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PullRequest {
    pub html_url: String,
    pub number: u64,
    pub id: u64,
    pub title: String,
    pub state: String,
}

/// Parameters for creating a pull request
#[derive(Debug, Clone)]
pub struct PullRequestParams<'a> {
    pub repository: &'a RepositoryId,
    pub title: &'a str,
    pub head: &'a str,
    pub base: &'a str,
    pub body: &'a str,
}

impl<'a> PullRequestParams<'a> {
    pub fn new(
        repository: &'a RepositoryId,
        title: &'a str,
        head: &'a str,
        base: &'a str,
        body: &'a str,
    ) -> Self {
        Self {
            repository,
            title,
            head,
            base,
            body,
        }
    }

    pub(crate) fn payload(&self) -> CreatePullRequestPayload<'a> {
        CreatePullRequestPayload {
            title: self.title,
            head: self.head,
            base: self.base,
            body: self.body,
        }
    }
}

impl GitHubClient {
    /// Create a pull request on GitHub
    ///
    /// # Errors
    /// Returns an error if:
    /// - The API request fails (network, auth, missing branch, duplicate PR)
    /// - The response cannot be parsed
    pub async fn create_pull_request(&self, params: &PullRequestParams<'_>) -> Result<PullRequest> {
        let url = self.endpoint(&[
            "repos",
            &params.repository.owner,
            &params.repository.name,
            "pulls",
        ])?;

        let response = self
            .request(Method::POST, url)
            .json(&params.payload())
            .send()
            .await?;

        read_json(response, "PR creation").await
    }
}
