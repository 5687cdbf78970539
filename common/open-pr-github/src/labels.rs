//! Label operations

use crate::client::{GitHubClient, read_json};
use crate::util::RepositoryId;
use anyhow::Result;
use reqwest::Method;
use serde::{Deserialize, Serialize};

/// A repository label
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Label {
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Label {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: String::new(),
            description: None,
        }
    }
}

#[derive(Serialize)]
struct AddLabelsPayload<'a> {
    labels: &'a [String],
}

impl GitHubClient {
    /// Look up a label by name on a repository
    ///
    /// # Errors
    /// Returns an error if the label does not exist (404) or the request fails
    pub async fn get_label(&self, repository: &RepositoryId, name: &str) -> Result<Label> {
        let url = self.endpoint(&[
            "repos",
            &repository.owner,
            &repository.name,
            "labels",
            name,
        ])?;

        let response = self.request(Method::GET, url).send().await?;
        read_json(response, "label").await
    }

    /// Add labels to a pull request in one call
    ///
    /// Pull requests share the issue number space, so this goes through the
    /// issues endpoint. Returns the full label set now on the pull request.
    pub async fn add_labels(
        &self,
        repository: &RepositoryId,
        number: u64,
        labels: &[String],
    ) -> Result<Vec<Label>> {
        let number = number.to_string();
        let url = self.endpoint(&[
            "repos",
            &repository.owner,
            &repository.name,
            "issues",
            &number,
            "labels",
        ])?;

        let response = self
            .request(Method::POST, url)
            .json(&AddLabelsPayload { labels })
            .send()
            .await?;

        read_json(response, "add labels").await
    }
}
