//! Pull request creation workflow

use super::types::{PrOutcome, PullRequestRequest, SkippedLabel};
use anyhow::{Context, Result};
use colored::*;
use open_pr_github::{Label, PullRequest, PullRequestParams, RepositoryId};

/// The GitHub operations the workflow depends on
#[async_trait::async_trait]
pub trait PullRequestApi: Send + Sync {
    /// Open a pull request
    async fn create_pull_request(&self, params: &PullRequestParams<'_>) -> Result<PullRequest>;

    /// Resolve a label name on the repository
    async fn get_label(&self, repository: &RepositoryId, name: &str) -> Result<Label>;

    /// Attach labels to a pull request in one call
    async fn add_labels(
        &self,
        repository: &RepositoryId,
        number: u64,
        labels: &[String],
    ) -> Result<Vec<Label>>;
}

/// Open a pull request and attach its labels
///
/// This function never fails: every error, from a malformed repository
/// identifier to a rejected API call, becomes [`PrOutcome::Failed`].
///
/// 1. Create the pull request
/// 2. Resolve each requested label, skipping unknown ones with a warning
/// 3. Attach the resolved labels in a single call
///
/// Label calls are only made after the pull request exists. A failed attach
/// does not close the pull request; the failure message names it instead.
pub async fn create_pull_request<A>(api: &A, request: &PullRequestRequest) -> PrOutcome
where
    A: PullRequestApi + ?Sized,
{
    match open_and_label(api, request).await {
        Ok(outcome) => outcome,
        Err(e) => PrOutcome::Failed {
            message: format!("{:#}", e),
        },
    }
}

async fn open_and_label<A>(api: &A, request: &PullRequestRequest) -> Result<PrOutcome>
where
    A: PullRequestApi + ?Sized,
{
    let repository = RepositoryId::parse(&request.repository)?;

    let params = PullRequestParams::new(
        &repository,
        &request.title,
        &request.head,
        &request.base,
        &request.body,
    );
    let pull_request = api.create_pull_request(&params).await?;

    let mut attached_labels = Vec::new();
    let mut skipped_labels = Vec::new();

    for name in &request.labels {
        match api.get_label(&repository, name).await {
            Ok(label) => attached_labels.push(label.name),
            Err(e) => {
                let reason = format!("{:#}", e);
                eprintln!(
                    "{}",
                    format!("Warning: Could not find label '{}': {}", name, reason).yellow()
                );
                skipped_labels.push(SkippedLabel {
                    name: name.clone(),
                    reason,
                });
            }
        }
    }

    if !attached_labels.is_empty() {
        api.add_labels(&repository, pull_request.number, &attached_labels)
            .await
            .with_context(|| {
                format!(
                    "PR #{} was created ({}) but labels could not be attached",
                    pull_request.number, pull_request.html_url
                )
            })?;
    }

    Ok(PrOutcome::Created {
        pull_request,
        attached_labels,
        skipped_labels,
    })
}
