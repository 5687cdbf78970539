//! Pull request workflow types

use crate::constants::pull_request;
use open_pr_github::PullRequest;
use std::fmt;

/// Everything needed to open one pull request
#[derive(Debug, Clone, PartialEq)]
pub struct PullRequestRequest {
    /// `owner/name`
    pub repository: String,
    pub title: String,
    pub body: String,
    /// Branch holding the changes
    pub head: String,
    /// Branch the changes merge into
    pub base: String,
    /// Attached in this order once resolved
    pub labels: Vec<String>,
}

impl PullRequestRequest {
    pub fn new(
        repository: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
        head: impl Into<String>,
        base: impl Into<String>,
    ) -> Self {
        Self {
            repository: repository.into(),
            title: title.into(),
            body: body.into(),
            head: head.into(),
            base: base.into(),
            labels: Vec::new(),
        }
    }

    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }

    /// The pull request described in [`crate::constants::pull_request`]
    pub fn preset() -> Self {
        Self::new(
            pull_request::REPOSITORY,
            pull_request::TITLE,
            pull_request::BODY,
            pull_request::HEAD,
            pull_request::BASE,
        )
        .with_labels(pull_request::LABELS.iter().map(|l| l.to_string()).collect())
    }
}

/// A requested label that could not be resolved on the repository
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedLabel {
    pub name: String,
    pub reason: String,
}

/// Result of one creation attempt
#[derive(Debug, Clone, PartialEq)]
pub enum PrOutcome {
    Created {
        pull_request: PullRequest,
        attached_labels: Vec<String>,
        skipped_labels: Vec<SkippedLabel>,
    },
    Failed {
        message: String,
    },
}

impl PrOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Created { .. })
    }

    pub fn pull_request(&self) -> Option<&PullRequest> {
        match self {
            Self::Created { pull_request, .. } => Some(pull_request),
            Self::Failed { .. } => None,
        }
    }
}

impl fmt::Display for PrOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created { pull_request, .. } => write!(
                f,
                "Successfully created PR #{}: {}",
                pull_request.number, pull_request.html_url
            ),
            Self::Failed { message } => write!(f, "Error creating GitHub PR: {}", message),
        }
    }
}
