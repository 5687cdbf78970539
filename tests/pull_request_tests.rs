//! Pull request workflow tests against a recording fake

use anyhow::{Result, anyhow};
use open_pr::github::{
    self, Label, PrOutcome, PullRequest, PullRequestApi, PullRequestParams, PullRequestRequest,
    RepositoryId,
};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    CreatePullRequest {
        repository: String,
        title: String,
        body: String,
        head: String,
        base: String,
    },
    GetLabel(String),
    AddLabels {
        number: u64,
        labels: Vec<String>,
    },
}

/// Fake GitHub that records every call and rejects a second pull request
/// for the same head and base, like the live API does
#[derive(Default)]
struct RecordingApi {
    known_labels: Vec<String>,
    create_error: Option<String>,
    add_labels_error: Option<String>,
    calls: Mutex<Vec<Call>>,
    opened: Mutex<Vec<(String, String)>>,
}

impl RecordingApi {
    fn with_labels(labels: &[&str]) -> Self {
        Self {
            known_labels: labels.iter().map(|l| l.to_string()).collect(),
            ..Self::default()
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn create_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::CreatePullRequest { .. }))
            .count()
    }

    fn add_label_calls(&self) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::AddLabels { labels, .. } => Some(labels),
                _ => None,
            })
            .collect()
    }

    fn label_lookups(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::GetLabel(_)))
            .count()
    }
}

#[async_trait::async_trait]
impl PullRequestApi for RecordingApi {
    async fn create_pull_request(&self, params: &PullRequestParams<'_>) -> Result<PullRequest> {
        self.calls.lock().unwrap().push(Call::CreatePullRequest {
            repository: params.repository.to_string(),
            title: params.title.to_string(),
            body: params.body.to_string(),
            head: params.head.to_string(),
            base: params.base.to_string(),
        });

        if let Some(message) = &self.create_error {
            return Err(anyhow!("{}", message));
        }

        let mut opened = self.opened.lock().unwrap();
        let key = (params.head.to_string(), params.base.to_string());
        if opened.contains(&key) {
            return Err(anyhow!(
                "GitHub API error (422 Unprocessable Entity): Validation Failed: A pull request already exists for {}:{}.",
                params.repository.owner,
                params.head
            ));
        }
        opened.push(key);

        let number = 6 + opened.len() as u64;
        Ok(PullRequest {
            html_url: format!("https://github.com/{}/pull/{}", params.repository, number),
            number,
            id: 1000 + number,
            title: params.title.to_string(),
            state: "open".to_string(),
        })
    }

    async fn get_label(&self, _repository: &RepositoryId, name: &str) -> Result<Label> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::GetLabel(name.to_string()));

        if self.known_labels.iter().any(|l| l == name) {
            Ok(Label::new(name))
        } else {
            Err(anyhow!("GitHub API error (404 Not Found): Not Found"))
        }
    }

    async fn add_labels(
        &self,
        _repository: &RepositoryId,
        number: u64,
        labels: &[String],
    ) -> Result<Vec<Label>> {
        self.calls.lock().unwrap().push(Call::AddLabels {
            number,
            labels: labels.to_vec(),
        });

        if let Some(message) = &self.add_labels_error {
            return Err(anyhow!("{}", message));
        }
        Ok(labels.iter().map(Label::new).collect())
    }
}

fn request(labels: &[&str]) -> PullRequestRequest {
    PullRequestRequest::new(
        "owner/repo",
        "feat: add x",
        "## Summary\n\nAdds x.",
        "feature/x",
        "main",
    )
    .with_labels(labels.iter().map(|l| l.to_string()).collect())
}

#[tokio::test]
async fn test_fields_pass_through_unchanged() {
    let api = RecordingApi::default();

    let outcome = github::create_pull_request(&api, &request(&[])).await;

    assert!(outcome.is_success());
    assert_eq!(
        api.calls(),
        vec![Call::CreatePullRequest {
            repository: "owner/repo".to_string(),
            title: "feat: add x".to_string(),
            body: "## Summary\n\nAdds x.".to_string(),
            head: "feature/x".to_string(),
            base: "main".to_string(),
        }]
    );
}

#[tokio::test]
async fn test_no_labels_means_no_label_calls() {
    let api = RecordingApi::with_labels(&["bug"]);

    github::create_pull_request(&api, &request(&[])).await;

    assert_eq!(api.create_calls(), 1);
    assert_eq!(api.label_lookups(), 0);
    assert!(api.add_label_calls().is_empty());
}

#[tokio::test]
async fn test_resolved_labels_attached_in_one_call_in_order() {
    let api = RecordingApi::with_labels(&["bug", "ui"]);

    let outcome = github::create_pull_request(&api, &request(&["ui", "bug"])).await;

    assert!(outcome.is_success());
    assert_eq!(api.add_label_calls(), vec![vec!["ui".to_string(), "bug".to_string()]]);
    assert!(matches!(
        api.calls().last(),
        Some(Call::AddLabels { number: 7, .. })
    ));
}

#[tokio::test]
async fn test_unresolvable_label_is_skipped() {
    let api = RecordingApi::with_labels(&["bug"]);

    let outcome = github::create_pull_request(&api, &request(&["bug", "needs-review"])).await;

    assert_eq!(
        outcome.to_string(),
        "Successfully created PR #7: https://github.com/owner/repo/pull/7"
    );
    assert_eq!(api.add_label_calls(), vec![vec!["bug".to_string()]]);

    match outcome {
        PrOutcome::Created {
            attached_labels,
            skipped_labels,
            ..
        } => {
            assert_eq!(attached_labels, vec!["bug".to_string()]);
            assert_eq!(skipped_labels.len(), 1);
            assert_eq!(skipped_labels[0].name, "needs-review");
            assert!(skipped_labels[0].reason.contains("404"));
        }
        PrOutcome::Failed { message } => panic!("unexpected failure: {message}"),
    }
}

#[tokio::test]
async fn test_no_resolvable_labels_skips_attach_call() {
    let api = RecordingApi::with_labels(&[]);

    let outcome = github::create_pull_request(&api, &request(&["missing", "also-missing"])).await;

    assert!(outcome.is_success());
    assert_eq!(api.label_lookups(), 2);
    assert!(api.add_label_calls().is_empty());
}

#[tokio::test]
async fn test_create_failure_is_reported_and_stops_labeling() {
    let api = RecordingApi {
        known_labels: vec!["bug".to_string()],
        create_error: Some("GitHub API error (401 Unauthorized): Bad credentials".to_string()),
        ..RecordingApi::default()
    };

    let outcome = github::create_pull_request(&api, &request(&["bug"])).await;

    assert_eq!(
        outcome.to_string(),
        "Error creating GitHub PR: GitHub API error (401 Unauthorized): Bad credentials"
    );
    assert_eq!(api.create_calls(), 1);
    assert_eq!(api.label_lookups(), 0);
    assert!(api.add_label_calls().is_empty());
}

#[tokio::test]
async fn test_second_identical_request_reports_existing_pr() {
    let api = RecordingApi::default();
    let request = request(&[]);

    let first = github::create_pull_request(&api, &request).await;
    let second = github::create_pull_request(&api, &request).await;

    assert!(first.is_success());
    assert!(!second.is_success());
    let message = second.to_string();
    assert!(message.starts_with("Error creating GitHub PR: "));
    assert!(message.contains("A pull request already exists for owner:feature/x."));
    assert_eq!(api.create_calls(), 2);
}

#[tokio::test]
async fn test_attach_failure_names_created_pr() {
    let api = RecordingApi {
        known_labels: vec!["bug".to_string()],
        add_labels_error: Some("GitHub API error (403 Forbidden): Resource not accessible by integration".to_string()),
        ..RecordingApi::default()
    };

    let outcome = github::create_pull_request(&api, &request(&["bug"])).await;

    match outcome {
        PrOutcome::Failed { message } => {
            assert!(message.contains("PR #7 was created (https://github.com/owner/repo/pull/7)"));
            assert!(message.contains("403 Forbidden"));
        }
        PrOutcome::Created { .. } => panic!("attach failure should be reported"),
    }
    assert_eq!(api.add_label_calls().len(), 1);
}

#[tokio::test]
async fn test_malformed_repository_makes_no_calls() {
    let api = RecordingApi::default();
    let request = PullRequestRequest::new("not-a-repository", "t", "b", "feature/x", "main");

    let outcome = github::create_pull_request(&api, &request).await;

    assert!(outcome.to_string().contains("expected 'owner/name'"));
    assert!(api.calls().is_empty());
}

#[test]
fn test_missing_credential_fails_before_client_construction() {
    let mut looked_up = Vec::new();

    let result = github::create_client_with(|name| {
        looked_up.push(name.to_string());
        None
    });

    assert!(matches!(result, Err(open_pr::StartupError::MissingCredential)));
    assert_eq!(looked_up, vec!["PRODUCT_GITHUB_TOKEN", "GITHUB_TOKEN"]);
}
