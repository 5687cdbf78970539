//! GitHub pull request workflow
//!
//! This module ties the low-level REST client from `open-pr-github` to the
//! single workflow this tool performs: open a pull request, then label it.
//!
//! ## Architecture
//!
//! - [`client`]: Client construction from the environment and the
//!   [`PullRequestApi`] implementation for `GitHubClient`
//! - [`api`]: The create-then-label workflow, written against
//!   [`PullRequestApi`] so it can run on a recording fake in tests
//! - [`types`]: Request and outcome types
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use open_pr::github::{self, PullRequestRequest};
//!
//! # async fn example() -> Result<(), open_pr::StartupError> {
//! let client = github::create_client()?;
//! let request = PullRequestRequest::new("owner/repo", "Title", "Body", "feature/x", "main")
//!     .with_labels(vec!["bug".to_string()]);
//!
//! let outcome = github::create_pull_request(&client, &request).await;
//! println!("{outcome}");
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod types;

pub use api::{PullRequestApi, create_pull_request};
pub use client::{client_for, create_client, create_client_with};
pub use types::{PrOutcome, PullRequestRequest, SkippedLabel};

// Low-level types callers need when implementing PullRequestApi
pub use open_pr_github::{GitHubClient, Label, PullRequest, PullRequestParams, RepositoryId};
