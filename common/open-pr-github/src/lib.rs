//! GitHub API client library
//!
//! This library provides the low-level GitHub REST operations used to open
//! pull requests and label them.
//!
//! ## Modules
//!
//! - [`auth`]: Bearer token handling
//! - [`client`]: Core GitHub client implementation
//! - [`pull_requests`]: Pull request creation
//! - [`labels`]: Label lookup and attachment
//! - [`util`]: Repository identifier parsing

mod auth;
mod client;
mod labels;
mod pull_requests;
mod util;

// Re-export public API
pub use auth::GitHubAuth;
pub use client::{DEFAULT_API_BASE, GitHubClient};
pub use labels::Label;
pub use pull_requests::{PullRequest, PullRequestParams};
pub use util::{RepositoryId, parse_github_url};
