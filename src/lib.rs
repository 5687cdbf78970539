//! open-pr - open a preset pull request on GitHub

pub mod constants;
pub mod credentials;
pub mod error;
pub mod github;

// Re-export commonly used types
pub use credentials::Credential;
pub use error::StartupError;
pub use github::{PrOutcome, PullRequestApi, PullRequestRequest};
