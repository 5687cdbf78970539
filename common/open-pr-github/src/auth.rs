//! GitHub authentication

use anyhow::Result;
use std::fmt;

/// Bearer token credentials for the GitHub API
#[derive(Clone)]
pub struct GitHubAuth {
    token: String,
}

impl GitHubAuth {
    pub fn new(token: String) -> Self {
        Self { token }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Value for the `Authorization` header
    pub fn get_auth_header(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Reject tokens that cannot possibly authenticate
    ///
    /// Only emptiness is checked; whether the token is actually accepted is
    /// up to GitHub.
    pub fn validate_token(&self) -> Result<()> {
        if self.token.is_empty() {
            anyhow::bail!("GitHub token is required");
        }
        Ok(())
    }
}

impl fmt::Debug for GitHubAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHubAuth")
            .field("token", &"<redacted>")
            .finish()
    }
}
