//! GitHub token lookup

use crate::constants::env::TOKEN_VARS;
use crate::error::StartupError;
use std::fmt;

/// A bearer token for the GitHub API
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Read the token from the process environment
    pub fn from_env() -> Result<Self, StartupError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve the token through `lookup`, trying each name in
    /// [`TOKEN_VARS`] in order; the first non-empty value wins
    pub fn from_lookup<F>(mut lookup: F) -> Result<Self, StartupError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        TOKEN_VARS
            .into_iter()
            .find_map(|name| lookup(name).filter(|value| !value.is_empty()))
            .map(Self)
            .ok_or(StartupError::MissingCredential)
    }

    pub fn into_token(self) -> String {
        self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}
