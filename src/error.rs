//! Startup failures that stop the program before any pull request work

use crate::constants::{env, exit_codes};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StartupError {
    /// Neither token variable holds a value
    #[error(
        "{primary} or {fallback} not found in environment variables",
        primary = env::PRODUCT_TOKEN,
        fallback = env::FALLBACK_TOKEN
    )]
    MissingCredential,

    #[error("Failed to initialise GitHub client: {0:#}")]
    ClientInit(anyhow::Error),
}

impl StartupError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingCredential => exit_codes::MISSING_CREDENTIAL,
            Self::ClientInit(_) => exit_codes::CLIENT_INIT,
        }
    }

    /// What the user can do about it
    pub fn hint(&self) -> &'static str {
        match self {
            Self::MissingCredential => {
                "Export PRODUCT_GITHUB_TOKEN or GITHUB_TOKEN with a token that can open pull requests."
            }
            Self::ClientInit(_) => {
                "The HTTP/TLS stack could not start; check the system certificate store and proxy settings."
            }
        }
    }
}
