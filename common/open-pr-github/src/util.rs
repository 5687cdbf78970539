//! Repository identifier parsing

use anyhow::{Result, anyhow};
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// A repository on GitHub, addressed as `owner/name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryId {
    pub owner: String,
    pub name: String,
}

impl RepositoryId {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parse `owner/name` or any GitHub remote URL accepted by [`parse_github_url`]
    ///
    /// Only the shape is checked here. Whether the repository exists, or is
    /// visible to the token, is left to the API.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();

        if input.starts_with("git@") || input.contains("://") || input.starts_with("github.com/") {
            let (owner, name) = parse_github_url(input)?;
            return Ok(Self::new(owner, name));
        }

        match input.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
                Ok(Self::new(owner, name))
            }
            _ => Err(anyhow!(
                "Invalid repository identifier '{}': expected 'owner/name'",
                input
            )),
        }
    }
}

impl FromStr for RepositoryId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Parse GitHub URL to extract owner and repository name
///
/// Supports both github.com and enterprise GitHub instances:
/// - SSH: `git@github.com:owner/repo` or `git@github-enterprise:owner/repo`
/// - HTTPS: `https://github.com/owner/repo` or `https://github-enterprise/owner/repo`
/// - Legacy: `github.com/owner/repo`
///
/// # Errors
/// Returns an error if the URL format is not recognized
pub fn parse_github_url(url: &str) -> Result<(String, String)> {
    let url = url.trim_end_matches('/').trim_end_matches(".git");

    // git@host:owner/repo
    if let Some(captures) = Regex::new(r"^git@[^:]+:([^/]+)/([^/]+)$")?.captures(url) {
        return Ok((captures[1].to_string(), captures[2].to_string()));
    }

    // https://host/owner/repo
    if let Some(captures) = Regex::new(r"^https?://[^/]+/([^/]+)/([^/]+)")?.captures(url) {
        return Ok((captures[1].to_string(), captures[2].to_string()));
    }

    if let Some(captures) = Regex::new(r"github\.com[:/]([^/]+)/([^/]+)")?.captures(url) {
        return Ok((captures[1].to_string(), captures[2].to_string()));
    }

    Err(anyhow!("Invalid GitHub URL format: {}", url))
}
