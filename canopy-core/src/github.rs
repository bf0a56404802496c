//! GitHub repository locator shared across crates.
//!
//! These helpers intentionally live in `canopy-core` so both the session
//! layer and the API client can name a repository without depending on a
//! client instance. The browse dialog accepts either separate owner/repo
//! fields or a pasted repository URL, so the locator parses both.

use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;

static GITHUB_REPO_REGEX: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"github\.com[/:]([^/]+)/([^/\.]+)").expect("Failed to compile GitHub repo regex"));

/// A GitHub repository reference: owner (user or organization login) plus
/// repository name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoLocator {
  /// Repository owner (user or organization)
  pub owner: String,
  /// Repository name
  pub repo: String,
}

impl RepoLocator {
  pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
    Self {
      owner: owner.into(),
      repo: repo.into(),
    }
  }

  /// Parse a GitHub URL to extract repository information.
  ///
  /// Supports HTTPS and SCP-style SSH URLs, with or without a `.git`
  /// suffix or trailing path segments. Returns an error when the URL does
  /// not resemble a GitHub repository path.
  pub fn parse(url: &str) -> Result<Self> {
    if let Some(captures) = GITHUB_REPO_REGEX.captures(url) {
      let owner = captures
        .get(1)
        .expect("capture group 1 must exist")
        .as_str()
        .to_string();
      let repo = captures
        .get(2)
        .expect("capture group 2 must exist")
        .as_str()
        .to_string();
      Ok(Self { owner, repo })
    } else {
      Err(anyhow::anyhow!("Could not extract owner and repo from URL: {url}"))
    }
  }

  /// Returns the full repository path as `owner/repo`.
  pub fn full_name(&self) -> String {
    format!("{}/{}", self.owner, self.repo)
  }
}
