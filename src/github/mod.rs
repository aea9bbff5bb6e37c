//! GitHub REST API access
//!
//! [GitHubApi] lists the handful of calls the workflows make. [GitHubClient]
//! talks to the real API over blocking HTTP; [MockGitHub] serves canned data
//! and records calls for tests.

pub mod client;
pub mod mock;

pub use client::GitHubClient;
pub use mock::MockGitHub;

use crate::domain::RepoSlug;
use serde::{Deserialize, Serialize};

/// Default REST endpoint for github.com
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Default web host for github.com
pub const DEFAULT_HOST: &str = "github.com";

/// A repository as returned by `GET /repos/{owner}/{repo}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteRepository {
    pub id: u64,
    pub full_name: String,
    pub html_url: String,
}

impl RemoteRepository {
    /// The `owner/name` pair of this repository
    pub fn slug(&self) -> crate::Result<RepoSlug> {
        RepoSlug::parse(&self.full_name)
    }
}

/// An issue (or pull request, which the issues endpoint also returns)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    pub state: String,
    pub html_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<serde_json::Value>,
}

impl Issue {
    pub fn is_open(&self) -> bool {
        self.state == "open"
    }

    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

/// A GitHub account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub login: String,
}

/// Errors from the GitHub API
#[derive(Debug, thiserror::Error)]
pub enum GitHubError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{message} (status: {status})")]
    Api { status: u16, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Authentication required or token rejected")]
    Unauthorized,

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("A GitHub token is required, set GITHUB_TOKEN or pass --github-token")]
    MissingToken,
}

/// GitHub operations used by the workflows
pub trait GitHubApi: Send + Sync {
    /// `GET /repos/{owner}/{repo}`
    fn get_repository(&self, repo: &RepoSlug) -> Result<RemoteRepository, GitHubError>;

    /// `GET /repos/{owner}/{repo}/issues` (open issues, first page)
    fn list_issues(&self, repo: &RepoSlug) -> Result<Vec<Issue>, GitHubError>;

    /// `GET /repos/{owner}/{repo}/issues/{number}`
    fn get_issue(&self, repo: &RepoSlug, number: u64) -> Result<Issue, GitHubError>;

    /// `GET /user`
    fn authenticated_user(&self) -> Result<User, GitHubError>;

    /// `POST /repos/{owner}/{repo}/issues/{number}/assignees`
    fn add_assignees(
        &self,
        repo: &RepoSlug,
        number: u64,
        logins: &[&str],
    ) -> Result<(), GitHubError>;
}
