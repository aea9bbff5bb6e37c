use crate::domain::RepoSlug;
use crate::github::{GitHubApi, GitHubError, Issue, RemoteRepository, User};
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory GitHub for testing
///
/// Serves repositories, issues and the authenticated user registered through
/// the builder methods and records every call as a short description such as
/// `get_issue repejota/git-hub#4`.
pub struct MockGitHub {
    repositories: HashMap<String, RemoteRepository>,
    issues: HashMap<String, Vec<Issue>>,
    user: Option<User>,
    calls: Mutex<Vec<String>>,
}

impl MockGitHub {
    pub fn new() -> Self {
        MockGitHub {
            repositories: HashMap::new(),
            issues: HashMap::new(),
            user: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Register a repository; its id is derived from insertion order
    pub fn with_repository(mut self, full_name: &str) -> Self {
        let id = self.repositories.len() as u64 + 1;
        self.repositories.insert(
            full_name.to_string(),
            RemoteRepository {
                id,
                full_name: full_name.to_string(),
                html_url: format!("https://github.com/{}", full_name),
            },
        );
        self
    }

    /// Register an issue in a repository
    pub fn with_issue(mut self, full_name: &str, number: u64, title: &str, state: &str) -> Self {
        self.issues
            .entry(full_name.to_string())
            .or_default()
            .push(Issue {
                number,
                title: title.to_string(),
                state: state.to_string(),
                html_url: format!("https://github.com/{}/issues/{}", full_name, number),
                pull_request: None,
            });
        self
    }

    /// Register a pull request, which the issues endpoint also lists
    pub fn with_pull_request(mut self, full_name: &str, number: u64, title: &str) -> Self {
        self.issues
            .entry(full_name.to_string())
            .or_default()
            .push(Issue {
                number,
                title: title.to_string(),
                state: "open".to_string(),
                html_url: format!("https://github.com/{}/pull/{}", full_name, number),
                pull_request: Some(serde_json::json!({})),
            });
        self
    }

    /// Set the login returned by `authenticated_user`
    pub fn with_user(mut self, login: &str) -> Self {
        self.user = Some(User {
            login: login.to_string(),
        });
        self
    }

    /// Calls made so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    /// Whether any recorded call starts with `prefix`
    pub fn called(&self, prefix: &str) -> bool {
        self.calls().iter().any(|call| call.starts_with(prefix))
    }

    fn record(&self, call: String) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }

    fn find_issue(&self, repo: &RepoSlug, number: u64) -> Option<&Issue> {
        self.issues
            .get(&repo.full_name())
            .and_then(|issues| issues.iter().find(|issue| issue.number == number))
    }
}

impl Default for MockGitHub {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubApi for MockGitHub {
    fn get_repository(&self, repo: &RepoSlug) -> Result<RemoteRepository, GitHubError> {
        self.record(format!("get_repository {}", repo));
        self.repositories
            .get(&repo.full_name())
            .cloned()
            .ok_or_else(|| GitHubError::NotFound(format!("repos/{}", repo)))
    }

    fn list_issues(&self, repo: &RepoSlug) -> Result<Vec<Issue>, GitHubError> {
        self.record(format!("list_issues {}", repo));
        Ok(self
            .issues
            .get(&repo.full_name())
            .map(|issues| issues.iter().filter(|i| i.is_open()).cloned().collect())
            .unwrap_or_default())
    }

    fn get_issue(&self, repo: &RepoSlug, number: u64) -> Result<Issue, GitHubError> {
        self.record(format!("get_issue {}#{}", repo, number));
        self.find_issue(repo, number)
            .cloned()
            .ok_or_else(|| GitHubError::NotFound(format!("repos/{}/issues/{}", repo, number)))
    }

    fn authenticated_user(&self) -> Result<User, GitHubError> {
        self.record("authenticated_user".to_string());
        self.user.clone().ok_or(GitHubError::MissingToken)
    }

    fn add_assignees(
        &self,
        repo: &RepoSlug,
        number: u64,
        logins: &[&str],
    ) -> Result<(), GitHubError> {
        self.record(format!("add_assignees {}#{} {}", repo, number, logins.join(",")));
        match self.find_issue(repo, number) {
            Some(_) => Ok(()),
            None => Err(GitHubError::NotFound(format!(
                "repos/{}/issues/{}",
                repo, number
            ))),
        }
    }
}
