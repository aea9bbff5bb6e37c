use crate::domain::RepoSlug;
use crate::github::{GitHubApi, GitHubError, Issue, RemoteRepository, User};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Blocking GitHub REST client
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    api_url: String,
    token: Option<String>,
}

impl GitHubClient {
    /// Create a client for `api_url`, authenticating with `token` when given.
    pub fn new(api_url: impl Into<String>, token: Option<String>) -> Result<Self, GitHubError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("git-hub/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(GitHubClient {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.trim().is_empty()),
        })
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        debug!(%method, %url, "github request");
        let builder = self.client.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, GitHubError> {
        let response = check(builder.send()?)?;
        Ok(response.json()?)
    }
}

fn repo_path(repo: &RepoSlug, rest: &str) -> String {
    format!("repos/{}/{}{}", repo.owner, repo.name, rest)
}

fn check(response: Response) -> Result<Response, GitHubError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let remaining = response
        .headers()
        .get("x-ratelimit-remaining")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let url = response.url().to_string();
    let body = response.text().unwrap_or_default();

    Err(error_for_status(
        status.as_u16(),
        remaining.as_deref(),
        &url,
        &body,
    ))
}

/// Map a non-success response to a [GitHubError]
pub(crate) fn error_for_status(
    status: u16,
    ratelimit_remaining: Option<&str>,
    url: &str,
    body: &str,
) -> GitHubError {
    match status {
        401 => GitHubError::Unauthorized,
        403 | 429 if ratelimit_remaining == Some("0") || status == 429 => GitHubError::RateLimited,
        404 => GitHubError::NotFound(url.to_string()),
        _ => {
            let message = serde_json::from_str::<serde_json::Value>(body)
                .ok()
                .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
                .unwrap_or_else(|| format!("HTTP {}", status));
            GitHubError::Api { status, message }
        }
    }
}

impl GitHubApi for GitHubClient {
    fn get_repository(&self, repo: &RepoSlug) -> Result<RemoteRepository, GitHubError> {
        self.send_json(self.request(Method::GET, &repo_path(repo, "")))
    }

    fn list_issues(&self, repo: &RepoSlug) -> Result<Vec<Issue>, GitHubError> {
        self.send_json(
            self.request(Method::GET, &repo_path(repo, "/issues"))
                .query(&[("state", "open"), ("per_page", "100")]),
        )
    }

    fn get_issue(&self, repo: &RepoSlug, number: u64) -> Result<Issue, GitHubError> {
        self.send_json(self.request(Method::GET, &repo_path(repo, &format!("/issues/{}", number))))
    }

    fn authenticated_user(&self) -> Result<User, GitHubError> {
        if !self.has_token() {
            return Err(GitHubError::MissingToken);
        }
        self.send_json(self.request(Method::GET, "user"))
    }

    fn add_assignees(
        &self,
        repo: &RepoSlug,
        number: u64,
        logins: &[&str],
    ) -> Result<(), GitHubError> {
        if !self.has_token() {
            return Err(GitHubError::MissingToken);
        }
        let body = serde_json::json!({ "assignees": logins });
        let builder = self
            .request(
                Method::POST,
                &repo_path(repo, &format!("/issues/{}/assignees", number)),
            )
            .json(&body);
        check(builder.send()?)?;
        Ok(())
    }
}
