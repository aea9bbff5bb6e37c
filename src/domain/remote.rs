use crate::error::{GitHubFlowError, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// A GitHub repository identified by `owner/name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    pub owner: String,
    pub name: String,
}

impl RepoSlug {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        RepoSlug {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parse an `owner/name` full name
    pub fn parse(full_name: &str) -> Result<Self> {
        let trimmed = full_name.trim();
        match trimmed.split_once('/') {
            Some((owner, name)) if is_segment(owner) && is_segment(name) => {
                Ok(RepoSlug::new(owner, name))
            }
            _ => Err(GitHubFlowError::remote(format!(
                "invalid repository name {:?}, expected owner/name",
                full_name
            ))),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

fn is_segment(value: &str) -> bool {
    !value.is_empty() && !value.contains('/') && !value.chars().any(char::is_whitespace)
}

impl FromStr for RepoSlug {
    type Err = GitHubFlowError;

    fn from_str(s: &str) -> Result<Self> {
        RepoSlug::parse(s)
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// A parsed git remote URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteUrl {
    pub host: String,
    pub slug: RepoSlug,
}

fn remote_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // scp-like `user@host:owner/name`, `ssh://user@host[:port]/owner/name`
        // and `http(s)://[user@]host[:port]/owner/name`, optional `.git`.
        Regex::new(
            r"^(?:ssh://(?:[^@/]+@)?(?P<ssh_host>[^:/]+)(?::\d+)?/|(?:[^@/]+@)(?P<scp_host>[^:/]+):/?|https?://(?:[^@/]+@)?(?P<http_host>[^:/]+)(?::\d+)?/)(?P<owner>[^/]+)/(?P<name>[^/]+?)(?:\.git)?/?$",
        )
        .expect("static remote pattern is valid")
    })
}

impl RemoteUrl {
    /// Parse a remote URL as configured in `.git/config`
    pub fn parse(url: &str) -> Result<Self> {
        let caps = remote_pattern().captures(url.trim()).ok_or_else(|| {
            GitHubFlowError::remote(format!("unrecognised remote URL: {}", url))
        })?;

        let host = caps
            .name("ssh_host")
            .or_else(|| caps.name("scp_host"))
            .or_else(|| caps.name("http_host"))
            .map(|m| m.as_str().to_lowercase())
            .ok_or_else(|| GitHubFlowError::remote(format!("remote URL has no host: {}", url)))?;

        Ok(RemoteUrl {
            host,
            slug: RepoSlug::new(&caps["owner"], &caps["name"]),
        })
    }

    /// Parse and require the remote to live on `expected_host`
    pub fn parse_for_host(url: &str, expected_host: &str) -> Result<Self> {
        let remote = RemoteUrl::parse(url)?;
        if !remote.host.eq_ignore_ascii_case(expected_host) {
            return Err(GitHubFlowError::remote(format!(
                "remote host is {}, not {}",
                remote.host, expected_host
            )));
        }
        Ok(remote)
    }
}
