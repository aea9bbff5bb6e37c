use thiserror::Error;

use crate::github::GitHubError;

/// Unified error type for git-hub operations
#[derive(Error, Debug)]
pub enum GitHubFlowError {
    #[error("`{command}` failed ({}): {stderr}", exit_code_label(.code))]
    Command {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Git repository error: {0}")]
    Git(#[from] git2::Error),

    #[error("GitHub API error: {0}")]
    GitHub(#[from] GitHubError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Remote error: {0}")]
    Remote(String),

    #[error("Issue #{number} \"{title}\" is {state}, you can't work on it")]
    IssueNotOpen {
        number: u64,
        title: String,
        state: String,
    },

    #[error("{0}")]
    WrongBranch(String),

    #[error("Invalid title: {0}")]
    InvalidTitle(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-hub
pub type Result<T> = std::result::Result<T, GitHubFlowError>;

fn exit_code_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

impl GitHubFlowError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitHubFlowError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        GitHubFlowError::Version(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        GitHubFlowError::Remote(msg.into())
    }

    /// Create a wrong-branch validation error
    pub fn wrong_branch(msg: impl Into<String>) -> Self {
        GitHubFlowError::WrongBranch(msg.into())
    }
}
