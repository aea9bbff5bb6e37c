// tests/flow_test.rs
use git_hub::domain::{RepoSlug, SemVer};
use git_hub::flow::{Repository, Settings};
use git_hub::git::MockGit;
use git_hub::github::MockGitHub;
use git_hub::GitHubFlowError;
use std::fs;
use tempfile::TempDir;

const REMOTE: &str = "https://github.com/acme/widgets.git";

fn with_version(version: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("VERSION"), version).unwrap();
    dir
}

#[test]
fn test_issue_start_then_release_on_custom_settings() {
    let dir = with_version("0.9.9\n");
    let mut settings = Settings::new(dir.path(), "main");
    settings.remote = "upstream".to_string();

    let repo = Repository::new(
        MockGit::new()
            .with_remote("upstream", REMOTE)
            .with_current_branch("main"),
        MockGitHub::new()
            .with_repository("acme/widgets")
            .with_user("dev")
            .with_issue("acme/widgets", 12, "Widgets: render faster", "open"),
        settings,
    );

    let issue = repo.issue_start(12).unwrap();
    assert_eq!(issue.branch, "issue/12-widgets-render-faster");
    assert!(repo
        .git()
        .ran("push --set-upstream upstream issue/12-widgets-render-faster"));

    let started = repo.release_start().unwrap();
    assert_eq!(started.version, SemVer::new(0, 9, 10));
    assert!(repo.git().ran("pull upstream main"));
}

#[test]
fn test_release_finish_fails_on_malformed_version_before_tagging() {
    let dir = with_version("v1.0.0\n");
    let repo = Repository::new(
        MockGit::new().with_current_branch("release/1.0.0"),
        MockGitHub::new(),
        Settings::new(dir.path(), "master"),
    );

    let err = repo.release_finish().unwrap_err();

    assert!(matches!(err, GitHubFlowError::Version(_)));
    assert!(repo.git().ran("merge --no-ff"));
    assert!(!repo.git().ran("tag"));
}

#[test]
fn test_issue_start_without_token_assigns_nothing() {
    let repo = Repository::new(
        MockGit::new().with_remote("origin", REMOTE),
        MockGitHub::new()
            .with_repository("acme/widgets")
            .with_issue("acme/widgets", 1, "Bug", "open"),
        Settings::new("/tmp/widgets", "master"),
    );

    let err = repo.issue_start(1).unwrap_err();

    assert!(matches!(err, GitHubFlowError::GitHub(_)));
    assert!(!repo.github().called("add_assignees"));
    assert!(repo.git().commands().is_empty());
}

#[test]
fn test_new_issue_url_for_override() {
    let mut settings = Settings::new("/tmp/widgets", "master");
    settings.repository_override = Some(RepoSlug::new("acme", "gadgets"));
    let repo = Repository::new(MockGit::new(), MockGitHub::new(), settings);

    assert_eq!(
        repo.new_issue_url().unwrap(),
        "https://github.com/acme/gadgets/issues/new"
    );
}
