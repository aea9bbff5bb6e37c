//! Pure formatting functions for UI output.
//!
//! `format_*` functions build the text; `display_*` functions print it.

use console::style;

use crate::flow::{FeatureStarted, IssueStarted, ReleaseFinished, ReleaseStarted};
use crate::github::{Issue, RemoteRepository};

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// One issue as `#{number} - {title} - {url}`
pub fn format_issue_line(issue: &Issue) -> String {
    format!("#{} - {} - {}", issue.number, issue.title, issue.html_url)
}

pub fn display_issues(issues: &[Issue]) {
    if issues.is_empty() {
        display_status("No open issues");
        return;
    }
    for issue in issues {
        println!("{}", format_issue_line(issue));
    }
}

/// Repository summary printed by `info`
pub fn format_repository_info(repository: &RemoteRepository) -> String {
    format!(
        "GitHub Repository ID: {}\nGitHub Repository Full Name: {}\nGitHub Repository URL: {}",
        repository.id, repository.full_name, repository.html_url
    )
}

pub fn display_repository_info(repository: &RemoteRepository) {
    println!("{}", format_repository_info(repository));
}

pub fn display_feature_started(started: &FeatureStarted) {
    display_success(&format!(
        "Created branch {} and pushed it to {}",
        style(&started.branch).cyan(),
        started.remote
    ));
}

pub fn display_issue_started(started: &IssueStarted) {
    display_success(&format!(
        "Assigned issue #{} to {}",
        started.issue.number, started.assignee
    ));
    display_success(&format!(
        "Created branch {} and pushed it",
        style(&started.branch).cyan()
    ));
}

pub fn display_release_started(started: &ReleaseStarted) {
    display_success(&format!(
        "Started release {} ({} → {}) on branch {}",
        style(started.version).green().bold(),
        started.previous,
        started.version,
        style(&started.branch).cyan()
    ));
}

pub fn display_release_finished(finished: &ReleaseFinished) {
    display_success(&format!(
        "Released {}: merged {} into {}, tagged and pushed",
        style(finished.version).green().bold(),
        finished.branch,
        finished.main_branch
    ));
}
