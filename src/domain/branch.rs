use crate::domain::remote::RepoSlug;
use crate::domain::slug::slugify;
use crate::domain::version::SemVer;
use crate::error::{GitHubFlowError, Result};

pub const FEATURE_PREFIX: &str = "feature/";
pub const ISSUE_PREFIX: &str = "issue/";
pub const RELEASE_PREFIX: &str = "release/";

/// Branch names probed, in order, when no main branch is configured
pub const MAIN_BRANCH_CANDIDATES: [&str; 2] = ["main", "master"];

/// Fallback used when none of the candidates exist locally
pub const DEFAULT_MAIN_BRANCH: &str = "master";

/// `feature/{slug}` for a feature title
pub fn feature_branch(title: &str) -> Result<String> {
    let slug = slugify(title);
    if slug.is_empty() {
        return Err(GitHubFlowError::InvalidTitle(format!(
            "feature title {:?} has no characters usable in a branch name",
            title
        )));
    }
    Ok(format!("{}{}", FEATURE_PREFIX, slug))
}

/// `issue/{number}-{slug}`, or `issue/{repo-slug}-{number}-{slug}` when the
/// issue lives in a repository other than the local remote.
pub fn issue_branch(number: u64, title: &str, foreign_repository: Option<&RepoSlug>) -> String {
    let issue_part = match slugify(title) {
        slug if slug.is_empty() => number.to_string(),
        slug => format!("{}-{}", number, slug),
    };

    match foreign_repository {
        Some(repo) => format!(
            "{}{}-{}",
            ISSUE_PREFIX,
            slugify(&repo.full_name()),
            issue_part
        ),
        None => format!("{}{}", ISSUE_PREFIX, issue_part),
    }
}

/// `release/{version}`
pub fn release_branch(version: &SemVer) -> String {
    format!("{}{}", RELEASE_PREFIX, version)
}

/// Whether a branch follows the release branch naming scheme
pub fn is_release_branch(name: &str) -> bool {
    name.strip_prefix(RELEASE_PREFIX)
        .is_some_and(|rest| !rest.is_empty())
}
