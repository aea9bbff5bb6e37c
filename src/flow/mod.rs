//! Workflow sequencing
//!
//! Each workflow is a straight-line list of fallible steps against an explicit
//! [Repository] handle. The first failing step aborts the rest; nothing is
//! rolled back. Every step is one `git` invocation or one GitHub API call.

pub mod feature;
pub mod issue;
pub mod release;

pub use feature::FeatureStarted;
pub use issue::IssueStarted;
pub use release::{ReleaseFinished, ReleaseStarted};

use crate::domain::branch::{DEFAULT_MAIN_BRANCH, MAIN_BRANCH_CANDIDATES};
use crate::domain::{RemoteUrl, RepoSlug, SemVer};
use crate::error::Result;
use crate::git::Git;
use crate::github::{GitHubApi, RemoteRepository};
use crate::version::VersionFile;
use std::path::PathBuf;
use tracing::{debug, info};

/// Settings resolved from config file and command line
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Root of the work tree; the version file is resolved against it
    pub workdir: PathBuf,
    /// Remote to pull from and push to
    pub remote: String,
    /// Branch releases start from and merge back into
    pub main_branch: String,
    /// Version file path relative to the work tree
    pub version_file: String,
    /// Web host of the GitHub instance
    pub github_host: String,
    /// Work on this repository instead of the one behind `remote`
    pub repository_override: Option<RepoSlug>,
}

impl Settings {
    /// Settings with the stock remote, version file and host
    pub fn new(workdir: impl Into<PathBuf>, main_branch: impl Into<String>) -> Self {
        Settings {
            workdir: workdir.into(),
            remote: "origin".to_string(),
            main_branch: main_branch.into(),
            version_file: crate::version::DEFAULT_VERSION_FILE.to_string(),
            github_host: crate::github::DEFAULT_HOST.to_string(),
            repository_override: None,
        }
    }
}

/// Pick the main branch: the configured one, else the first local candidate
/// (`main`, then `master`), else `master`.
pub fn resolve_main_branch<G: Git>(git: &G, configured: Option<&str>) -> Result<String> {
    if let Some(branch) = configured {
        return Ok(branch.to_string());
    }

    for candidate in MAIN_BRANCH_CANDIDATES {
        if git.branch_exists(candidate)? {
            debug!(branch = candidate, "detected main branch");
            return Ok(candidate.to_string());
        }
    }

    Ok(DEFAULT_MAIN_BRANCH.to_string())
}

/// A local repository paired with its GitHub counterpart
pub struct Repository<G: Git, H: GitHubApi> {
    git: G,
    github: H,
    settings: Settings,
    version_file: VersionFile,
}

impl<G: Git, H: GitHubApi> Repository<G, H> {
    pub fn new(git: G, github: H, settings: Settings) -> Self {
        let version_file = VersionFile::new(settings.workdir.join(&settings.version_file));
        Repository {
            git,
            github,
            settings,
            version_file,
        }
    }

    pub fn git(&self) -> &G {
        &self.git
    }

    pub fn github(&self) -> &H {
        &self.github
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn version_file(&self) -> &VersionFile {
        &self.version_file
    }

    /// Version currently recorded in the version file
    pub fn current_version(&self) -> Result<SemVer> {
        self.version_file.read()
    }

    /// Version the next release will carry
    pub fn next_version(&self) -> Result<SemVer> {
        self.current_version()?.next_patch()
    }

    /// The GitHub repository to work on: the override when given, else the
    /// one the configured remote points at.
    pub fn target_slug(&self) -> Result<RepoSlug> {
        if let Some(slug) = &self.settings.repository_override {
            return Ok(slug.clone());
        }

        let url = self.git.remote_url(&self.settings.remote)?;
        let remote = RemoteUrl::parse_for_host(&url, &self.settings.github_host)?;
        Ok(remote.slug)
    }

    /// Look the target repository up through the API
    pub fn remote_repository(&self) -> Result<RemoteRepository> {
        let slug = self.target_slug()?;
        info!(repository = %slug, "resolving GitHub repository");
        Ok(self.github.get_repository(&slug)?)
    }

    /// Web page for filing a new issue on the target repository
    pub fn new_issue_url(&self) -> Result<String> {
        let slug = self.target_slug()?;
        Ok(format!(
            "https://{}/{}/issues/new",
            self.settings.github_host, slug
        ))
    }
}
