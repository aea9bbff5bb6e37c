use crate::domain::branch::feature_branch;
use crate::error::Result;
use crate::flow::Repository;
use crate::git::Git;
use crate::github::GitHubApi;
use tracing::{debug, info};

/// Result of `feature start`
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureStarted {
    pub branch: String,
    pub remote: String,
}

impl<G: Git, H: GitHubApi> Repository<G, H> {
    /// Create `feature/{slug}` and push it with upstream tracking.
    pub fn feature_start(&self, title: &str) -> Result<FeatureStarted> {
        let branch = feature_branch(title)?;
        let remote = &self.settings().remote;

        info!(%branch, "creating local branch");
        let out = self.git().create_branch(&branch)?;
        debug!(output = %out.trim_end());

        info!(%branch, %remote, "pushing branch");
        let out = self.git().push_set_upstream(remote, &branch)?;
        debug!(output = %out.trim_end());

        Ok(FeatureStarted {
            branch,
            remote: remote.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::flow::{Repository, Settings};
    use crate::git::MockGit;
    use crate::github::MockGitHub;

    #[test]
    fn test_feature_start_runs_branch_then_push() {
        let repo = Repository::new(
            MockGit::new(),
            MockGitHub::new(),
            Settings::new("/tmp/project", "master"),
        );

        let started = repo.feature_start("Dark Mode: toggle!").unwrap();

        assert_eq!(started.branch, "feature/dark-mode-toggle");
        assert_eq!(
            repo.git().commands(),
            vec![
                "git checkout -b feature/dark-mode-toggle",
                "git push --set-upstream origin feature/dark-mode-toggle",
            ]
        );
        assert!(repo.github().calls().is_empty());
    }

    #[test]
    fn test_feature_start_stops_when_branch_creation_fails() {
        let repo = Repository::new(
            MockGit::new().failing_on("checkout"),
            MockGitHub::new(),
            Settings::new("/tmp/project", "master"),
        );

        assert!(repo.feature_start("Dark mode").is_err());
        assert!(!repo.git().ran("push"));
    }

    #[test]
    fn test_feature_start_rejects_unusable_title() {
        let repo = Repository::new(
            MockGit::new(),
            MockGitHub::new(),
            Settings::new("/tmp/project", "master"),
        );

        assert!(repo.feature_start("***").is_err());
        assert!(repo.git().commands().is_empty());
    }
}
