use crate::domain::branch::{is_release_branch, release_branch};
use crate::domain::SemVer;
use crate::error::{GitHubFlowError, Result};
use crate::flow::Repository;
use crate::git::Git;
use crate::github::GitHubApi;
use tracing::{debug, info};

/// Result of `release start`
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseStarted {
    pub previous: SemVer,
    pub version: SemVer,
    pub branch: String,
}

/// Result of `release finish`
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseFinished {
    pub version: SemVer,
    pub branch: String,
    pub main_branch: String,
}

fn log_output(out: &str) {
    let out = out.trim_end();
    if !out.is_empty() {
        debug!(output = %out);
    }
}

impl<G: Git, H: GitHubApi> Repository<G, H> {
    /// Cut `release/{next}` from the main branch and commit the bumped
    /// version file on it.
    pub fn release_start(&self) -> Result<ReleaseStarted> {
        let git = self.git();
        let settings = self.settings();
        let main = &settings.main_branch;

        let current = git.current_branch()?;
        if &current != main {
            return Err(GitHubFlowError::wrong_branch(format!(
                "Releases must start from '{}' branch and you are on branch '{}'",
                main, current
            )));
        }

        info!(remote = %settings.remote, branch = %main, "pulling latest changes");
        log_output(&git.pull(&settings.remote, main)?);

        let previous = self.current_version()?;
        let version = previous.next_patch()?;
        info!(%previous, %version, "next version");

        let branch = release_branch(&version);
        info!(%branch, "creating local branch");
        log_output(&git.create_branch(&branch)?);
        log_output(&git.push_set_upstream(&settings.remote, &branch)?);

        self.version_file().write(&version)?;
        let path = settings.version_file.as_str();
        info!(%path, %version, "committing version bump");
        log_output(&git.add(path)?);
        log_output(&git.commit_path(path, &format!("Bump {}", version))?);
        log_output(&git.push()?);

        Ok(ReleaseStarted {
            previous,
            version,
            branch,
        })
    }

    /// Merge the current release branch into main, tag it and remove it.
    pub fn release_finish(&self) -> Result<ReleaseFinished> {
        let branch = self.git().current_branch()?;
        if !is_release_branch(&branch) {
            return Err(GitHubFlowError::wrong_branch(format!(
                "Releases can only be finished from a release branch and you are on branch '{}'",
                branch
            )));
        }
        self.finish_release_branch(branch)
    }

    /// `release start` immediately followed by `release finish`
    pub fn release_patch(&self) -> Result<(ReleaseStarted, ReleaseFinished)> {
        let started = self.release_start()?;
        let finished = self.finish_release_branch(started.branch.clone())?;
        Ok((started, finished))
    }

    fn finish_release_branch(&self, branch: String) -> Result<ReleaseFinished> {
        let git = self.git();
        let settings = self.settings();
        let main = &settings.main_branch;
        info!(%branch, "finishing release");

        log_output(&git.checkout(main)?);
        log_output(&git.pull_rebase()?);

        info!(%branch, into = %main, "merging");
        log_output(&git.merge_no_ff(&branch)?);
        log_output(&git.push()?);

        let version = self.current_version()?;
        let tag = version.to_string();
        info!(%tag, "tagging");
        log_output(&git.create_annotated_tag(&tag, &format!("Release {}", version))?);
        log_output(&git.push_tags()?);

        info!(%branch, "deleting release branch");
        log_output(&git.delete_remote_branch(&settings.remote, &branch)?);
        log_output(&git.delete_local_branch(&branch)?);

        Ok(ReleaseFinished {
            version,
            branch,
            main_branch: main.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::SemVer;
    use crate::error::GitHubFlowError;
    use crate::flow::{Repository, Settings};
    use crate::git::MockGit;
    use crate::github::MockGitHub;
    use std::fs;
    use tempfile::TempDir;

    fn repository(git: MockGit, version: &str) -> (TempDir, Repository<MockGit, MockGitHub>) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("VERSION"), version).unwrap();
        let repo = Repository::new(git, MockGitHub::new(), Settings::new(dir.path(), "master"));
        (dir, repo)
    }

    #[test]
    fn test_release_start_sequence() {
        let (dir, repo) = repository(MockGit::new().with_current_branch("master"), "1.2.3\n");

        let started = repo.release_start().unwrap();

        assert_eq!(started.previous, SemVer::new(1, 2, 3));
        assert_eq!(started.version, SemVer::new(1, 2, 4));
        assert_eq!(started.branch, "release/1.2.4");
        assert_eq!(
            repo.git().commands(),
            vec![
                "git symbolic-ref --short HEAD",
                "git pull origin master",
                "git checkout -b release/1.2.4",
                "git push --set-upstream origin release/1.2.4",
                "git add VERSION",
                "git commit VERSION -m \"Bump 1.2.4\"",
                "git push",
            ]
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("VERSION")).unwrap(),
            "1.2.4\n"
        );
    }

    #[test]
    fn test_release_start_off_main_branch_aborts() {
        let (dir, repo) = repository(
            MockGit::new().with_current_branch("feature/thing"),
            "1.2.3",
        );

        let err = repo.release_start().unwrap_err();

        assert!(matches!(err, GitHubFlowError::WrongBranch(_)));
        assert!(err.to_string().contains("feature/thing"));
        assert_eq!(repo.git().commands(), vec!["git symbolic-ref --short HEAD"]);
        assert_eq!(
            fs::read_to_string(dir.path().join("VERSION")).unwrap(),
            "1.2.3"
        );
    }

    #[test]
    fn test_release_start_invalid_version_creates_no_branch() {
        let (_dir, repo) = repository(MockGit::new().with_current_branch("master"), "1.2");

        let err = repo.release_start().unwrap_err();

        assert!(matches!(err, GitHubFlowError::Version(_)));
        assert!(!repo.git().ran("checkout"));
    }

    #[test]
    fn test_release_start_at_maximum_patch_creates_no_branch() {
        let (dir, repo) = repository(
            MockGit::new().with_current_branch("master"),
            "1.2.4294967295\n",
        );

        let err = repo.release_start().unwrap_err();

        assert!(matches!(err, GitHubFlowError::Version(_)));
        assert!(!repo.git().ran("checkout"));
        assert!(!repo.git().ran("push"));
        assert_eq!(
            fs::read_to_string(dir.path().join("VERSION")).unwrap(),
            "1.2.4294967295\n"
        );
    }

    #[test]
    fn test_release_start_failed_push_leaves_version_untouched() {
        let (dir, repo) = repository(
            MockGit::new()
                .with_current_branch("master")
                .failing_on("push --set-upstream"),
            "0.4.9",
        );

        assert!(repo.release_start().is_err());
        assert!(!repo.git().ran("commit"));
        assert_eq!(
            fs::read_to_string(dir.path().join("VERSION")).unwrap(),
            "0.4.9"
        );
    }

    #[test]
    fn test_release_finish_sequence() {
        let (_dir, repo) = repository(
            MockGit::new().with_current_branch("release/1.2.4"),
            "1.2.4\n",
        );

        let finished = repo.release_finish().unwrap();

        assert_eq!(finished.version, SemVer::new(1, 2, 4));
        assert_eq!(finished.branch, "release/1.2.4");
        assert_eq!(
            repo.git().commands(),
            vec![
                "git symbolic-ref --short HEAD",
                "git checkout master",
                "git pull --rebase --prune",
                "git merge --no-ff --no-edit release/1.2.4",
                "git push",
                "git tag -a 1.2.4 -m \"Release 1.2.4\"",
                "git push --tags",
                "git push origin -d release/1.2.4",
                "git branch -d release/1.2.4",
            ]
        );
    }

    #[test]
    fn test_release_finish_requires_release_branch() {
        let (_dir, repo) = repository(MockGit::new().with_current_branch("master"), "1.0.0");

        let err = repo.release_finish().unwrap_err();

        assert!(matches!(err, GitHubFlowError::WrongBranch(_)));
        assert!(!repo.git().ran("checkout"));
    }

    #[test]
    fn test_release_finish_merge_conflict_stops_before_tagging() {
        let (_dir, repo) = repository(
            MockGit::new()
                .with_current_branch("release/2.0.1")
                .failing_on("merge"),
            "2.0.1",
        );

        let err = repo.release_finish().unwrap_err();

        assert!(matches!(err, GitHubFlowError::Command { .. }));
        assert!(!repo.git().ran("tag"));
        assert!(!repo.git().ran("branch -d"));
    }

    #[test]
    fn test_release_start_on_main_named_branch() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("VERSION"), "3.1.0").unwrap();
        let repo = Repository::new(
            MockGit::new().with_current_branch("main"),
            MockGitHub::new(),
            Settings::new(dir.path(), "main"),
        );

        let started = repo.release_start().unwrap();
        assert_eq!(started.branch, "release/3.1.1");
        assert!(repo.git().ran("pull origin main"));
    }

    #[test]
    fn test_release_patch_runs_start_then_finish() {
        let (_dir, repo) = repository(MockGit::new().with_current_branch("master"), "0.1.9");

        let (started, finished) = repo.release_patch().unwrap();

        assert_eq!(started.version, SemVer::new(0, 1, 10));
        assert_eq!(finished.version, SemVer::new(0, 1, 10));
        let commands = repo.git().commands();
        assert_eq!(commands[0], "git symbolic-ref --short HEAD");
        assert_eq!(commands[6], "git push");
        assert_eq!(commands[7], "git checkout master");
        assert_eq!(
            commands.last().map(String::as_str),
            Some("git branch -d release/0.1.10")
        );
        assert_eq!(commands.len(), 15);
    }
}
