use crate::error::{GitHubFlowError, Result};
use crate::git::{command_line, Git};
use git2::{BranchType, Repository as Git2Repo};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// A local repository: libgit2 for lookups, the `git` binary for mutations
pub struct LocalRepository {
    repo: Git2Repo,
    workdir: PathBuf,
}

impl LocalRepository {
    /// Discover the git repository containing `path`
    ///
    /// Bare repositories are rejected since every workflow needs a work tree.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;
        let workdir = repo
            .workdir()
            .map(Path::to_path_buf)
            .ok_or_else(|| GitHubFlowError::config("repository has no work tree"))?;

        debug!(workdir = %workdir.display(), "opened repository");
        Ok(LocalRepository { repo, workdir })
    }

    /// Root of the work tree
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }
}

impl Git for LocalRepository {
    fn run(&self, args: &[&str]) -> Result<String> {
        let line = command_line(args);
        debug!(command = %line, "running");

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|e| GitHubFlowError::Command {
                command: line.clone(),
                code: None,
                stderr: e.to_string(),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if !output.status.success() {
            return Err(GitHubFlowError::Command {
                command: line,
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        debug!(command = %line, stdout = %stdout.trim_end(), "finished");
        Ok(stdout)
    }

    fn remote_url(&self, remote: &str) -> Result<String> {
        let found = self
            .repo
            .find_remote(remote)
            .map_err(|_| GitHubFlowError::remote(format!("remote '{}' not found", remote)))?;

        found
            .url()
            .map(str::to_string)
            .ok_or_else(|| GitHubFlowError::remote(format!("remote '{}' has no URL", remote)))
    }

    fn branch_exists(&self, name: &str) -> Result<bool> {
        match self.repo.find_branch(name, BranchType::Local) {
            Ok(_) => Ok(true),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
