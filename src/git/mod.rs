//! Local git operations
//!
//! The [Git] trait is the seam between the workflows and the local
//! repository. Implementors provide a single primitive, [Git::run], which
//! executes one `git` subcommand in the work tree, plus two read-only lookups
//! that go through libgit2. Every named operation the workflows use is a
//! provided method built on `run`, so each one maps to exactly one `git`
//! invocation.
//!
//! - [repository::LocalRepository]: the real implementation, a discovered
//!   libgit2 repository whose work tree hosts the `git` subprocesses
//! - [mock::MockGit]: records invocations for tests
//!
//! ```rust
//! # use git_hub::git::Git;
//! # fn example<G: Git>(git: &G) -> git_hub::Result<()> {
//! let branch = git.current_branch()?;
//! git.create_branch("feature/dark-mode")?;
//! git.push_set_upstream("origin", "feature/dark-mode")?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockGit;
pub use repository::LocalRepository;

use crate::error::Result;

/// Local git operations used by the workflows
///
/// Implementors must be `Send`; libgit2 handles are not `Sync`.
pub trait Git: Send {
    /// Run `git <args>` in the work tree and return its stdout.
    ///
    /// A non-zero exit status is an error carrying the command line, exit
    /// code and stderr.
    fn run(&self, args: &[&str]) -> Result<String>;

    /// URL of the named remote
    fn remote_url(&self, remote: &str) -> Result<String>;

    /// Whether a local branch with this name exists
    fn branch_exists(&self, name: &str) -> Result<bool>;

    /// Name of the checked-out branch (`git symbolic-ref --short HEAD`)
    fn current_branch(&self) -> Result<String> {
        let out = self.run(&["symbolic-ref", "--short", "HEAD"])?;
        Ok(out.trim().to_string())
    }

    /// `git pull <remote> <branch>`
    fn pull(&self, remote: &str, branch: &str) -> Result<String> {
        self.run(&["pull", remote, branch])
    }

    /// `git pull --rebase --prune`
    fn pull_rebase(&self) -> Result<String> {
        self.run(&["pull", "--rebase", "--prune"])
    }

    /// Create and switch to a new local branch (`git checkout -b`)
    fn create_branch(&self, name: &str) -> Result<String> {
        self.run(&["checkout", "-b", name])
    }

    /// Switch to an existing branch
    fn checkout(&self, name: &str) -> Result<String> {
        self.run(&["checkout", name])
    }

    /// Push a branch and set it as upstream of the local one
    fn push_set_upstream(&self, remote: &str, branch: &str) -> Result<String> {
        self.run(&["push", "--set-upstream", remote, branch])
    }

    /// `git push`
    fn push(&self) -> Result<String> {
        self.run(&["push"])
    }

    /// Stage a single path
    fn add(&self, path: &str) -> Result<String> {
        self.run(&["add", path])
    }

    /// Commit only the given path
    fn commit_path(&self, path: &str, message: &str) -> Result<String> {
        self.run(&["commit", path, "-m", message])
    }

    /// Merge a branch, always creating a merge commit
    fn merge_no_ff(&self, branch: &str) -> Result<String> {
        self.run(&["merge", "--no-ff", "--no-edit", branch])
    }

    /// Create an annotated tag at HEAD
    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<String> {
        self.run(&["tag", "-a", name, "-m", message])
    }

    /// `git push --tags`
    fn push_tags(&self) -> Result<String> {
        self.run(&["push", "--tags"])
    }

    /// Delete a branch on the remote (`git push <remote> -d <branch>`)
    fn delete_remote_branch(&self, remote: &str, branch: &str) -> Result<String> {
        self.run(&["push", remote, "-d", branch])
    }

    /// Delete a merged local branch (`git branch -d`)
    fn delete_local_branch(&self, branch: &str) -> Result<String> {
        self.run(&["branch", "-d", branch])
    }
}

/// Render an argument vector the way it would be typed in a shell
pub fn command_line(args: &[&str]) -> String {
    let mut line = String::from("git");
    for arg in args {
        line.push(' ');
        if arg.is_empty() || arg.contains(char::is_whitespace) {
            line.push_str(&format!("{:?}", arg));
        } else {
            line.push_str(arg);
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_plain_args() {
        assert_eq!(
            command_line(&["push", "--set-upstream", "origin", "feature/x"]),
            "git push --set-upstream origin feature/x"
        );
    }

    #[test]
    fn test_command_line_quotes_whitespace() {
        assert_eq!(
            command_line(&["commit", "VERSION", "-m", "Bump 1.2.4"]),
            "git commit VERSION -m \"Bump 1.2.4\""
        );
    }

    #[test]
    fn test_provided_methods_map_to_single_invocations() {
        let git = MockGit::new();
        git.create_branch("release/1.0.1").unwrap();
        git.delete_remote_branch("origin", "release/1.0.1").unwrap();
        git.create_annotated_tag("1.0.1", "Release 1.0.1").unwrap();

        assert_eq!(
            git.commands(),
            vec![
                "git checkout -b release/1.0.1",
                "git push origin -d release/1.0.1",
                "git tag -a 1.0.1 -m \"Release 1.0.1\"",
            ]
        );
    }

    #[test]
    fn test_current_branch_is_trimmed() {
        let git = MockGit::new().with_output("symbolic-ref", "master\n");
        assert_eq!(git.current_branch().unwrap(), "master");
    }
}
