use crate::domain::branch::issue_branch;
use crate::error::{GitHubFlowError, Result};
use crate::flow::Repository;
use crate::git::Git;
use crate::github::{GitHubApi, Issue};
use tracing::{debug, info};

/// Result of `issue start`
#[derive(Debug, Clone, PartialEq)]
pub struct IssueStarted {
    pub issue: Issue,
    pub assignee: String,
    pub branch: String,
}

impl<G: Git, H: GitHubApi> Repository<G, H> {
    /// Open issues of the target repository, pull requests excluded.
    pub fn issue_list(&self) -> Result<Vec<Issue>> {
        let repository = self.remote_repository()?;
        let slug = repository.slug()?;

        let issues = self.github().list_issues(&slug)?;
        Ok(issues
            .into_iter()
            .filter(|issue| !issue.is_pull_request())
            .collect())
    }

    /// Assign issue `number` to the authenticated user, then create and push
    /// its branch.
    ///
    /// Nothing is assigned and no branch is created unless the issue is open.
    pub fn issue_start(&self, number: u64) -> Result<IssueStarted> {
        let repository = self.remote_repository()?;
        let slug = repository.slug()?;

        let user = self.github().authenticated_user()?;
        debug!(login = %user.login, "authenticated");

        let issue = self.github().get_issue(&slug, number)?;
        if !issue.is_open() {
            return Err(GitHubFlowError::IssueNotOpen {
                number: issue.number,
                title: issue.title,
                state: issue.state,
            });
        }

        info!(issue = issue.number, login = %user.login, "assigning issue");
        self.github()
            .add_assignees(&slug, issue.number, &[user.login.as_str()])?;

        let foreign = self.settings().repository_override.as_ref().map(|_| &slug);
        let branch = issue_branch(issue.number, &issue.title, foreign);
        let remote = &self.settings().remote;

        info!(%branch, "creating local branch");
        let out = self.git().create_branch(&branch)?;
        debug!(output = %out.trim_end());

        info!(%branch, %remote, "pushing branch");
        let out = self.git().push_set_upstream(remote, &branch)?;
        debug!(output = %out.trim_end());

        Ok(IssueStarted {
            issue,
            assignee: user.login,
            branch,
        })
    }
}
