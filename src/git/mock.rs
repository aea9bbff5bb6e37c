use crate::error::{GitHubFlowError, Result};
use crate::git::{command_line, Git};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Mock git for testing without running any subprocess
///
/// Every `run` call is recorded as its rendered command line. Outputs and
/// failures are matched by command prefix (the part after `git `).
pub struct MockGit {
    commands: Mutex<Vec<String>>,
    outputs: Vec<(String, String)>,
    failures: Vec<String>,
    remotes: HashMap<String, String>,
    branches: HashSet<String>,
}

impl MockGit {
    /// Create a mock with no remotes, no branches and empty outputs
    pub fn new() -> Self {
        MockGit {
            commands: Mutex::new(Vec::new()),
            outputs: Vec::new(),
            failures: Vec::new(),
            remotes: HashMap::new(),
            branches: HashSet::new(),
        }
    }

    /// Answer `git symbolic-ref --short HEAD` with this branch
    pub fn with_current_branch(self, branch: &str) -> Self {
        self.with_output("symbolic-ref", &format!("{}\n", branch))
    }

    /// Return `stdout` for commands starting with `prefix`
    pub fn with_output(mut self, prefix: &str, stdout: &str) -> Self {
        self.outputs.push((prefix.to_string(), stdout.to_string()));
        self
    }

    /// Fail commands starting with `prefix` with exit code 1
    pub fn failing_on(mut self, prefix: &str) -> Self {
        self.failures.push(prefix.to_string());
        self
    }

    /// Register a remote URL
    pub fn with_remote(mut self, name: &str, url: &str) -> Self {
        self.remotes.insert(name.to_string(), url.to_string());
        self
    }

    /// Register an existing local branch
    pub fn with_branch(mut self, name: &str) -> Self {
        self.branches.insert(name.to_string());
        self
    }

    /// Command lines run so far, in order
    pub fn commands(&self) -> Vec<String> {
        self.commands
            .lock()
            .map(|commands| commands.clone())
            .unwrap_or_default()
    }

    /// Whether any recorded command starts with `git <prefix>`
    pub fn ran(&self, prefix: &str) -> bool {
        self.commands()
            .iter()
            .any(|line| subcommand(line).starts_with(prefix))
    }
}

fn subcommand(line: &str) -> &str {
    line.strip_prefix("git ").unwrap_or(line)
}

impl Default for MockGit {
    fn default() -> Self {
        Self::new()
    }
}

impl Git for MockGit {
    fn run(&self, args: &[&str]) -> Result<String> {
        let line = command_line(args);
        if let Ok(mut commands) = self.commands.lock() {
            commands.push(line.clone());
        }

        let rest = subcommand(&line);
        if self.failures.iter().any(|prefix| rest.starts_with(prefix)) {
            return Err(GitHubFlowError::Command {
                command: line.clone(),
                code: Some(1),
                stderr: format!("mock failure for {}", line),
            });
        }

        Ok(self
            .outputs
            .iter()
            .find(|(prefix, _)| rest.starts_with(prefix.as_str()))
            .map(|(_, stdout)| stdout.clone())
            .unwrap_or_default())
    }

    fn remote_url(&self, remote: &str) -> Result<String> {
        self.remotes
            .get(remote)
            .cloned()
            .ok_or_else(|| GitHubFlowError::remote(format!("remote '{}' not found", remote)))
    }

    fn branch_exists(&self, name: &str) -> Result<bool> {
        Ok(self.branches.contains(name))
    }
}
