//! Main workflow orchestration logic
//!
//! Resolves configuration against the local repository, builds the git and
//! GitHub handles and dispatches the parsed command to its flow. Kept apart
//! from `main.rs` so the dispatch can be driven without a process boundary.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::{Cli, Command, FeatureCommand, GlobalArgs, IssueCommand, ReleaseCommand};
use crate::config::{load_config, Config};
use crate::flow::{resolve_main_branch, Repository, Settings};
use crate::git::{Git, LocalRepository};
use crate::github::{GitHubApi, GitHubClient};
use crate::ui;

/// Settings for one invocation, from config overlaid with command-line flags
pub fn build_settings<G: Git>(
    git: &G,
    global: &GlobalArgs,
    config: &Config,
    workdir: &Path,
) -> Result<Settings> {
    let main_branch = resolve_main_branch(git, config.repository.main_branch.as_deref())
        .context("cannot determine main branch")?;

    let mut settings = Settings::new(workdir, main_branch);
    settings.remote = config.repository.remote.clone();
    settings.version_file = config.repository.version_file.clone();
    settings.github_host = config.github.host.clone();
    settings.repository_override = global.repository.clone();
    Ok(settings)
}

/// Open the repository under `--path`, wire up the GitHub client and run the
/// command.
pub fn run(cli: Cli) -> Result<()> {
    let global = &cli.global;

    let local = LocalRepository::open(&global.path)
        .with_context(|| format!("cannot open git repository at {}", global.path))?;
    let workdir = local.workdir().to_path_buf();
    debug!(workdir = %workdir.display(), "opened repository");

    let config = load_config(global.config.as_deref(), &workdir)?;
    let settings = build_settings(&local, global, &config, &workdir)?;
    debug!(?settings, "resolved settings");

    let client = GitHubClient::new(config.github.api_url.clone(), global.github_token.clone())?;
    info!(
        api_url = %config.github.api_url,
        token = client.has_token(),
        "GitHub client ready"
    );

    let repository = Repository::new(local, client, settings);
    dispatch(&repository, &cli.command)
}

/// Run one command against an already assembled [Repository]
pub fn dispatch<G: Git, H: GitHubApi>(
    repository: &Repository<G, H>,
    command: &Command,
) -> Result<()> {
    match command {
        Command::Info => {
            let remote = repository.remote_repository()?;
            ui::display_repository_info(&remote);
        }
        Command::Feature(feature) => match feature {
            FeatureCommand::Start { .. } => {
                let started = repository.feature_start(&feature.title())?;
                ui::display_feature_started(&started);
            }
        },
        Command::Issue(IssueCommand::List) => {
            let issues = repository.issue_list()?;
            ui::display_issues(&issues);
        }
        Command::Issue(IssueCommand::Start { number }) => {
            let started = repository.issue_start(*number)?;
            ui::display_issue_started(&started);
        }
        Command::Issue(IssueCommand::New) => {
            let url = repository.new_issue_url()?;
            if ui::open_url(&url) {
                ui::display_status(&format!("Opened {}", url));
            } else {
                println!("{}", url);
            }
        }
        Command::Release(ReleaseCommand::Start) => {
            let started = repository.release_start()?;
            ui::display_release_started(&started);
        }
        Command::Release(ReleaseCommand::Finish) => {
            let finished = repository.release_finish()?;
            ui::display_release_finished(&finished);
        }
        Command::Release(ReleaseCommand::Patch) => {
            let (started, finished) = repository.release_patch()?;
            ui::display_release_started(&started);
            ui::display_release_finished(&finished);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::MockGit;
    use crate::github::MockGitHub;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn global(args: &[&str]) -> GlobalArgs {
        let mut argv = vec!["git-hub"];
        argv.extend_from_slice(args);
        argv.push("info");
        Cli::try_parse_from(argv).unwrap().global
    }

    #[test]
    fn test_build_settings_applies_config_and_override() {
        let mut config = Config::default();
        config.repository.remote = "upstream".to_string();
        config.repository.version_file = "meta/VERSION".to_string();
        config.github.host = "github.example.com".to_string();

        let settings = build_settings(
            &MockGit::new().with_branch("main"),
            &global(&["-r", "acme/tool"]),
            &config,
            Path::new("/work"),
        )
        .unwrap();

        assert_eq!(settings.main_branch, "main");
        assert_eq!(settings.remote, "upstream");
        assert_eq!(settings.version_file, "meta/VERSION");
        assert_eq!(settings.github_host, "github.example.com");
        assert_eq!(
            settings.repository_override.map(|s| s.full_name()),
            Some("acme/tool".to_string())
        );
    }

    #[test]
    fn test_dispatch_feature_start() {
        let repository = Repository::new(
            MockGit::new(),
            MockGitHub::new(),
            Settings::new("/work", "master"),
        );
        let command = Command::Feature(FeatureCommand::Start {
            title: vec!["Dark".to_string(), "mode".to_string()],
        });

        dispatch(&repository, &command).unwrap();

        assert!(repository.git().ran("checkout -b feature/dark-mode"));
    }

    #[test]
    fn test_dispatch_release_start_reports_flow_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("VERSION"), "1.0.0").unwrap();
        let repository = Repository::new(
            MockGit::new().with_current_branch("feature/x"),
            MockGitHub::new(),
            Settings::new(dir.path(), "master"),
        );

        let err = dispatch(&repository, &Command::Release(ReleaseCommand::Start)).unwrap_err();
        assert!(err.to_string().contains("Releases must start from 'master'"));
    }

    #[test]
    fn test_dispatch_issue_list() {
        let repository = Repository::new(
            MockGit::new().with_remote("origin", "https://github.com/o/r.git"),
            MockGitHub::new()
                .with_repository("o/r")
                .with_issue("o/r", 1, "Bug", "open"),
            Settings::new("/work", "master"),
        );

        dispatch(&repository, &Command::Issue(IssueCommand::List)).unwrap();

        assert!(repository.github().called("list_issues o/r"));
    }
}
