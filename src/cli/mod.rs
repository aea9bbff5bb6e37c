//! Command-line surface
//!
//! Argument parsing lives here; [orchestration] turns a parsed [Cli] into
//! flow calls against a real repository and the GitHub API.

use clap::{Args, Parser, Subcommand};

use crate::domain::RepoSlug;

pub mod orchestration;

#[derive(Debug, Parser)]
#[command(
    name = "git-hub",
    version,
    about = "Branch-per-issue and release-branch workflows for git and GitHub"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Increase log output (-v progress, -vv git output and requests)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Work on this GitHub repository (owner/name) instead of the remote's
    #[arg(short, long, value_name = "OWNER/NAME", global = true)]
    pub repository: Option<RepoSlug>,

    /// Path inside the local git repository
    #[arg(short = 'C', long, value_name = "PATH", default_value = ".", global = true)]
    pub path: String,

    /// Custom configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    /// GitHub API token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true, global = true)]
    pub github_token: Option<String>,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum Command {
    /// Show the GitHub repository behind the working copy
    Info,

    /// Feature branches
    #[command(subcommand)]
    Feature(FeatureCommand),

    /// Issue branches
    #[command(subcommand)]
    Issue(IssueCommand),

    /// Release branches
    #[command(subcommand)]
    Release(ReleaseCommand),
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum FeatureCommand {
    /// Create and push feature/<slug of title>
    Start {
        /// Feature title
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum IssueCommand {
    /// List open issues
    List,

    /// Assign an issue to yourself and create its branch
    Start {
        /// Issue number
        number: u64,
    },

    /// Open the new-issue page in the browser
    New,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum ReleaseCommand {
    /// Bump the patch version on a new release branch
    Start,

    /// Merge the current release branch, tag it and delete it
    Finish,

    /// Start and finish a patch release in one go
    Patch,
}

impl FeatureCommand {
    /// Words given on the command line joined into one title
    pub fn title(&self) -> String {
        match self {
            FeatureCommand::Start { title } => title.join(" "),
        }
    }
}
