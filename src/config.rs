use crate::error::{GitHubFlowError, Result};
use crate::github::{DEFAULT_API_URL, DEFAULT_HOST};
use crate::version::DEFAULT_VERSION_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the work tree
pub const LOCAL_CONFIG_FILE: &str = ".git-hub.toml";

/// File name looked up in the user config directory
pub const USER_CONFIG_FILE: &str = "git-hub.toml";

/// Represents the complete configuration for git-hub.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub repository: RepositoryConfig,

    #[serde(default)]
    pub github: GitHubConfig,
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_version_file() -> String {
    DEFAULT_VERSION_FILE.to_string()
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

/// Local repository settings.
///
/// `main_branch` is detected from the local branches when left unset.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RepositoryConfig {
    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default)]
    pub main_branch: Option<String>,

    #[serde(default = "default_version_file")]
    pub version_file: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        RepositoryConfig {
            remote: default_remote(),
            main_branch: None,
            version_file: default_version_file(),
        }
    }
}

/// GitHub endpoint settings, overridable for GitHub Enterprise.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GitHubConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_host")]
    pub host: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        GitHubConfig {
            api_url: default_api_url(),
            host: default_host(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `.git-hub.toml` in the repository work tree
/// 3. `git-hub.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>, workdir: &Path) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(PathBuf::from(path)),
        None => find_config_file(workdir),
    };

    match path {
        Some(path) => parse_config_file(&path),
        None => Ok(Config::default()),
    }
}

fn find_config_file(workdir: &Path) -> Option<PathBuf> {
    let local = workdir.join(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.exists())
}

fn parse_config_file(path: &Path) -> Result<Config> {
    let config_str = fs::read_to_string(path).map_err(|e| {
        GitHubFlowError::config(format!("cannot read {}: {}", path.display(), e))
    })?;

    toml::from_str(&config_str)
        .map_err(|e| GitHubFlowError::config(format!("{}: {}", path.display(), e)))
}
