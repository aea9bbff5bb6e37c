use crate::domain::SemVer;
use crate::error::{GitHubFlowError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Default name of the file holding the current version
pub const DEFAULT_VERSION_FILE: &str = "VERSION";

/// The plain-text file at the repository root that holds the current version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionFile {
    path: PathBuf,
}

impl VersionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        VersionFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the current version.
    ///
    /// # Returns
    /// * `Ok(SemVer)` - The version stored in the file
    /// * `Err` - If the file cannot be read or its contents are not `X.Y.Z`
    pub fn read(&self) -> Result<SemVer> {
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            GitHubFlowError::version(format!("cannot read {}: {}", self.path.display(), e))
        })?;
        SemVer::parse(&contents)
    }

    /// Replaces the file contents with `version` followed by a newline.
    pub fn write(&self, version: &SemVer) -> Result<()> {
        fs::write(&self.path, format!("{}\n", version))?;
        Ok(())
    }
}
