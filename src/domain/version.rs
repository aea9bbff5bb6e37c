use crate::error::{GitHubFlowError, Result};
use std::fmt;
use std::str::FromStr;

/// Three-component version number (major.minor.patch)
///
/// Deliberately minimal: no pre-release or build metadata suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SemVer {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl SemVer {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        SemVer {
            major,
            minor,
            patch,
        }
    }

    /// Parse version from its textual form (e.g., "1.2.3" -> SemVer(1,2,3))
    ///
    /// Surrounding whitespace is ignored so file contents with a trailing
    /// newline parse cleanly. A missing or non-numeric segment is reported as
    /// the first invalid component together with the raw input.
    pub fn parse(raw: &str) -> Result<Self> {
        let clean = raw.trim();

        let parts: Vec<&str> = clean.split('.').collect();
        if parts.len() > 3 {
            return Err(GitHubFlowError::version(format!(
                "invalid VERSION format: {}",
                clean
            )));
        }

        let component = |index: usize, name: &str| {
            parts
                .get(index)
                .and_then(|value| value.parse::<u32>().ok())
                .ok_or_else(|| {
                    GitHubFlowError::version(format!("invalid {} version: {}", name, clean))
                })
        };

        Ok(SemVer {
            major: component(0, "Major")?,
            minor: component(1, "Minor")?,
            patch: component(2, "Patch")?,
        })
    }

    /// The version of the next release: same major/minor, patch + 1
    ///
    /// Fails when the patch number is already at its maximum.
    pub fn next_patch(&self) -> Result<Self> {
        let patch = self.patch.checked_add(1).ok_or_else(|| {
            GitHubFlowError::version(format!("no patch version follows {}", self))
        })?;
        Ok(SemVer {
            major: self.major,
            minor: self.minor,
            patch,
        })
    }
}

impl FromStr for SemVer {
    type Err = GitHubFlowError;

    fn from_str(s: &str) -> Result<Self> {
        SemVer::parse(s)
    }
}

impl fmt::Display for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
