//! User interface module - desktop interaction and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Handing URLs to the desktop environment

use std::process::{Command, Stdio};

use tracing::debug;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_error, display_feature_started, display_issue_started, display_issues,
    display_release_finished, display_release_started, display_repository_info, display_status,
    display_success,
};

/// The platform command that opens a URL in the default browser.
fn opener() -> (&'static str, &'static [&'static str]) {
    if cfg!(target_os = "macos") {
        ("open", &[])
    } else if cfg!(target_os = "windows") {
        ("cmd", &["/C", "start", ""])
    } else {
        ("xdg-open", &[])
    }
}

/// Opens `url` in the default browser.
///
/// # Returns
/// * `true` - The opener was launched and exited successfully
/// * `false` - No opener available or it failed; the caller should print the URL
pub fn open_url(url: &str) -> bool {
    let (program, args) = opener();
    let status = Command::new(program)
        .args(args)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match status {
        Ok(status) if status.success() => true,
        Ok(status) => {
            debug!(%program, ?status, "browser opener failed");
            false
        }
        Err(e) => {
            debug!(%program, error = %e, "browser opener unavailable");
            false
        }
    }
}
