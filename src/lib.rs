pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod flow;
pub mod git;
pub mod github;
pub mod logging;
pub mod ui;
pub mod version;

pub use error::{GitHubFlowError, Result};
