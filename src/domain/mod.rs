//! Domain logic - pure rules independent of git and GitHub I/O

pub mod branch;
pub mod remote;
pub mod slug;
pub mod version;

pub use remote::{RemoteUrl, RepoSlug};
pub use slug::slugify;
pub use version::SemVer;
