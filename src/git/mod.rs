//! Version-control collaborators
//!
//! The versioning engine never talks to git directly. It reads tags and
//! commit history through the [VersionSource] trait and configures the
//! committer identity through [IdentityConfigurator]. The concrete
//! implementations are:
//!
//! - [repository::Git2Repository]: a real implementation using the `git2` crate
//! - [repository::GlobalGitConfig]: writes the identity to the global git config
//! - [mock::MockRepository]: an in-memory implementation for testing
//!
//! ```rust
//! # use git_nextver::git::VersionSource;
//! # use git_nextver::domain::current_version;
//! # fn example<R: VersionSource>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! let tags = repo.fetch_tags()?;
//! let commits = repo.fetch_commits_since(&current_version(&tags))?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::{Git2Repository, GlobalGitConfig};

use crate::domain::{CommitRecord, Version};
use crate::error::Result;

/// Source of tags and unreleased commits
///
/// Errors from the underlying version-control library are mapped to
/// [crate::error::NextverError].
pub trait VersionSource {
    /// All tag names in the repository, possibly empty
    ///
    /// Returned names are raw and may include tags that are not versions.
    fn fetch_tags(&self) -> Result<Vec<String>>;

    /// Commits made after the tag naming `version`, oldest first
    ///
    /// When no tag names `version` (for instance the `v0.0.0` default of a
    /// repository without tags) the entire history of `HEAD` is returned.
    ///
    /// # Example
    /// ```rust
    /// # use git_nextver::git::VersionSource;
    /// # use git_nextver::domain::Version;
    /// # fn example<R: VersionSource>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
    /// for commit in repo.fetch_commits_since(&Version::new(1, 2, 0))? {
    ///     println!("{} <{}>: {}", commit.author, commit.email, commit.subject());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    fn fetch_commits_since(&self, version: &Version) -> Result<Vec<CommitRecord>>;
}

/// Writes the committer identity into the user's global git configuration
pub trait IdentityConfigurator {
    fn configure_identity(&self, name: &str, email: &str) -> Result<()>;
}
