use crate::domain::{find_tag_for_version, CommitRecord, Version};
use crate::error::{NextverError, Result};
use crate::git::{IdentityConfigurator, VersionSource};
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock repository for testing without actual git operations
///
/// History is linear: commits are kept in the order added and each tag
/// points at the most recent commit at the time it was added.
#[derive(Default)]
pub struct MockRepository {
    commits: Vec<CommitRecord>,
    tags: Vec<String>,
    tag_positions: HashMap<String, usize>,
    fail_tags: bool,
    fail_commits: bool,
    identities: Mutex<Vec<(String, String)>>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a commit to the history
    pub fn add_commit(&mut self, commit: CommitRecord) {
        self.commits.push(commit);
    }

    /// Tag the most recent commit (or the empty history)
    pub fn add_tag(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.tag_positions.insert(name.clone(), self.commits.len());
        self.tags.push(name);
    }

    /// Make `fetch_tags` fail
    pub fn fail_tag_listing(&mut self) {
        self.fail_tags = true;
    }

    /// Make `fetch_commits_since` fail
    pub fn fail_commit_log(&mut self) {
        self.fail_commits = true;
    }

    /// Identities passed to `configure_identity`, in call order
    pub fn configured_identities(&self) -> Vec<(String, String)> {
        self.identities
            .lock()
            .map(|identities| identities.clone())
            .unwrap_or_default()
    }
}

impl VersionSource for MockRepository {
    fn fetch_tags(&self) -> Result<Vec<String>> {
        if self.fail_tags {
            return Err(NextverError::tag("mock tag listing failure"));
        }
        Ok(self.tags.clone())
    }

    fn fetch_commits_since(&self, version: &Version) -> Result<Vec<CommitRecord>> {
        if self.fail_commits {
            return Err(NextverError::commit("mock commit log failure"));
        }

        // Unlisted tags cannot bound the walk either
        let visible_tags: &[String] = if self.fail_tags { &[] } else { &self.tags };
        let start = find_tag_for_version(visible_tags, version)
            .and_then(|tag| self.tag_positions.get(tag).copied())
            .unwrap_or(0);
        Ok(self.commits[start..].to_vec())
    }
}

impl IdentityConfigurator for MockRepository {
    fn configure_identity(&self, name: &str, email: &str) -> Result<()> {
        let mut identities = self
            .identities
            .lock()
            .map_err(|_| NextverError::config("identity store poisoned"))?;
        identities.push((name.to_string(), email.to_string()));
        Ok(())
    }
}
