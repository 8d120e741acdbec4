use crate::domain::{find_tag_for_version, CommitRecord, Version};
use crate::error::{NextverError, Result};
use crate::git::{IdentityConfigurator, VersionSource};
use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use git2::{Config as GitConfig, Repository as Git2Repo, Sort};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Wrapper around git2::Repository implementing [VersionSource]
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Commit id a tag ultimately points at (handles annotated tags)
    fn tag_target(&self, tag_name: &str) -> Result<git2::Oid> {
        let reference = self
            .repo
            .find_reference(&format!("refs/tags/{}", tag_name))
            .map_err(|e| NextverError::tag(format!("Cannot find tag '{}': {}", tag_name, e)))?;
        let commit = reference
            .peel_to_commit()
            .map_err(|e| NextverError::tag(format!("Cannot peel tag '{}': {}", tag_name, e)))?;
        Ok(commit.id())
    }
}

impl VersionSource for Git2Repository {
    fn fetch_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }

    fn fetch_commits_since(&self, version: &Version) -> Result<Vec<CommitRecord>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk
            .push_head()
            .map_err(|e| NextverError::commit(format!("Cannot read HEAD: {}", e)))?;

        let tags = match self.fetch_tags() {
            Ok(tags) => tags,
            Err(e) => {
                debug!(error = %e, "tag listing failed, collecting full history");
                Vec::new()
            }
        };
        match find_tag_for_version(&tags, version) {
            Some(tag_name) => {
                debug!(tag = tag_name, "collecting commits after tag");
                revwalk.hide(self.tag_target(tag_name)?)?;
            }
            None => debug!(%version, "no tag for version, collecting full history"),
        }

        let mut commits = Vec::new();
        for oid_result in revwalk {
            let oid = oid_result?;
            let commit = self.repo.find_commit(oid)?;
            commits.push(commit_record(&commit)?);
        }

        // Reverse to get chronological order (oldest first)
        commits.reverse();
        Ok(commits)
    }
}

/// Identity target backed by the user's global git config file
///
/// Needs no repository, so `--config-git` works from any directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalGitConfig;

impl IdentityConfigurator for GlobalGitConfig {
    fn configure_identity(&self, name: &str, email: &str) -> Result<()> {
        configure_global_identity(name, email)
    }
}

/// Convert a git2 commit into a record, keeping the author's UTC offset
fn commit_record(commit: &git2::Commit<'_>) -> Result<CommitRecord> {
    let author = commit.author();
    let message = commit.message().unwrap_or("").trim_end().to_string();
    let name = author.name().unwrap_or("unknown").to_string();
    let email = author.email().unwrap_or("").to_string();
    let date = git_time_to_datetime(author.when()).ok_or_else(|| {
        NextverError::commit(format!("Commit {} has an invalid timestamp", commit.id()))
    })?;

    Ok(CommitRecord::new(message, name, email, date))
}

fn git_time_to_datetime(time: git2::Time) -> Option<DateTime<FixedOffset>> {
    let offset = FixedOffset::east_opt(time.offset_minutes().checked_mul(60)?)?;
    let utc = Utc.timestamp_opt(time.seconds(), 0).single()?;
    Some(utc.with_timezone(&offset))
}

/// Path of the user's global git configuration file.
///
/// Falls back to `~/.gitconfig` when git has not created one yet.
pub fn global_config_path() -> Result<PathBuf> {
    if let Ok(path) = GitConfig::find_global() {
        return Ok(path);
    }
    dirs::home_dir()
        .map(|home| home.join(".gitconfig"))
        .ok_or_else(|| NextverError::config("Cannot determine home directory for git config"))
}

/// Set `user.name` and `user.email` in the global git configuration
pub fn configure_global_identity(name: &str, email: &str) -> Result<()> {
    let path = global_config_path()?;
    configure_identity_at(&path, name, email)
}

/// Set `user.name` and `user.email` in the git config file at `path`
pub fn configure_identity_at(path: &Path, name: &str, email: &str) -> Result<()> {
    let mut config = GitConfig::open(path)?;
    config.set_str("user.email", email)?;
    config.set_str("user.name", name)?;
    debug!(path = %path.display(), "configured git identity");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_git_time_keeps_offset() {
        let time = git2::Time::new(1_709_288_430, 120);
        let date = git_time_to_datetime(time).unwrap();
        assert_eq!(date.to_rfc3339(), "2024-03-01T12:20:30+02:00");
    }

    #[test]
    fn test_git_time_negative_offset() {
        let time = git2::Time::new(0, -300);
        let date = git_time_to_datetime(time).unwrap();
        assert_eq!(date.offset().local_minus_utc(), -5 * 3600);
        assert_eq!(date.timestamp(), 0);
    }

    #[test]
    fn test_configure_identity_at() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("gitconfig");

        configure_identity_at(&path, "CI Bot", "ci@example.com").unwrap();

        let config = GitConfig::open(&path).unwrap();
        assert_eq!(config.get_string("user.name").unwrap(), "CI Bot");
        assert_eq!(config.get_string("user.email").unwrap(), "ci@example.com");
    }
}
