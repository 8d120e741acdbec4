use crate::analyzer::calculator::next_version;
use crate::analyzer::classifier::{classify, ClassificationCounters};
use crate::analyzer::rules::RuleTable;
use crate::config::ConventionalCommitsConfig;
use crate::domain::{BumpClass, CommitRecord, Version};
use crate::error::Result;
use tracing::info;

/// Outcome of analyzing one set of unreleased commits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionAnalysis {
    pub current_version: Version,
    pub next_version: Version,
    pub bump_type: BumpClass,
}

/// Analyzes commits to determine version bump type
pub struct VersionAnalyzer {
    rules: RuleTable,
}

impl VersionAnalyzer {
    /// Create an analyzer whose rule table is built from `config`
    pub fn new(config: &ConventionalCommitsConfig) -> Result<Self> {
        Ok(VersionAnalyzer {
            rules: RuleTable::from_config(config)?,
        })
    }

    /// Classify commits without deciding a version
    pub fn classify(&self, commits: &[CommitRecord]) -> ClassificationCounters {
        classify(commits, &self.rules)
    }

    /// Classify `commits` and compute the version that follows `current`
    pub fn analyze(&self, current: Version, commits: &[CommitRecord]) -> Result<VersionAnalysis> {
        let counters = self.classify(commits);
        info!(
            breaking = counters.breaking_count,
            minor = counters.minor_count,
            patch = counters.patch_count,
            "classified {} commits",
            commits.len()
        );

        let (next, bump) = next_version(current, counters)?;
        info!(%current, %next, bump = %bump, "version decision");

        Ok(VersionAnalysis {
            current_version: current,
            next_version: next,
            bump_type: bump,
        })
    }
}
