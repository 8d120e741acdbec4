use crate::analyzer::rules::{RuleTable, Severity};
use crate::domain::{BumpClass, CommitRecord};
use std::iter::Sum;
use std::ops::Add;
use tracing::debug;

/// Per-run totals of breaking, minor and patch-level commits.
///
/// Counters form a monoid under [`ClassificationCounters::combine`] with
/// `Default` as identity, so any split of the commit list may be counted
/// separately and merged. They are deliberately not `Copy`: computing the
/// next version consumes them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationCounters {
    pub breaking_count: u64,
    pub minor_count: u64,
    pub patch_count: u64,
}

impl ClassificationCounters {
    pub fn new(breaking_count: u64, minor_count: u64, patch_count: u64) -> Self {
        ClassificationCounters {
            breaking_count,
            minor_count,
            patch_count,
        }
    }

    /// Counters for a single message of the given severity
    pub fn from_severity(severity: Option<Severity>) -> Self {
        match severity {
            Some(Severity::Breaking) => ClassificationCounters::new(1, 0, 0),
            Some(Severity::Minor) => ClassificationCounters::new(0, 1, 0),
            Some(Severity::Patch) => ClassificationCounters::new(0, 0, 1),
            None => ClassificationCounters::default(),
        }
    }

    pub fn combine(self, other: Self) -> Self {
        ClassificationCounters {
            breaking_count: self.breaking_count.saturating_add(other.breaking_count),
            minor_count: self.minor_count.saturating_add(other.minor_count),
            patch_count: self.patch_count.saturating_add(other.patch_count),
        }
    }

    /// Highest-priority non-empty bucket: breaking, then minor, then patch
    pub fn bump_class(&self) -> BumpClass {
        if self.breaking_count > 0 {
            BumpClass::Major
        } else if self.minor_count > 0 {
            BumpClass::Minor
        } else if self.patch_count > 0 {
            BumpClass::Patch
        } else {
            BumpClass::None
        }
    }
}

impl Add for ClassificationCounters {
    type Output = ClassificationCounters;

    fn add(self, other: Self) -> Self {
        self.combine(other)
    }
}

impl Sum for ClassificationCounters {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(ClassificationCounters::default(), ClassificationCounters::combine)
    }
}

/// Count commit messages by severity. Unrecognized messages are ignored.
pub fn classify(commits: &[CommitRecord], rules: &RuleTable) -> ClassificationCounters {
    commits
        .iter()
        .map(|commit| {
            let severity = rules.classify_message(&commit.message);
            match severity {
                Some(severity) => debug!(commit = commit.subject(), %severity, "classified commit"),
                None => debug!(commit = commit.subject(), "commit matches no rule, ignoring"),
            }
            ClassificationCounters::from_severity(severity)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConventionalCommitsConfig;
    use chrono::{FixedOffset, TimeZone};

    fn commits(messages: &[&str]) -> Vec<CommitRecord> {
        let date = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .unwrap();
        messages
            .iter()
            .map(|m| CommitRecord::new(*m, "Test User", "test@example.com", date))
            .collect()
    }

    fn rules() -> RuleTable {
        RuleTable::from_config(&ConventionalCommitsConfig::default()).unwrap()
    }

    #[test]
    fn test_classify_feature_and_fix() {
        let counters = classify(&commits(&["feat: add X", "fix: typo"]), &rules());
        assert_eq!(counters, ClassificationCounters::new(0, 1, 1));
        assert_eq!(counters.bump_class(), BumpClass::Minor);
    }

    #[test]
    fn test_classify_breaking_dominates() {
        let counters = classify(
            &commits(&[
                "feat: new feature 1",
                "feat: new feature 2",
                "fix(core)!: breaking change",
                "chore: deps",
            ]),
            &rules(),
        );
        assert_eq!(counters, ClassificationCounters::new(1, 2, 1));
        assert_eq!(counters.bump_class(), BumpClass::Major);
    }

    #[test]
    fn test_classify_breaking_counted_once_per_commit() {
        let counters = classify(
            &commits(&["feat!: redesign\n\nBREAKING CHANGE: everything"]),
            &rules(),
        );
        assert_eq!(counters, ClassificationCounters::new(1, 0, 0));
    }

    #[test]
    fn test_classify_patch_only() {
        let counters = classify(
            &commits(&["fix: bug 1", "docs: update readme", "chore: cleanup"]),
            &rules(),
        );
        assert_eq!(counters.bump_class(), BumpClass::Patch);
    }

    #[test]
    fn test_classify_non_conventional_is_none() {
        let counters = classify(
            &commits(&["Updated stuff", "Fixed things", "Merge pull request #4"]),
            &rules(),
        );
        assert_eq!(counters, ClassificationCounters::default());
        assert_eq!(counters.bump_class(), BumpClass::None);
    }

    #[test]
    fn test_classify_empty() {
        let counters = classify(&[], &rules());
        assert_eq!(counters.bump_class(), BumpClass::None);
    }

    #[test]
    fn test_counters_split_and_merge() {
        let all = commits(&["feat: a", "fix: b", "feat!: c", "docs: d", "random"]);
        let whole = classify(&all, &rules());
        let (left, right) = all.split_at(2);
        let merged = classify(left, &rules()) + classify(right, &rules());
        assert_eq!(whole, merged);
    }

    #[test]
    fn test_combine_identity() {
        let counters = ClassificationCounters::new(1, 2, 3);
        assert_eq!(
            counters.clone().combine(ClassificationCounters::default()),
            counters
        );
    }

    #[test]
    fn test_from_severity() {
        assert_eq!(
            ClassificationCounters::from_severity(Some(Severity::Minor)),
            ClassificationCounters::new(0, 1, 0)
        );
        assert_eq!(
            ClassificationCounters::from_severity(None),
            ClassificationCounters::default()
        );
    }
}
