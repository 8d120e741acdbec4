//! The version decision record and its JSON artifact

pub mod writer;

pub use writer::write_record;

use crate::domain::{BumpClass, CommitRecord, Version};
use crate::error::{NextverError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Complete description of one versioning decision.
///
/// Field order is the serialized order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionDecisionRecord {
    pub current_version: Version,
    pub next_version: Version,
    pub bump_type: BumpClass,
    pub commit_messages: Vec<CommitRecord>,
    pub tags: BTreeSet<String>,
    pub pr_labels: Vec<String>,
}

/// Assemble a decision record. Tags are de-duplicated and sorted.
pub fn build_record<I>(
    current_version: Version,
    next_version: Version,
    bump_type: BumpClass,
    commits: Vec<CommitRecord>,
    tags: I,
    pr_labels: Vec<String>,
) -> VersionDecisionRecord
where
    I: IntoIterator<Item = String>,
{
    VersionDecisionRecord {
        current_version,
        next_version,
        bump_type,
        commit_messages: commits,
        tags: tags.into_iter().collect(),
        pr_labels,
    }
}

impl VersionDecisionRecord {
    /// Pretty-printed JSON terminated by a newline.
    ///
    /// Fails if a commit timestamp has no RFC 3339 representation.
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)
            .map_err(|e| NextverError::serialization(e.to_string()))?;
        json.push('\n');
        Ok(json)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
