use std::fmt;

/// Non-fatal conditions met while deciding a version.
///
/// Each one has a well-defined fallback; they are logged and shown to the
/// user but never abort the run.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Tag exists but cannot be parsed as a version; it is ignored
    SkippedTag { tag: String, reason: String },
    /// Listing tags failed; the run continues as if there were none
    TagListingFailed { reason: String },
    /// No commits since the current version; nothing will be released
    NoNewCommits { current_version: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::SkippedTag { tag, reason } => {
                write!(f, "Ignoring tag '{}': {}", tag, reason)
            }
            BoundaryWarning::TagListingFailed { reason } => {
                write!(
                    f,
                    "Could not list tags ({}); assuming no versions have been released",
                    reason
                )
            }
            BoundaryWarning::NoNewCommits { current_version } => {
                write!(f, "No new commits since {}", current_version)
            }
        }
    }
}
