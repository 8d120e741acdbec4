//! Domain logic - pure business rules independent of git operations

pub mod commit;
pub mod labels;
pub mod tag;
pub mod version;

pub use commit::CommitRecord;
pub use labels::parse_pr_labels;
pub use tag::{current_version, find_tag_for_version, parse_version_tag};
pub use version::{BumpClass, Version};
