//! Analysis engine for determining version bumps from commits

pub mod calculator;
pub mod classifier;
pub mod rules;
pub mod version_analyzer;

pub use calculator::next_version;
pub use classifier::{classify, ClassificationCounters};
pub use rules::{Rule, RuleTable, Severity};
pub use version_analyzer::{VersionAnalysis, VersionAnalyzer};
