//! Pure formatting functions for UI output.
//!
//! Status lines go to stdout and errors to stderr. Recoverable conditions
//! are only logged through `tracing`, never printed here. The summary
//! text is built by [format_decision] so it can be tested without a terminal.

use crate::record::VersionDecisionRecord;
use console::style;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display the version decision summary.
pub fn display_decision(record: &VersionDecisionRecord) {
    println!("{}", format_decision(record));
}

/// Plain-text summary of a decision.
///
/// Shows the version change, bump type and up to 10 commit subjects. If
/// more commits exist, the remainder is counted.
pub fn format_decision(record: &VersionDecisionRecord) -> String {
    let mut lines = vec![
        format!(
            "Version: {} -> {} ({})",
            record.current_version, record.next_version, record.bump_type
        ),
        format!("Unreleased commits: {}", record.commit_messages.len()),
    ];

    for (i, commit) in record.commit_messages.iter().take(10).enumerate() {
        let subject = commit.subject();
        let short_msg: String = if subject.chars().count() > 60 {
            subject.chars().take(60).collect()
        } else {
            subject.to_string()
        };
        lines.push(format!("  {}. {}", i + 1, short_msg));
    }

    if record.commit_messages.len() > 10 {
        lines.push(format!(
            "  ... and {} more commits",
            record.commit_messages.len() - 10
        ));
    }

    if !record.pr_labels.is_empty() {
        lines.push(format!("PR labels: {}", record.pr_labels.join(", ")));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BumpClass, CommitRecord, Version};
    use crate::record::build_record;
    use chrono::{FixedOffset, TimeZone};

    fn record(messages: &[&str], labels: &[&str]) -> VersionDecisionRecord {
        let date = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .unwrap();
        build_record(
            Version::new(1, 2, 3),
            Version::new(1, 3, 0),
            BumpClass::Minor,
            messages
                .iter()
                .map(|m| CommitRecord::new(*m, "Ada", "ada@example.com", date))
                .collect(),
            Vec::new(),
            labels.iter().map(|l| l.to_string()).collect(),
        )
    }

    #[test]
    fn test_format_decision_header() {
        let text = format_decision(&record(&["feat: add X\n\nbody"], &[]));
        assert!(text.starts_with("Version: v1.2.3 -> v1.3.0 (Minor)"));
        assert!(text.contains("Unreleased commits: 1"));
        assert!(text.contains("  1. feat: add X"));
        assert!(!text.contains("body"));
        assert!(!text.contains("PR labels"));
    }

    #[test]
    fn test_format_decision_truncates_list() {
        let messages: Vec<String> = (0..12).map(|i| format!("fix: bug {}", i)).collect();
        let refs: Vec<&str> = messages.iter().map(String::as_str).collect();
        let text = format_decision(&record(&refs, &[]));
        assert!(text.contains("  10. fix: bug 9"));
        assert!(!text.contains("fix: bug 10"));
        assert!(text.contains("... and 2 more commits"));
    }

    #[test]
    fn test_format_decision_long_subject_multibyte() {
        let subject = format!("fix: {}", "é".repeat(80));
        let text = format_decision(&record(&[&subject], &[]));
        assert!(text.contains("  1. fix: é"));
    }

    #[test]
    fn test_format_decision_labels() {
        let text = format_decision(&record(&[], &["bug", "docs"]));
        assert!(text.contains("PR labels: bug, docs"));
    }
}
