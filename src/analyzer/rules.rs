//! Ordered `(pattern, severity)` table used to classify commit messages.

use crate::config::ConventionalCommitsConfig;
use crate::error::{NextverError, Result};
use regex::Regex;
use std::fmt;

/// Release severity signalled by a single commit message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Breaking,
    Minor,
    Patch,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Breaking => "breaking",
            Severity::Minor => "minor",
            Severity::Patch => "patch",
        };
        f.write_str(name)
    }
}

/// A single classification rule
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    severity: Severity,
}

impl Rule {
    /// Compile a rule from a regular expression
    pub fn new(pattern: &str, severity: Severity) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|e| {
            NextverError::config(format!("invalid {} rule '{}': {}", severity, pattern, e))
        })?;
        Ok(Rule { pattern, severity })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn matches(&self, message: &str) -> bool {
        self.pattern.is_match(message)
    }
}

/// Rules are tried in order; the first match decides a message's severity.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    pub fn new(rules: Vec<Rule>) -> Self {
        RuleTable { rules }
    }

    /// Build the conventional-commit table from configuration.
    ///
    /// Order: `type!:` headers, breaking-change footers, minor types, patch
    /// types. An empty type or indicator is rejected since it would match
    /// arbitrary text.
    pub fn from_config(config: &ConventionalCommitsConfig) -> Result<Self> {
        let mut rules = vec![Rule::new(
            r"^[A-Za-z]+(?:\([^)\n]*\))?!:",
            Severity::Breaking,
        )?];

        for indicator in &config.breaking_change_indicators {
            ensure_non_empty(indicator, "breaking change indicator")?;
            rules.push(Rule::new(
                &format!("{}:", regex::escape(indicator)),
                Severity::Breaking,
            )?);
        }

        if let Some(pattern) = header_pattern(&config.minor_types)? {
            rules.push(Rule::new(&pattern, Severity::Minor)?);
        }
        if let Some(pattern) = header_pattern(&config.patch_types)? {
            rules.push(Rule::new(&pattern, Severity::Patch)?);
        }

        Ok(RuleTable { rules })
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Severity of a message, or `None` when no rule recognizes it
    pub fn classify_message(&self, message: &str) -> Option<Severity> {
        self.rules
            .iter()
            .find(|rule| rule.matches(message))
            .map(Rule::severity)
    }
}

fn ensure_non_empty(value: &str, what: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(NextverError::config(format!("empty {} in rule table", what)));
    }
    Ok(())
}

/// `type(scope): ` header pattern matching any of `types`, case-insensitively
fn header_pattern(types: &[String]) -> Result<Option<String>> {
    if types.is_empty() {
        return Ok(None);
    }

    let mut alternatives = Vec::with_capacity(types.len());
    for commit_type in types {
        ensure_non_empty(commit_type, "commit type")?;
        alternatives.push(regex::escape(commit_type.trim()));
    }

    Ok(Some(format!(
        r"(?i)^(?:{})(?:\([^)\n]*\))?:",
        alternatives.join("|")
    )))
}
