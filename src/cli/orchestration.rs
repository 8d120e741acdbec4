//! Main workflow orchestration logic
//!
//! Kept separate from `main.rs` so the workflows can be driven
//! programmatically, against any [VersionSource], without clap.

use std::path::{Component, Path, PathBuf};

use tracing::info;

use crate::analyzer::VersionAnalyzer;
use crate::boundary::BoundaryWarning;
use crate::config::{Config, IdentityConfig};
use crate::domain::{current_version, parse_pr_labels};
use crate::error::{NextverError, Result};
use crate::git::{IdentityConfigurator, VersionSource};
use crate::record::{build_record, write_record, VersionDecisionRecord};

/// Arguments for the versioning workflow
#[derive(Debug, Clone, PartialEq)]
pub struct VersioningArgs {
    /// Branch whose artifact directory receives the record
    pub branch_name: String,

    /// Raw comma-separated PR labels
    pub pr_labels: String,

    /// Overrides the configured artifacts directory
    pub artifacts_dir: Option<PathBuf>,
}

/// Result of a successful versioning run
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    pub record: VersionDecisionRecord,

    /// Where the record was written
    pub artifact_path: PathBuf,

    /// Recoverable conditions met along the way
    pub warnings: Vec<BoundaryWarning>,
}

/// Compute the version decision from a repository.
///
/// A failure to list tags is recovered as "no tags"; a failure to read the
/// commit log is fatal. Recovered conditions are logged and returned, not
/// printed.
pub fn decide_version<R: VersionSource>(
    repo: &R,
    analyzer: &VersionAnalyzer,
    pr_labels: Vec<String>,
) -> Result<(VersionDecisionRecord, Vec<BoundaryWarning>)> {
    let mut warnings = Vec::new();

    let tags = match repo.fetch_tags() {
        Ok(tags) => tags,
        Err(e) => {
            let warning = BoundaryWarning::TagListingFailed {
                reason: e.to_string(),
            };
            info!("{}", warning);
            warnings.push(warning);
            Vec::new()
        }
    };

    let current = current_version(&tags);
    info!(%current, tags = tags.len(), "current version");

    let commits = repo.fetch_commits_since(&current)?;
    if commits.is_empty() {
        let warning = BoundaryWarning::NoNewCommits {
            current_version: current.to_string(),
        };
        info!("{}", warning);
        warnings.push(warning);
    }

    let analysis = analyzer.analyze(current, &commits)?;
    let record = build_record(
        analysis.current_version,
        analysis.next_version,
        analysis.bump_type,
        commits,
        tags,
        pr_labels,
    );
    Ok((record, warnings))
}

/// Versioning workflow
///
/// 1. Read tags and determine the current version
/// 2. Read unreleased commits and classify them
/// 3. Compute the next version
/// 4. Write `<artifacts_dir>/<branch_name>/<file_name>` atomically
pub fn run_versioning_workflow<R: VersionSource>(
    args: &VersioningArgs,
    config: &Config,
    repo: &R,
) -> Result<WorkflowResult> {
    validate_branch_name(&args.branch_name)?;

    let analyzer = VersionAnalyzer::new(&config.conventional_commits)?;
    let (record, warnings) = decide_version(repo, &analyzer, parse_pr_labels(&args.pr_labels))?;

    let dir = match &args.artifacts_dir {
        Some(artifacts_dir) => artifacts_dir.join(&args.branch_name),
        None => config.output.branch_dir(&args.branch_name),
    };
    let artifact_path = write_record(&record, &dir, &config.output.file_name)?;

    Ok(WorkflowResult {
        record,
        artifact_path,
        warnings,
    })
}

/// Write the configured identity into the global git configuration
pub fn run_configure_identity<C: IdentityConfigurator>(
    configurator: &C,
    identity: &IdentityConfig,
) -> Result<()> {
    configurator.configure_identity(&identity.name, &identity.email)?;
    info!(name = %identity.name, email = %identity.email, "git identity configured");
    Ok(())
}

/// Branch names become directory paths below the artifacts directory, so
/// they must be relative and must not climb out of it.
fn validate_branch_name(branch_name: &str) -> Result<()> {
    let path = Path::new(branch_name);
    let escapes = path
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if branch_name.trim().is_empty() || escapes {
        return Err(NextverError::config(format!(
            "invalid branch name '{}'",
            branch_name
        )));
    }
    Ok(())
}
