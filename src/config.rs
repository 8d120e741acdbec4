use crate::error::{NextverError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory and the user config directory.
pub const CONFIG_FILE_NAME: &str = "nextver.toml";

/// Represents the complete configuration for git-nextver.
///
/// Contains the commit classification rules, artifact output settings and the
/// identity written by `--config-git`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub conventional_commits: ConventionalCommitsConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub identity: IdentityConfig,
}

/// Returns the default list of breaking change indicators.
fn default_breaking_change_indicators() -> Vec<String> {
    vec!["BREAKING CHANGE".to_string(), "BREAKING-CHANGE".to_string()]
}

/// Returns the default commit types that trigger minor version bumps.
fn default_minor_types() -> Vec<String> {
    vec!["feat".to_string(), "feature".to_string()]
}

/// Returns the default commit types that trigger patch version bumps.
fn default_patch_types() -> Vec<String> {
    vec![
        "fix".to_string(),
        "chore".to_string(),
        "docs".to_string(),
        "style".to_string(),
        "refactor".to_string(),
        "perf".to_string(),
        "test".to_string(),
        "build".to_string(),
        "ci".to_string(),
        "revert".to_string(),
    ]
}

/// Configuration for conventional commit analysis.
///
/// Defines the footer markers and commit types the classification rule table
/// is built from.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ConventionalCommitsConfig {
    #[serde(default = "default_breaking_change_indicators")]
    pub breaking_change_indicators: Vec<String>,

    #[serde(default = "default_minor_types")]
    pub minor_types: Vec<String>,

    #[serde(default = "default_patch_types")]
    pub patch_types: Vec<String>,
}

impl Default for ConventionalCommitsConfig {
    fn default() -> Self {
        ConventionalCommitsConfig {
            breaking_change_indicators: default_breaking_change_indicators(),
            minor_types: default_minor_types(),
            patch_types: default_patch_types(),
        }
    }
}

fn default_artifacts_dir() -> PathBuf {
    PathBuf::from(".artifacts")
}

fn default_file_name() -> String {
    "version_details.json".to_string()
}

/// Where the decision record is written.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_artifacts_dir")]
    pub artifacts_dir: PathBuf,

    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl OutputConfig {
    /// Directory holding the artifact for `branch_name`
    pub fn branch_dir(&self, branch_name: &str) -> PathBuf {
        self.artifacts_dir.join(branch_name)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            artifacts_dir: default_artifacts_dir(),
            file_name: default_file_name(),
        }
    }
}

fn default_identity_name() -> String {
    "GitHub User".to_string()
}

fn default_identity_email() -> String {
    "user@example.com".to_string()
}

/// Identity written into the global git configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct IdentityConfig {
    #[serde(default = "default_identity_name")]
    pub name: String,

    #[serde(default = "default_identity_email")]
    pub email: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        IdentityConfig {
            name: default_identity_name(),
            email: default_identity_email(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `nextver.toml` in current directory
/// 3. `nextver.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        PathBuf::from(path)
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        PathBuf::from(CONFIG_FILE_NAME)
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            config_path
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config_str = fs::read_to_string(&path).map_err(|e| {
        NextverError::config(format!("cannot read {}: {}", path.display(), e))
    })?;
    parse_config(&config_str)
        .map_err(|e| NextverError::config(format!("{}: {}", path.display(), e)))
}

/// Parse configuration from TOML text
pub fn parse_config(config_str: &str) -> Result<Config> {
    toml::from_str(config_str).map_err(|e| NextverError::config(e.to_string()))
}
