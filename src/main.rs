use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use git_nextver::cli::{run_configure_identity, run_versioning_workflow, VersioningArgs};
use git_nextver::config;
use git_nextver::git::{Git2Repository, GlobalGitConfig};
use git_nextver::ui;

#[derive(clap::Parser)]
#[command(
    name = "git-nextver",
    about = "Compute the next semantic version from conventional commits and record the decision"
)]
struct Args {
    #[arg(long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        long,
        conflicts_with = "branch_name",
        help = "Configure the global git user name and email"
    )]
    config_git: bool,

    #[arg(long, requires = "config_git", help = "User name written by --config-git")]
    git_user_name: Option<String>,

    #[arg(long, requires = "config_git", help = "User email written by --config-git")]
    git_user_email: Option<String>,

    #[arg(long, help = "Branch name used for the artifact path; runs versioning")]
    branch_name: Option<String>,

    #[arg(long, default_value = "", help = "Comma-separated PR labels")]
    pr_labels: String,

    #[arg(long, help = "Directory receiving <branch>/version_details.json")]
    artifacts_dir: Option<PathBuf>,

    #[arg(long, default_value = ".", help = "Path inside the git repository")]
    repo: PathBuf,

    #[arg(short = 'v', long, help = "Enable debug logging")]
    verbose: bool,

    #[arg(short = 'V', long, help = "Print version information")]
    version: bool,
}

fn main() {
    let args = Args::parse();

    if args.version {
        println!("git-nextver {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    init_logging(args.verbose);

    if !args.config_git && args.branch_name.is_none() {
        Args::command()
            .error(
                clap::error::ErrorKind::MissingRequiredArgument,
                "branch name is required for versioning tasks unless configuring git",
            )
            .exit();
    }

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<()> {
    let mut config =
        config::load_config(args.config.as_deref()).context("Error loading config")?;

    if args.config_git {
        if let Some(name) = args.git_user_name {
            config.identity.name = name;
        }
        if let Some(email) = args.git_user_email {
            config.identity.email = email;
        }

        run_configure_identity(&GlobalGitConfig, &config.identity)
            .context("Failed to configure git")?;
        ui::display_success("Git configuration set successfully.");
        return Ok(());
    }

    let Some(branch_name) = args.branch_name else {
        return Ok(());
    };

    let repo = Git2Repository::open(&args.repo)
        .with_context(|| format!("Git repository error at {}", args.repo.display()))?;

    ui::display_status(&format!("Analyzing unreleased commits for '{}'", branch_name));
    let workflow_args = VersioningArgs {
        branch_name,
        pr_labels: args.pr_labels,
        artifacts_dir: args.artifacts_dir,
    };
    let result = run_versioning_workflow(&workflow_args, &config, &repo)?;

    ui::display_decision(&result.record);
    ui::display_success(&format!(
        "Version details written to {}",
        result.artifact_path.display()
    ));

    Ok(())
}
