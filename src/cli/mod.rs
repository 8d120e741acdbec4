//! Workflow driver behind the command line

pub mod orchestration;

pub use orchestration::{
    decide_version, run_configure_identity, run_versioning_workflow, VersioningArgs,
    WorkflowResult,
};
