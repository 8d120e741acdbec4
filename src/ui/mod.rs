//! User interface module - terminal output for the workflow driver.

pub mod formatter;

pub use formatter::{display_decision, display_error, display_status, display_success};
