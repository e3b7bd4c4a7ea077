//! Custom error types for relkit with improved type safety and error handling.

use thiserror::Error;

/// Named failures that relkit commands match on or report precisely.
///
/// Everything else propagates as a plain `color_eyre` report via the crate's
/// [`Result`](crate::result::Result) alias; these variants exist for the
/// failures that tests and callers need to distinguish.
#[derive(Error, Debug)]
pub enum RelkitError {
    // Cli args errors
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Issue tracker errors
    #[error("Tracker operation failed: {0}")]
    TrackerError(String),

    #[error("no milestone named '{0}' exists in the issue tracker")]
    MilestoneNotFound(String),

    // Release notes errors
    #[error(
        "issue #{issue} carries unranked priority '{value}': fix its labels and rerun"
    )]
    UnrankedPriority { issue: u64, value: String },

    #[error("release notes marker '{marker}' not found in {path}")]
    MarkerNotFound { marker: String, path: String },

    // External tool errors
    #[error("command failed: {command} ({})", describe_exit(.code))]
    ToolFailed { command: String, code: Option<i32> },

    #[error(
        "windows installers can only be built on a windows host (detected: {0})"
    )]
    WindowsHostRequired(String),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("exit code {c}"),
        None => "terminated by signal".to_string(),
    }
}

impl RelkitError {
    /// Create an invalid arguments error
    pub fn invalid_args(msg: impl Into<String>) -> Self {
        Self::InvalidArgs(msg.into())
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a tracker error with context
    pub fn tracker(msg: impl Into<String>) -> Self {
        Self::TrackerError(msg.into())
    }

    /// Create a failed tool invocation error
    pub fn tool_failed(command: impl Into<String>, code: Option<i32>) -> Self {
        Self::ToolFailed {
            command: command.into(),
            code,
        }
    }

    /// Create an unranked priority error for the given issue
    pub fn unranked_priority(issue: u64, value: impl Into<String>) -> Self {
        Self::UnrankedPriority {
            issue,
            value: value.into(),
        }
    }
}
