//! Error types for scorer construction and issue-tracker calls.
//!
//! Missing or unparsable answers are not errors: they resolve to sentinel
//! weights and, at worst, skip scoring. Only two things fail:
//!
//! - [`ScorerError`]: the scorer cannot be built from its configuration.
//! - [`TrackerError`]: one call against the issue tracker failed. These are
//!   logged by the dispatcher and never end the run.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScorerError {
    /// Invalid or incomplete configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Configuration file could not be read or parsed
    #[error("Invalid config file {path}: {message}")]
    ConfigFile { path: PathBuf, message: String },
}

impl ScorerError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn config_file(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ConfigFile {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum TrackerError {
    /// The tracker rejected the call; `output` is its raw error output.
    #[error("{operation} on issue {issue} failed: {output}")]
    Rejected {
        operation: &'static str,
        issue: String,
        output: String,
    },

    /// The tracker client could not be started.
    #[error("Failed to run {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} not found in PATH")]
    NotInstalled(String),
}

impl TrackerError {
    pub fn rejected(
        operation: &'static str,
        issue: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        Self::Rejected {
            operation,
            issue: issue.into(),
            output: output.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message_carries_raw_output() {
        let err = TrackerError::rejected("remove label", "42", "label not found");
        assert_eq!(
            err.to_string(),
            "remove label on issue 42 failed: label not found"
        );
    }

    #[test]
    fn test_configuration_message() {
        let err = ScorerError::configuration("score threshold is not set");
        assert_eq!(
            err.to_string(),
            "Configuration error: score threshold is not set"
        );
    }
}
