//! Error types shared across the vidtool-core library.

use std::process::ExitStatus;
use thiserror::Error;

/// Errors produced by the tool pipelines.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported transfer method: {0}")]
    UnsupportedMethod(String),

    #[error("Failed to fetch {url}: HTTP status {status}")]
    FetchFailed { url: String, status: u16 },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Command '{cmd}' failed to start: {reason}")]
    CommandStart { cmd: String, reason: String },

    #[error("Command '{cmd}' failed ({status}): {stderr}")]
    CommandFailed {
        cmd: String,
        status: String,
        stderr: String,
    },

    #[error("JSON parse error: {0}")]
    JsonParse(String),

    #[error("Path error: {0}")]
    PathError(String),
}

/// Result type for vidtool-core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Builds a `CommandStart` error for a command that could not be launched.
pub fn command_start_error(cmd: impl Into<String>, reason: impl std::fmt::Display) -> CoreError {
    CoreError::CommandStart {
        cmd: cmd.into(),
        reason: reason.to_string(),
    }
}

/// Builds a `CommandFailed` error for a command that exited with a non-zero status.
pub fn command_failed_error(
    cmd: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed {
        cmd: cmd.into(),
        status: status.to_string(),
        stderr: stderr.into(),
    }
}

/// Builds a `CommandStart` error for a command whose exit could not be observed.
pub fn command_wait_error(cmd: impl Into<String>, reason: impl std::fmt::Display) -> CoreError {
    CoreError::CommandStart {
        cmd: cmd.into(),
        reason: format!("wait failed: {reason}"),
    }
}
