//! Error types for kaggle-dl
//!
//! This module provides the error handling for the library, including:
//! - Domain-specific error types (Download, Extract, Config, etc.)
//! - Process exit code mapping for the command line front-end
//! - Context information (command, archive path, exit code, etc.)

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for kaggle-dl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for kaggle-dl
///
/// This is the primary error type used throughout the library. Each variant includes
/// contextual information to help diagnose issues.
#[derive(Debug, Error)]
pub enum Error {
    /// Input arguments are missing, malformed or mutually exclusive
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Human-readable description of what was wrong with the input
        reason: String,
    },

    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "data_dir")
        key: Option<String>,
    },

    /// Download-related error
    #[error("download error: {0}")]
    Download(#[from] DownloadError),

    /// Archive extraction error
    #[error("extraction error: {0}")]
    Extract(#[from] ExtractError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// External tool could not be started or talked to
    #[error("external tool error: {0}")]
    ExternalTool(String),
}

impl Error {
    /// Shorthand for building an [`Error::InvalidInput`]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Error::InvalidInput {
            reason: reason.into(),
        }
    }
}

/// Errors detected from the external download tool's output or exit status
#[derive(Debug, Error)]
pub enum DownloadError {
    /// The remote service refused access (HTTP 403) until the user takes an action
    #[error("access denied while running `{command}`: {hint}")]
    AccessDenied {
        /// The command that was executed
        command: String,
        /// What the user has to do before the download can succeed
        hint: String,
    },

    /// The remote service rejected the credentials (HTTP 401)
    #[error("unauthorized while running `{command}`: check your Kaggle API credentials")]
    Unauthorized {
        /// The command that was executed
        command: String,
    },

    /// The tool exited unsuccessfully without a recognised failure signature
    ///
    /// The message shows stderr, or stdout when stderr is empty, since the
    /// Kaggle CLI prints HTTP errors on stdout.
    #[error(
        "`{command}` failed with exit code {}: {}",
        display_exit_code(.exit_code),
        diagnostic(.stderr, .stdout)
    )]
    ToolFailed {
        /// The command that was executed
        command: String,
        /// Process exit code (None when terminated by a signal)
        exit_code: Option<i32>,
        /// Captured standard output, trimmed
        stdout: String,
        /// Captured standard error, trimmed
        stderr: String,
    },
}

fn diagnostic<'a>(stderr: &'a str, stdout: &'a str) -> &'a str {
    if stderr.is_empty() { stdout } else { stderr }
}

fn display_exit_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "<signal>".to_string(),
    }
}

/// Archive extraction errors
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Archive extraction failed
    #[error("extraction failed for {archive}: {reason}")]
    ExtractionFailed {
        /// The archive file that failed to extract
        archive: PathBuf,
        /// The reason extraction failed
        reason: String,
    },

    /// File collision at destination
    #[error("file collision at {path}: {reason}")]
    FileCollision {
        /// The path where the collision occurred
        path: PathBuf,
        /// The reason for the collision (e.g., "file already exists")
        reason: String,
    },

    /// Invalid path encountered while handling archives
    #[error("invalid path {path}: {reason}")]
    InvalidPath {
        /// The invalid path that was encountered
        path: PathBuf,
        /// The reason the path is invalid
        reason: String,
    },
}

/// Convert errors to process exit codes for the command line front-end
pub trait ToExitCode {
    /// Get the process exit code for this error
    fn exit_code(&self) -> i32;

    /// Get the machine-readable error code
    fn error_code(&self) -> &str;
}

impl ToExitCode for Error {
    fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidInput { .. } | Error::Config { .. } => 2,
            Error::Download(DownloadError::AccessDenied { .. })
            | Error::Download(DownloadError::Unauthorized { .. }) => 3,
            Error::Download(DownloadError::ToolFailed { .. })
            | Error::Extract(_)
            | Error::Io(_)
            | Error::Serialization(_)
            | Error::ExternalTool(_) => 1,
        }
    }

    fn error_code(&self) -> &str {
        match self {
            Error::InvalidInput { .. } => "invalid_input",
            Error::Config { .. } => "config_error",
            Error::Download(e) => match e {
                DownloadError::AccessDenied { .. } => "access_denied",
                DownloadError::Unauthorized { .. } => "unauthorized",
                DownloadError::ToolFailed { .. } => "tool_failed",
            },
            Error::Extract(e) => match e {
                ExtractError::ExtractionFailed { .. } => "extraction_failed",
                ExtractError::FileCollision { .. } => "file_collision",
                ExtractError::InvalidPath { .. } => "invalid_path",
            },
            Error::Io(_) => "io_error",
            Error::Serialization(_) => "serialization_error",
            Error::ExternalTool(_) => "external_tool_error",
        }
    }
}
