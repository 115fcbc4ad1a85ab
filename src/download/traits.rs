//! Traits and types for running the external download tool

use super::parser::ExitStatus;
use crate::types::WorkDir;
use async_trait::async_trait;

/// Everything captured from one run of the download tool
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOutput {
    /// Captured standard output (lossy UTF-8)
    pub stdout: String,
    /// Captured standard error (lossy UTF-8)
    pub stderr: String,
    /// Whether the process exited successfully
    pub exit_status: ExitStatus,
    /// Raw exit code, None if the process was killed by a signal
    pub exit_code: Option<i32>,
}

impl DownloadOutput {
    /// Output of a run that exited with code 0
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
            exit_status: ExitStatus::Success,
            exit_code: Some(0),
        }
    }

    /// Output of a run that exited with a non-zero code
    pub fn failure(exit_code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
            exit_status: ExitStatus::Failure,
            exit_code: Some(exit_code),
        }
    }
}

/// Trait for running a download command
///
/// Implementations execute `command` with `work_dir` as the working
/// directory and block the pipeline until it finishes. They only report
/// failures to run the command at all; the captured output is interpreted
/// by [`classify_download_output`](super::classify_download_output).
#[async_trait]
pub trait DownloadTool: Send + Sync {
    /// Run a download command in the given working directory
    ///
    /// # Errors
    ///
    /// Returns an error if the command is empty or the tool cannot be started.
    async fn download(&self, command: &str, work_dir: &WorkDir) -> crate::Result<DownloadOutput>;

    /// Human-readable name for logging
    fn name(&self) -> &'static str;
}
