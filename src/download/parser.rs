//! Failure signature detection for download tool output

use super::traits::DownloadOutput;
use crate::error::{DownloadError, Result};

/// Marker printed by the Kaggle CLI when the competition rules were not accepted
pub const FORBIDDEN_MARKER: &str = "403 - Forbidden";

/// Marker printed by the Kaggle CLI when credentials are missing or rejected
pub const UNAUTHORIZED_MARKER: &str = "401 - Unauthorized";

/// Message shown when the remote service answers 403
pub const JOIN_COMPETITION_HINT: &str =
    "Before you can download the competition files from Kaggle, you need to 'Join Competition'.";

/// Exit status of an external command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// The command exited successfully (exit code 0)
    Success,
    /// The command exited with a non-zero exit code
    Failure,
}

impl ExitStatus {
    /// Returns `true` if the exit status represents success
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl From<bool> for ExitStatus {
    fn from(success: bool) -> Self {
        if success {
            Self::Success
        } else {
            Self::Failure
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Signature {
    Forbidden,
    Unauthorized,
}

/// Known failure markers, checked in order against stdout then stderr
const FAILURE_SIGNATURES: &[(&str, Signature)] = &[
    (FORBIDDEN_MARKER, Signature::Forbidden),
    (UNAUTHORIZED_MARKER, Signature::Unauthorized),
];

/// Inspect captured output and exit status for known failure signatures
///
/// Known markers win over the exit status, because the Kaggle CLI reports
/// HTTP errors on stdout and may still exit with 0.
///
/// # Errors
///
/// - [`DownloadError::AccessDenied`] if the output contains `403 - Forbidden`
/// - [`DownloadError::Unauthorized`] if the output contains `401 - Unauthorized`
/// - [`DownloadError::ToolFailed`] for any other non-zero exit
pub fn classify_download_output(command: &str, output: &DownloadOutput) -> Result<()> {
    for (marker, signature) in FAILURE_SIGNATURES {
        if output.stdout.contains(marker) || output.stderr.contains(marker) {
            let err = match signature {
                Signature::Forbidden => DownloadError::AccessDenied {
                    command: command.to_string(),
                    hint: JOIN_COMPETITION_HINT.to_string(),
                },
                Signature::Unauthorized => DownloadError::Unauthorized {
                    command: command.to_string(),
                },
            };
            return Err(err.into());
        }
    }

    if !output.exit_status.is_success() {
        return Err(DownloadError::ToolFailed {
            command: command.to_string(),
            exit_code: output.exit_code,
            stdout: output.stdout.trim().to_string(),
            stderr: output.stderr.trim().to_string(),
        }
        .into());
    }

    Ok(())
}
