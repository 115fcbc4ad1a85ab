//! CLI-based download tool using the external kaggle binary

use super::parser::ExitStatus;
use super::traits::{DownloadOutput, DownloadTool};
use crate::config::ToolsConfig;
use crate::types::WorkDir;
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info};

const KAGGLE_BINARY: &str = "kaggle";

/// CLI-based download tool
///
/// Splits the download command on whitespace and runs it as a subprocess in
/// the work directory. The command line itself is also written to the
/// child's stdin. The run is awaited with no timeout.
///
/// # Examples
///
/// ```no_run
/// use kaggle_dl::download::{CliDownloadTool, DownloadTool};
/// use kaggle_dl::types::WorkDir;
/// use std::path::PathBuf;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // Explicit binary
/// let tool = CliDownloadTool::new(Some(PathBuf::from("/usr/local/bin/kaggle")));
///
/// // Or auto-discover from PATH
/// let tool = CliDownloadTool::from_path();
///
/// let output = tool
///     .download("kaggle competitions download -c titanic", &WorkDir::new("../data/titanic"))
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct CliDownloadTool {
    kaggle_path: Option<PathBuf>,
}

impl CliDownloadTool {
    /// Create a tool that runs `kaggle` from the given path
    ///
    /// With `None`, the program name from the command line is used as is.
    pub fn new(kaggle_path: Option<PathBuf>) -> Self {
        Self { kaggle_path }
    }

    /// Locate `kaggle` in PATH via the `which` crate
    ///
    /// Falls back to the bare program name when it is not found, so the
    /// spawn error names what is missing.
    pub fn from_path() -> Self {
        Self::new(which::which(KAGGLE_BINARY).ok())
    }

    /// Build from configuration: explicit path first, then PATH if allowed
    pub fn from_config(config: &ToolsConfig) -> Self {
        match &config.kaggle_path {
            Some(path) => Self::new(Some(path.clone())),
            None if config.search_path => Self::from_path(),
            None => Self::new(None),
        }
    }

    /// Program to execute for the first word of a command
    fn resolve_program(&self, program: &str) -> PathBuf {
        match &self.kaggle_path {
            Some(path) if program == KAGGLE_BINARY => path.clone(),
            _ => PathBuf::from(program),
        }
    }
}

#[async_trait]
impl DownloadTool for CliDownloadTool {
    async fn download(&self, command: &str, work_dir: &WorkDir) -> crate::Result<DownloadOutput> {
        let mut words = command.split_whitespace();
        let program = words
            .next()
            .ok_or_else(|| crate::Error::ExternalTool("empty download command".into()))?;
        let program = self.resolve_program(program);
        let args: Vec<&str> = words.collect();

        info!(?program, ?args, work_dir = ?work_dir.path(), "running download command");

        let mut child = Command::new(&program)
            .args(&args)
            .current_dir(work_dir.path())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                crate::Error::ExternalTool(format!(
                    "Failed to execute {}: {}",
                    program.display(),
                    e
                ))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            // The kaggle CLI never reads stdin; a closed pipe is not an error
            if let Err(e) = stdin.write_all(command.as_bytes()).await {
                debug!(error = %e, "download tool closed stdin early");
            }
        }

        let output = child.wait_with_output().await.map_err(|e| {
            crate::Error::ExternalTool(format!(
                "Failed to wait for {}: {}",
                program.display(),
                e
            ))
        })?;

        debug!(
            exit_code = ?output.status.code(),
            stdout_len = output.stdout.len(),
            stderr_len = output.stderr.len(),
            "download command finished"
        );

        Ok(DownloadOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_status: ExitStatus::from(output.status.success()),
            exit_code: output.status.code(),
        })
    }

    fn name(&self) -> &'static str {
        "cli-kaggle"
    }
}
