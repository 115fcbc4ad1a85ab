//! Single-run pipeline: validate, prepare directories, download, extract
//!
//! Stages run strictly in order (`Start → Validated → DirectoryReady →
//! Downloaded → [Extracted] → Done`). Validation failures stop before any
//! filesystem change; download failures leave created directories behind.

use crate::config::Config;
use crate::download::{DownloadOutput, DownloadTool, classify_download_output};
use crate::error::{Error, Result, ToExitCode};
use crate::extraction::{ExtractionReport, extract_all};
use crate::layout::prepare_work_dir;
use crate::registry::CompetitionRegistry;
use crate::types::{ExecutionParams, ExtractMode, Stage, WorkDir};
use crate::utils::dir_has_files;
use tracing::{debug, info, warn};

/// Result of a completed run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Last stage reached (always [`Stage::Done`] for a returned summary)
    pub stage: Stage,
    /// Competition directory the run worked in
    pub work_dir: WorkDir,
    /// Captured tool output, None if the download was skipped
    pub download: Option<DownloadOutput>,
    /// Extraction outcome, None if extraction was not requested
    pub extraction: Option<ExtractionReport>,
}

/// Execute one full run with the given download tool
///
/// # Errors
///
/// - [`Error::InvalidInput`] before anything touches the filesystem
/// - [`Error::Download`] when the tool output matches a failure signature;
///   extraction does not run
/// - [`Error::Extract`] / [`Error::Io`] from extraction
pub async fn run(
    params: &ExecutionParams,
    config: &Config,
    tool: &dyn DownloadTool,
) -> Result<RunSummary> {
    let mut stage = Stage::Start;
    let result = run_stages(params, config, tool, &mut stage).await;

    if let Err(e) = &result {
        warn!(%stage, error_code = e.error_code(), error = %e, "run stopped");
    }

    result
}

async fn run_stages(
    params: &ExecutionParams,
    config: &Config,
    tool: &dyn DownloadTool,
    stage: &mut Stage,
) -> Result<RunSummary> {
    let validated = params.validate()?;
    advance(stage, Stage::Validated);

    let work_dir = prepare_work_dir(config.data_dir(), &validated.target)?;
    advance(stage, Stage::DirectoryReady);

    let download = if config.directories.skip_existing && dir_has_files(work_dir.path())? {
        info!(work_dir = ?work_dir.path(), "competition files already present, skipping download");
        None
    } else {
        let registry = CompetitionRegistry::builtin();
        let command = validated.target.command(&registry).ok_or_else(|| {
            Error::invalid_input(format!("no download command for {:?}", validated.target))
        })?;

        info!(tool = tool.name(), %command, "downloading competition files");
        let output = tool.download(&command, &work_dir).await?;
        classify_download_output(&command, &output)?;
        Some(output)
    };
    advance(stage, Stage::Downloaded);

    let extraction = match validated.extract {
        ExtractMode::Extract => {
            let report = extract_all(&work_dir, &config.extraction).await?;
            advance(stage, Stage::Extracted);
            Some(report)
        }
        ExtractMode::Skip => {
            debug!("extraction disabled");
            None
        }
    };

    advance(stage, Stage::Done);
    Ok(RunSummary {
        stage: *stage,
        work_dir,
        download,
        extraction,
    })
}

fn advance(stage: &mut Stage, next: Stage) {
    debug!(from = %stage, to = %next, "stage transition");
    *stage = next;
}
