//! Archive extraction
//!
//! Unpacks every `.zip` in a competition's working directory into that same
//! directory. Archives are left in place unless a `source_files_dir` is
//! configured, in which case each extracted archive is moved there.

mod zip;

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests;

pub use zip::ZipExtractor;

use crate::config::ExtractionConfig;
use crate::error::{Error, ExtractError, Result};
use crate::types::WorkDir;
use crate::utils::archive_destination;
use std::path::{Path, PathBuf};
use tokio::task::spawn_blocking;
use tracing::{debug, info, warn};

/// Outcome of extracting a working directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionReport {
    /// Archives that were extracted, at their final location
    pub archives: Vec<PathBuf>,
    /// Files written by extraction
    pub extracted_files: Vec<PathBuf>,
}

/// Extract every ZIP archive in the working directory
///
/// Each archive is extracted on a blocking thread and awaited before the
/// next one starts. The first failing archive aborts the run.
///
/// # Example
/// ```no_run
/// use kaggle_dl::config::ExtractionConfig;
/// use kaggle_dl::extraction::extract_all;
/// use kaggle_dl::types::WorkDir;
///
/// # async fn example() -> kaggle_dl::error::Result<()> {
/// let report = extract_all(&WorkDir::new("../data/titanic"), &ExtractionConfig::default()).await?;
/// println!("Extracted {} files", report.extracted_files.len());
/// # Ok(())
/// # }
/// ```
pub async fn extract_all(work_dir: &WorkDir, config: &ExtractionConfig) -> Result<ExtractionReport> {
    let archives = ZipExtractor::detect_zip_files(work_dir.path())?;

    if archives.is_empty() {
        warn!(work_dir = ?work_dir.path(), "no ZIP archives to extract");
        return Ok(ExtractionReport::default());
    }

    info!(
        work_dir = ?work_dir.path(),
        archive_count = archives.len(),
        "extracting {} archive(s)",
        archives.len()
    );

    let mut report = ExtractionReport::default();

    for archive_path in archives {
        let archive_owned = archive_path.clone();
        let dest_owned = work_dir.path().to_path_buf();

        let files = spawn_blocking(move || ZipExtractor::try_extract(&archive_owned, &dest_owned))
            .await
            .map_err(|e| {
                Error::Extract(ExtractError::ExtractionFailed {
                    archive: archive_path.clone(),
                    reason: format!("extraction task panicked: {}", e),
                })
            })??;

        report.extracted_files.extend(files);

        let final_path = match &config.source_files_dir {
            Some(dir) => move_to_source_files(&archive_path, &work_dir.path().join(dir), config)?,
            None => archive_path,
        };
        report.archives.push(final_path);
    }

    info!(
        work_dir = ?work_dir.path(),
        archive_count = report.archives.len(),
        extracted_count = report.extracted_files.len(),
        "extraction complete"
    );

    Ok(report)
}

/// Move an extracted archive into the source files directory
fn move_to_source_files(
    archive_path: &Path,
    source_dir: &Path,
    config: &ExtractionConfig,
) -> Result<PathBuf> {
    std::fs::create_dir_all(source_dir)?;

    let file_name = archive_path.file_name().ok_or_else(|| {
        Error::Extract(ExtractError::InvalidPath {
            path: archive_path.to_path_buf(),
            reason: "archive has no file name".to_string(),
        })
    })?;

    let dest = archive_destination(source_dir, file_name, config.file_collision)?;
    std::fs::rename(archive_path, &dest)?;

    debug!(?archive_path, ?dest, "moved archive to source files");
    Ok(dest)
}
