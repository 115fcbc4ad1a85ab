//! Directory setup: `<data_dir>/<competition>/`
//!
//! The leaf directory is returned as a [`WorkDir`] rather than being made the
//! process working directory.

use crate::error::{Error, Result};
use crate::registry::KAGGLE_API_CMD;
use crate::types::{DownloadTarget, WorkDir};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

/// Leaf directory name for a raw api command
///
/// Removes the Kaggle command prefix and every whitespace character, so
/// `kaggle competitions download -c titanic` becomes `titanic`.
pub fn derive_leaf_name(api: &str) -> String {
    api.replace(KAGGLE_API_CMD, "")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Leaf directory name for a download target
pub fn leaf_name(target: &DownloadTarget) -> String {
    match target {
        DownloadTarget::Competition(name) => name.clone(),
        DownloadTarget::ApiCommand(command) => derive_leaf_name(command),
    }
}

/// Full leaf directory path, without touching the filesystem
///
/// Fails if the leaf name would not be a single plain directory name under
/// `data_dir` (empty, `.`/`..`, or containing a path separator).
pub fn leaf_dir(data_dir: &Path, target: &DownloadTarget) -> Result<PathBuf> {
    let name = leaf_name(target);

    if name.is_empty() {
        return Err(Error::invalid_input(
            "api command does not name a competition after the download prefix",
        ));
    }

    let mut components = Path::new(&name).components();
    let single_normal = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if !single_normal || name.contains('/') || name.contains('\\') {
        return Err(Error::invalid_input(format!(
            "'{}' is not a valid competition directory name",
            name
        )));
    }

    Ok(data_dir.join(name))
}

/// Ensure `<data_dir>/<leaf>/` exists and return it as the working directory
///
/// Idempotent: existing directories are reused. Directories are never removed.
pub fn prepare_work_dir(data_dir: &Path, target: &DownloadTarget) -> Result<WorkDir> {
    let leaf = leaf_dir(data_dir, target)?;

    if !data_dir.is_dir() {
        debug!(?data_dir, "creating data directory");
        std::fs::create_dir_all(data_dir).map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("failed to create data directory {}: {}", data_dir.display(), e),
            ))
        })?;
    }

    if !leaf.is_dir() {
        debug!(?leaf, "creating competition directory");
        std::fs::create_dir_all(&leaf).map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("failed to create competition directory {}: {}", leaf.display(), e),
            ))
        })?;
    }

    info!(work_dir = ?leaf, "competition directory ready");
    Ok(WorkDir::new(leaf))
}
