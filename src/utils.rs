//! Filesystem helpers for the competition directory

use crate::config::FileCollisionAction;
use crate::error::{Error, ExtractError, Result};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Highest copy number tried before giving up on a free name
const MAX_NUMBERED_COPIES: u32 = 999;

/// Where an extracted archive named `file_name` lands inside `source_dir`
///
/// Under [`FileCollisionAction::Rename`] an archive already sitting in the
/// source files directory is left alone and the newcomer gets the first free
/// numbered name, so a second `titanic.zip` becomes `titanic (1).zip`.
/// [`FileCollisionAction::Skip`] refuses to touch an existing archive and
/// [`FileCollisionAction::Overwrite`] replaces it.
///
/// # Errors
///
/// [`ExtractError::FileCollision`] when the name is taken under `Skip`, or when
/// every numbered name up to the limit is taken under `Rename`.
pub fn archive_destination(
    source_dir: &Path,
    file_name: &OsStr,
    action: FileCollisionAction,
) -> Result<PathBuf> {
    let dest = source_dir.join(file_name);
    if !dest.exists() || action == FileCollisionAction::Overwrite {
        return Ok(dest);
    }

    if action == FileCollisionAction::Skip {
        return Err(collision(
            dest,
            "archive already present in source files directory".to_string(),
        ));
    }

    (1..=MAX_NUMBERED_COPIES)
        .map(|n| source_dir.join(numbered_copy_name(file_name, n)))
        .find(|candidate| !candidate.exists())
        .ok_or_else(|| collision(dest, format!("copies (1) to ({MAX_NUMBERED_COPIES}) are all taken")))
}

/// `titanic.zip` → `titanic (n).zip`; only the last extension is kept apart
fn numbered_copy_name(file_name: &OsStr, n: u32) -> OsString {
    let name = Path::new(file_name);
    let mut numbered = name.file_stem().unwrap_or(file_name).to_os_string();
    numbered.push(format!(" ({n})"));
    if let Some(ext) = name.extension() {
        numbered.push(".");
        numbered.push(ext);
    }
    numbered
}

fn collision(path: PathBuf, reason: String) -> Error {
    Error::Extract(ExtractError::FileCollision { path, reason })
}

/// Whether a directory contains at least one regular file (non-recursive)
///
/// A missing directory counts as empty.
pub fn dir_has_files(dir: &Path) -> Result<bool> {
    if !dir.is_dir() {
        return Ok(false);
    }

    for entry in std::fs::read_dir(dir)? {
        if entry?.file_type()?.is_file() {
            return Ok(true);
        }
    }

    Ok(false)
}
