//! Command line arguments for the `kaggle-dl` binary

use crate::config::Config;
use crate::download::JOIN_COMPETITION_HINT;
use crate::error::{DownloadError, Error, Result};
use crate::types::ExecutionParams;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Single-dash long flags accepted for compatibility with older invocations
const LEGACY_FLAGS: &[&str] = &["competition", "api", "extract"];

/// Download (and unzip) Kaggle competition files into <data-dir>/<competition>/
#[derive(Parser, Debug)]
#[command(name = "kaggle-dl", version, about)]
pub struct Args {
    /// Pre-defined competition: bulldozers or titanic
    #[arg(short = 'c', long)]
    pub competition: Option<String>,

    /// Kaggle API command, e.g. 'kaggle competitions download -c <name>'
    #[arg(short = 'a', long)]
    pub api: Option<String>,

    /// Extract downloaded zip files? 0 = yes, 1 = no
    #[arg(short = 'e', long, default_value_t = 0, allow_negative_numbers = true)]
    pub extract: i64,

    /// Root directory for competition data (default: ../data)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Skip the download if the competition directory already has files
    #[arg(long)]
    pub skip_existing: bool,

    /// Move extracted archives into this subdirectory of the competition directory
    #[arg(long)]
    pub source_files_dir: Option<PathBuf>,
}

impl Args {
    /// Parse from an argument list, accepting legacy `-competition` style flags
    pub fn parse_legacy<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(normalize_legacy_flags(args))
    }

    /// Execution parameters for the pipeline
    pub fn params(&self) -> ExecutionParams {
        ExecutionParams {
            competition: self.competition.clone(),
            api: self.api.clone(),
            extract: self.extract,
        }
    }

    /// Load the configuration file (if any) and apply command line overrides
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        if let Some(data_dir) = &self.data_dir {
            config.directories.data_dir = data_dir.clone();
        }
        if self.skip_existing {
            config.directories.skip_existing = true;
        }
        if let Some(dir) = &self.source_files_dir {
            config.extraction.source_files_dir = Some(dir.clone());
        }

        config.validate()?;
        Ok(config)
    }
}

/// Rewrite `-competition`, `-api` and `-extract` (optionally `=value`) to
/// their double-dash forms
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(|arg| {
            let arg: OsString = arg.into();
            let Some(text) = arg.to_str() else {
                return arg;
            };
            let Some(rest) = text.strip_prefix('-') else {
                return arg;
            };
            if rest.starts_with('-') {
                return arg;
            }
            let name = rest.split('=').next().unwrap_or(rest);
            if LEGACY_FLAGS.contains(&name) {
                OsString::from(format!("-{}", text))
            } else {
                arg
            }
        })
        .collect()
}

/// Message printed to the user for a failed run
pub fn user_message(error: &Error) -> String {
    match error {
        Error::InvalidInput { reason } => format!(
            "Your input arguments are invalid, please check your execution arguments: {}",
            reason
        ),
        Error::Download(DownloadError::AccessDenied { .. }) => JOIN_COMPETITION_HINT.to_string(),
        other => other.to_string(),
    }
}
