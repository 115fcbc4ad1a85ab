//! Core types shared across the pipeline stages

use crate::registry::CompetitionRegistry;
use std::path::{Path, PathBuf};

/// Raw execution parameters as supplied on the command line
///
/// Empty strings are treated the same as absent values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExecutionParams {
    /// Short name of a pre-defined competition
    pub competition: Option<String>,
    /// Raw download command (must contain the Kaggle API prefix)
    pub api: Option<String>,
    /// Extraction flag: 0 = extract (default), 1 = skip
    pub extract: i64,
}

impl ExecutionParams {
    /// Parameters for a pre-defined competition
    pub fn competition(name: impl Into<String>) -> Self {
        Self {
            competition: Some(name.into()),
            ..Default::default()
        }
    }

    /// Parameters for a raw download command
    pub fn api(command: impl Into<String>) -> Self {
        Self {
            api: Some(command.into()),
            ..Default::default()
        }
    }

    /// Set the extraction flag
    pub fn with_extract(mut self, extract: i64) -> Self {
        self.extract = extract;
        self
    }

    /// Competition name, `None` if absent or empty
    pub fn competition_name(&self) -> Option<&str> {
        non_empty(self.competition.as_deref())
    }

    /// Raw api command, `None` if absent or empty
    pub fn api_command(&self) -> Option<&str> {
        non_empty(self.api.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// What to download, after validation
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DownloadTarget {
    /// A competition from the registry
    Competition(String),
    /// A raw download command
    ApiCommand(String),
}

impl DownloadTarget {
    /// The concrete command line to hand to the download tool
    pub fn command(&self, registry: &CompetitionRegistry) -> Option<String> {
        match self {
            DownloadTarget::Competition(name) => registry.command(name).map(str::to_string),
            DownloadTarget::ApiCommand(command) => Some(command.clone()),
        }
    }
}

/// Whether downloaded archives are unpacked
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExtractMode {
    /// Extract all zip archives after download (flag value 0)
    #[default]
    Extract,
    /// Leave archives untouched (flag value 1)
    Skip,
}

impl ExtractMode {
    /// Decode the integer flag; only 0 and 1 are meaningful
    pub fn from_flag(flag: i64) -> Option<Self> {
        match flag {
            0 => Some(Self::Extract),
            1 => Some(Self::Skip),
            _ => None,
        }
    }
}

/// Parameters that passed validation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedParams {
    /// What to download
    pub target: DownloadTarget,
    /// Whether to extract afterwards
    pub extract: ExtractMode,
}

/// Leaf directory that all download and extraction work happens in
///
/// Passed explicitly to each stage instead of changing the process
/// working directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkDir(PathBuf);

impl WorkDir {
    /// Wrap an existing directory path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Path of the leaf directory
    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for WorkDir {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

/// Run stage, in pipeline order
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    /// Nothing done yet
    Start,
    /// Inputs accepted
    Validated,
    /// Leaf directory exists
    DirectoryReady,
    /// Download tool finished without a known failure signature
    Downloaded,
    /// Archives unpacked
    Extracted,
    /// Run complete
    Done,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Start => "start",
            Stage::Validated => "validated",
            Stage::DirectoryReady => "directory_ready",
            Stage::Downloaded => "downloaded",
            Stage::Extracted => "extracted",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}
