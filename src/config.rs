//! Configuration types for kaggle-dl

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory layout configuration
///
/// Used as a nested sub-config within [`Config`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Root directory holding one subdirectory per competition (default: "../data")
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Skip the download when the leaf directory already contains files (default: false)
    #[serde(default)]
    pub skip_existing: bool,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            skip_existing: false,
        }
    }
}

/// External tool configuration
///
/// Used as a nested sub-config within [`Config`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Path to kaggle executable (auto-detected if None)
    #[serde(default)]
    pub kaggle_path: Option<PathBuf>,

    /// Whether to search PATH for the kaggle binary if no explicit path is set (default: true)
    #[serde(default = "default_true")]
    pub search_path: bool,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            kaggle_path: None,
            search_path: true,
        }
    }
}

/// Archive extraction configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Leaf subdirectory that extracted archives are moved into (None = leave in place)
    #[serde(default)]
    pub source_files_dir: Option<PathBuf>,

    /// What to do when a moved archive already exists in `source_files_dir`
    #[serde(default)]
    pub file_collision: FileCollisionAction,
}

/// File collision handling strategy
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileCollisionAction {
    /// Append (1), (2), etc. to filename (default)
    #[default]
    Rename,
    /// Overwrite existing file
    Overwrite,
    /// Skip the file, keep existing
    Skip,
}

/// Main configuration for kaggle-dl
///
/// Sub-configs are flattened so a configuration file stays a single flat
/// JSON object:
///
/// ```json
/// { "data_dir": "/srv/data", "kaggle_path": "/usr/local/bin/kaggle", "source_files_dir": "source_files" }
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Directory layout
    #[serde(flatten)]
    pub directories: DirectoryConfig,

    /// External tool paths
    #[serde(flatten)]
    pub tools: ToolsConfig,

    /// Archive extraction
    #[serde(flatten)]
    pub extraction: ExtractionConfig,
}

impl Config {
    /// Root data directory
    pub fn data_dir(&self) -> &PathBuf {
        &self.directories.data_dir
    }

    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
            message: format!("failed to read {}: {}", path.display(), e),
            key: None,
        })?;
        let config: Config = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check settings that serde cannot express
    pub fn validate(&self) -> Result<()> {
        if self.directories.data_dir.as_os_str().is_empty() {
            return Err(Error::Config {
                message: "data_dir must not be empty".to_string(),
                key: Some("data_dir".to_string()),
            });
        }

        if let Some(dir) = &self.extraction.source_files_dir
            && !is_single_component(dir)
        {
            return Err(Error::Config {
                message: format!(
                    "source_files_dir must be a single directory name, got {}",
                    dir.display()
                ),
                key: Some("source_files_dir".to_string()),
            });
        }

        Ok(())
    }
}

fn is_single_component(path: &Path) -> bool {
    let mut components = path.components();
    matches!(
        (components.next(), components.next()),
        (Some(std::path::Component::Normal(_)), None)
    )
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("../data")
}

fn default_true() -> bool {
    true
}
