//! # kaggle-dl
//!
//! Download Kaggle competition files into a predictable directory layout and
//! unpack them.
//!
//! A run validates its inputs, makes sure `<data_dir>/<competition>/` exists,
//! runs the external `kaggle` CLI inside that directory and then extracts
//! every `.zip` it finds there:
//!
//! ```text
//! Start → Validated → DirectoryReady → Downloaded → [Extracted] → Done
//! ```
//!
//! ## Quick Start
//!
//! ```no_run
//! use kaggle_dl::{CliDownloadTool, Config, ExecutionParams, run};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let tool = CliDownloadTool::from_config(&config.tools);
//!
//!     let summary = run(&ExecutionParams::competition("titanic"), &config, &tool).await?;
//!     println!("files are in {}", summary.work_dir.path().display());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Command line arguments
pub mod cli;
/// Configuration types
pub mod config;
/// External download tool handling
pub mod download;
/// Error types
pub mod error;
/// Archive extraction
pub mod extraction;
/// Competition directory layout
pub mod layout;
/// Run orchestration
pub mod pipeline;
/// Pre-defined competitions
pub mod registry;
/// Core types
pub mod types;
/// Utility functions
pub mod utils;
/// Input validation
pub mod validation;

// Re-export commonly used types
pub use config::{Config, FileCollisionAction};
pub use download::{CliDownloadTool, DownloadOutput, DownloadTool};
pub use error::{DownloadError, Error, ExtractError, Result, ToExitCode};
pub use extraction::ExtractionReport;
pub use pipeline::{RunSummary, run};
pub use registry::{CompetitionRegistry, KAGGLE_API_CMD};
pub use types::{DownloadTarget, ExecutionParams, ExtractMode, Stage, ValidatedParams, WorkDir};
pub use validation::is_valid_input;
