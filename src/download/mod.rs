//! Download handling through the external `kaggle` tool
//!
//! The core abstraction is the [`DownloadTool`] trait, which runs a download
//! command inside the competition's [`WorkDir`](crate::types::WorkDir) and
//! returns the captured output. Interpreting that output is kept separate,
//! in [`classify_download_output`], so every tool implementation shares the
//! same failure signatures.
//!
//! - [`CliDownloadTool`]: spawns the external binary as a subprocess
//!
//! ## Usage
//!
//! ```no_run
//! use kaggle_dl::download::{CliDownloadTool, DownloadTool, classify_download_output};
//! use kaggle_dl::config::ToolsConfig;
//! use kaggle_dl::types::WorkDir;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let tool = CliDownloadTool::from_config(&ToolsConfig::default());
//!     let command = "kaggle competitions download -c titanic";
//!     let output = tool.download(command, &WorkDir::new("../data/titanic")).await?;
//!     classify_download_output(command, &output)?;
//!     print!("{}", output.stdout);
//!     Ok(())
//! }
//! ```

mod cli;
mod parser;
mod traits;

pub use cli::CliDownloadTool;
pub use parser::{
    ExitStatus, FORBIDDEN_MARKER, JOIN_COMPETITION_HINT, UNAUTHORIZED_MARKER,
    classify_download_output,
};
pub use traits::{DownloadOutput, DownloadTool};
