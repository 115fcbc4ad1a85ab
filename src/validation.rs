//! Input validation
//!
//! Exactly one of a registered competition name or a raw Kaggle download
//! command may be given, and the extract flag must be 0 or 1. Validation
//! happens before any filesystem side effect.

use crate::error::{Error, Result};
use crate::registry::{CompetitionRegistry, KAGGLE_API_CMD};
use crate::types::{DownloadTarget, ExecutionParams, ExtractMode, ValidatedParams};

/// Pure validity check over the three raw inputs
///
/// Empty strings are treated as absent.
pub fn is_valid_input(competition: Option<&str>, api: Option<&str>, extract: i64) -> bool {
    let competition = competition.filter(|c| !c.is_empty());
    let api = api.filter(|a| !a.is_empty());
    let registry = CompetitionRegistry::builtin();
    let extract_ok = ExtractMode::from_flag(extract).is_some();

    match (competition, api) {
        (Some(_), Some(_)) => false,
        (Some(name), None) => extract_ok && registry.contains(name),
        (None, Some(command)) => extract_ok && command.contains(KAGGLE_API_CMD),
        (None, None) => false,
    }
}

impl ExecutionParams {
    /// Validate and convert into a [`ValidatedParams`]
    ///
    /// Accepts exactly the inputs [`is_valid_input`] accepts; the error
    /// explains which rule was broken.
    pub fn validate(&self) -> Result<ValidatedParams> {
        let competition = self.competition_name();
        let api = self.api_command();

        if competition.is_some() && api.is_some() {
            return Err(Error::invalid_input(
                "a competition and an api command are mutually exclusive",
            ));
        }

        let extract = ExtractMode::from_flag(self.extract).ok_or_else(|| {
            Error::invalid_input(format!(
                "extract must be 0 (extract) or 1 (skip), got {}",
                self.extract
            ))
        })?;

        let target = match (competition, api) {
            (Some(name), None) => {
                let registry = CompetitionRegistry::builtin();
                if !registry.contains(name) {
                    return Err(Error::invalid_input(format!(
                        "unknown competition '{}' (known: {})",
                        name,
                        registry.names().collect::<Vec<_>>().join(", ")
                    )));
                }
                DownloadTarget::Competition(name.to_string())
            }
            (None, Some(command)) => {
                if !command.contains(KAGGLE_API_CMD) {
                    return Err(Error::invalid_input(format!(
                        "api command must contain '{}'",
                        KAGGLE_API_CMD
                    )));
                }
                DownloadTarget::ApiCommand(command.to_string())
            }
            _ => {
                return Err(Error::invalid_input(
                    "either a competition or an api command is required",
                ));
            }
        };

        debug_assert!(is_valid_input(competition, api, self.extract));
        Ok(ValidatedParams { target, extract })
    }
}
