use std::path::PathBuf;

use thiserror::Error;

/// Failures that decide whether a stage halts or skips a record
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A required upstream file is absent. Fatal for the stage.
    #[error("{stage}: required input {path:?} not found (run the earlier stages first)")]
    MissingInput { stage: &'static str, path: PathBuf },

    /// A single raw transcript could not be parsed. Logged and skipped.
    #[error("invalid transcript {path:?}: {reason}")]
    InvalidRecord { path: PathBuf, reason: String },
}

impl PipelineError {
    pub fn invalid(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
