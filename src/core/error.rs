//! Error type for model construction and restoration.
//!
//! Intents never fail. Only building a game from caller-supplied numbers
//! or restoring a persisted triple can be rejected.

use thiserror::Error;

use super::stage::Stage;

/// Errors raised when a game cannot be built or restored.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProgressError {
    /// A target of zero, an empty draw range, or unordered thresholds.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A restored stage that `(clicks, required_clicks)` cannot produce.
    #[error("inconsistent state: stage {stage:?} with {clicks}/{required_clicks} clicks")]
    InconsistentState {
        clicks: u32,
        required_clicks: u32,
        stage: Stage,
    },

    /// A snapshot that could not be encoded or decoded.
    #[error("snapshot error: {0}")]
    Snapshot(String),
}

impl From<bincode::Error> for ProgressError {
    fn from(err: bincode::Error) -> Self {
        ProgressError::Snapshot(err.to_string())
    }
}
