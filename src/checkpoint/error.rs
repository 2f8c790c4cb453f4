//! Checkpoint error types.

use crate::controller::BuildError;
use thiserror::Error;

/// Errors that can occur during checkpoint operations
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// JSON encoding or decoding failed
    #[error("Checkpoint JSON codec failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Binary encoding or decoding failed
    #[error("Checkpoint binary codec failed: {0}")]
    Binary(#[from] bincode::Error),

    /// Checkpoint version is not supported by this build
    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Stored controller settings are incoherent
    #[error("Checkpoint carries invalid settings: {0}")]
    InvalidConfig(#[from] BuildError),

    /// Transition log does not agree with the rest of the snapshot
    #[error("Checkpoint history is inconsistent: {0}")]
    InconsistentHistory(String),
}
