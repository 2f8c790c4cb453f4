//! Build errors for the controller builder.

use thiserror::Error;

/// Errors that can occur when building a controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("History limit must be at least 1. Use .track_history(false) to disable history")]
    ZeroHistoryLimit,

    #[error("History limit set with history tracking disabled. Call .track_history(true)")]
    LimitWithoutHistory,
}
