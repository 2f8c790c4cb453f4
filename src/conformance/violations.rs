//! Design-conformance violations.

use crate::core::ControllerState;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A way in which a recorded trace departs from the controller contract.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConformanceViolation {
    #[error("sample {index}: {count} pulse outputs asserted at once")]
    MultipleOutputs { index: usize, count: usize },

    #[error("sample {index}: reset left the register in {state} instead of Idle")]
    ResetIgnored {
        index: usize,
        state: ControllerState,
    },

    #[error("sample {index}: pulse asserted while reset is driven")]
    OutputsDuringReset { index: usize },

    #[error("sample {index}: tick moved {from} to {to}, button level required {expected}")]
    EdgeSensitive {
        index: usize,
        from: ControllerState,
        to: ControllerState,
        expected: ControllerState,
    },

    #[error("sample {index}: register changed from {from} to {to} without a tick")]
    UnclockedTransition {
        index: usize,
        from: ControllerState,
        to: ControllerState,
    },

    #[error("sample {index}: outputs do not match the current state and inputs")]
    RegisteredOutputs { index: usize },

    #[error("sample {index}: {message}")]
    CustomCheckFailed { index: usize, message: String },
}

impl ConformanceViolation {
    /// Index of the offending sample.
    pub fn index(&self) -> usize {
        match self {
            Self::MultipleOutputs { index, .. }
            | Self::ResetIgnored { index, .. }
            | Self::OutputsDuringReset { index }
            | Self::EdgeSensitive { index, .. }
            | Self::UnclockedTransition { index, .. }
            | Self::RegisteredOutputs { index }
            | Self::CustomCheckFailed { index, .. } => *index,
        }
    }
}

/// The built-in contract checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Check {
    /// At most one pulse output asserted.
    MutualExclusion,
    /// Reset forces `Idle` from every state and silences the outputs.
    ResetDominance,
    /// The register moves only on ticks, by exactly the sampled button level.
    LevelSampling,
    /// Outputs always equal the output function of state and inputs.
    CombinationalOutputs,
}

impl Check {
    /// Every built-in check.
    pub const ALL: [Check; 4] = [
        Check::MutualExclusion,
        Check::ResetDominance,
        Check::LevelSampling,
        Check::CombinationalOutputs,
    ];
}
