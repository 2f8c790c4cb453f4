//! Controller configuration and its builder.

use crate::controller::error::BuildError;
use crate::controller::ControllerFsm;
use crate::core::ControllerState;
use serde::{Deserialize, Serialize};

/// Settings that do not affect the controller's signal behaviour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Record a transition log while ticking.
    pub track_history: bool,

    /// Keep at most this many log entries, oldest dropped first.
    pub history_limit: Option<usize>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            track_history: true,
            history_limit: None,
        }
    }
}

impl ControllerConfig {
    /// Check the settings are coherent.
    pub fn validate(&self) -> Result<(), BuildError> {
        match self.history_limit {
            Some(0) => Err(BuildError::ZeroHistoryLimit),
            Some(_) if !self.track_history => Err(BuildError::LimitWithoutHistory),
            _ => Ok(()),
        }
    }
}

/// Builder for constructing controllers with a fluent API.
///
/// # Example
///
/// ```rust
/// use button_sequencer::controller::ControllerBuilder;
/// use button_sequencer::core::ControllerState;
///
/// let fsm = ControllerBuilder::new()
///     .history_limit(64)
///     .build()
///     .unwrap();
///
/// assert_eq!(fsm.state(), ControllerState::Idle);
/// assert_eq!(fsm.config().history_limit, Some(64));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ControllerBuilder {
    config: ControllerConfig,
    initial: ControllerState,
}

impl ControllerBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the transition log.
    pub fn track_history(mut self, enabled: bool) -> Self {
        self.config.track_history = enabled;
        self
    }

    /// Bound the transition log to `limit` entries.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.config.history_limit = Some(limit);
        self
    }

    /// Start the register in `state` instead of `Idle`.
    ///
    /// Intended for tests that need a given state without driving a
    /// button sequence first. Reset still returns the register to `Idle`.
    pub fn initial_state(mut self, state: ControllerState) -> Self {
        self.initial = state;
        self
    }

    /// Replace all settings at once.
    pub fn config(mut self, config: ControllerConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the controller.
    /// Returns an error if the settings are incoherent.
    pub fn build(self) -> Result<ControllerFsm, BuildError> {
        self.config.validate()?;
        Ok(ControllerFsm::from_parts(self.initial, self.config))
    }
}
