//! Checkpoint and restore for controllers.
//!
//! A checkpoint captures the state register, the driven input levels, the
//! tick count, the settings and the transition log, so a long simulation
//! can be saved and resumed or forked into several independent runs.

use crate::controller::{ControllerConfig, ControllerFsm};
use crate::core::{ControllerState, Inputs, StateHistory};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a controller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Register value
    pub state: ControllerState,

    /// Input levels being driven
    pub inputs: Inputs,

    /// Ticks elapsed
    pub tick: u64,

    /// Controller settings
    pub config: ControllerConfig,

    /// Transition log, if tracking was enabled
    pub history: Option<StateHistory<ControllerState>>,
}

impl Checkpoint {
    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON and validate.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    /// Serialize to the compact binary format.
    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        Ok(bincode::serialize(self)?)
    }

    /// Deserialize from the compact binary format and validate.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    /// Check the checkpoint is loadable by this version and self-consistent.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        self.config.validate()?;

        if self.history.is_some() != self.config.track_history {
            return Err(CheckpointError::InconsistentHistory(
                "history presence does not match track_history".to_string(),
            ));
        }

        if let Some(history) = &self.history {
            let entries = history.transitions().zip(history.transitions().skip(1));
            for (prev, next) in entries {
                if next.tick <= prev.tick {
                    return Err(CheckpointError::InconsistentHistory(format!(
                        "history tick {} follows tick {}",
                        next.tick, prev.tick
                    )));
                }
                if next.from != prev.to {
                    return Err(CheckpointError::InconsistentHistory(format!(
                        "history entry at tick {} starts in {} but previous entry ended in {}",
                        next.tick, next.from, prev.to
                    )));
                }
            }
        }

        if let Some(last) = self.history.as_ref().and_then(StateHistory::last) {
            if last.to != self.state {
                return Err(CheckpointError::InconsistentHistory(format!(
                    "history ends in {} but register holds {}",
                    last.to, self.state
                )));
            }
            if last.tick > self.tick {
                return Err(CheckpointError::InconsistentHistory(format!(
                    "history entry at tick {} is past checkpoint tick {}",
                    last.tick, self.tick
                )));
            }
        }

        Ok(())
    }
}

impl ControllerFsm {
    /// Snapshot this controller.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            state: self.state,
            inputs: self.inputs,
            tick: self.ticks,
            config: self.config,
            history: self.history.clone(),
        }
    }

    /// Rebuild a controller from a snapshot.
    pub fn restore(checkpoint: &Checkpoint) -> Result<Self, CheckpointError> {
        checkpoint.validate()?;
        tracing::event!(
            tracing::Level::DEBUG,
            id = %checkpoint.id,
            tick = checkpoint.tick,
            "restoring controller in {}",
            checkpoint.state
        );
        Ok(Self {
            state: checkpoint.state,
            inputs: checkpoint.inputs,
            ticks: checkpoint.tick,
            history: checkpoint.history.clone(),
            config: checkpoint.config,
        })
    }
}
