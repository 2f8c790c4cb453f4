//! The controller's state register and its clocked behaviour.
//!
//! [`ControllerFsm`] is the "imperative shell" around the pure functions
//! in [`crate::core`]: it owns the one piece of mutable state, holds the
//! input levels the environment is currently driving, and commits
//! [`next_state`] on every tick.

mod config;
mod error;

pub use config::{ControllerBuilder, ControllerConfig};
pub use error::BuildError;

use crate::core::{
    next_state, outputs, ControllerState, Inputs, Outputs, StateHistory, StateTransition,
    TransitionCause,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// What happened on a single tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickReport {
    /// Tick count after this tick (the first tick is 1).
    pub tick: u64,
    /// Register value before the tick.
    pub from: ControllerState,
    /// Register value after the tick.
    pub to: ControllerState,
    /// Inputs sampled at the tick.
    pub inputs: Inputs,
    /// `None` when the register held its value without reset.
    pub cause: Option<TransitionCause>,
    /// Pulses that were asserted at the sampling instant.
    pub sampled: Outputs,
    /// Pulses asserted right after the tick, from the new state.
    pub outputs: Outputs,
}

impl TickReport {
    /// True when the register value changed on this tick.
    pub fn advanced(&self) -> bool {
        self.from != self.to
    }
}

/// Single-button operand/result sequencing controller.
///
/// Every instance owns its own state register; there is no shared storage,
/// so any number of controllers can run side by side.
///
/// # Example
///
/// ```rust
/// use button_sequencer::controller::ControllerFsm;
/// use button_sequencer::core::ControllerState;
///
/// let mut fsm = ControllerFsm::new();
/// fsm.set_button(true);
/// assert_eq!(fsm.outputs().as_tuple(), (true, false, false));
///
/// let report = fsm.tick();
/// assert_eq!(report.to, ControllerState::WaitB);
/// assert_eq!(fsm.outputs().as_tuple(), (false, true, false));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ControllerFsm {
    pub(crate) state: ControllerState,
    pub(crate) inputs: Inputs,
    pub(crate) ticks: u64,
    pub(crate) history: Option<StateHistory<ControllerState>>,
    pub(crate) config: ControllerConfig,
}

impl Default for ControllerFsm {
    fn default() -> Self {
        Self::new()
    }
}

impl ControllerFsm {
    /// Create a controller in `Idle` with reset released and the button low.
    pub fn new() -> Self {
        Self::from_parts(ControllerState::Idle, ControllerConfig::default())
    }

    /// Create a controller with custom settings.
    pub fn with_config(config: ControllerConfig) -> Result<Self, BuildError> {
        config.validate()?;
        Ok(Self::from_parts(ControllerState::Idle, config))
    }

    pub(crate) fn from_parts(state: ControllerState, config: ControllerConfig) -> Self {
        Self {
            state,
            inputs: Inputs::default(),
            ticks: 0,
            history: config.track_history.then(StateHistory::new),
            config,
        }
    }

    /// Drive the button level. Takes effect on outputs immediately.
    pub fn set_button(&mut self, level: bool) {
        if self.inputs.button != level {
            tracing::event!(
                tracing::Level::TRACE,
                state = %self.state,
                "button {}",
                if level { "high" } else { "low" }
            );
        }
        self.inputs.button = level;
    }

    /// Drive the active-low reset line (`false` asserts reset).
    pub fn set_reset(&mut self, rst_n: bool) {
        if self.inputs.rst_n != rst_n {
            tracing::event!(
                tracing::Level::TRACE,
                state = %self.state,
                "rst_n {}",
                u8::from(rst_n)
            );
        }
        self.inputs.rst_n = rst_n;
    }

    /// Drive both input lines at once.
    pub fn set_inputs(&mut self, inputs: Inputs) {
        self.set_reset(inputs.rst_n);
        self.set_button(inputs.button);
    }

    /// Input levels currently being driven.
    pub fn inputs(&self) -> Inputs {
        self.inputs
    }

    /// Current register value (pure).
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Ticks elapsed since construction.
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    /// Transition log, if tracking is enabled.
    pub fn history(&self) -> Option<&StateHistory<ControllerState>> {
        self.history.as_ref()
    }

    /// Settings this controller was built with.
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Current pulse outputs, computed from the register and the driven inputs.
    pub fn outputs(&self) -> Outputs {
        outputs(self.state, self.inputs)
    }

    /// Advance one clock tick.
    ///
    /// Samples the driven inputs, commits the next register value, then
    /// reports the outputs seen at the sampling instant and right after.
    pub fn tick(&mut self) -> TickReport {
        let inputs = self.inputs;
        let from = self.state;
        let sampled = outputs(from, inputs);
        let to = next_state(from, inputs);

        self.state = to;
        self.ticks += 1;

        let cause = if inputs.reset_asserted() {
            Some(TransitionCause::Reset)
        } else if from != to {
            Some(TransitionCause::Button)
        } else {
            None
        };

        if let Some(cause) = cause {
            self.log_transition(from, to, cause);
        }

        TickReport {
            tick: self.ticks,
            from,
            to,
            inputs,
            cause,
            sampled,
            outputs: self.outputs(),
        }
    }

    /// Tick `n` times with the currently driven inputs.
    pub fn run_ticks(&mut self, n: usize) -> Vec<TickReport> {
        (0..n).map(|_| self.tick()).collect()
    }

    /// Pulse reset for one tick, then release it.
    ///
    /// The button keeps whatever level it was driven to.
    pub fn apply_reset(&mut self) -> TickReport {
        self.set_reset(false);
        let report = self.tick();
        self.set_reset(true);
        report
    }

    fn log_transition(
        &mut self,
        from: ControllerState,
        to: ControllerState,
        cause: TransitionCause,
    ) {
        match cause {
            TransitionCause::Reset => tracing::event!(
                tracing::Level::INFO,
                tick = self.ticks,
                "reset applied in {from}"
            ),
            TransitionCause::Button => tracing::event!(
                tracing::Level::DEBUG,
                tick = self.ticks,
                "{from} -> {to}"
            ),
        }

        let limit = self.config.history_limit;
        if let Some(history) = self.history.as_mut() {
            history.push(
                StateTransition {
                    from,
                    to,
                    tick: self.ticks,
                    cause,
                    timestamp: Utc::now(),
                },
                limit,
            );
        }
    }
}
