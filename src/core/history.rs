//! State transition history tracking.
//!
//! Provides an ordered log of the state register's changes, one entry per
//! tick that moved the register or applied reset.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Why the state register took its new value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransitionCause {
    /// The button was sampled high at the tick.
    Button,
    /// Reset was asserted at the tick.
    Reset,
}

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use button_sequencer::core::{ControllerState, StateTransition, TransitionCause};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: ControllerState::Idle,
///     to: ControllerState::WaitB,
///     tick: 1,
///     cause: TransitionCause::Button,
///     timestamp: Utc::now(),
/// };
/// assert!(transition.changed_state());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// Tick count after the transition committed (the first tick is 1)
    pub tick: u64,
    /// What drove the transition
    pub cause: TransitionCause,
    /// Wall-clock time the transition was recorded
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    /// False for a reset applied while the register already held its reset value.
    pub fn changed_state(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered history of state transitions.
///
/// `record` returns a new history with the transition added and leaves the
/// original untouched.
///
/// # Example
///
/// ```rust
/// use button_sequencer::core::{ControllerState, StateHistory, StateTransition, TransitionCause};
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: ControllerState::Idle,
///         to: ControllerState::WaitB,
///         tick: 1,
///         cause: TransitionCause::Button,
///         timestamp: Utc::now(),
///     })
///     .record(StateTransition {
///         from: ControllerState::WaitB,
///         to: ControllerState::WaitResult,
///         tick: 2,
///         cause: TransitionCause::Button,
///         timestamp: Utc::now(),
///     });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3); // Idle -> WaitB -> WaitResult
/// assert_eq!(history.tick_span(), Some(1));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: VecDeque<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: VecDeque::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push_back(transition);
        Self { transitions }
    }

    /// Append in place, dropping the oldest entries beyond `limit`.
    pub(crate) fn push(&mut self, transition: StateTransition<S>, limit: Option<usize>) {
        self.transitions.push_back(transition);
        if let Some(limit) = limit {
            while self.transitions.len() > limit {
                self.transitions.pop_front();
            }
        }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first transition, then the `to`
    /// state of each transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        path.extend(self.transitions.iter().map(|t| &t.to));
        path
    }

    /// Wall-clock duration from first to last recorded transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.front()?, self.transitions.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Number of ticks between the first and last recorded transition.
    ///
    /// Returns `None` if there are no transitions, or if the last tick is
    /// earlier than the first.
    pub fn tick_span(&self) -> Option<u64> {
        let (first, last) = (self.transitions.front()?, self.transitions.back()?);
        last.tick.checked_sub(first.tick)
    }

    /// Iterate over all transitions in order.
    pub fn transitions(&self) -> impl ExactSizeIterator<Item = &StateTransition<S>> {
        self.transitions.iter()
    }

    /// The most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.back()
    }

    /// Number of recorded transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
