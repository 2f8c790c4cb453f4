//! State trait and the controller's state register values.
//!
//! All state machine states implement [`State`], which provides pure
//! methods for inspecting state properties without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Trait for state machine states.
///
/// All methods are pure - no side effects. States are plain values that
/// describe the current position in a state machine.
///
/// # Required Traits
///
/// - `Clone`: States are copied into history records
/// - `PartialEq`: States are compared by the transition logic
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States are written into checkpoints
///
/// # Example
///
/// ```rust
/// use button_sequencer::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum LatchState {
///     Open,
///     Latched,
///     Broken,
/// }
///
/// impl State for LatchState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Latched => "Latched",
///             Self::Broken => "Broken",
///         }
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Broken)
///     }
/// }
///
/// assert_eq!(LatchState::Latched.name(), "Latched");
/// assert!(LatchState::Broken.is_error());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

crate::state_enum! {
    /// Value held by the controller's state register.
    ///
    /// The register always holds exactly one of these three values. The
    /// machine has no terminal state: it rotates `Idle -> WaitB ->
    /// WaitResult -> Idle` for as long as the button keeps being sampled high.
    #[derive(Copy, Eq, Hash, Default)]
    pub enum ControllerState {
        /// Waiting for operand A. Reset state.
        #[default]
        Idle,
        /// Operand A captured, waiting for operand B.
        WaitB,
        /// Both operands captured, waiting for the result request.
        WaitResult,
    }
}

impl ControllerState {
    /// The state the register moves to when the button is sampled high.
    pub const fn successor(self) -> Self {
        match self {
            Self::Idle => Self::WaitB,
            Self::WaitB => Self::WaitResult,
            Self::WaitResult => Self::Idle,
        }
    }

    /// Number of button-driven ticks needed to get from `Idle` to this state.
    pub const fn position(self) -> usize {
        match self {
            Self::Idle => 0,
            Self::WaitB => 1,
            Self::WaitResult => 2,
        }
    }
}

impl fmt::Display for ControllerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(State::name(self))
    }
}
