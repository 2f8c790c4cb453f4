//! Pure transition and output functions of the controller.
//!
//! Both functions are total: every state has a defined result for every
//! combination of input levels.

use super::signals::{Inputs, Outputs};
use super::state::ControllerState;

/// Compute the value the state register takes on the next tick.
///
/// Reset is checked first and overrides the button. Otherwise the button
/// level present at the tick decides: high advances one step, low holds.
///
/// # Example
///
/// ```rust
/// use button_sequencer::core::{next_state, ControllerState, Inputs};
///
/// assert_eq!(
///     next_state(ControllerState::Idle, Inputs::running(true)),
///     ControllerState::WaitB
/// );
/// assert_eq!(
///     next_state(ControllerState::WaitB, Inputs::running(false)),
///     ControllerState::WaitB
/// );
/// assert_eq!(
///     next_state(ControllerState::WaitResult, Inputs::resetting(true)),
///     ControllerState::Idle
/// );
/// ```
pub const fn next_state(state: ControllerState, inputs: Inputs) -> ControllerState {
    if inputs.reset_asserted() {
        return ControllerState::Idle;
    }
    if !inputs.button {
        return state;
    }
    state.successor()
}

/// Compute the pulse outputs for the given state and input levels.
///
/// Outputs are combinational: they depend only on the arguments, so a
/// change in the button level shows up without waiting for a tick.
///
/// # Example
///
/// ```rust
/// use button_sequencer::core::{outputs, ControllerState, Inputs};
///
/// let out = outputs(ControllerState::WaitB, Inputs::running(true));
/// assert_eq!(out.as_tuple(), (false, true, false));
///
/// let out = outputs(ControllerState::WaitB, Inputs::running(false));
/// assert!(out.is_idle());
/// ```
pub const fn outputs(state: ControllerState, inputs: Inputs) -> Outputs {
    let pressed = inputs.button && !inputs.reset_asserted();
    Outputs {
        save_a: pressed && matches!(state, ControllerState::Idle),
        save_b: pressed && matches!(state, ControllerState::WaitB),
        show_result: pressed && matches!(state, ControllerState::WaitResult),
    }
}
