//! Core controller types and logic.
//!
//! This module contains the pure functional core of the controller:
//! - State definitions via the `State` trait
//! - Boundary signal values
//! - The transition and output functions
//! - Transition history
//!
//! Nothing in this module holds mutable state; the state register lives in
//! [`crate::controller::ControllerFsm`].

mod history;
mod logic;
mod signals;
mod state;

pub use history::{StateHistory, StateTransition, TransitionCause};
pub use logic::{next_state, outputs};
pub use signals::{Inputs, Outputs};
pub use state::{ControllerState, State};
