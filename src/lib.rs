//! Button Sequencer: cycle-accurate model of a single-button controller
//!
//! A small digital controller steps a user through entering operand A,
//! entering operand B and showing a result, all with one push-button and a
//! synchronous active-low reset. The model keeps the hardware contract
//! exactly: the button is level-sampled once per tick, reset wins from any
//! state, and the three pulse outputs are combinational.
//!
//! # Core Concepts
//!
//! - **State**: the three-valued register, via the `State` trait
//! - **Logic**: pure `next_state` and `outputs` functions
//! - **Controller**: the one owner of the register, advanced by `tick`
//! - **Simulation**: event streams, traces and conformance checks
//!
//! # Example
//!
//! ```rust
//! use button_sequencer::{ControllerFsm, ControllerState};
//!
//! let mut fsm = ControllerFsm::new();
//! fsm.apply_reset();
//!
//! fsm.set_button(true);
//! assert_eq!(fsm.outputs().as_tuple(), (true, false, false));
//! fsm.tick();
//! assert_eq!(fsm.state(), ControllerState::WaitB);
//!
//! fsm.set_button(false);
//! fsm.tick();
//! assert_eq!(fsm.state(), ControllerState::WaitB);
//! ```

mod macros;

pub mod checkpoint;
pub mod conformance;
pub mod controller;
pub mod core;
pub mod datapath;
pub mod ports;
pub mod sim;

// Re-export commonly used types
pub use checkpoint::{Checkpoint, CheckpointError};
pub use controller::{ControllerBuilder, ControllerConfig, ControllerFsm, TickReport};
pub use crate::core::{ControllerState, Inputs, Outputs, State, StateHistory, StateTransition};
