//! Design-conformance checking for recorded traces.
//!
//! The controller has no runtime error path; what can go wrong is a model
//! that departs from the contract. These checks run over a
//! [`Trace`](crate::sim::Trace) and accumulate ALL violations instead of
//! stopping at the first, so one run reports every problem.
//!
//! # Example
//!
//! ```rust
//! use button_sequencer::conformance::{Check, ConformanceBuilder};
//! use button_sequencer::controller::ControllerFsm;
//! use button_sequencer::sim::{Simulation, Stimulus};
//!
//! let trace = Simulation::new(ControllerFsm::new())
//!     .run(Stimulus::new().reset_pulse().press(3).glitch().tick());
//!
//! let rules = ConformanceBuilder::new()
//!     .disable(Check::CombinationalOutputs)
//!     .require_pred(|s| s.tick < 100, "run too long".to_string())
//!     .build();
//!
//! assert!(rules.check(&trace).is_ok());
//! ```

pub mod builder;
pub mod rules;
pub mod violations;

pub use builder::ConformanceBuilder;
pub use rules::ConformanceRules;
pub use violations::{Check, ConformanceViolation};
