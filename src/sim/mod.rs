//! Event-driven stimulus runner.
//!
//! A [`Simulation`] applies a stream of input changes and clock ticks to a
//! controller and records a [`Sample`] after every event. Sampling after
//! input changes, not only after ticks, is what makes the combinational
//! outputs observable between clock edges.

mod stimulus;

pub use stimulus::Stimulus;

use crate::controller::ControllerFsm;
use crate::core::{ControllerState, Inputs, Outputs};
use serde::{Deserialize, Serialize};

/// One thing the environment can do to the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Event {
    /// Drive the button to the given level.
    Button(bool),
    /// Drive `rst_n` to the given level (`false` asserts reset).
    Reset(bool),
    /// One rising clock edge.
    Tick,
}

/// Observation taken right after an event was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    /// Position of the event in the run.
    pub index: usize,
    /// Tick count after the event.
    pub tick: u64,
    /// The event that was applied.
    pub event: Event,
    /// Register value before the event.
    pub before: ControllerState,
    /// Register value after the event.
    pub state: ControllerState,
    /// Inputs driven after the event.
    pub inputs: Inputs,
    /// Inputs that were driven when the event was applied.
    pub sampled_inputs: Inputs,
    /// Outputs after the event.
    pub outputs: Outputs,
}

impl Sample {
    /// True when this sample was taken after a clock edge.
    pub fn is_tick(&self) -> bool {
        matches!(self.event, Event::Tick)
    }
}

/// Ordered samples produced by a run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    samples: Vec<Sample>,
}

impl Trace {
    /// Wrap a list of samples.
    pub fn from_samples(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    /// All samples in order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Only the samples taken after clock edges.
    pub fn ticks(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter().filter(|s| s.is_tick())
    }

    /// Register value after every tick, in order.
    pub fn states(&self) -> Vec<ControllerState> {
        self.ticks().map(|s| s.state).collect()
    }

    /// Outputs after every event, in order.
    pub fn outputs(&self) -> Vec<Outputs> {
        self.samples.iter().map(|s| s.outputs).collect()
    }

    /// The final sample, if any event was applied.
    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when no event was applied.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Drives a controller with events and records what it does.
///
/// # Example
///
/// ```rust
/// use button_sequencer::controller::ControllerFsm;
/// use button_sequencer::core::ControllerState;
/// use button_sequencer::sim::{Simulation, Stimulus};
///
/// let events = Stimulus::new().reset_pulse().press(1).press(1).build();
/// let trace = Simulation::new(ControllerFsm::new()).run(events);
///
/// assert_eq!(trace.last().unwrap().state, ControllerState::WaitResult);
/// ```
#[derive(Clone, Debug)]
pub struct Simulation {
    controller: ControllerFsm,
    applied: usize,
}

impl Simulation {
    /// Wrap a controller.
    pub fn new(controller: ControllerFsm) -> Self {
        Self {
            controller,
            applied: 0,
        }
    }

    /// Apply one event and sample the controller.
    pub fn apply(&mut self, event: Event) -> Sample {
        let before = self.controller.state();
        let sampled_inputs = self.controller.inputs();
        match event {
            Event::Button(level) => self.controller.set_button(level),
            Event::Reset(rst_n) => self.controller.set_reset(rst_n),
            Event::Tick => {
                self.controller.tick();
            }
        }

        let sample = Sample {
            index: self.applied,
            tick: self.controller.tick_count(),
            event,
            before,
            state: self.controller.state(),
            inputs: self.controller.inputs(),
            sampled_inputs,
            outputs: self.controller.outputs(),
        };
        self.applied += 1;
        sample
    }

    /// Apply every event in order and collect the samples.
    pub fn run<I>(&mut self, events: I) -> Trace
    where
        I: IntoIterator<Item = Event>,
    {
        Trace::from_samples(events.into_iter().map(|e| self.apply(e)).collect())
    }

    /// Controller being driven (pure).
    pub fn controller(&self) -> &ControllerFsm {
        &self.controller
    }

    /// Hand the controller back.
    pub fn into_controller(self) -> ControllerFsm {
        self.controller
    }
}
