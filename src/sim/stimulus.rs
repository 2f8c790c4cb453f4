//! Fluent builder for event sequences.

use super::Event;

/// Builder for the event sequences a verification harness would drive.
///
/// # Example
///
/// ```rust
/// use button_sequencer::sim::{Event, Stimulus};
///
/// let events = Stimulus::new().glitch().tick().build();
/// assert_eq!(
///     events,
///     vec![Event::Button(true), Event::Button(false), Event::Tick]
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stimulus {
    events: Vec<Event>,
}

impl Stimulus {
    /// Start an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single event.
    pub fn event(mut self, event: Event) -> Self {
        self.events.push(event);
        self
    }

    /// Drive the button to `level`.
    pub fn hold(self, level: bool) -> Self {
        self.event(Event::Button(level))
    }

    /// One clock tick.
    pub fn tick(self) -> Self {
        self.event(Event::Tick)
    }

    /// `n` clock ticks.
    pub fn ticks(mut self, n: usize) -> Self {
        self.events.extend(std::iter::repeat(Event::Tick).take(n));
        self
    }

    /// Assert reset for one tick, release it, then tick once more.
    pub fn reset_pulse(self) -> Self {
        self.event(Event::Reset(false))
            .tick()
            .event(Event::Reset(true))
            .tick()
    }

    /// Button high for `cycles` ticks, then low for one tick.
    pub fn press(self, cycles: usize) -> Self {
        self.hold(true).ticks(cycles).hold(false).tick()
    }

    /// Button high then low with no tick in between.
    pub fn glitch(self) -> Self {
        self.hold(true).hold(false)
    }

    /// Finish the sequence.
    pub fn build(self) -> Vec<Event> {
        self.events
    }
}

impl IntoIterator for Stimulus {
    type Item = Event;
    type IntoIter = std::vec::IntoIter<Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}
