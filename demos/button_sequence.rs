//! Button Sequence Demo
//!
//! Drives the controller through the operand A / operand B / result
//! rotation, shows a sub-tick glitch being ignored, and resets from the
//! middle of the sequence.
//!
//! Run with: RUST_LOG=debug cargo run --example button_sequence

use button_sequencer::conformance::ConformanceRules;
use button_sequencer::controller::ControllerFsm;
use button_sequencer::datapath::display_patterns;
use button_sequencer::ports::PORTS;
use button_sequencer::sim::{Event, Simulation, Stimulus};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Button Sequence Controller ===\n");

    let ports: Vec<_> = PORTS.iter().map(|p| p.name).collect();
    println!("Ports: {}\n", ports.join(", "));

    let events = Stimulus::new()
        .reset_pulse()
        .press(1)
        .glitch()
        .tick()
        .press(1)
        .press(1)
        .press(1)
        .event(Event::Reset(false))
        .tick()
        .event(Event::Reset(true))
        .build();

    let mut sim = Simulation::new(ControllerFsm::new());
    let trace = sim.run(events);

    println!("{:>4} {:>5} {:<14} {:<11} outputs", "idx", "tick", "event", "state");
    for sample in trace.samples() {
        println!(
            "{:>4} {:>5} {:<14} {:<11} {}",
            sample.index,
            sample.tick,
            format!("{:?}", sample.event),
            sample.state,
            sample.outputs
        );
    }

    match ConformanceRules::default().check(&trace) {
        Ok(()) => println!("\nTrace conforms to the controller contract"),
        Err(violations) => {
            println!("\n{} violation(s):", violations.len());
            for violation in violations {
                println!("  - {violation}");
            }
        }
    }

    let fsm = sim.into_controller();
    if let Some(history) = fsm.history() {
        let path: Vec<_> = history.get_path().iter().map(|s| s.to_string()).collect();
        println!("\nRegister path: {}", path.join(" -> "));
    }

    match display_patterns(27) {
        Ok((tens, ones)) => println!("\nResult 27 on the display: tens={tens} ones={ones}"),
        Err(e) => println!("\nCannot display result: {e}"),
    }

    println!("\n=== Demo Complete ===");
}
