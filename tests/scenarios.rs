//! Scenario tests driving the controller the way a clocked testbench does.

use button_sequencer::conformance::ConformanceRules;
use button_sequencer::controller::{ControllerBuilder, ControllerFsm};
use button_sequencer::core::{ControllerState, Inputs, Outputs, TransitionCause};
use button_sequencer::datapath::{convert, decode, SevenSegmentDisplay};
use button_sequencer::sim::{Event, Simulation, Stimulus};

fn reset_controller() -> ControllerFsm {
    let mut fsm = ControllerFsm::new();
    fsm.apply_reset();
    fsm.tick();
    fsm
}

fn in_state(state: ControllerState) -> ControllerFsm {
    ControllerBuilder::new().initial_state(state).build().unwrap()
}

#[test]
fn reset_leaves_idle_with_outputs_low() {
    let fsm = reset_controller();
    assert_eq!(fsm.state(), ControllerState::Idle);
    assert_eq!(fsm.outputs().as_bits(), (0, 0, 0));
}

#[test]
fn idle_press_requests_operand_a() {
    let mut fsm = in_state(ControllerState::Idle);
    fsm.set_button(true);
    assert_eq!(fsm.outputs().as_bits(), (1, 0, 0));
    fsm.tick();
    assert_eq!(fsm.state(), ControllerState::WaitB);
}

#[test]
fn wait_b_press_requests_operand_b() {
    let mut fsm = in_state(ControllerState::WaitB);
    fsm.set_button(true);
    assert_eq!(fsm.outputs().as_bits(), (0, 1, 0));
    fsm.tick();
    assert_eq!(fsm.state(), ControllerState::WaitResult);
}

#[test]
fn wait_result_press_requests_result() {
    let mut fsm = in_state(ControllerState::WaitResult);
    fsm.set_button(true);
    assert_eq!(fsm.outputs().as_bits(), (0, 0, 1));
    fsm.tick();
    assert_eq!(fsm.state(), ControllerState::Idle);
}

#[test]
fn pulse_between_ticks_is_not_seen() {
    let mut fsm = in_state(ControllerState::Idle);
    fsm.set_button(true);
    fsm.set_button(false);
    let report = fsm.tick();
    assert!(!report.advanced());
    assert_eq!(fsm.state(), ControllerState::Idle);
    assert_eq!(fsm.outputs().as_bits(), (0, 0, 0));
}

#[test]
fn reset_from_wait_result() {
    let mut fsm = in_state(ControllerState::WaitResult);
    fsm.set_reset(false);
    fsm.tick();
    assert_eq!(fsm.state(), ControllerState::Idle);
}

#[test]
fn single_press_saves_a_then_waits_for_b() {
    let mut fsm = reset_controller();

    fsm.set_button(true);
    let report = fsm.tick();
    assert_eq!(report.sampled.as_bits(), (1, 0, 0));

    fsm.set_button(false);
    fsm.run_ticks(2);
    assert_eq!(fsm.state(), ControllerState::WaitB);
    assert_eq!(fsm.outputs(), Outputs::NONE);
}

#[test]
fn full_sequence_of_three_presses() {
    let mut fsm = reset_controller();
    let expected = [(1, 0, 0), (0, 1, 0), (0, 0, 1)];

    for bits in expected {
        fsm.set_button(true);
        let report = fsm.tick();
        assert_eq!(report.sampled.as_bits(), bits);
        fsm.set_button(false);
        fsm.run_ticks(2);
        assert_eq!(fsm.outputs(), Outputs::NONE);
    }

    assert_eq!(fsm.state(), ControllerState::Idle);
}

#[test]
fn held_button_cycles_without_release() {
    let mut fsm = reset_controller();
    fsm.set_button(true);

    let pulses: Vec<_> = fsm
        .run_ticks(6)
        .iter()
        .map(|r| r.sampled.as_bits())
        .collect();

    assert_eq!(
        pulses,
        vec![
            (1, 0, 0),
            (0, 1, 0),
            (0, 0, 1),
            (1, 0, 0),
            (0, 1, 0),
            (0, 0, 1)
        ]
    );
    assert_eq!(fsm.state(), ControllerState::Idle);
}

#[test]
fn one_cycle_press_advances_once() {
    let trace = Simulation::new(ControllerFsm::new()).run(
        Stimulus::new()
            .reset_pulse()
            .press(1)
            .tick()
            .hold(true),
    );

    let last = trace.last().unwrap();
    assert_eq!(last.state, ControllerState::WaitB);
    assert_eq!(last.outputs.as_bits(), (0, 1, 0));
}

#[test]
fn reset_works_from_every_reachable_state() {
    let events = Stimulus::new()
        .reset_pulse()
        .press(1)
        .reset_pulse()
        .press(1)
        .press(1)
        .reset_pulse()
        .build();

    let mut sim = Simulation::new(ControllerFsm::new());
    let trace = sim.run(events);

    let reset_ticks: Vec<_> = trace
        .ticks()
        .filter(|s| s.sampled_inputs.reset_asserted())
        .map(|s| (s.before, s.state))
        .collect();
    assert_eq!(
        reset_ticks,
        vec![
            (ControllerState::Idle, ControllerState::Idle),
            (ControllerState::WaitB, ControllerState::Idle),
            (ControllerState::WaitResult, ControllerState::Idle),
        ]
    );
    assert_eq!(trace.last().unwrap().outputs, Outputs::NONE);

    let fsm = sim.into_controller();
    let resets = fsm
        .history()
        .unwrap()
        .transitions()
        .filter(|t| t.cause == TransitionCause::Reset)
        .count();
    assert_eq!(resets, 3);
}

#[test]
fn back_to_back_two_cycle_presses_wrap_around() {
    // Each press holds the button for two ticks, so six button-high ticks
    // advance the register twice round the cycle.
    let mut stimulus = Stimulus::new().reset_pulse();
    for _ in 0..3 {
        stimulus = stimulus.press(2);
    }
    let trace = Simulation::new(ControllerFsm::new()).run(stimulus);

    let last = trace.last().unwrap();
    assert_eq!(last.state, ControllerState::Idle);
    assert_eq!(last.outputs, Outputs::NONE);
    assert_eq!(ConformanceRules::default().check(&trace), Ok(()));
}

#[test]
fn reset_and_button_together_favours_reset() {
    let mut sim = Simulation::new(ControllerFsm::new());
    let trace = sim.run([
        Event::Button(true),
        Event::Tick,
        Event::Reset(false),
        Event::Tick,
        Event::Tick,
    ]);

    let states = trace.states();
    assert_eq!(
        states,
        vec![
            ControllerState::WaitB,
            ControllerState::Idle,
            ControllerState::Idle
        ]
    );
    assert!(trace
        .samples()
        .iter()
        .filter(|s| s.inputs == Inputs::resetting(true))
        .all(|s| s.outputs == Outputs::NONE));
}

#[test]
fn controller_drives_datapath_capture() {
    // Operands are captured on the ticks where save_A / save_B are sampled high.
    let operands = [12u8, 19u8];
    let mut captured = Vec::new();
    let mut shown = None;

    let mut fsm = reset_controller();
    fsm.set_button(true);
    for tick in 0..3 {
        let report = fsm.tick();
        if report.sampled.save_a || report.sampled.save_b {
            captured.push(operands[tick]);
        }
        if report.sampled.show_result {
            shown = Some(captured.clone());
        }
    }

    assert_eq!(captured, vec![12, 19]);
    assert_eq!(shown, Some(vec![12, 19]));

    let digits = convert(captured[1]).unwrap();
    let mut tens = SevenSegmentDisplay::new();
    let mut ones = SevenSegmentDisplay::new();
    tens.falling_edge(digits.tens(), true);
    ones.falling_edge(digits.ones(), true);
    assert_eq!(tens.rising_edge().unwrap(), decode(1).unwrap());
    assert_eq!(ones.rising_edge().unwrap(), decode(9).unwrap());
}
