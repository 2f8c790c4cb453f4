//! Property-based tests for the controller contract.
//!
//! These tests use proptest to check the contract holds across many
//! randomly generated stimulus streams.

use button_sequencer::conformance::ConformanceRules;
use button_sequencer::controller::{ControllerBuilder, ControllerFsm};
use button_sequencer::core::{next_state, outputs, ControllerState, Inputs, Outputs, State};
use button_sequencer::datapath::{convert, decode};
use button_sequencer::sim::{Event, Simulation};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_state()(variant in 0..3u8) -> ControllerState {
        match variant {
            0 => ControllerState::Idle,
            1 => ControllerState::WaitB,
            _ => ControllerState::WaitResult,
        }
    }
}

prop_compose! {
    fn arbitrary_inputs()(rst_n in any::<bool>(), button in any::<bool>()) -> Inputs {
        Inputs { rst_n, button }
    }
}

fn arbitrary_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        3 => Just(Event::Tick),
        3 => any::<bool>().prop_map(Event::Button),
        1 => any::<bool>().prop_map(Event::Reset),
    ]
}

proptest! {
    #[test]
    fn outputs_never_overlap(state in arbitrary_state(), inputs in arbitrary_inputs()) {
        prop_assert!(outputs(state, inputs).is_exclusive());
    }

    #[test]
    fn reset_always_lands_in_idle(state in arbitrary_state(), button in any::<bool>()) {
        let inputs = Inputs::resetting(button);
        prop_assert_eq!(next_state(state, inputs), ControllerState::Idle);
        prop_assert_eq!(outputs(state, inputs), Outputs::NONE);
    }

    #[test]
    fn low_button_never_moves_register(state in arbitrary_state()) {
        prop_assert_eq!(next_state(state, Inputs::running(false)), state);
    }

    #[test]
    fn held_button_advances_exactly_one_step_per_tick(
        start in arbitrary_state(),
        ticks in 1..20usize,
    ) {
        let mut fsm = ControllerBuilder::new().initial_state(start).build().unwrap();
        fsm.set_button(true);
        fsm.run_ticks(ticks);

        let expected = ControllerState::ALL[(start.position() + ticks) % 3];
        prop_assert_eq!(fsm.state(), expected);
    }

    #[test]
    fn state_name_is_stable(state in arbitrary_state()) {
        prop_assert_eq!(state.name(), state.name());
        prop_assert!(!state.is_final());
    }

    #[test]
    fn random_streams_conform(events in prop::collection::vec(arbitrary_event(), 0..200)) {
        let trace = Simulation::new(ControllerFsm::new()).run(events);
        prop_assert_eq!(ConformanceRules::default().check(&trace), Ok(()));
    }

    #[test]
    fn outputs_match_output_function_after_every_event(
        events in prop::collection::vec(arbitrary_event(), 1..100)
    ) {
        let mut sim = Simulation::new(ControllerFsm::new());
        for event in events {
            let sample = sim.apply(event);
            prop_assert_eq!(sample.outputs, outputs(sample.state, sample.inputs));
            prop_assert_eq!(sample.outputs, sim.controller().outputs());
        }
    }

    #[test]
    fn register_changes_only_on_ticks(
        events in prop::collection::vec(arbitrary_event(), 1..100)
    ) {
        let trace = Simulation::new(ControllerFsm::new()).run(events);
        for sample in trace.samples().iter().filter(|s| !s.is_tick()) {
            prop_assert_eq!(sample.before, sample.state);
        }
    }

    #[test]
    fn history_path_matches_ticked_states(
        events in prop::collection::vec(arbitrary_event(), 1..100)
    ) {
        let mut sim = Simulation::new(ControllerFsm::new());
        let trace = sim.run(events);
        let fsm = sim.into_controller();
        let history = fsm.history().unwrap();

        let recorded: Vec<_> = trace
            .ticks()
            .filter(|s| s.before != s.state || s.sampled_inputs.reset_asserted())
            .map(|s| (s.tick, s.state))
            .collect();
        let logged: Vec<_> = history.transitions().map(|t| (t.tick, t.to)).collect();
        prop_assert_eq!(recorded, logged);
    }

    #[test]
    fn checkpoint_restore_is_transparent(
        prefix in prop::collection::vec(arbitrary_event(), 0..50),
        suffix in prop::collection::vec(arbitrary_event(), 0..50),
    ) {
        let mut original = Simulation::new(ControllerFsm::new());
        original.run(prefix);

        let checkpoint = original.controller().checkpoint();
        let restored = ControllerFsm::restore(&checkpoint).unwrap();
        let mut forked = Simulation::new(restored);

        for event in suffix {
            let a = original.apply(event);
            let b = forked.apply(event);
            prop_assert_eq!(a.state, b.state);
            prop_assert_eq!(a.outputs, b.outputs);
            prop_assert_eq!(a.tick, b.tick);
        }
    }

    #[test]
    fn bcd_digits_recombine(value in 0..=31u8) {
        let bcd = convert(value).unwrap();
        prop_assert_eq!(bcd.tens() * 10 + bcd.ones(), value);
        prop_assert!(decode(bcd.tens()).is_ok());
        prop_assert!(decode(bcd.ones()).is_ok());
    }

    #[test]
    fn bcd_rejects_wide_values(value in 32..=255u8) {
        prop_assert!(convert(value).is_err());
    }
}
