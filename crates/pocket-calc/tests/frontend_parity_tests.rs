//! Frontend parity: the terminal app and the browser wiring must be two
//! views of the same machine.
//!
//! Every specification runs against both drivers, and a property test
//! hammers both with the same random event sequences and demands identical
//! display projections afterwards.

use proptest::prelude::*;

use pocket_calc::driver::{run_full_specification, CalculatorDriver, TuiDriver};
use pocket_calc::prelude::*;

// ===== Unified specification, both frontends =====

#[test]
fn test_full_specification_tui() {
    run_full_specification(&mut TuiDriver::new());
}

#[test]
fn test_full_specification_dom() {
    run_full_specification(&mut DomDriver::new());
}

// ===== Random-event parity =====

/// One calculator input event, frontend-agnostic
#[derive(Debug, Clone, Copy)]
enum Event {
    Press(char),
    Choose(BinaryOp),
    Compute,
    Apply(UnaryFunction),
    Memory(MemoryOp),
    Backspace,
    Clear,
}

fn event_strategy() -> impl Strategy<Value = Event> {
    prop_oneof![
        prop::char::range('0', '9').prop_map(Event::Press),
        Just(Event::Press('.')),
        prop_oneof![
            Just(BinaryOp::Add),
            Just(BinaryOp::Subtract),
            Just(BinaryOp::Multiply),
            Just(BinaryOp::Divide),
        ]
        .prop_map(Event::Choose),
        Just(Event::Compute),
        prop_oneof![
            Just(UnaryFunction::SquareRoot),
            Just(UnaryFunction::Percent),
            Just(UnaryFunction::Square),
            Just(UnaryFunction::Reciprocal),
        ]
        .prop_map(Event::Apply),
        prop_oneof![
            Just(MemoryOp::Clear),
            Just(MemoryOp::Recall),
            Just(MemoryOp::Add),
            Just(MemoryOp::Subtract),
        ]
        .prop_map(Event::Memory),
        Just(Event::Backspace),
        Just(Event::Clear),
    ]
}

fn feed<D: CalculatorDriver>(driver: &mut D, events: &[Event]) {
    for event in events {
        match *event {
            Event::Press(symbol) => driver.press(symbol),
            Event::Choose(op) => driver.choose(op),
            Event::Compute => driver.compute(),
            Event::Apply(function) => driver.apply(function),
            Event::Memory(op) => driver.memory(op),
            Event::Backspace => driver.backspace(),
            Event::Clear => driver.clear(),
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_tui_and_dom_stay_in_lockstep(
        events in prop::collection::vec(event_strategy(), 0..40)
    ) {
        let mut tui = TuiDriver::new();
        let mut dom = DomDriver::new();

        feed(&mut tui, &events);
        feed(&mut dom, &events);

        prop_assert_eq!(tui.current_text(), dom.current_text());
        prop_assert_eq!(tui.pending_text(), dom.pending_text());
        prop_assert_eq!(tui.memory_text(), dom.memory_text());
        prop_assert_eq!(tui.last_condition(), dom.last_condition());
    }
}
