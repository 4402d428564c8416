//! Property-based tests for the calculator engine.
//!
//! The display invariants have to hold for every key sequence a user can
//! produce, not just the ones unit tests think of.

use proptest::prelude::*;

use pocket_calc::prelude::*;

// ===== Strategy definitions =====

/// Any key the digit pad can produce
fn press_symbol_strategy() -> impl Strategy<Value = char> {
    prop_oneof![
        prop::char::range('0', '9'),
        Just('.'),
    ]
}

/// A sequence of digit-pad presses
fn press_sequence_strategy() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(press_symbol_strategy(), 0..32)
}

/// Any binary operator
fn binary_op_strategy() -> impl Strategy<Value = BinaryOp> {
    prop_oneof![
        Just(BinaryOp::Add),
        Just(BinaryOp::Subtract),
        Just(BinaryOp::Multiply),
        Just(BinaryOp::Divide),
    ]
}

/// A nonzero single digit, for chains that must not divide by zero
fn nonzero_digit_strategy() -> impl Strategy<Value = char> {
    prop::char::range('1', '9')
}

// ===== Display invariants =====

proptest! {
    /// The current operand never holds more than one decimal point
    #[test]
    fn prop_at_most_one_decimal_point(symbols in press_sequence_strategy()) {
        let mut engine = Engine::new();
        for symbol in symbols {
            engine.press(symbol);
        }
        let dots = engine.display().matches('.').count();
        prop_assert!(dots <= 1, "display {:?} has {} dots", engine.display(), dots);
    }

    /// The current operand is never empty
    #[test]
    fn prop_display_never_empty(symbols in press_sequence_strategy()) {
        let mut engine = Engine::new();
        for symbol in symbols {
            engine.press(symbol);
        }
        prop_assert!(!engine.display().is_empty());
    }

    /// Operands never grow a leading zero in front of a digit
    #[test]
    fn prop_no_leading_zeros(symbols in press_sequence_strategy()) {
        let mut engine = Engine::new();
        for symbol in symbols {
            engine.press(symbol);
        }
        let display = engine.display();
        if display.len() > 1 {
            prop_assert!(
                !(display.starts_with('0') && display.as_bytes()[1].is_ascii_digit()),
                "leading zero in {display:?}"
            );
        }
    }

    /// Whatever was typed, the operand still parses as f64
    #[test]
    fn prop_display_always_parses(symbols in press_sequence_strategy()) {
        let mut engine = Engine::new();
        for symbol in symbols {
            engine.press(symbol);
        }
        prop_assert!(engine.display().parse::<f64>().is_ok());
    }

    /// Backspace always converges to "0" and stays there
    #[test]
    fn prop_backspace_converges_to_zero(symbols in press_sequence_strategy()) {
        let mut engine = Engine::new();
        for symbol in symbols {
            engine.press(symbol);
        }
        for _ in 0..40 {
            engine.backspace();
        }
        prop_assert_eq!(engine.display(), "0");
    }

    /// Clear always restores the initial operand state
    #[test]
    fn prop_clear_restores_initial_state(
        symbols in press_sequence_strategy(),
        op in binary_op_strategy(),
    ) {
        let mut engine = Engine::new();
        for symbol in symbols {
            engine.press(symbol);
        }
        let _ = engine.choose(op);
        engine.clear();
        prop_assert_eq!(engine.display(), "0");
        prop_assert_eq!(engine.pending_display(), "");
    }
}

// ===== Chaining semantics =====

proptest! {
    /// Left-to-right chaining matches a plain fold over the same operands
    #[test]
    fn prop_chaining_is_left_fold(
        first in nonzero_digit_strategy(),
        rest in prop::collection::vec(
            (binary_op_strategy(), nonzero_digit_strategy()),
            1..6
        ),
    ) {
        let mut engine = Engine::new();
        engine.press(first);
        let mut expected = f64::from(first.to_digit(10).unwrap());

        for (op, digit) in rest {
            engine.choose(op).unwrap();
            engine.press(digit);
            let value = f64::from(digit.to_digit(10).unwrap());
            // Each intermediate result is re-stringified by the engine, so
            // the reference fold has to round through the same projection
            let raw = op.apply(expected, value).unwrap();
            expected = format_number(raw).parse::<f64>().unwrap();
        }
        engine.compute().unwrap();

        prop_assert_eq!(engine.display(), format_number(expected));
    }

    /// Compute is idempotent once the pending operation is resolved
    #[test]
    fn prop_second_compute_is_noop(
        a in nonzero_digit_strategy(),
        op in binary_op_strategy(),
        b in nonzero_digit_strategy(),
    ) {
        let mut engine = Engine::new();
        engine.press(a);
        engine.choose(op).unwrap();
        engine.press(b);
        engine.compute().unwrap();
        let after_first = engine.display().to_string();

        engine.compute().unwrap();
        prop_assert_eq!(engine.display(), after_first);
        prop_assert_eq!(engine.pending(), None);
    }
}

// ===== Memory semantics =====

proptest! {
    /// M+ then M- of the same operand cancels out
    #[test]
    fn prop_memory_add_subtract_cancels(symbols in press_sequence_strategy()) {
        let mut engine = Engine::new();
        for symbol in symbols {
            engine.press(symbol);
        }
        engine.memory(MemoryOp::Add);
        engine.memory(MemoryOp::Subtract);
        prop_assert_eq!(engine.memory_value(), 0.0);
    }

    /// Memory survives any amount of operand clearing
    #[test]
    fn prop_memory_survives_clear(digit in nonzero_digit_strategy(), clears in 1usize..5) {
        let mut engine = Engine::new();
        engine.press(digit);
        let stored = engine.memory(MemoryOp::Add);
        for _ in 0..clears {
            engine.clear();
        }
        prop_assert_eq!(engine.memory_value(), stored);
    }

    /// Recall puts exactly the stored value into the display
    #[test]
    fn prop_recall_shows_stored_value(digit in nonzero_digit_strategy()) {
        let mut engine = Engine::new();
        engine.press(digit);
        engine.memory(MemoryOp::Add);
        engine.clear();
        engine.memory(MemoryOp::Recall);
        prop_assert_eq!(engine.display(), digit.to_string());
    }
}
