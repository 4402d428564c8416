//! Unified calculator driver.
//!
//! One trait in front of every frontend, so the same specification functions
//! run against the TUI app and the DOM shell alike. Frontends differ in how
//! events arrive and how displays are stored; the behavior under test is
//! identical.

use crate::core::{BinaryOp, CalcError, MemoryOp, UnaryFunction};

/// Abstract driver over a calculator frontend.
///
/// # Example
///
/// ```rust
/// use pocket_calc::driver::{CalculatorDriver, verify_operator_chaining};
/// use pocket_calc::wasm::DomDriver;
///
/// let mut driver = DomDriver::new();
/// verify_operator_chaining(&mut driver);
/// ```
pub trait CalculatorDriver {
    /// Enters a digit or decimal point
    fn press(&mut self, symbol: char);

    /// Selects a binary operator
    fn choose(&mut self, op: BinaryOp);

    /// Resolves the pending operation (the `=` key)
    fn compute(&mut self);

    /// Applies a unary function
    fn apply(&mut self, function: UnaryFunction);

    /// Executes a memory key
    fn memory(&mut self, op: MemoryOp);

    /// Removes the last entered character
    fn backspace(&mut self);

    /// Clears the operand state
    fn clear(&mut self);

    /// Current-operand line as shown to the user
    fn current_text(&self) -> String;

    /// Previous-operand line as shown to the user
    fn pending_text(&self) -> String;

    /// Memory display line as shown to the user
    fn memory_text(&self) -> String;

    /// The most recent user-facing condition, if any
    fn last_condition(&self) -> Option<CalcError>;

    /// Feeds a key sequence: digits and `.` enter, `+ - * / × ÷` choose,
    /// `=` computes. Anything else is ignored.
    fn enter(&mut self, keys: &str) {
        for key in keys.chars() {
            if key.is_ascii_digit() || key == '.' {
                self.press(key);
            } else if key == '=' {
                self.compute();
            } else if let Some(op) = BinaryOp::from_char(key) {
                self.choose(op);
            }
        }
    }
}

// ===== Unified Specifications =====
// These run against ANY CalculatorDriver implementation.

/// Digit entry: leading zero replaced, one decimal point at most
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press('5');
    assert_eq!(driver.current_text(), "5", "leading zero must be replaced");

    driver.clear();
    driver.enter("1.5.7");
    assert_eq!(driver.current_text(), "1.57", "second decimal point ignored");
    driver.clear();
}

/// Backspace converges to "0" and stays there
pub fn verify_backspace<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.enter("42");
    for _ in 0..6 {
        driver.backspace();
    }
    assert_eq!(driver.current_text(), "0");
    driver.clear();
}

/// Left-to-right chaining without precedence: 5 + 3 × 2 = 16
pub fn verify_operator_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.enter("5+3");
    driver.choose(BinaryOp::Multiply);
    assert_eq!(driver.pending_text(), "8 ×", "chained compute resolves first");
    driver.enter("2=");
    assert_eq!(driver.current_text(), "16");
    driver.clear();
}

/// Binary divide-by-zero surfaces the condition and resets everything
pub fn verify_divide_by_zero_reset<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.enter("8/0=");
    assert_eq!(driver.last_condition(), Some(CalcError::DivisionByZero));
    assert_eq!(driver.current_text(), "0");
    assert_eq!(driver.pending_text(), "");
    driver.clear();
}

/// The four unary functions rewrite the current operand in place
pub fn verify_unary_functions<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.enter("9");
    driver.apply(UnaryFunction::SquareRoot);
    assert_eq!(driver.current_text(), "3");

    driver.clear();
    driver.enter("50");
    driver.apply(UnaryFunction::Percent);
    assert_eq!(driver.current_text(), "0.5");

    driver.clear();
    driver.enter("12");
    driver.apply(UnaryFunction::Square);
    assert_eq!(driver.current_text(), "144");

    driver.clear();
    driver.enter("4");
    driver.apply(UnaryFunction::Reciprocal);
    assert_eq!(driver.current_text(), "0.25");
    driver.clear();
}

/// Square root of a negative operand is rejected without touching state
pub fn verify_negative_square_root<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.enter("0-4=");
    assert_eq!(driver.current_text(), "-4");
    driver.apply(UnaryFunction::SquareRoot);
    assert_eq!(driver.last_condition(), Some(CalcError::NegativeSquareRoot));
    assert_eq!(driver.current_text(), "-4", "operand must be unchanged");
    driver.clear();
}

/// Memory round-trip: M+ then MC then MR recalls the cleared zero
pub fn verify_memory_round_trip<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.enter("10");
    driver.memory(MemoryOp::Add);
    assert_eq!(driver.memory_text(), "Memory: 10");

    driver.memory(MemoryOp::Clear);
    driver.memory(MemoryOp::Recall);
    assert_eq!(driver.current_text(), "0");
    assert_eq!(driver.memory_text(), "Memory: 0");
    driver.clear();
}

/// Complete verification suite - runs every specification
pub fn run_full_specification<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_backspace(driver);
    verify_operator_chaining(driver);
    verify_divide_by_zero_reset(driver);
    verify_unary_functions(driver);
    verify_negative_square_root(driver);
    verify_memory_round_trip(driver);
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::CalculatorDriver;
    use crate::core::{BinaryOp, CalcError, MemoryOp, UnaryFunction};
    use crate::tui::CalculatorApp;

    /// Driver wrapping the TUI application state
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self {
                app: CalculatorApp::new(),
            }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, symbol: char) {
            self.app.engine_mut().press(symbol);
        }

        fn choose(&mut self, op: BinaryOp) {
            self.app.choose(op);
        }

        fn compute(&mut self) {
            self.app.compute();
        }

        fn apply(&mut self, function: UnaryFunction) {
            self.app.apply(function);
        }

        fn memory(&mut self, op: MemoryOp) {
            self.app.memory(op);
        }

        fn backspace(&mut self) {
            self.app.engine_mut().backspace();
        }

        fn clear(&mut self) {
            self.app.clear();
        }

        fn current_text(&self) -> String {
            self.app.engine().display().to_string()
        }

        fn pending_text(&self) -> String {
            self.app.engine().pending_display()
        }

        fn memory_text(&self) -> String {
            self.app.engine().memory_display()
        }

        fn last_condition(&self) -> Option<CalcError> {
            self.app.condition()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;
