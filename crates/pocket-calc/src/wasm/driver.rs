//! DOM driver: the unified testing interface over the browser wiring.
//!
//! Everything goes through real page events - key presses where the
//! keyboard map has a key, button clicks where it does not - and all reads
//! come back out of the DOM elements, not the engine.

use super::shell::DomShell;
use crate::core::{BinaryOp, CalcError, MemoryOp, UnaryFunction};
use crate::driver::CalculatorDriver;

/// Driver wrapping the DOM shell
#[derive(Debug, Default)]
pub struct DomDriver {
    shell: DomShell,
}

impl DomDriver {
    /// Creates a new DOM driver
    #[must_use]
    pub fn new() -> Self {
        Self {
            shell: DomShell::new(),
        }
    }

    /// Returns the underlying shell
    #[must_use]
    pub fn shell(&self) -> &DomShell {
        &self.shell
    }

    /// Returns the underlying shell mutably
    pub fn shell_mut(&mut self) -> &mut DomShell {
        &mut self.shell
    }
}

impl CalculatorDriver for DomDriver {
    fn press(&mut self, symbol: char) {
        self.shell.key(&symbol.to_string());
    }

    fn choose(&mut self, op: BinaryOp) {
        let key = match op {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
        };
        self.shell.key(key);
    }

    fn compute(&mut self) {
        self.shell.key("Enter");
    }

    fn apply(&mut self, function: UnaryFunction) {
        let id = match function {
            UnaryFunction::SquareRoot => "btn-sqrt",
            UnaryFunction::Percent => "btn-percent",
            UnaryFunction::Square => "btn-square",
            UnaryFunction::Reciprocal => "btn-reciprocal",
        };
        self.shell.click(id);
    }

    fn memory(&mut self, op: MemoryOp) {
        let id = match op {
            MemoryOp::Clear => "btn-mc",
            MemoryOp::Recall => "btn-mr",
            MemoryOp::Add => "btn-m-plus",
            MemoryOp::Subtract => "btn-m-minus",
        };
        self.shell.click(id);
    }

    fn backspace(&mut self) {
        self.shell.key("Backspace");
    }

    fn clear(&mut self) {
        self.shell.key("Escape");
    }

    fn current_text(&self) -> String {
        self.shell.current_text()
    }

    fn pending_text(&self) -> String {
        self.shell.previous_text()
    }

    fn memory_text(&self) -> String {
        self.shell.memory_text()
    }

    fn last_condition(&self) -> Option<CalcError> {
        self.shell.last_condition()
    }
}
