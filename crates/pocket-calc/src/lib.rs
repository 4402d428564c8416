//! Pocket Calculator
//!
//! An immediate-execution calculator: digits and operators arrive one key
//! at a time, operators chain left to right with no precedence, and a
//! memory register and four unary functions round out the keypad. The same
//! engine drives a terminal frontend and a browser frontend.
//!
//! # Example
//!
//! ```rust
//! use pocket_calc::prelude::*;
//!
//! let mut engine = Engine::new();
//! engine.press('5');
//! engine.choose(BinaryOp::Add).unwrap();
//! engine.press('3');
//! engine.compute().unwrap();
//! assert_eq!(engine.display(), "8");
//!
//! // The memory register survives a clear
//! engine.memory(MemoryOp::Add);
//! engine.clear();
//! assert_eq!(engine.memory_display(), "Memory: 8");
//! ```

// Allow common test patterns in this crate
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;

#[cfg(feature = "tui")]
pub mod tui;

/// Browser module - the mock DOM keeps it testable without wasm-bindgen
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::tape::{Tape, TapeEntry};
    pub use crate::core::{
        format_number, BinaryOp, CalcError, CalcResult, Engine, MemoryOp, MemoryRegister,
        UnaryFunction,
    };
    pub use crate::driver::CalculatorDriver;

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;

    pub use crate::wasm::{DomDriver, DomElement, DomEvent, DomShell, MockDom};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_engine_workflow() {
        let mut engine = Engine::new();
        engine.press('2');
        engine.choose(BinaryOp::Multiply).unwrap();
        engine.press('2');
        engine.press('1');
        engine.compute().unwrap();
        assert_eq!(engine.display(), "42");
    }

    #[test]
    fn test_prelude_shell_workflow() {
        let mut shell = DomShell::new();
        shell.key("6");
        shell.key("*");
        shell.key("7");
        shell.key("Enter");
        assert_eq!(shell.current_text(), "42");
    }

    #[test]
    fn test_prelude_tape_exports() {
        let mut tape = Tape::new();
        tape.record_binary(6.0, BinaryOp::Multiply, 7.0, 42.0);
        assert_eq!(tape.last().unwrap().display(), "6 × 7 = 42");
    }

    #[test]
    fn test_prelude_error_exports() {
        let err: CalcError = CalcError::DivisionByZero;
        assert!(err.to_string().contains("divide"));
        let result: CalcResult<()> = Err(err);
        assert!(result.is_err());
    }

    #[test]
    fn test_prelude_format_number() {
        assert_eq!(format_number(42.0), "42");
    }
}
