//! Calculator core: operand state machine, operations, memory, tape.
//!
//! Everything in here is platform-free. The `tui` and `wasm` modules are
//! adapters that feed events into [`engine::Engine`] and read its display
//! projections back out.

pub mod engine;
pub mod memory;
mod operations;
pub mod tape;

pub use engine::Engine;
pub use memory::MemoryRegister;
pub use operations::{BinaryOp, MemoryOp, UnaryFunction};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// User-facing conditions surfaced by the engine.
///
/// Operand parse failures are deliberately not represented here: the engine
/// treats them as silent no-ops and leaves its state untouched. What remains
/// are the two conditions a frontend has to present to the user. How they are
/// presented (dialog, status line, log) is the frontend's call; the engine
/// only reports which one occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Binary `÷` or unary `1/x` with a zero divisor
    #[error("Cannot divide by zero")]
    DivisionByZero,
    /// `√` applied to a negative operand
    #[error("Cannot calculate square root of negative number")]
    NegativeSquareRoot,
}

/// Formats a computed value back into operand text.
///
/// Integral values drop the decimal part entirely ("8", not "8.0"); anything
/// else is printed to ten places with trailing zeros trimmed. Non-finite
/// values fall through the fractional branch and print as `inf`/`NaN`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else if !value.is_finite() {
        format!("{value}")
    } else {
        let formatted = format!("{value:.10}");
        let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== CalcError tests =====

    #[test]
    fn test_error_display_division_by_zero() {
        let err = CalcError::DivisionByZero;
        assert_eq!(format!("{err}"), "Cannot divide by zero");
    }

    #[test]
    fn test_error_display_negative_square_root() {
        let err = CalcError::NegativeSquareRoot;
        assert_eq!(
            format!("{err}"),
            "Cannot calculate square root of negative number"
        );
    }

    #[test]
    fn test_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::DivisionByZero);
        assert!(err.to_string().contains("divide"));
    }

    // ===== format_number tests =====

    #[test]
    fn test_format_number_integer() {
        assert_eq!(format_number(42.0), "42");
    }

    #[test]
    fn test_format_number_negative_integer() {
        assert_eq!(format_number(-42.0), "-42");
    }

    #[test]
    fn test_format_number_decimal() {
        assert_eq!(format_number(3.14), "3.14");
    }

    #[test]
    fn test_format_number_trailing_zeros() {
        assert_eq!(format_number(1.50), "1.5");
    }

    #[test]
    fn test_format_number_zero() {
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_format_number_small_decimal() {
        assert_eq!(format_number(0.125), "0.125");
    }

    #[test]
    fn test_format_number_large_integer() {
        assert_eq!(format_number(1e14), "100000000000000");
    }

    #[test]
    fn test_format_number_infinity() {
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_format_number_round_trips_through_parse() {
        for value in [0.0, 1.0, -7.0, 3.5, 0.1, 123.456, 1e10] {
            let text = format_number(value);
            assert_eq!(text.parse::<f64>().unwrap(), value, "value {value}");
        }
    }
}
