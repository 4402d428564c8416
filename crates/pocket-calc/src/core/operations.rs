//! Operation vocabulary: binary operators, unary functions, memory keys.
//!
//! Type-safe enums keep the engine free of stringly-typed dispatch; each
//! variant knows its display glyph and how to apply itself.

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// Binary operator chosen between two operands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl BinaryOp {
    /// Returns the operator glyph shown on the pending-operation line
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Maps a button glyph or keyboard character to an operator.
    ///
    /// Accepts both the display glyphs (`× ÷`) and the ASCII keys the
    /// keyboard produces (`* /`).
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '×' | '*' => Some(Self::Multiply),
            '÷' | '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operator to two operands
    pub fn apply(self, lhs: f64, rhs: f64) -> CalcResult<f64> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide => {
                if rhs == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(lhs / rhs)
            }
        }
    }
}

/// Single-operand function applied immediately to the current operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryFunction {
    /// Square root (√)
    SquareRoot,
    /// Percent (value ÷ 100)
    Percent,
    /// Square (value × value)
    Square,
    /// Reciprocal (1 ÷ value)
    Reciprocal,
}

impl UnaryFunction {
    /// Returns the button label for this function
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::SquareRoot => "√",
            Self::Percent => "%",
            Self::Square => "x²",
            Self::Reciprocal => "1/x",
        }
    }

    /// Applies the function to an operand
    pub fn apply(self, value: f64) -> CalcResult<f64> {
        match self {
            Self::SquareRoot => {
                if value < 0.0 {
                    return Err(CalcError::NegativeSquareRoot);
                }
                Ok(value.sqrt())
            }
            Self::Percent => Ok(value / 100.0),
            Self::Square => Ok(value * value),
            Self::Reciprocal => {
                if value == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(1.0 / value)
            }
        }
    }

    /// Renders the function applied to an operand, for the tape.
    ///
    /// `√9`, `9%`, `9²`, `1/9`: the conventional written forms rather than
    /// the button labels.
    #[must_use]
    pub fn notation(self, operand: &str) -> String {
        match self {
            Self::SquareRoot => format!("√{operand}"),
            Self::Percent => format!("{operand}%"),
            Self::Square => format!("{operand}²"),
            Self::Reciprocal => format!("1/{operand}"),
        }
    }
}

/// Memory register keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemoryOp {
    /// MC - reset memory to zero
    Clear,
    /// MR - copy memory into the current operand
    Recall,
    /// M+ - add the current operand to memory
    Add,
    /// M- - subtract the current operand from memory
    Subtract,
}

impl MemoryOp {
    /// Returns the button label for this key
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Clear => "MC",
            Self::Recall => "MR",
            Self::Add => "M+",
            Self::Subtract => "M-",
        }
    }
}
