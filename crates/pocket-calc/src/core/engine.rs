//! The calculator state machine.
//!
//! Immediate-execution semantics: operators evaluate left to right with no
//! precedence, each new operator resolving the pending one first. Operands
//! live as text so that digit entry, backspace and display projection are
//! all plain string edits; they are parsed to `f64` only at compute time.

use tracing::{debug, trace};

use crate::core::tape::Tape;
use crate::core::{format_number, BinaryOp, CalcResult, MemoryOp, MemoryRegister, UnaryFunction};

/// Immediate-execution calculator engine.
///
/// Invariants:
/// - `current` is never empty ("0" when cleared) and holds at most one `.`;
/// - `previous` is empty exactly when no binary operation is pending;
/// - the memory register survives [`Engine::clear`].
#[derive(Debug, Clone)]
pub struct Engine {
    /// Operand being entered, or the last computed result
    current: String,
    /// Operand captured when an operator was chosen; empty = nothing pending
    previous: String,
    /// Operator awaiting its second operand
    pending: Option<BinaryOp>,
    /// M-key accumulator
    memory: MemoryRegister,
    /// Record of completed computations
    tape: Tape,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an engine in its cleared state
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: String::from("0"),
            previous: String::new(),
            pending: None,
            memory: MemoryRegister::new(),
            tape: Tape::new(),
        }
    }

    /// Creates an engine with a custom tape length
    #[must_use]
    pub fn with_tape_capacity(max_entries: usize) -> Self {
        Self {
            tape: Tape::with_capacity(max_entries),
            ..Self::new()
        }
    }

    /// Clears the operand state: current back to "0", nothing pending.
    ///
    /// The memory register and the tape are left alone.
    pub fn clear(&mut self) {
        trace!("clear");
        self.current.clear();
        self.current.push('0');
        self.previous.clear();
        self.pending = None;
    }

    /// Removes the last character of the current operand.
    ///
    /// An emptied operand becomes "0" again, so repeated backspace converges
    /// there and stays.
    pub fn backspace(&mut self) {
        self.current.pop();
        if self.current.is_empty() {
            self.current.push('0');
        }
    }

    /// Enters a digit or the decimal point.
    ///
    /// A second decimal point is ignored. A digit entered on a bare "0"
    /// replaces it, so operands never grow leading zeros. Anything other
    /// than `0-9` and `.` is ignored outright.
    pub fn press(&mut self, symbol: char) {
        if !symbol.is_ascii_digit() && symbol != '.' {
            return;
        }
        if symbol == '.' && self.current.contains('.') {
            return;
        }
        if self.current == "0" && symbol != '.' {
            self.current.clear();
        }
        self.current.push(symbol);
        trace!(current = %self.current, "press");
    }

    /// Selects a binary operator.
    ///
    /// If an operation is already pending, it is resolved first (left-to-right
    /// chaining). The new operator is recorded even when that chained compute
    /// fails: the failure has already reset the operand state, and the
    /// operator then applies to the cleared "0". The error is still returned
    /// so the frontend can present it.
    pub fn choose(&mut self, op: BinaryOp) -> CalcResult<()> {
        if self.current.is_empty() {
            return Ok(());
        }
        let chained = if self.previous.is_empty() {
            Ok(())
        } else {
            self.compute()
        };
        self.pending = Some(op);
        self.previous = std::mem::replace(&mut self.current, String::from("0"));
        debug!(op = op.symbol(), previous = %self.previous, "operator chosen");
        chained
    }

    /// Resolves the pending binary operation.
    ///
    /// No pending operator, or an operand that does not parse, is a silent
    /// no-op. Division by zero reports the condition and performs a full
    /// [`Engine::clear`] instead of producing a result.
    pub fn compute(&mut self) -> CalcResult<()> {
        let Some(op) = self.pending else {
            return Ok(());
        };
        let (Ok(lhs), Ok(rhs)) = (self.previous.parse::<f64>(), self.current.parse::<f64>())
        else {
            return Ok(());
        };

        match op.apply(lhs, rhs) {
            Ok(result) => {
                debug!(lhs, op = op.symbol(), rhs, result, "computed");
                self.tape.record_binary(lhs, op, rhs, result);
                self.current = format_number(result);
                self.previous.clear();
                self.pending = None;
                Ok(())
            }
            Err(err) => {
                debug!(%err, "compute failed, resetting");
                self.clear();
                Err(err)
            }
        }
    }

    /// Applies a unary function to the current operand.
    ///
    /// The pending operation is untouched either way. Parse failure is a
    /// silent no-op; a rejected input (negative root, reciprocal of zero)
    /// reports the condition and leaves the operand as it was.
    pub fn apply(&mut self, function: UnaryFunction) -> CalcResult<()> {
        let Ok(value) = self.current.parse::<f64>() else {
            return Ok(());
        };
        let result = function.apply(value)?;
        debug!(function = function.symbol(), value, result, "function applied");
        self.tape.record_unary(function, value, result);
        self.current = format_number(result);
        Ok(())
    }

    /// Executes a memory key and returns the register value afterwards.
    ///
    /// The value is returned even by MC/MR, which may not change it: the
    /// memory display is rewritten after every memory key, changed or not.
    /// M+/M- treat an unparseable operand as zero.
    pub fn memory(&mut self, op: MemoryOp) -> f64 {
        match op {
            MemoryOp::Clear => self.memory.clear(),
            MemoryOp::Recall => self.current = format_number(self.memory.value()),
            MemoryOp::Add => self.memory.add(self.current.parse().unwrap_or(0.0)),
            MemoryOp::Subtract => self.memory.subtract(self.current.parse().unwrap_or(0.0)),
        }
        trace!(op = op.label(), value = self.memory.value(), "memory key");
        self.memory.value()
    }

    // ===== Display projections =====

    /// Current-operand line of the display
    #[must_use]
    pub fn display(&self) -> &str {
        &self.current
    }

    /// Previous-operand line: `"{operand} {op}"` while an operation is
    /// pending, empty otherwise
    #[must_use]
    pub fn pending_display(&self) -> String {
        match self.pending {
            Some(op) => format!("{} {}", self.previous, op.symbol()),
            None => String::new(),
        }
    }

    /// Memory display text (`"Memory: {value}"`)
    #[must_use]
    pub fn memory_display(&self) -> String {
        self.memory.display()
    }

    // ===== State accessors =====

    /// The operator awaiting its second operand, if any
    #[must_use]
    pub fn pending(&self) -> Option<BinaryOp> {
        self.pending
    }

    /// The captured previous operand ("" when nothing is pending)
    #[must_use]
    pub fn previous_operand(&self) -> &str {
        &self.previous
    }

    /// The memory register value
    #[must_use]
    pub fn memory_value(&self) -> f64 {
        self.memory.value()
    }

    /// The calculation tape
    #[must_use]
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Overwrites the current operand (paste, recall, tests)
    pub fn set_operand(&mut self, text: &str) {
        self.current = text.to_string();
    }
}
