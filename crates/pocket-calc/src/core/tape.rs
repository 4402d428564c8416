//! Calculation tape: a bounded record of completed computations.
//!
//! Like the paper roll on a printing desk calculator. Only successful
//! computations are recorded; rejected ones (divide by zero, negative root)
//! leave no trace.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::core::{format_number, BinaryOp, UnaryFunction};

/// A single printed line on the tape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TapeEntry {
    /// A resolved binary operation, e.g. `5 + 3 = 8`
    Binary {
        /// Left operand (the captured previous operand)
        lhs: f64,
        /// The operator that was pending
        op: BinaryOp,
        /// Right operand (the current operand at compute time)
        rhs: f64,
        /// Computed result
        result: f64,
    },
    /// An applied unary function, e.g. `√9 = 3`
    Unary {
        /// The function that was applied
        function: UnaryFunction,
        /// The operand it was applied to
        operand: f64,
        /// Computed result
        result: f64,
    },
}

impl TapeEntry {
    /// Returns a formatted display string
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Binary { lhs, op, rhs, result } => format!(
                "{} {} {} = {}",
                format_number(*lhs),
                op.symbol(),
                format_number(*rhs),
                format_number(*result)
            ),
            Self::Unary {
                function,
                operand,
                result,
            } => format!(
                "{} = {}",
                function.notation(&format_number(*operand)),
                format_number(*result)
            ),
        }
    }
}

/// Bounded queue of tape entries, oldest dropped first
#[derive(Debug, Clone)]
pub struct Tape {
    entries: VecDeque<TapeEntry>,
    max_entries: usize,
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

impl Tape {
    /// Default maximum tape length
    pub const DEFAULT_MAX_ENTRIES: usize = 100;

    /// Creates an empty tape with the default capacity
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries: Self::DEFAULT_MAX_ENTRIES,
        }
    }

    /// Creates a tape with a custom maximum length
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
        }
    }

    /// Appends an entry, dropping the oldest when full
    pub fn push(&mut self, entry: TapeEntry) {
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Records a resolved binary operation
    pub fn record_binary(&mut self, lhs: f64, op: BinaryOp, rhs: f64, result: f64) {
        self.push(TapeEntry::Binary {
            lhs,
            op,
            rhs,
            result,
        });
    }

    /// Records an applied unary function
    pub fn record_unary(&mut self, function: UnaryFunction, operand: f64, result: f64) {
        self.push(TapeEntry::Unary {
            function,
            operand,
            result,
        });
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maximum number of entries
    #[must_use]
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Clears the tape
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates oldest first
    pub fn iter(&self) -> impl Iterator<Item = &TapeEntry> {
        self.entries.iter()
    }

    /// Iterates newest first
    pub fn iter_rev(&self) -> impl Iterator<Item = &TapeEntry> {
        self.entries.iter().rev()
    }

    /// Returns the most recent entry
    #[must_use]
    pub fn last(&self) -> Option<&TapeEntry> {
        self.entries.back()
    }

    /// Serializes the tape to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries.iter().collect::<Vec<_>>())
    }

    /// Deserializes a tape from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<TapeEntry> = serde_json::from_str(json)?;
        let mut tape = Self::new();
        for entry in entries {
            tape.push(entry);
        }
        Ok(tape)
    }

    /// Exports the tape as one display line per entry
    #[must_use]
    pub fn export_formatted(&self) -> String {
        self.entries
            .iter()
            .map(TapeEntry::display)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
