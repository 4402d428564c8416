//! Scripted key sequences.
//!
//! Runs a sequence like `12+34=` through the same browser wiring the page
//! uses, one key per character, and collects the final page state. Unlike
//! the page, a key nothing maps to is an error here - a typo in a script
//! should not be silently ignored.

use pocket_calc::wasm::{key_to_action, DomShell};

use crate::error::{CliError, CliResult};

/// Final page state after a scripted sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalOutcome {
    /// Current-operand line
    pub current: String,
    /// Previous-operand line
    pub previous: String,
    /// Memory display line
    pub memory: String,
    /// Alerts the page raised along the way
    pub alerts: Vec<String>,
    /// Tape lines, oldest first
    pub tape: Vec<String>,
    /// Tape as JSON
    pub tape_json: String,
}

/// Runs a key sequence and returns the resulting page state.
///
/// Whitespace is skipped so sequences can be written readably
/// (`"12 + 34 ="`). Every other character must map to a calculator key.
pub fn run_sequence(sequence: &str) -> CliResult<EvalOutcome> {
    let mut shell = DomShell::new();

    for key in sequence.chars() {
        if key.is_whitespace() {
            continue;
        }
        let key = key.to_string();
        if key_to_action(&key).is_none() {
            return Err(CliError::invalid_key(key.chars().next().unwrap_or('?')));
        }
        shell.key(&key);
    }

    let tape = shell
        .engine()
        .tape()
        .iter()
        .map(|entry| entry.display())
        .collect();
    let tape_json = shell.engine().tape().to_json()?;

    Ok(EvalOutcome {
        current: shell.current_text(),
        previous: shell.previous_text(),
        memory: shell.memory_text(),
        alerts: shell.dom().alerts().to_vec(),
        tape,
        tape_json,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_addition() {
        let outcome = run_sequence("12+34=").unwrap();
        assert_eq!(outcome.current, "46");
        assert_eq!(outcome.previous, "");
        assert!(outcome.alerts.is_empty());
    }

    #[test]
    fn test_whitespace_is_skipped() {
        let outcome = run_sequence("12 + 34 =").unwrap();
        assert_eq!(outcome.current, "46");
    }

    #[test]
    fn test_chained_operators() {
        let outcome = run_sequence("5+3*2=").unwrap();
        assert_eq!(outcome.current, "16");
        assert_eq!(outcome.tape, vec!["5 + 3 = 8", "8 × 2 = 16"]);
    }

    #[test]
    fn test_pending_operation_left_visible() {
        let outcome = run_sequence("9/").unwrap();
        assert_eq!(outcome.previous, "9 ÷");
        assert_eq!(outcome.current, "0");
    }

    #[test]
    fn test_divide_by_zero_alert() {
        let outcome = run_sequence("8/0=").unwrap();
        assert_eq!(outcome.current, "0");
        assert_eq!(outcome.alerts, ["Cannot divide by zero!"]);
    }

    #[test]
    fn test_invalid_key_rejected() {
        let err = run_sequence("12a=").unwrap_err();
        assert!(err.to_string().contains("Invalid key 'a'"));
    }

    #[test]
    fn test_tape_json_parses() {
        let outcome = run_sequence("6*7=").unwrap();
        assert!(outcome.tape_json.contains("Multiply"));
    }

    #[test]
    fn test_empty_sequence() {
        let outcome = run_sequence("").unwrap();
        assert_eq!(outcome.current, "0");
        assert_eq!(outcome.memory, "Memory: 0");
        assert!(outcome.tape.is_empty());
    }
}
