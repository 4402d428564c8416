//! Keyboard input handling.
//!
//! Maps crossterm key events to calculator actions. The plain keys match
//! the browser frontend's keydown map (digits, `. + - * /`, Enter,
//! Backspace, Escape); the function and memory keys follow
//! desktop-calculator conventions (`@ % q r`, Ctrl-L/R/P/Q).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{BinaryOp, MemoryOp, UnaryFunction};

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Enter a digit or decimal point
    Press(char),
    /// Select a binary operator
    Choose(BinaryOp),
    /// Resolve the pending operation
    Compute,
    /// Apply a unary function
    Apply(UnaryFunction),
    /// Execute a memory key
    Memory(MemoryOp),
    /// Remove the last entered character
    Backspace,
    /// Clear the operand state
    Clear,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        // Ctrl combinations: quit and the memory keys
        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c') => KeyAction::Quit,
                KeyCode::Char('l') => KeyAction::Memory(MemoryOp::Clear),
                KeyCode::Char('r') => KeyAction::Memory(MemoryOp::Recall),
                KeyCode::Char('p') => KeyAction::Memory(MemoryOp::Add),
                KeyCode::Char('q') => KeyAction::Memory(MemoryOp::Subtract),
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => KeyAction::Press(c),
            KeyCode::Char('=') | KeyCode::Enter => KeyAction::Compute,
            KeyCode::Char('@') => KeyAction::Apply(UnaryFunction::SquareRoot),
            KeyCode::Char('%') => KeyAction::Apply(UnaryFunction::Percent),
            KeyCode::Char('q') => KeyAction::Apply(UnaryFunction::Square),
            KeyCode::Char('r') => KeyAction::Apply(UnaryFunction::Reciprocal),
            KeyCode::Char(c) => match BinaryOp::from_char(c) {
                Some(op) => KeyAction::Choose(op),
                None => KeyAction::None,
            },
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Esc | KeyCode::Delete => KeyAction::Clear,
            _ => KeyAction::None,
        }
    }
}
