//! TUI application state.
//!
//! Wraps the engine with what the terminal frontend needs on top: the last
//! user-facing condition, shown in the status line without blocking, and
//! the quit flag.

use crate::core::{BinaryOp, CalcError, Engine, MemoryOp, UnaryFunction};
use crate::tui::input::KeyAction;

/// Calculator application state
#[derive(Debug, Default)]
pub struct CalculatorApp {
    /// The calculator engine
    engine: Engine,
    /// Condition raised by the last fallible action, if any
    condition: Option<CalcError>,
    /// Whether the app should quit
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates a new calculator app
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: Engine::new(),
            condition: None,
            should_quit: false,
        }
    }

    /// Returns the engine
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Returns the engine mutably
    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    /// The condition raised by the last fallible action, if any
    #[must_use]
    pub fn condition(&self) -> Option<CalcError> {
        self.condition
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Clears the operand state and the status line
    pub fn clear(&mut self) {
        self.engine.clear();
        self.condition = None;
    }

    /// Selects a binary operator, capturing any chained-compute condition
    pub fn choose(&mut self, op: BinaryOp) {
        self.condition = self.engine.choose(op).err();
    }

    /// Resolves the pending operation, capturing any condition
    pub fn compute(&mut self) {
        self.condition = self.engine.compute().err();
    }

    /// Applies a unary function, capturing any condition
    pub fn apply(&mut self, function: UnaryFunction) {
        self.condition = self.engine.apply(function).err();
    }

    /// Executes a memory key
    pub fn memory(&mut self, op: MemoryOp) {
        self.engine.memory(op);
    }

    /// Dispatches a key action. Returns true when the app should quit.
    pub fn dispatch(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Press(symbol) => self.engine.press(symbol),
            KeyAction::Choose(op) => self.choose(op),
            KeyAction::Compute => self.compute(),
            KeyAction::Apply(function) => self.apply(function),
            KeyAction::Memory(op) => self.memory(op),
            KeyAction::Backspace => self.engine.backspace(),
            KeyAction::Clear => self.clear(),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
        self.should_quit
    }

    /// Status line text: the last condition, or "Ready"
    #[must_use]
    pub fn status_line(&self) -> String {
        match self.condition {
            Some(condition) => format!("✗ {condition}"),
            None => "Ready".to_string(),
        }
    }
}
