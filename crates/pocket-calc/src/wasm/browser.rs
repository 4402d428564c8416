//! Browser bindings via wasm-bindgen.
//!
//! The page script constructs one `BrowserCalculator`, forwards button
//! clicks and keydown events to it, and rewrites its three display elements
//! from the getters after every call. A returned message means the page
//! should surface that condition to the user; how is the page's choice.

use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::core::Engine;
use crate::wasm::keypad::{key_to_action, DomKeypad, KeypadAction};

/// Browser calculator - the WASM entry point
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    engine: Engine,
    keypad: DomKeypad,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Creates a new browser calculator
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self {
            engine: Engine::new(),
            keypad: DomKeypad::new(),
        }
    }

    /// Current-operand line
    #[wasm_bindgen(getter)]
    pub fn current_display(&self) -> String {
        self.engine.display().to_string()
    }

    /// Previous-operand line (operand plus pending operator)
    #[wasm_bindgen(getter)]
    pub fn previous_display(&self) -> String {
        self.engine.pending_display()
    }

    /// Memory display line
    #[wasm_bindgen(getter)]
    pub fn memory_display(&self) -> String {
        self.engine.memory_display()
    }

    /// Handles a button click by element id. Returns a message to surface,
    /// if the action raised a condition.
    pub fn handle_button(&mut self, button_id: &str) -> Option<String> {
        let action = self.keypad.find_button_by_id(button_id)?.action;
        self.perform(action)
    }

    /// Handles a keydown by `KeyboardEvent.key`. Returns a message to
    /// surface, if the action raised a condition.
    pub fn handle_key(&mut self, key: &str) -> Option<String> {
        let action = key_to_action(key)?;
        self.perform(action)
    }

    fn perform(&mut self, action: KeypadAction) -> Option<String> {
        let result = match action {
            KeypadAction::Digit(d) => {
                self.engine.press(char::from(b'0' + d.min(9)));
                Ok(())
            }
            KeypadAction::Decimal => {
                self.engine.press('.');
                Ok(())
            }
            KeypadAction::Operator(op) => self.engine.choose(op),
            KeypadAction::Function(function) => self.engine.apply(function),
            KeypadAction::Equals => self.engine.compute(),
            KeypadAction::Memory(op) => {
                self.engine.memory(op);
                Ok(())
            }
            KeypadAction::Clear => {
                self.engine.clear();
                Ok(())
            }
            KeypadAction::Delete => {
                self.engine.backspace();
                Ok(())
            }
        };
        result.err().map(|condition| format!("{condition}!"))
    }
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Initializes the WASM module in the browser
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"Pocket calculator WASM initialized".into());
}
