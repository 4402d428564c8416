//! DOM shell: the engine wired to the (mock) calculator page.
//!
//! Plays the role of the page script: receives click and keydown events,
//! translates them through the keypad map, drives the engine, and rewrites
//! the display elements afterwards. Conditions a page would surface with
//! `window.alert` land in the DOM's alert log.

use tracing::debug;

use super::dom::{DomEvent, MockDom};
use super::keypad::{key_to_action, DomKeypad, KeypadAction};
use crate::core::{CalcError, Engine};

/// Engine plus page state, one dispatch per browser event
#[derive(Debug)]
pub struct DomShell {
    /// The calculator engine
    engine: Engine,
    /// The page
    dom: MockDom,
    /// Button definitions for click routing
    keypad: DomKeypad,
    /// Condition raised by the last fallible action, if any
    last_condition: Option<CalcError>,
}

impl Default for DomShell {
    fn default() -> Self {
        Self::new()
    }
}

impl DomShell {
    /// Creates a shell with the calculator page and keypad buttons in place
    #[must_use]
    pub fn new() -> Self {
        let mut dom = MockDom::calculator();
        let keypad = DomKeypad::new();
        for element in keypad.create_dom_elements() {
            dom.register_element(element);
        }
        Self {
            engine: Engine::new(),
            dom,
            keypad,
            last_condition: None,
        }
    }

    /// Returns the engine
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Returns the page
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Returns the page mutably
    pub fn dom_mut(&mut self) -> &mut MockDom {
        &mut self.dom
    }

    /// The condition raised by the last fallible action, if any
    #[must_use]
    pub fn last_condition(&self) -> Option<CalcError> {
        self.last_condition
    }

    /// Dispatches a DOM event and re-renders the displays
    pub fn dispatch(&mut self, event: DomEvent) {
        let action = match &event {
            DomEvent::Click { element_id } => self
                .keypad
                .find_button_by_id(element_id)
                .map(|button| button.action),
            DomEvent::KeyDown { key } => key_to_action(key),
        };
        self.dom.dispatch_event(event);

        if let Some(action) = action {
            self.perform(action);
        }
        self.update_display();
    }

    /// Convenience: click a button by element id
    pub fn click(&mut self, element_id: &str) {
        self.dispatch(DomEvent::click(element_id));
    }

    /// Convenience: press a keyboard key
    pub fn key(&mut self, key: &str) {
        self.dispatch(DomEvent::key_down(key));
    }

    /// Executes one keypad action against the engine
    fn perform(&mut self, action: KeypadAction) {
        match action {
            KeypadAction::Digit(d) => self.engine.press(char::from(b'0' + d.min(9))),
            KeypadAction::Decimal => self.engine.press('.'),
            KeypadAction::Operator(op) => {
                let result = self.engine.choose(op);
                self.surface(result);
            }
            KeypadAction::Function(function) => {
                let result = self.engine.apply(function);
                self.surface(result);
            }
            KeypadAction::Equals => {
                let result = self.engine.compute();
                self.surface(result);
            }
            KeypadAction::Memory(op) => {
                self.engine.memory(op);
                // Memory display is rewritten after every memory key,
                // even MC/MR which may not change the value
                self.dom
                    .set_element_text("memory-display", &self.engine.memory_display());
            }
            KeypadAction::Clear => {
                self.engine.clear();
                self.last_condition = None;
            }
            KeypadAction::Delete => self.engine.backspace(),
        }
    }

    /// Records a condition and raises the page alert for it
    fn surface(&mut self, result: Result<(), CalcError>) {
        match result {
            Ok(()) => self.last_condition = None,
            Err(condition) => {
                debug!(%condition, "surfacing condition as alert");
                self.last_condition = Some(condition);
                self.dom.alert(format!("{condition}!"));
            }
        }
    }

    /// Rewrites the two operand lines from the engine projections
    fn update_display(&mut self) {
        self.dom
            .set_element_text("previous-operand", &self.engine.pending_display());
        self.dom
            .set_element_text("current-operand", self.engine.display());
    }

    /// Text of the current-operand line
    #[must_use]
    pub fn current_text(&self) -> String {
        self.dom
            .get_element_text("current-operand")
            .unwrap_or_default()
            .to_string()
    }

    /// Text of the previous-operand line
    #[must_use]
    pub fn previous_text(&self) -> String {
        self.dom
            .get_element_text("previous-operand")
            .unwrap_or_default()
            .to_string()
    }

    /// Text of the memory display
    #[must_use]
    pub fn memory_text(&self) -> String {
        self.dom
            .get_element_text("memory-display")
            .unwrap_or_default()
            .to_string()
    }
}
