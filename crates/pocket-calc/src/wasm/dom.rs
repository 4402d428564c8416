//! Mock DOM for browser-free testing.
//!
//! Models just enough of the calculator page to exercise the full browser
//! wiring without web-sys: elements addressable by id, dispatched events,
//! and an alert log standing in for `window.alert`.

use std::collections::HashMap;

/// A DOM element in the mock page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element id
    pub id: String,
    /// Tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// CSS classes
    pub classes: Vec<String>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            classes: Vec::new(),
        }
    }

    /// Sets the element id
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Checks whether the element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Events the calculator page reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click on a button
    Click {
        /// The id of the clicked element
        element_id: String,
    },
    /// Key press anywhere on the page
    KeyDown {
        /// The `KeyboardEvent.key` value
        key: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates a key press event
    #[must_use]
    pub fn key_down(key: &str) -> Self {
        Self::KeyDown {
            key: key.to_string(),
        }
    }
}

/// Mock DOM holding the calculator page state
#[derive(Debug, Default)]
pub struct MockDom {
    /// Elements by id
    elements: HashMap<String, DomElement>,
    /// Every dispatched event, for verification
    event_history: Vec<DomEvent>,
    /// Messages the page would have shown via `window.alert`
    alerts: Vec<String>,
}

impl MockDom {
    /// Creates an empty mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the calculator page: the two operand lines, the memory
    /// display, all in their initial state
    #[must_use]
    pub fn calculator() -> Self {
        let mut dom = Self::new();
        dom.register_element(
            DomElement::new("div")
                .with_id("previous-operand")
                .with_class("previous-operand"),
        );
        dom.register_element(
            DomElement::new("div")
                .with_id("current-operand")
                .with_class("current-operand")
                .with_text("0"),
        );
        dom.register_element(
            DomElement::new("div")
                .with_id("memory-display")
                .with_class("memory-display")
                .with_text("Memory: 0"),
        );
        dom
    }

    /// Registers an element for id lookup
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Gets an element by id
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Gets a mutable element by id
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// Records a dispatched event
    pub fn dispatch_event(&mut self, event: DomEvent) {
        self.event_history.push(event);
    }

    /// The dispatched events so far
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Clears the event history
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }

    /// Records an alert message
    pub fn alert(&mut self, message: impl Into<String>) {
        self.alerts.push(message.into());
    }

    /// The alert messages shown so far
    #[must_use]
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Clears the alert log
    pub fn clear_alerts(&mut self) {
        self.alerts.clear();
    }

    /// Updates element text by id
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(element) = self.elements.get_mut(id) {
            element.set_text(text);
        }
    }

    /// Gets element text by id
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }
}
