//! Browser keypad: button definitions and the keyboard map.
//!
//! Button ids and classes are shared between the mock DOM and the real
//! page, so the same wiring drives both.

use super::dom::DomElement;
use crate::core::{BinaryOp, MemoryOp, UnaryFunction};

/// Actions the calculator page can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadAction {
    /// Enter a digit (0-9)
    Digit(u8),
    /// Enter the decimal point
    Decimal,
    /// Select a binary operator
    Operator(BinaryOp),
    /// Apply a unary function
    Function(UnaryFunction),
    /// Execute a memory key
    Memory(MemoryOp),
    /// Resolve the pending operation
    Equals,
    /// Clear the operand state
    Clear,
    /// Remove the last entered character
    Delete,
}

impl KeypadAction {
    /// Returns the button label for this action
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Function(function) => function.symbol().to_string(),
            Self::Memory(op) => op.label().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::Delete => "DEL".to_string(),
        }
    }

    /// Returns the CSS class for this kind of button
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Digit(_) | Self::Decimal => "number",
            Self::Operator(_) => "operator",
            Self::Function(_) => "function-button",
            Self::Memory(_) => "memory-button",
            Self::Equals => "equals",
            Self::Clear => "clear",
            Self::Delete => "delete",
        }
    }
}

/// A single button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The action this button performs
    pub action: KeypadAction,
    /// The DOM element id for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButtonDef {
    /// Creates a new button definition
    #[must_use]
    pub fn new(action: KeypadAction, row: usize, col: usize) -> Self {
        let id = match action {
            KeypadAction::Digit(d) => format!("btn-{d}"),
            KeypadAction::Decimal => "btn-decimal".to_string(),
            KeypadAction::Operator(op) => format!("btn-{}", op_name(op)),
            KeypadAction::Function(function) => format!("btn-{}", function_name(function)),
            KeypadAction::Memory(op) => format!("btn-{}", memory_name(op)),
            KeypadAction::Equals => "btn-equals".to_string(),
            KeypadAction::Clear => "btn-clear".to_string(),
            KeypadAction::Delete => "btn-delete".to_string(),
        };
        Self {
            action,
            id,
            row,
            col,
        }
    }
}

fn op_name(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::Add => "plus",
        BinaryOp::Subtract => "minus",
        BinaryOp::Multiply => "times",
        BinaryOp::Divide => "divide",
    }
}

fn function_name(function: UnaryFunction) -> &'static str {
    match function {
        UnaryFunction::SquareRoot => "sqrt",
        UnaryFunction::Percent => "percent",
        UnaryFunction::Square => "square",
        UnaryFunction::Reciprocal => "reciprocal",
    }
}

fn memory_name(op: MemoryOp) -> &'static str {
    match op {
        MemoryOp::Clear => "mc",
        MemoryOp::Recall => "mr",
        MemoryOp::Add => "m-plus",
        MemoryOp::Subtract => "m-minus",
    }
}

/// The browser keypad layout, mirroring the TUI one
/// ```text
/// [MC ] [MR ] [M+ ] [M- ]
/// [√  ] [%  ] [x² ] [1/x]
/// [C  ] [DEL] [÷  ] [×  ]
/// [7  ] [8  ] [9  ] [-  ]
/// [4  ] [5  ] [6  ] [+  ]
/// [1  ] [2  ] [3  ] [=  ]
/// [0  ] [.  ]
/// ```
#[derive(Debug, Clone)]
pub struct DomKeypad {
    buttons: Vec<KeypadButtonDef>,
}

impl Default for DomKeypad {
    fn default() -> Self {
        Self::new()
    }
}

impl DomKeypad {
    /// Creates the standard calculator keypad
    #[must_use]
    pub fn new() -> Self {
        let rows: Vec<Vec<KeypadAction>> = vec![
            vec![
                KeypadAction::Memory(MemoryOp::Clear),
                KeypadAction::Memory(MemoryOp::Recall),
                KeypadAction::Memory(MemoryOp::Add),
                KeypadAction::Memory(MemoryOp::Subtract),
            ],
            vec![
                KeypadAction::Function(UnaryFunction::SquareRoot),
                KeypadAction::Function(UnaryFunction::Percent),
                KeypadAction::Function(UnaryFunction::Square),
                KeypadAction::Function(UnaryFunction::Reciprocal),
            ],
            vec![
                KeypadAction::Clear,
                KeypadAction::Delete,
                KeypadAction::Operator(BinaryOp::Divide),
                KeypadAction::Operator(BinaryOp::Multiply),
            ],
            vec![
                KeypadAction::Digit(7),
                KeypadAction::Digit(8),
                KeypadAction::Digit(9),
                KeypadAction::Operator(BinaryOp::Subtract),
            ],
            vec![
                KeypadAction::Digit(4),
                KeypadAction::Digit(5),
                KeypadAction::Digit(6),
                KeypadAction::Operator(BinaryOp::Add),
            ],
            vec![
                KeypadAction::Digit(1),
                KeypadAction::Digit(2),
                KeypadAction::Digit(3),
                KeypadAction::Equals,
            ],
            vec![KeypadAction::Digit(0), KeypadAction::Decimal],
        ];

        let buttons = rows
            .into_iter()
            .enumerate()
            .flat_map(|(row, actions)| {
                actions
                    .into_iter()
                    .enumerate()
                    .map(move |(col, action)| KeypadButtonDef::new(action, row, col))
            })
            .collect();

        Self { buttons }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Finds a button by element id
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the button id for an action
    #[must_use]
    pub fn button_id(&self, action: KeypadAction) -> Option<&str> {
        self.buttons
            .iter()
            .find(|b| b.action == action)
            .map(|b| b.id.as_str())
    }

    /// Creates DOM elements for all buttons
    #[must_use]
    pub fn create_dom_elements(&self) -> Vec<DomElement> {
        self.buttons
            .iter()
            .map(|button| {
                DomElement::new("button")
                    .with_id(&button.id)
                    .with_text(&button.action.label())
                    .with_class(button.action.css_class())
            })
            .collect()
    }
}

/// Maps a `KeyboardEvent.key` value to a keypad action.
///
/// Digits and the decimal point enter, `+ -` select directly, `*` and `/`
/// map to `×` and `÷`, Enter/`=` compute, Backspace deletes, Escape
/// clears. Everything else is ignored.
#[must_use]
pub fn key_to_action(key: &str) -> Option<KeypadAction> {
    match key {
        "." => Some(KeypadAction::Decimal),
        "+" => Some(KeypadAction::Operator(BinaryOp::Add)),
        "-" => Some(KeypadAction::Operator(BinaryOp::Subtract)),
        "*" => Some(KeypadAction::Operator(BinaryOp::Multiply)),
        "/" => Some(KeypadAction::Operator(BinaryOp::Divide)),
        "Enter" | "=" => Some(KeypadAction::Equals),
        "Backspace" => Some(KeypadAction::Delete),
        "Escape" => Some(KeypadAction::Clear),
        _ => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_digit() => {
                    Some(KeypadAction::Digit(c as u8 - b'0'))
                }
                _ => None,
            }
        }
    }
}
