//! Visual keypad for the TUI frontend.
//!
//! Same button panel as the browser frontend: memory row, function row,
//! then the digit grid with operators down the right side.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::{BinaryOp, MemoryOp, UnaryFunction};

/// Actions that keypad buttons can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
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
    Backspace,
}

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The label shown on the button
    pub label: &'static str,
    /// Whether the button is currently highlighted
    pub pressed: bool,
    /// The action this button performs
    pub action: ButtonAction,
}

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

impl KeypadButton {
    /// Creates a digit button
    #[must_use]
    pub fn digit(d: u8) -> Self {
        Self {
            label: DIGIT_LABELS[usize::from(d.min(9))],
            pressed: false,
            action: ButtonAction::Digit(d),
        }
    }

    /// Creates an operator button
    #[must_use]
    pub fn operator(op: BinaryOp) -> Self {
        Self {
            label: op.symbol(),
            pressed: false,
            action: ButtonAction::Operator(op),
        }
    }

    /// Creates a unary function button
    #[must_use]
    pub fn function(function: UnaryFunction) -> Self {
        Self {
            label: function.symbol(),
            pressed: false,
            action: ButtonAction::Function(function),
        }
    }

    /// Creates a memory key button
    #[must_use]
    pub fn memory(op: MemoryOp) -> Self {
        Self {
            label: op.label(),
            pressed: false,
            action: ButtonAction::Memory(op),
        }
    }

    /// Creates the decimal point button
    #[must_use]
    pub fn decimal() -> Self {
        Self {
            label: ".",
            pressed: false,
            action: ButtonAction::Decimal,
        }
    }

    /// Creates the equals button
    #[must_use]
    pub fn equals() -> Self {
        Self {
            label: "=",
            pressed: false,
            action: ButtonAction::Equals,
        }
    }

    /// Creates the clear button
    #[must_use]
    pub fn clear() -> Self {
        Self {
            label: "C",
            pressed: false,
            action: ButtonAction::Clear,
        }
    }

    /// Creates the backspace button
    #[must_use]
    pub fn backspace() -> Self {
        Self {
            label: "⌫",
            pressed: false,
            action: ButtonAction::Backspace,
        }
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The keypad layout
/// ```text
/// [MC] [MR] [M+] [M-]
/// [√ ] [% ] [x²] [1/x]
/// [C ] [⌫ ] [÷ ] [× ]
/// [7 ] [8 ] [9 ] [- ]
/// [4 ] [5 ] [6 ] [+ ]
/// [1 ] [2 ] [3 ] [= ]
/// [0 ] [. ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons grouped by row
    rows: Vec<Vec<KeypadButton>>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard calculator keypad
    #[must_use]
    pub fn new() -> Self {
        let rows = vec![
            vec![
                KeypadButton::memory(MemoryOp::Clear),
                KeypadButton::memory(MemoryOp::Recall),
                KeypadButton::memory(MemoryOp::Add),
                KeypadButton::memory(MemoryOp::Subtract),
            ],
            vec![
                KeypadButton::function(UnaryFunction::SquareRoot),
                KeypadButton::function(UnaryFunction::Percent),
                KeypadButton::function(UnaryFunction::Square),
                KeypadButton::function(UnaryFunction::Reciprocal),
            ],
            vec![
                KeypadButton::clear(),
                KeypadButton::backspace(),
                KeypadButton::operator(BinaryOp::Divide),
                KeypadButton::operator(BinaryOp::Multiply),
            ],
            vec![
                KeypadButton::digit(7),
                KeypadButton::digit(8),
                KeypadButton::digit(9),
                KeypadButton::operator(BinaryOp::Subtract),
            ],
            vec![
                KeypadButton::digit(4),
                KeypadButton::digit(5),
                KeypadButton::digit(6),
                KeypadButton::operator(BinaryOp::Add),
            ],
            vec![
                KeypadButton::digit(1),
                KeypadButton::digit(2),
                KeypadButton::digit(3),
                KeypadButton::equals(),
            ],
            vec![KeypadButton::digit(0), KeypadButton::decimal()],
        ];
        Self { rows }
    }

    /// Returns the number of rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the widest row length
    #[must_use]
    pub fn col_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Returns the total number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.rows.get(row)?.get(col)
    }

    /// Finds a button position by its label
    #[must_use]
    pub fn find_button_by_label(&self, label: &str) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(r, row)| {
            row.iter()
                .position(|button| button.label == label)
                .map(|c| (r, c))
        })
    }

    /// Highlights exactly the button with the given label
    pub fn highlight_label(&mut self, label: &str) {
        for row in &mut self.rows {
            for button in row {
                button.set_pressed(button.label == label);
            }
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for row in &mut self.rows {
            for button in row {
                button.set_pressed(false);
            }
        }
    }

    /// Iterates buttons with their (row, col) positions
    pub fn buttons_with_positions(
        &self,
    ) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate().map(move |(c, button)| ((r, c), button))
        })
    }

    /// Converts a click position inside `area` to a button
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<&KeypadButton> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }
        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Account for the border
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let btn_width = (area.width - 2) / self.col_count() as u16;
        let btn_height = (area.height - 2) / self.row_count() as u16;
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = ((rel_x - 1) / btn_width) as usize;
        let row = ((rel_y - 1) / btn_height) as usize;
        self.get_button_at(row, col)
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        let cols = self.keypad.col_count() as u16;
        let rows = self.keypad.row_count() as u16;
        if inner.width < cols || inner.height < rows {
            return; // Too small to render
        }

        let btn_width = inner.width / cols;
        let btn_height = inner.height / rows;

        for ((row, col), button) in self.keypad.buttons_with_positions() {
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);

            let style = if button.pressed {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                match button.action {
                    ButtonAction::Digit(_) | ButtonAction::Decimal => {
                        Style::default().fg(Color::White)
                    }
                    ButtonAction::Operator(_) | ButtonAction::Equals => {
                        Style::default().fg(Color::Yellow)
                    }
                    ButtonAction::Clear | ButtonAction::Backspace => {
                        Style::default().fg(Color::Red)
                    }
                    ButtonAction::Function(_) => Style::default().fg(Color::Cyan),
                    ButtonAction::Memory(_) => Style::default().fg(Color::Magenta),
                }
            };

            if btn_width >= 4 {
                let label = format!("[{}]", button.label);
                let label_x = x + (btn_width.saturating_sub(label.chars().count() as u16)) / 2;
                let label_y = y + btn_height / 2;

                if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                    buf.set_span(label_x, label_y, &Span::styled(label, style), btn_width);
                }
            }
        }
    }
}
