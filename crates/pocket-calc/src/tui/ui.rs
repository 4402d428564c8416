//! TUI rendering.
//!
//! The display block carries the calculator's two lines: the captured
//! operand with its pending operator above, the operand being entered
//! below, both right-aligned like a desk calculator.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::{Keypad, KeypadWidget};
use crate::core::tape::TapeEntry;

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    let ui = CalculatorUi::new(app);
    frame.render_widget(ui, area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUi<'a> {
    app: &'a CalculatorApp,
    keypad: Keypad,
}

impl<'a> CalculatorUi<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self {
            app,
            keypad: Keypad::new(),
        }
    }

    /// Main horizontal layout: calculator, keypad, help sidebar
    fn create_horizontal_layout(&self, area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Horizontal)
            .margin(1)
            .constraints([
                Constraint::Min(30),    // Display, memory, tape, status
                Constraint::Length(24), // Keypad
                Constraint::Length(24), // Help sidebar
            ])
            .split(area)
            .to_vec()
    }

    /// Vertical layout of the main column
    fn create_layout(&self, area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Two-line display
                Constraint::Length(3), // Memory
                Constraint::Min(5),    // Tape
                Constraint::Length(3), // Status
            ])
            .split(area)
            .to_vec()
    }

    /// Renders the two-line operand display
    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let engine = self.app.engine();
        let lines = vec![
            Line::from(Span::styled(
                engine.pending_display(),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                engine.display().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
        ];

        let paragraph = Paragraph::new(lines).alignment(Alignment::Right).block(
            Block::default()
                .title(" Display ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        paragraph.render(area, buf);
    }

    /// Renders the memory line
    fn render_memory(&self, area: Rect, buf: &mut Buffer) {
        let paragraph = Paragraph::new(Span::styled(
            self.app.engine().memory_display(),
            Style::default().fg(Color::Magenta),
        ))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        paragraph.render(area, buf);
    }

    /// Renders the calculation tape, newest first
    fn render_tape(&self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = self
            .app
            .engine()
            .tape()
            .iter_rev()
            .take(usize::from(area.height.saturating_sub(2)))
            .map(|entry: &TapeEntry| {
                ListItem::new(Span::styled(
                    entry.display(),
                    Style::default().fg(Color::Gray),
                ))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(" Tape (newest first) ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        );
        list.render(area, buf);
    }

    /// Renders the status line
    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let status = self.app.status_line();
        let style = if status.starts_with('✗') {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };

        let paragraph = Paragraph::new(Span::styled(status, style)).block(
            Block::default()
                .title(" Status ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        paragraph.render(area, buf);
    }

    /// Renders the keypad area
    fn render_keypad(&self, area: Rect, buf: &mut Buffer) {
        KeypadWidget::new(&self.keypad).render(area, buf);
    }

    /// Renders the help sidebar
    fn render_help_sidebar(&self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, description)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>7}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*description, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        list.render(area, buf);
    }
}

impl Widget for CalculatorUi<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let h_chunks = self.create_horizontal_layout(area);
        if h_chunks.len() >= 3 {
            let chunks = self.create_layout(h_chunks[0]);
            if chunks.len() >= 4 {
                self.render_display(chunks[0], buf);
                self.render_memory(chunks[1], buf);
                self.render_tape(chunks[2], buf);
                self.render_status(chunks[3], buf);
            }

            self.render_keypad(h_chunks[1], buf);
            self.render_help_sidebar(h_chunks[2], buf);
        }
    }
}

/// Title of the main frame
pub const TITLE: &str = " Pocket Calculator ";

/// Key bindings shown in the sidebar
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "Enter digits"),
    ("+ - * /", "Operator"),
    ("Enter", "Equals"),
    ("Bksp", "Delete digit"),
    ("Esc", "Clear"),
    ("@", "Square root"),
    ("%", "Percent"),
    ("q", "Square"),
    ("r", "Reciprocal"),
    ("Ctrl+L", "MC"),
    ("Ctrl+R", "MR"),
    ("Ctrl+P", "M+"),
    ("Ctrl+Q", "M-"),
    ("Ctrl+C", "Quit"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BinaryOp, MemoryOp};
    use crate::tui::input::KeyAction;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(100, 30);
        Terminal::new(backend).unwrap()
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_render_initial_state() {
        let app = CalculatorApp::new();
        let mut terminal = create_test_terminal();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Pocket Calculator"));
        assert!(text.contains("Memory: 0"));
        assert!(text.contains("Ready"));
    }

    #[test]
    fn test_render_pending_operation() {
        let mut app = CalculatorApp::new();
        app.dispatch(KeyAction::Press('1'));
        app.dispatch(KeyAction::Press('2'));
        app.dispatch(KeyAction::Choose(BinaryOp::Add));

        let mut terminal = create_test_terminal();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("12 +"));
    }

    #[test]
    fn test_render_divide_by_zero_status() {
        let mut app = CalculatorApp::new();
        app.dispatch(KeyAction::Press('5'));
        app.dispatch(KeyAction::Choose(BinaryOp::Divide));
        app.dispatch(KeyAction::Press('0'));
        app.dispatch(KeyAction::Compute);

        let mut terminal = create_test_terminal();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("divide by zero"));
    }

    #[test]
    fn test_render_tape_entries() {
        let mut app = CalculatorApp::new();
        app.dispatch(KeyAction::Press('5'));
        app.dispatch(KeyAction::Choose(BinaryOp::Add));
        app.dispatch(KeyAction::Press('3'));
        app.dispatch(KeyAction::Compute);

        let mut terminal = create_test_terminal();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("5 + 3 = 8"));
    }

    #[test]
    fn test_render_memory_update() {
        let mut app = CalculatorApp::new();
        app.dispatch(KeyAction::Press('7'));
        app.dispatch(KeyAction::Memory(MemoryOp::Add));

        let mut terminal = create_test_terminal();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Memory: 7"));
    }

    #[test]
    fn test_render_small_area_does_not_panic() {
        let app = CalculatorApp::new();
        let backend = TestBackend::new(10, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(&app, frame)).unwrap();
    }
}
