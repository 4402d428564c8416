//! Interactive terminal calculator.
//!
//! Standard terminal lifecycle: raw mode and the alternate screen on the
//! way in, restored on the way out even when the loop errors.

use std::io;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use pocket_calc::tui::{render, CalculatorApp, InputHandler};

use crate::error::CliResult;

/// Runs the TUI until the user quits
pub fn run() -> CliResult<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!("entering calculator loop");
    let result = run_app(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>) -> CliResult<()> {
    let mut app = CalculatorApp::new();
    let input_handler = InputHandler::new();

    loop {
        terminal.draw(|frame| render(&app, frame))?;

        if let Event::Key(key) = event::read()? {
            if app.dispatch(input_handler.handle_key(key)) {
                break;
            }
        }
    }

    Ok(())
}
