//! Interactive terminal loop

use std::io;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use keycalc::core::FormatConfig;
use keycalc::tui::{keypad_area, render, CalculatorApp, InputHandler, KeyAction};
use ratatui::{backend::Backend, backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::{debug, info};

use crate::error::{CliError, CliResult};

/// Runs the terminal UI until the user quits
pub fn run(format: FormatConfig) -> CliResult<()> {
    enable_raw_mode().map_err(CliError::Terminal)?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(CliError::Terminal(e));
    }

    let result = Terminal::new(CrosstermBackend::new(stdout))
        .and_then(|mut terminal| {
            let outcome = run_app(&mut terminal, CalculatorApp::with_format(format));
            let restored = restore(&mut terminal);
            outcome.and(restored)
        })
        .map_err(CliError::Terminal);

    // Raw mode must not survive a failed Terminal::new either
    let _ = disable_raw_mode();
    result
}

fn restore<B: Backend + io::Write>(terminal: &mut Terminal<B>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: CalculatorApp) -> io::Result<()> {
    let handler = InputHandler::new();
    let mut screen = Rect::default();
    info!(locale = %app.engine().format_config().locale, "tui started");

    loop {
        terminal.draw(|f| {
            screen = f.area();
            render(&app, f);
        })?;

        let event = event::read()?;
        if handle_event(&mut app, &handler, &event, keypad_area(screen)) {
            break;
        }
    }

    info!("tui stopped");
    Ok(())
}

/// Applies one terminal event; returns true when the app should quit
pub fn handle_event(
    app: &mut CalculatorApp,
    handler: &InputHandler,
    event: &Event,
    keypad: Rect,
) -> bool {
    let action = match event {
        Event::Key(key) => handler.handle_key(*key),
        Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Up(_)) => {
            app.release_keys();
            KeyAction::None
        }
        Event::Mouse(mouse) => handler.handle_mouse(*mouse, app.keypad(), keypad),
        _ => KeyAction::None,
    };

    match action {
        KeyAction::Input(input) => app.apply(input),
        KeyAction::Click(index) => app.click_button(index),
        KeyAction::Quit => {
            debug!("quit requested");
            app.quit();
        }
        KeyAction::None => {}
    }
    app.should_quit()
}
