//! Vangtichai TUI
//!
//! Run with: cargo run --example vangtichai_tui
//!
//! Digits build the amount (keyboard or mouse), `c`/Esc clears, `q` quits.
//! Set `VANGTICHAI_LOG=debug` to write tracing output to `vangtichai.log`.

use std::fs::File;
use std::io;
use std::sync::Mutex;

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use vangtichai::tui::{
    keypad_area, render, ButtonAction, InputHandler, KeyAction, Keypad, VangtiChaiApp,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}

/// Writes tracing output to a side file when `VANGTICHAI_LOG` is set, so the
/// alternate screen stays clean.
fn init_logging() -> io::Result<()> {
    if std::env::var_os("VANGTICHAI_LOG").is_none() {
        return Ok(());
    }
    let file = File::create("vangtichai.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_env("VANGTICHAI_LOG"))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Applies a key action; returns true when the app should quit
fn handle_action(app: &mut VangtiChaiApp, keypad: &mut Keypad, action: KeyAction) -> bool {
    match action {
        KeyAction::Digit(d) => {
            keypad.highlight(ButtonAction::Digit(d));
            app.press_digit(d);
        }
        KeyAction::Clear => {
            keypad.highlight(ButtonAction::Clear);
            app.clear();
        }
        KeyAction::Quit => return true,
        KeyAction::None => keypad.release_all(),
    }
    false
}

/// Applies a keypad button press from a mouse click
fn handle_button(app: &mut VangtiChaiApp, keypad: &mut Keypad, action: ButtonAction) {
    keypad.highlight(action);
    match action {
        ButtonAction::Digit(d) => app.press_digit(d),
        ButtonAction::Clear => app.clear(),
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = VangtiChaiApp::new();
    let mut keypad = Keypad::new();
    let input_handler = InputHandler::new();

    loop {
        terminal.draw(|frame| render(&app, &keypad, frame))?;

        match event::read()? {
            Event::Key(key) => {
                if handle_action(&mut app, &mut keypad, input_handler.handle_key(key)) {
                    break;
                }
            }
            Event::Mouse(mouse) => {
                if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                    let size = terminal.size()?;
                    let area = Rect::new(0, 0, size.width, size.height);
                    if let Some(action) =
                        keypad.hit_test(keypad_area(area), mouse.column, mouse.row)
                    {
                        handle_button(&mut app, &mut keypad, action);
                    }
                }
            }
            _ => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
