pub mod components;
pub mod theme;

use crate::app::event::{handle_key_event, handle_mouse_event};
use crate::app::AppState;
use crate::clipboard::ClipboardWriter;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::time::Duration;

// Widgets reset in the background, so redraw at least this often.
const TICK: Duration = Duration::from_millis(100);

struct TerminalGuard {
    keyboard_enhancement: bool,
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        if self.keyboard_enhancement {
            let _ = execute!(stdout, PopKeyboardEnhancementFlags);
        }
        let _ = disable_raw_mode();
        let _ = execute!(stdout, DisableMouseCapture, LeaveAlternateScreen);
        let _ = stdout.flush();
    }
}

/// Run the TUI until the user quits.
///
/// Copies are spawned onto the ambient tokio runtime, so the caller must
/// have entered one.
pub fn run_tui<C: ClipboardWriter>(mut state: AppState<C>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let supports_keyboard_enhancement = execute!(
        stdout,
        PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
    )
    .is_ok();

    let _guard = TerminalGuard {
        keyboard_enhancement: supports_keyboard_enhancement,
    };

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut state);
    terminal.show_cursor()?;

    result
}

fn run_app<C: ClipboardWriter>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState<C>,
) -> Result<()> {
    loop {
        let frame_area = terminal
            .draw(|f| {
                components::render(f, state);
            })?
            .area;
        state.hit_areas = components::hit_areas(state, frame_area);

        if event::poll(TICK)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key_event(key, state);
                }
                Event::Mouse(mouse) => handle_mouse_event(mouse, state),
                _ => {}
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}
