//! Application runner and event loop.
//!
//! Sets up the terminal, then blocks on one key event at a time. Each
//! event is handled to completion (including the write-through save) and
//! followed by a redraw before the next read.

use std::io;
use std::path::PathBuf;

use crossterm::event::{self, Event};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::clipboard::SystemClipboard;
use crate::config::load_config;
use crate::error::Result;
use crate::store::Store;

use super::state::App;

/// Entry point: load bookmarks, set up the terminal and run the event loop.
pub fn run() -> Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = load_config(&cwd);
    let store = Store::new(&config.store.path);
    // Load before touching the terminal so a failure prints cleanly.
    let entries = store.load()?;
    tracing::info!(path = %store.path().display(), count = entries.len(), "loaded bookmarks");

    let size = terminal::size()?;
    let mut app = App::new(
        config,
        store,
        entries,
        Box::new(SystemClipboard::new()),
        size,
    );

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    if let Err(err) = stdout.execute(EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(err.into());
    }

    let backend = CrosstermBackend::new(stdout);
    let result = match Terminal::new(backend) {
        Ok(mut terminal) => {
            let result = run_loop(&mut terminal, &mut app);
            let _ = terminal.show_cursor();
            result
        }
        Err(err) => Err(err.into()),
    };

    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    result
}

/// Main event loop: process key events until quit.
fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    terminal.clear()?;
    terminal.draw(|frame| super::render::render(app, frame))?;

    while !app.should_quit {
        match event::read()? {
            Event::Key(key) => super::input::handle_key(app, key),
            Event::Resize(cols, rows) => {
                tracing::debug!(cols, rows, "terminal resized");
            }
            _ => continue,
        }

        if app.refresh_requested {
            terminal.clear()?;
            app.refresh_requested = false;
        }

        terminal.draw(|frame| super::render::render(app, frame))?;
    }
    Ok(())
}
