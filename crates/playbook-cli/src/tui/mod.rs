//! Interactive TUI browser for a plan document.
//!
//! Read-only: navigation drills from stages to steps to step detail; edits
//! go through `playbook edit`, which the status bar points at. The document
//! is fully in memory, so the event loop blocks on input with no tick.

pub mod app;
mod ui;

use std::io;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use playbook_core::PlanSession;

use app::App;

/// Launch the interactive browser over an open session.
pub fn run_browser(session: &PlanSession) -> Result<()> {
    // Set up terminal.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session.key(), session.document());

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<'_>,
) -> Result<()> {
    loop {
        // Render.
        terminal.draw(|f| ui::render(f, app))?;

        // Block until the next key event.
        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    app.navigate_back();
                }
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Enter => {
                    app.navigate_enter();
                }
                KeyCode::Char('j') | KeyCode::Down => {
                    app.move_down();
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    app.move_up();
                }
                KeyCode::Char('?') => {
                    app.show_help();
                }
                _ => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
