//! Timeline TUI entry point and setup.

use std::{io, panic, path::Path};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::CrosstermBackend, Terminal};

use crate::error::Result;
use crate::tui::gantt::GanttApp;

/// Initialise and run the timeline terminal user interface.
pub fn run_gantt_tui(db_path: &Path, include_completed: bool) -> Result<()> {
    // Load before touching the terminal so snapshot errors print normally.
    let mut app = GanttApp::new(db_path, include_completed)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal);

    restore_terminal()?;
    terminal.show_cursor()?;

    result?;
    Ok(())
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
