//! # gantt - Task and Process Timeline
//!
//! Renders a Gantt-style timeline for a list of tasks, each of which may own
//! zero or more sub-processes with their own date ranges and completion
//! percentages.
//!
//! ## How a chart is built
//!
//! - **Rows**: every task becomes one bar, followed by one indented bar per
//!   sub-process that has both dates. A task with dated sub-processes spans
//!   from the earliest sub-process start to the latest sub-process end; a task
//!   without them uses its own dates, unless its end is the `9999` "no
//!   deadline" placeholder, in which case it is left off the chart.
//! - **Axis**: one tick per calendar day from the day before the earliest bar
//!   to the day after the latest, so weekends can be shaded individually.
//! - Missing or malformed dates never fail a render; the affected bar is
//!   dropped. Inverted ranges become zero-length bars.
//!
//! ## Quick Start
//!
//! ```bash
//! # Interactive timeline for ./tasks.json
//! gantt ui
//!
//! # Print the derived rows, or the day axis
//! gantt rows --db project.json
//! gantt ticks --weekends-only
//!
//! # Hand the chart payload to another renderer
//! gantt export --output chart.json
//! ```
//!
//! The snapshot is a JSON file holding either `{"tasks": [...]}` or a bare task
//! array; see `task::Task` for the fields.

use clap::Parser;

pub mod axis;
pub mod chart;
pub mod cli;
pub mod cmd;
pub mod db;
pub mod error;
pub mod fields;
pub mod logging;
pub mod rows;
pub mod task;
pub mod tui {
    pub mod colors;
    pub mod gantt;
    pub mod gantt_run;
}

use cli::Cli;
use cmd::*;
use db::Database;
use error::Result;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(&cli.log_level, cli.log_format) {
        eprintln!("{e}");
    }

    if let Err(e) = run(cli) {
        tracing::error!(error = %e, "command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Commands that don't need a loaded snapshot first
    match cli.command {
        Commands::Completions { shell } => {
            cmd_completions(shell);
            return Ok(());
        }
        Commands::Ui { all } => return cmd_ui(&cli.db, all),
        _ => {}
    }

    let db = Database::load(&cli.db)?;

    match cli.command {
        Commands::Ui { .. } => unreachable!("UI command handled above"),
        Commands::Completions { .. } => unreachable!("Completions command handled above"),
        Commands::Rows { all, format } => cmd_rows(&db, all, format),
        Commands::Ticks { all, weekends_only } => cmd_ticks(&db, all, weekends_only),
        Commands::Export { all, output } => cmd_export(&db, all, output),
    }
}
