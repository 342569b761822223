//! Command implementations for the CLI interface.
//!
//! Each handler takes the loaded snapshot, runs the render pass it needs and
//! prints or writes the result. Errors are returned to `main` for reporting.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Subcommand;
use clap_complete::{generate, Shell};
use tracing::info;

use crate::axis::{build_ticks, is_weekend};
use crate::chart::{render_chart, Chart, EMPTY_MESSAGE};
use crate::db::*;
use crate::error::{GanttError, Result};
use crate::fields::OutputFormat;
use crate::rows::derive_rows;
use crate::tui::gantt_run::run_gantt_tui;

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive timeline.
    Ui {
        /// Include completed tasks.
        #[arg(long)]
        all: bool,
    },

    /// Print the derived timeline rows.
    Rows {
        /// Include completed tasks.
        #[arg(long)]
        all: bool,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Print the day axis, one tick per calendar day.
    Ticks {
        /// Include completed tasks.
        #[arg(long)]
        all: bool,
        /// Only print Saturdays and Sundays.
        #[arg(long)]
        weekends_only: bool,
    },

    /// Export the chart payload (rows, axis, column schema) as JSON.
    Export {
        /// Include completed tasks.
        #[arg(long)]
        all: bool,
        /// Output file. Defaults to stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Launch the timeline TUI.
pub fn cmd_ui(db_path: &Path, all: bool) -> Result<()> {
    run_gantt_tui(db_path, all)
}

/// Print derived rows as a table or JSON.
pub fn cmd_rows(db: &Database, all: bool, format: OutputFormat) -> Result<()> {
    let rows = derive_rows(&db.visible_tasks(all));
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Table if rows.is_empty() => println!("{EMPTY_MESSAGE}"),
        OutputFormat::Table => print_rows_table(&rows),
    }
    Ok(())
}

/// Print axis ticks, weekends marked with `*`.
pub fn cmd_ticks(db: &Database, all: bool, weekends_only: bool) -> Result<()> {
    let rows = derive_rows(&db.visible_tasks(all));
    if rows.is_empty() {
        println!("{EMPTY_MESSAGE}");
        return Ok(());
    }
    for tick in build_ticks(&rows) {
        if weekends_only && !is_weekend(tick) {
            continue;
        }
        println!("{}", format_tick(tick));
    }
    Ok(())
}

/// Write the serialised chart to a file or stdout.
pub fn cmd_export(db: &Database, all: bool, output: Option<PathBuf>) -> Result<()> {
    let chart = render_chart(&db.visible_tasks(all));
    let data = serde_json::to_string_pretty(&chart)?;

    match output {
        Some(path) => {
            fs::write(&path, data.as_bytes()).map_err(|source| GanttError::Write {
                path: path.clone(),
                source,
            })?;
            let row_count = match &chart {
                Chart::Empty { .. } => 0,
                Chart::Ready { rows, .. } => rows.len(),
            };
            info!(path = %path.display(), rows = row_count, "chart exported");
            println!("Exported {} rows to {}", row_count, path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{data}")?;
        }
    }
    Ok(())
}

/// Generate shell completion scripts.
pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;
    use crate::cli::Cli;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{Process, Task};

    fn snapshot() -> Database {
        let mut done = Task::new("T9", "Shipped", Some("2023-01-01"), Some("2023-01-02"));
        done.completed = true;
        Database {
            tasks: vec![
                Task::new("T1", "Build", None, None)
                    .with_process(Process::new("P1", "Coding", Some("2024-03-01"), Some("2024-03-03"))),
                done,
            ],
        }
    }

    #[test]
    fn test_export_writes_ready_chart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.json");
        cmd_export(&snapshot(), false, Some(path.clone())).unwrap();

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["status"], "ready");
        assert_eq!(value["rows"].as_array().unwrap().len(), 2);
        assert_eq!(value["ticks"][0], "2024-02-29");
    }

    #[test]
    fn test_export_includes_completed_with_all() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.json");
        cmd_export(&snapshot(), true, Some(path.clone())).unwrap();

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["rows"].as_array().unwrap().len(), 3);
        assert_eq!(value["ticks"][0], "2022-12-31");
    }

    #[test]
    fn test_export_empty_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.json");
        cmd_export(&Database::default(), false, Some(path.clone())).unwrap();

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["status"], "empty");
        assert_eq!(value["message"], EMPTY_MESSAGE);
    }

    #[test]
    fn test_demo_snapshot_renders() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/tasks.json");
        let db = Database::load(&path).unwrap();
        let Chart::Ready { rows, ticks, .. } = render_chart(&db.visible_tasks(false)) else {
            panic!("expected a ready chart");
        };
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "11", "12", "2"]);
        assert_eq!(rows[0].start.to_string(), "2024-02-26");
        assert_eq!(rows[0].end.to_string(), "2024-03-12");
        assert_eq!(ticks.len(), 18);
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("chart.json");
        let err = cmd_export(&snapshot(), false, Some(path)).unwrap_err();
        assert!(matches!(err, GanttError::Write { .. }));
    }
}
