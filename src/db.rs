//! Task snapshot storage and console formatting helpers.
//!
//! This module provides the `Database` struct holding the task snapshot read from
//! a JSON file, plus the table and date formatting used by the CLI commands.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::axis::is_weekend;
use crate::error::{GanttError, Result};
use crate::fields::RowKind;
use crate::rows::Row;
use crate::task::Task;

/// In-memory task snapshot.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Database {
    pub tasks: Vec<Task>,
}

/// Accepted on-disk layouts: `{"tasks": [...]}` or a bare task array.
#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotFile {
    Wrapped(Database),
    Bare(Vec<Task>),
}

impl Database {
    /// Load the snapshot from a JSON file. A missing file is an empty snapshot.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "snapshot not found, starting empty");
            return Ok(Database::default());
        }
        let buf = fs::read_to_string(path).map_err(|source| GanttError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&buf).map_err(|source| GanttError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a snapshot from a JSON string.
    pub fn from_json(s: &str) -> std::result::Result<Self, serde_json::Error> {
        let db = match serde_json::from_str(s)? {
            SnapshotFile::Wrapped(db) => db,
            SnapshotFile::Bare(tasks) => Database { tasks },
        };
        debug!(tasks = db.tasks.len(), "snapshot parsed");
        Ok(db)
    }

    /// Save the snapshot using atomic write (temp file + rename).
    pub fn save(&self, path: &Path) -> Result<()> {
        let write_err = |source: std::io::Error| GanttError::Write {
            path: path.to_path_buf(),
            source,
        };
        let tmp = path.with_extension("json.tmp");
        let data = serde_json::to_string_pretty(self)?;
        let mut f = File::create(&tmp).map_err(write_err)?;
        f.write_all(data.as_bytes()).map_err(write_err)?;
        f.flush().map_err(write_err)?;
        fs::rename(&tmp, path).map_err(write_err)?;
        Ok(())
    }

    /// Tasks to chart; completed tasks are left out unless `include_completed`.
    pub fn visible_tasks(&self, include_completed: bool) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| include_completed || !t.completed)
            .cloned()
            .collect()
    }
}

/// Format a row kind for display.
pub fn format_kind(k: RowKind) -> &'static str {
    k.label()
}

/// Format an optional progress percentage.
pub fn format_progress(p: Option<u8>) -> String {
    match p {
        Some(p) => format!("{p}%"),
        None => "-".into(),
    }
}

/// Format a tick as `YYYY-MM-DD Www`, flagging weekends.
pub fn format_tick(d: NaiveDate) -> String {
    let marker = if is_weekend(d) { " *" } else { "" };
    format!("{} {}{}", d.format("%Y-%m-%d"), d.format("%a"), marker)
}

/// Print rows as an aligned table.
pub fn print_rows_table(rows: &[Row]) {
    println!(
        "{:<12} {:<8} {:<10} {:<10} {:>5} {:>5}  {}",
        "ID", "Kind", "Start", "End", "Days", "Done", "Name"
    );
    for r in rows {
        println!(
            "{:<12} {:<8} {:<10} {:<10} {:>5} {:>5}  {}",
            truncate(&r.id, 12),
            format_kind(r.kind),
            r.start_date.to_string(),
            r.end_date.to_string(),
            r.span_days(),
            format_progress(r.progress),
            r.display_name
        );
    }
}

/// Truncate a string to a maximum width, adding ellipsis if needed.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out = String::new();
        for (i, ch) in s.chars().enumerate() {
            if i + 1 >= width {
                out.push('…');
                break;
            }
            out.push(ch);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Process;

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::load(&dir.path().join("absent.json")).unwrap();
        assert!(db.tasks.is_empty());
    }

    #[test]
    fn test_load_bare_array_and_wrapped() {
        let bare = Database::from_json(r#"[{"id": "T1", "name": "A"}]"#).unwrap();
        assert_eq!(bare.tasks.len(), 1);
        let wrapped = Database::from_json(r#"{"tasks": [{"id": 1, "name": "A"}, {"id": 2, "name": "B"}]}"#).unwrap();
        assert_eq!(wrapped.tasks[1].id, "2");
    }

    #[test]
    fn test_load_invalid_json_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        fs::write(&path, "{ not json").unwrap();
        let err = Database::load(&path).unwrap_err();
        assert!(matches!(err, GanttError::Parse { .. }));
        assert!(err.to_string().contains("tasks.json"));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        let db = Database {
            tasks: vec![Task::new("T1", "Build", Some("2024-01-01"), None)
                .with_process(Process::new("P1", "Code", Some("2024-01-02"), Some("2024-01-03")))],
        };
        db.save(&path).unwrap();
        assert!(!path.with_extension("json.tmp").exists());
        let loaded = Database::load(&path).unwrap();
        assert_eq!(loaded.tasks[0].processes[0].end.as_deref(), Some("2024-01-03"));
    }

    #[test]
    fn test_visible_tasks_hides_completed() {
        let mut done = Task::new("T2", "Done", None, None);
        done.completed = true;
        let db = Database { tasks: vec![Task::new("T1", "Open", None, None), done] };
        assert_eq!(db.visible_tasks(false).len(), 1);
        assert_eq!(db.visible_tasks(true).len(), 2);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer identifier", 8), "a longe…");
    }

    #[test]
    fn test_format_tick_marks_weekends() {
        let sat = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        let mon = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        assert_eq!(format_tick(sat), "2024-03-02 Sat *");
        assert_eq!(format_tick(mon), "2024-03-04 Mon");
    }
}
