//! Row derivation for the timeline chart.
//!
//! Turns the loosely-structured task snapshot into a flat, ordered list of
//! timeline bars. Every data-quality problem (missing, malformed or sentinel
//! dates, inverted ranges) is absorbed here as an exclusion or a coercion; the
//! deriver never fails, and its worst-case output is an empty list.
//!
//! Ordering: for each task in snapshot order, the task row (when it resolves)
//! followed by one row per valid process in original order.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::fields::RowKind;
use crate::task::{Process, Task};

/// Marker placed in front of process names so they read as sub-items.
pub const INDENT_MARKER: &str = "└ ";

/// Year marker used by the store for "no deadline".
const SENTINEL_YEAR: &str = "9999";

/// One renderable timeline bar. Both dates are always resolved and
/// `end_date >= start_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub id: String,
    pub display_name: String,
    pub kind: RowKind,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub progress: Option<u8>,
}

impl Row {
    fn new(
        id: &str,
        display_name: String,
        kind: RowKind,
        start: NaiveDate,
        end: NaiveDate,
        progress: Option<u8>,
    ) -> Self {
        let end_date = if end < start {
            debug!(row = id, %start, %end, "inverted range, using a zero-length bar");
            start
        } else {
            end
        };
        Row {
            id: id.to_string(),
            display_name,
            kind,
            start_date: start,
            end_date,
            progress,
        }
    }

    /// Inclusive number of calendar days covered by the bar.
    pub fn span_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

/// Resolve a raw date string. Absent, blank and unparseable values all resolve to `None`.
pub fn parse_chart_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Whether a raw end date is the "no deadline" placeholder.
pub fn is_sentinel_end(raw: &str) -> bool {
    raw.contains(SENTINEL_YEAR)
}

/// A process whose start and end both resolve.
struct ValidChild<'a> {
    process: &'a Process,
    start: NaiveDate,
    end: NaiveDate,
}

fn valid_children(task: &Task) -> Vec<ValidChild<'_>> {
    task.processes
        .iter()
        .filter_map(|process| {
            let start = parse_chart_date(process.start.as_deref());
            let end = parse_chart_date(process.end.as_deref());
            match (start, end) {
                (Some(start), Some(end)) => Some(ValidChild { process, start, end }),
                _ => {
                    debug!(task = %task.id, process = %process.id, "process skipped: missing or malformed dates");
                    None
                }
            }
        })
        .collect()
}

/// Resolve the task bar's window: the union of its valid children when there
/// are any, otherwise its own dates unless the end is the sentinel.
fn task_window(task: &Task, children: &[ValidChild<'_>]) -> Option<(NaiveDate, NaiveDate)> {
    if !children.is_empty() {
        let start = children.iter().map(|c| c.start).min()?;
        let end = children.iter().map(|c| c.end).max()?;
        return Some((start, end));
    }

    if task.end.as_deref().is_some_and(is_sentinel_end) {
        debug!(task = %task.id, "task skipped: no deadline");
        return None;
    }

    match (
        parse_chart_date(task.start.as_deref()),
        parse_chart_date(task.end.as_deref()),
    ) {
        (Some(start), Some(end)) => Some((start, end)),
        _ => {
            debug!(task = %task.id, "task skipped: missing or malformed dates");
            None
        }
    }
}

/// Derive the ordered timeline rows for a task snapshot.
pub fn derive_rows(tasks: &[Task]) -> Vec<Row> {
    let mut rows = Vec::new();

    for task in tasks {
        let children = valid_children(task);

        if let Some((start, end)) = task_window(task, &children) {
            rows.push(Row::new(
                &task.id,
                task.name.clone(),
                RowKind::Task,
                start,
                end,
                task.progress,
            ));
        }

        for child in &children {
            rows.push(Row::new(
                &child.process.id,
                format!("{}{}", INDENT_MARKER, child.process.name),
                RowKind::Process,
                child.start,
                child.end,
                child.process.progress,
            ));
        }
    }

    rows
}
