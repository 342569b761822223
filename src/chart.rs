//! Chart payload handed to the rendering layer.
//!
//! A render pass derives the rows, short-circuits to an empty-state signal when
//! there are none, and otherwise builds the day axis. The result carries the
//! fixed column schema and layout hints a Gantt widget expects.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::axis::build_ticks;
use crate::rows::{derive_rows, Row};
use crate::task::Task;

/// Placeholder shown instead of an empty chart canvas.
pub const EMPTY_MESSAGE: &str = "No tasks to display";

const ROW_HEIGHT: u32 = 42;
const CHART_PADDING: u32 = 50;

/// Value type of a chart column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    String,
    Date,
    Number,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Column {
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    pub label: &'static str,
}

/// Fixed, ordered column schema of every chart row.
pub const COLUMNS: [Column; 8] = [
    Column { column_type: ColumnType::String, label: "Task ID" },
    Column { column_type: ColumnType::String, label: "Task Name" },
    Column { column_type: ColumnType::String, label: "Resource" },
    Column { column_type: ColumnType::Date, label: "Start Date" },
    Column { column_type: ColumnType::Date, label: "End Date" },
    Column { column_type: ColumnType::Number, label: "Duration" },
    Column { column_type: ColumnType::Number, label: "Percent Complete" },
    Column { column_type: ColumnType::String, label: "Dependencies" },
];

/// One chart row in column-schema order. `duration` and `dependencies` are
/// part of the schema but never populated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRow {
    pub id: String,
    pub name: String,
    pub resource: &'static str,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub duration: Option<f64>,
    pub percent_complete: Option<u8>,
    pub dependencies: Option<String>,
}

impl From<&Row> for ChartRow {
    fn from(row: &Row) -> Self {
        ChartRow {
            id: row.id.clone(),
            name: row.display_name.clone(),
            resource: row.kind.label(),
            start: row.start_date,
            end: row.end_date,
            duration: None,
            percent_complete: row.progress,
            dependencies: None,
        }
    }
}

/// Layout hints for the Gantt widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartOptions {
    pub height: u32,
    pub track_height: u32,
    pub bar_corner_radius: u32,
    pub background_fill: &'static str,
}

impl ChartOptions {
    pub fn for_row_count(rows: usize) -> Self {
        ChartOptions {
            height: rows as u32 * ROW_HEIGHT + CHART_PADDING,
            track_height: 30,
            bar_corner_radius: 4,
            background_fill: "#fff",
        }
    }
}

/// Outcome of one render pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum Chart {
    /// No displayable rows; the host shows `message` instead of a chart.
    Empty { message: &'static str },
    Ready {
        columns: Vec<Column>,
        rows: Vec<ChartRow>,
        ticks: Vec<NaiveDate>,
        options: ChartOptions,
    },
}

impl Chart {
    pub fn is_empty(&self) -> bool {
        matches!(self, Chart::Empty { .. })
    }
}

/// Run one render pass over a task snapshot.
pub fn render_chart(tasks: &[Task]) -> Chart {
    let rows = derive_rows(tasks);
    if rows.is_empty() {
        info!(tasks = tasks.len(), "no displayable rows");
        return Chart::Empty { message: EMPTY_MESSAGE };
    }

    let ticks = build_ticks(&rows);
    info!(tasks = tasks.len(), rows = rows.len(), ticks = ticks.len(), "chart rendered");

    Chart::Ready {
        columns: COLUMNS.to_vec(),
        options: ChartOptions::for_row_count(rows.len()),
        rows: rows.iter().map(ChartRow::from).collect(),
        ticks,
    }
}
