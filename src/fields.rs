//! Enumerations used across the timeline and its command-line surface.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Whether a timeline row stands for a task or for one of its sub-processes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum RowKind {
    Task,
    Process,
}

impl RowKind {
    /// Resource label handed to the chart renderer.
    pub fn label(self) -> &'static str {
        match self {
            RowKind::Task => "Task",
            RowKind::Process => "Process",
        }
    }
}

/// Output format for row listings.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Log line layout written to stderr.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Compact,
    Json,
}
