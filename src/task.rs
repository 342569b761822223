//! Task snapshot data structures.
//!
//! This module defines the `Task` and `Process` structs as they arrive from the
//! hosting store. Dates are kept exactly as supplied (raw `YYYY-MM-DD` strings,
//! possibly empty, malformed or carrying a "no deadline" sentinel); resolving them
//! into calendar dates is the job of the row deriver, not of this module.

use serde::{Deserialize, Deserializer, Serialize};

/// A top-level work item that may own an ordered list of sub-processes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Task {
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub progress: Option<u8>,
    #[serde(default)]
    pub completed: bool,
    /// Insertion order is display order.
    #[serde(default)]
    pub processes: Vec<Process>,
}

/// A sub-process (work phase) of a task, with its own date range.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Process {
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub progress: Option<u8>,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create a task with the given id, name and raw date strings.
    pub fn new(id: &str, name: &str, start: Option<&str>, end: Option<&str>) -> Self {
        Task {
            id: id.to_string(),
            name: name.to_string(),
            start: start.map(str::to_string),
            end: end.map(str::to_string),
            ..Task::default()
        }
    }

    /// Builder-style helper appending a process.
    pub fn with_process(mut self, process: Process) -> Self {
        self.processes.push(process);
        self
    }

    pub fn with_progress(mut self, progress: u8) -> Self {
        self.progress = Some(progress);
        self
    }
}

impl Process {
    /// Create a process with the given id, name and raw date strings.
    pub fn new(id: &str, name: &str, start: Option<&str>, end: Option<&str>) -> Self {
        Process {
            id: id.to_string(),
            name: name.to_string(),
            start: start.map(str::to_string),
            end: end.map(str::to_string),
            ..Process::default()
        }
    }
}

/// Ids are opaque strings, but stores keyed by integers emit them as JSON numbers.
fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdRepr {
        Text(String),
        Number(i64),
    }

    Ok(match IdRepr::deserialize(deserializer)? {
        IdRepr::Text(s) => s,
        IdRepr::Number(n) => n.to_string(),
    })
}
