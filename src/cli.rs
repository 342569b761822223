use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;
use crate::fields::LogFormat;

/// Gantt-style timeline for tasks and their sub-processes.
/// Reads the task snapshot from ./tasks.json or a path passed via --db.
#[derive(Parser)]
#[command(name = "gantt", version, about = "Task and process timeline")]
pub struct Cli {
    /// Path to the JSON task snapshot.
    #[arg(long, global = true, default_value = "tasks.json")]
    pub db: PathBuf,

    /// Log filter used when RUST_LOG is not set (e.g. "warn", "process_gantt=debug").
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Log line layout on stderr.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_defaults() {
        let cli = Cli::try_parse_from(["gantt", "rows"]).unwrap();
        assert_eq!(cli.db, PathBuf::from("tasks.json"));
        assert_eq!(cli.log_level, "warn");
        assert_eq!(cli.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["gantt", "export", "--all", "--db", "/tmp/t.json", "--log-format", "json"]).unwrap();
        assert_eq!(cli.db, PathBuf::from("/tmp/t.json"));
        assert_eq!(cli.log_format, LogFormat::Json);
        assert!(matches!(cli.command, Commands::Export { all: true, output: None }));
    }
}
