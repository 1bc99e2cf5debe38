//! CLI entry point for asana-to-org.
//!
//! # Responsibility
//! - Resolve flags and environment fallbacks into `ExportOptions`.
//! - Derive the output path and map export errors to exit status.

use asana_org_core::{
    default_log_level, default_output_path, export_file, init_logging, ExportOptions,
};
use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;

/// Convert an Asana JSON task export into an Org-mode outline
#[derive(Debug, Parser)]
#[command(name = "asana-to-org")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Exported JSON document
    input: PathBuf,

    /// Output file (defaults to the input path with an `.org` extension)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Include completed tasks, rendered as DONE
    #[arg(
        long = "wc",
        visible_alias = "with-completed",
        env = "INCLUDE_COMPLETED",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    include_completed: bool,

    /// Keep only tasks assigned to this name
    #[arg(long, env = "ASSIGNEE")]
    assignee: Option<String>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, env = "ASANA_TO_ORG_LOG")]
    log_level: Option<String>,

    /// Absolute directory for rotating log files (logs go to stderr otherwise)
    #[arg(long)]
    log_dir: Option<String>,
}

impl Cli {
    fn export_options(&self) -> ExportOptions {
        let options = ExportOptions::new().with_completed(self.include_completed);
        match &self.assignee {
            Some(assignee) => options.with_assignee(assignee.as_str()),
            None => options,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    if let Err(err) = init_logging(level, cli.log_dir.as_deref()) {
        // Logging is best-effort; the conversion still runs.
        eprintln!("warning: {err}");
    }

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.input));

    match export_file(&cli.input, &output, &cli.export_options()) {
        Ok(summary) => {
            info!(
                "event=cli_done module=cli status=ok sections={} output={}",
                summary.section_count,
                summary.output_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::{CommandFactory, Parser};
    use std::path::PathBuf;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_resolve_into_export_options() {
        let cli = Cli::try_parse_from([
            "asana-to-org",
            "--wc",
            "--assignee",
            "Ann",
            "-o",
            "out.org",
            "tasks.json",
        ])
        .expect("flags should parse");

        assert_eq!(cli.input, PathBuf::from("tasks.json"));
        assert_eq!(cli.output, Some(PathBuf::from("out.org")));

        let options = cli.export_options();
        assert!(options.include_completed);
        assert_eq!(options.assignee_filter.as_deref(), Some("Ann"));
    }

    #[test]
    fn with_completed_alias_is_accepted() {
        let cli = Cli::try_parse_from(["asana-to-org", "--with-completed", "tasks.json"])
            .expect("alias should parse");
        assert!(cli.include_completed);
    }

    #[test]
    fn include_completed_env_accepts_truthy_and_falsey_values() {
        std::env::set_var("INCLUDE_COMPLETED", "1");
        let enabled = Cli::try_parse_from(["asana-to-org", "tasks.json"])
            .expect("numeric env value should parse");
        assert!(enabled.include_completed);

        std::env::set_var("INCLUDE_COMPLETED", "0");
        let disabled = Cli::try_parse_from(["asana-to-org", "tasks.json"])
            .expect("numeric env value should parse");
        assert!(!disabled.include_completed);

        std::env::remove_var("INCLUDE_COMPLETED");
    }
}
