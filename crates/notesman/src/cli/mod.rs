//! Command-line interface for notesman.
//!
//! With no subcommand the `notes` binary starts the interactive session.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::ConfigCommand;

/// notes - Keep running notes in a plain text file
///
/// Starts an interactive menu for adding, viewing and clearing notes.
#[derive(Debug, Parser)]
#[command(name = "notes")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Notes file to start on (overrides the configured default)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all diagnostics except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Optional command; the interactive session runs when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// View or check configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::Verbosity;
    use clap::CommandFactory;

    fn cli(verbose: u8, quiet: bool) -> Cli {
        Cli {
            config: None,
            file: None,
            verbose,
            quiet,
            command: None,
        }
    }

    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "notes");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(cli(0, true).verbosity(), Verbosity::Quiet);
        assert_eq!(cli(3, true).verbosity(), Verbosity::Quiet);
        assert_eq!(cli(0, false).verbosity(), Verbosity::Normal);
        assert_eq!(cli(1, false).verbosity(), Verbosity::Verbose);
        assert_eq!(cli(2, false).verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_parse_no_arguments_runs_session() {
        let cli = Cli::try_parse_from(["notes"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.file.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parse_with_file() {
        let cli = Cli::try_parse_from(["notes", "-f", "work/todo.txt"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("work/todo.txt")));
    }

    #[test]
    fn test_parse_with_config() {
        let cli = Cli::try_parse_from(["notes", "--config", "/custom/config.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_parse_config_show_json() {
        let cli = Cli::try_parse_from(["notes", "config", "show", "--json"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Config(ConfigCommand::Show { json: true }))
        ));
    }

    #[test]
    fn test_parse_config_path() {
        let cli = Cli::try_parse_from(["notes", "config", "path"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Config(ConfigCommand::Path))
        ));
    }

    #[test]
    fn test_parse_config_validate_with_file() {
        let cli =
            Cli::try_parse_from(["notes", "config", "validate", "-f", "/tmp/c.toml"]).unwrap();
        match cli.command {
            Some(Command::Config(ConfigCommand::Validate { file })) => {
                assert_eq!(file, Some(PathBuf::from("/tmp/c.toml")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_with_verbose_and_quiet() {
        let cli = Cli::try_parse_from(["notes", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);

        let cli = Cli::try_parse_from(["notes", "-q"]).unwrap();
        assert!(cli.quiet);
    }

    #[test]
    fn test_parse_rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["notes", "daemon"]).is_err());
    }
}
