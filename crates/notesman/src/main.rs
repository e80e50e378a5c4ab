//! `notes` - CLI for notesman
//!
//! Runs the interactive notes session, or inspects configuration.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io;

use clap::Parser;

use notesman::cli::{Cli, Command, ConfigCommand};
use notesman::{init_logging, Config, Session};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone())?;

    match cli.command {
        None => run_session(&config, cli.file)?,
        Some(Command::Config(config_cmd)) => handle_config(&config, config_cmd)?,
    }
    Ok(())
}

fn run_session(
    config: &Config,
    file: Option<std::path::PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = config.notes_path(file);
    tracing::debug!("Starting session on {}", path.display());

    let stdin = io::stdin();
    let mut session =
        Session::new(path, stdin.lock(), io::stdout())?.with_banner(config.session.show_banner);
    session.run()?;
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", config.to_json_pretty()?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Notes]");
                println!(
                    "  Default file:       {}",
                    config.notes.default_file.display()
                );
                println!();
                println!("[Session]");
                println!("  Show banner:        {}", config.session.show_banner);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
