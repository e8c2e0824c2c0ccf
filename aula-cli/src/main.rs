//! Entry point for the `aula` binary.
//!
//! Builds the room catalog, seeds the in-memory registry and hands the
//! terminal over to the interactive console.

mod cli;
mod console;
mod error;

use std::io;

use aula::{Catalog, Logger, Registry};
use clap::Parser;

use crate::cli::Cli;
use crate::console::Console;
use crate::error::CliError;

fn main() {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = aula::init_logger(cli.verbose, cli.quiet);

    match run(&cli, &logger) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: &Cli, logger: &Logger) -> Result<(), CliError> {
    let registry = if cli.no_seed {
        Registry::new()
    } else {
        let catalog = Catalog::discover(cli.rooms_file.as_deref())
            .map_err(|e| CliError::Catalog(e.to_string()))?;
        Registry::with_catalog(&catalog)
    };
    logger.info(&format!("Starting with {} rooms", registry.rooms().len()));

    let stdin = io::stdin();
    let stdout = io::stdout();
    Console::new(stdin.lock(), stdout.lock(), registry).run()?;
    Ok(())
}
