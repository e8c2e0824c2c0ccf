//! CLI structure definition.
//!
//! This module defines the startup flags using clap's derive macros.
//! The binary itself is an interactive console; there are no
//! subcommands, only options that shape the session.

use clap::Parser;
use std::path::PathBuf;

/// Command-line tool for managing campus room reservations.
#[derive(Parser)]
#[command(name = "aula")]
#[command(version, about = "Manage campus room reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long)]
    pub quiet: bool,

    /// Load the room catalog from this file
    #[arg(long, value_name = "PATH", env = "AULA_ROOMS")]
    pub rooms_file: Option<PathBuf>,

    /// Start with an empty room catalog (overrides --rooms-file)
    #[arg(long)]
    pub no_seed: bool,
}
