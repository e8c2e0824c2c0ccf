//! Build script for aula-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying flags, update both files.
fn build_cli() -> Command {
    Command::new("aula")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage campus room reservations")
        .long_about(
            "Interactive console for registering rooms, booking reservations and cancelling them",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("rooms-file")
                .long("rooms-file")
                .help("Load the room catalog from this YAML file")
                .value_name("PATH")
                .env("AULA_ROOMS"),
        )
        .arg(
            Arg::new("no-seed")
                .long("no-seed")
                .help("Start with an empty room catalog (overrides --rooms-file)")
                .action(clap::ArgAction::SetTrue),
        )
}

fn main() {
    // Generate man page at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("aula.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
}
