//! # Subrepo Sync CLI
//!
//! This is the binary entry point for the `subrepo-sync` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Running the sync and exiting with the resulting status.
//! - Handling top-level application errors and translating them into user-friendly
//!   output.
//!
//! The core logic is defined in the `lib.rs` library crate, ensuring that the
//! binary is a thin wrapper around the reusable library functionality.

mod cli;
mod commands;

use clap::Parser;
use subrepo_sync::exit_codes;

fn main() {
    let cli = cli::Cli::parse();

    let code = match cli.execute() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            exit_codes::ERROR
        }
    };

    std::process::exit(code);
}
