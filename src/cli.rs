//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::Parser;
use log::LevelFilter;

use crate::commands;
use subrepo_sync::output::OutputConfig;

/// Subrepo Sync - Publish monorepo components to their own repositories
#[derive(Parser, Debug)]
#[command(name = "subrepo-sync")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    sync: commands::sync::SyncArgs,

    /// Colorize output (always, never, auto)
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (off, error, warn, info, debug, trace)
    #[arg(
        long,
        value_name = "LEVEL",
        env = "SUBREPO_SYNC_LOG",
        default_value = "info",
        value_parser = PossibleValuesParser::new(["off", "error", "warn", "info", "debug", "trace"])
    )]
    log_level: String,
}

impl Cli {
    /// Execute the CLI command, returning the process exit code
    pub fn execute(self) -> Result<i32> {
        init_logging(&self.log_level);
        let output = OutputConfig::from_env_and_flag(&self.color);

        commands::sync::execute(self.sync, output)
    }
}

/// Route `log` records to stderr at the requested level.
fn init_logging(level: &str) {
    let filter = level.parse::<LevelFilter>().unwrap_or(LevelFilter::Info);

    // try_init: a logger may already be installed when running under tests
    let _ = env_logger::Builder::new()
        .filter_level(filter)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
