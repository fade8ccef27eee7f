//! Sync command implementation
//!
//! Builds the remote mapping, resolves the selected components, then runs
//! cleanup, split and publish for each of them. Unknown components are
//! reported before any git command runs.

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgGroup, Args};
use log::{debug, error};

use subrepo_sync::error::Error;
use subrepo_sync::exit_codes;
use subrepo_sync::git::{Executor, SystemGit};
use subrepo_sync::mapping::RemoteMapping;
use subrepo_sync::output::{OutputConfig, Reporter};
use subrepo_sync::selection::Selection;
use subrepo_sync::suggestions;
use subrepo_sync::sync::{SyncOptions, Syncer};

/// Arguments for a sync run
#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("selection")
        .required(true)
        .args(["all", "components"])
))]
pub struct SyncArgs {
    /// Sync all default components
    #[arg(long)]
    pub all: bool,

    /// Components to sync (e.g. logger common)
    #[arg(long, value_name = "NAME", num_args = 0..)]
    pub components: Option<Vec<String>>,

    /// Target branch in each destination repository
    #[arg(long, value_name = "NAME", env = "SUBREPO_SYNC_BRANCH", default_value = "master")]
    pub branch: String,

    /// Directory in the monorepo that holds the components
    #[arg(long, value_name = "PATH", env = "SUBREPO_SYNC_PREFIX", default_value = "library")]
    pub prefix: String,

    /// Print the git commands without running them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Override a component's remote, e.g. --remote logger=origin-logger (repeatable)
    #[arg(long, value_name = "COMPONENT=REMOTE")]
    pub remote: Vec<String>,

    /// Monorepo root to run git in (defaults to current directory)
    #[arg(short = 'C', long = "repo", value_name = "PATH")]
    pub repo: Option<PathBuf>,

    /// Git executable to invoke
    #[arg(long, value_name = "PATH", env = "SUBREPO_SYNC_GIT", default_value = "git")]
    pub git: PathBuf,
}

impl SyncArgs {
    /// The component selection as a single value.
    pub fn selection(&self) -> Selection {
        if self.all {
            Selection::All
        } else {
            Selection::Explicit(self.components.clone().unwrap_or_default())
        }
    }

    fn options(&self) -> SyncOptions {
        SyncOptions {
            branch: self.branch.clone(),
            prefix: self.prefix.clone(),
        }
    }
}

/// Execute a sync run and return the process exit code
pub fn execute(args: SyncArgs, output: OutputConfig) -> Result<i32> {
    let (mapping, rejected) = RemoteMapping::with_overrides(&args.remote);
    if !rejected.is_empty() {
        debug!("{} --remote item(s) ignored", rejected.len());
    }

    let components = match args.selection().resolve(&mapping) {
        Ok(components) => components,
        Err(Error::UnknownComponents { names }) => {
            eprintln!(
                "{} {}",
                output.error_label(),
                suggestions::unknown_components(&names, &mapping)
            );
            return Ok(exit_codes::USAGE);
        }
    };

    let mut git = SystemGit::new(&args.git);
    if let Some(dir) = &args.repo {
        if !dir.is_dir() {
            anyhow::bail!("Repository directory not found: {}", dir.display());
        }
        git = git.in_dir(dir);
    }

    let executor = Executor::new(git, Reporter::stdout(output), args.dry_run);
    let mut syncer = Syncer::new(executor, args.options());
    let report = syncer.run(&components, &mapping);

    if !report.is_success() {
        let failed: Vec<&str> = report.failed().collect();
        error!("failed components: {}", failed.join(", "));
    }

    Ok(report.status())
}
