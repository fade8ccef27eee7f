//! # Subrepo Sync Library
//!
//! Publishes subdirectories of a monorepo to their own repositories. Each
//! component under the monorepo prefix (`library/` by default) has its
//! history extracted with `git subtree split` and force-pushed to the
//! remote it is mapped to.
//!
//! ## Quick Example
//!
//! ```
//! use subrepo_sync::git::{Executor, SystemGit};
//! use subrepo_sync::mapping::RemoteMapping;
//! use subrepo_sync::output::{OutputConfig, Reporter};
//! use subrepo_sync::selection::Selection;
//! use subrepo_sync::sync::{SyncOptions, Syncer};
//!
//! let (mapping, _rejected) = RemoteMapping::with_overrides(&["logger=origin-logger"]);
//! let components = Selection::All.resolve(&mapping).unwrap();
//!
//! // Dry run: commands are printed, git is never started
//! let reporter = Reporter::new(Vec::new(), OutputConfig::without_color());
//! let executor = Executor::new(SystemGit::default(), reporter, true);
//! let mut syncer = Syncer::new(executor, SyncOptions::default());
//!
//! let report = syncer.run(&components, &mapping);
//! assert_eq!(report.status(), 0);
//! ```
//!
//! ## Modules
//!
//! - **`mapping`**: the component to remote table and `--remote` overrides.
//! - **`selection`**: `--all` versus an explicit component list.
//! - **`git`**: argument vectors for the three git commands, the
//!   `CommandRunner` seam and the dry-run aware `Executor`.
//! - **`sync`**: per-component cleanup, split and publish, plus status
//!   aggregation.
//! - **`output`**, **`suggestions`**, **`exit_codes`**: terminal-facing
//!   details shared with the binary.

pub mod error;
pub mod exit_codes;
pub mod git;
pub mod mapping;
pub mod output;
pub mod selection;
pub mod suggestions;
pub mod sync;

#[cfg(test)]
mod mapping_proptest;
