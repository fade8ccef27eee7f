//! Process exit codes.
//!
//! - `0`: every selected component synced (or a dry run)
//! - `1`: internal error
//! - `2`: invalid command-line usage (handled by clap) or an explicit
//!   selection naming unknown components
//!
//! Any other value is the first non-zero status returned by a
//! `git subtree split` or `git push`.

/// Successful run.
pub const SUCCESS: i32 = 0;

/// Unexpected failure outside of git.
pub const ERROR: i32 = 1;

/// Bad usage, including unknown components in `--components`.
pub const USAGE: i32 = 2;
