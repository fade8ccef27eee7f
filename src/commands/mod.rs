//! # CLI Command Implementations
//!
//! Each command lives in its own file with an `Args` struct derived using
//! `clap` and an `execute` function that calls into the `subrepo_sync`
//! library. The tool currently has a single command, `sync`, which is
//! flattened into the top-level CLI.

pub mod sync;
