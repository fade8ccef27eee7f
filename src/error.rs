//! # Error Handling
//!
//! This module defines the error types shared by the `subrepo-sync`
//! library. It uses `thiserror` for the `Error` enum and exposes a
//! `Result<T>` alias used throughout the crate.
//!
//! Only failures that stop a run before any git command is issued are
//! represented here. A git command that exits non-zero is not an error in
//! this sense: it is recorded as a status code on the component's outcome
//! (see [`crate::sync::ComponentOutcome`]) and the run moves on.
//!
//! Malformed `--remote` items have their own [`OverrideError`], which the
//! mapping builder logs and skips instead of propagating.

use thiserror::Error;

/// Main error type for subrepo-sync operations
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// An explicit selection named components that have no remote mapping.
    ///
    /// All unknown names are collected before reporting, in the order the
    /// caller supplied them.
    #[error("unknown components: {}", names.join(", "))]
    UnknownComponents { names: Vec<String> },
}

/// Reasons a `--remote KEY=VALUE` item is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OverrideError {
    #[error("missing '=' separator")]
    MissingSeparator,

    #[error("component name is empty")]
    EmptyKey,

    #[error("remote name is empty")]
    EmptyValue,
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
