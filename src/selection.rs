//! Component selection.
//!
//! `--all` and `--components` are mutually exclusive on the command line;
//! [`Selection`] carries that choice as a single value so nothing
//! downstream has to re-check it.

use crate::error::{Error, Result};
use crate::mapping::{default_component_names, RemoteMapping};

/// Which components a run should sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Every default component, in default order.
    All,
    /// Exactly the given names, in the given order.
    Explicit(Vec<String>),
}

impl Selection {
    /// Resolves the selection into the ordered list of components to sync.
    ///
    /// An explicit list is validated against `mapping` up front. If any
    /// name is missing, every missing name is reported together and
    /// nothing is returned to run.
    pub fn resolve(&self, mapping: &RemoteMapping) -> Result<Vec<String>> {
        match self {
            Selection::All => Ok(default_component_names().map(str::to_string).collect()),
            Selection::Explicit(names) => {
                let unknown: Vec<String> = names
                    .iter()
                    .filter(|name| !mapping.contains(name.as_str()))
                    .cloned()
                    .collect();

                if unknown.is_empty() {
                    Ok(names.clone())
                } else {
                    Err(Error::UnknownComponents { names: unknown })
                }
            }
        }
    }
}
