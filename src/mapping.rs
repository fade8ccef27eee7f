//! # Remote Mapping
//!
//! Maps each component (a subdirectory under the monorepo prefix) to the
//! git remote its history is published to.
//!
//! The mapping starts from [`DEFAULT_COMPONENTS`] and is then adjusted by
//! `--remote KEY=VALUE` items, applied in order so the last item for a key
//! wins. A malformed item is logged and skipped; it never aborts the run.
//!
//! ```
//! use subrepo_sync::mapping::RemoteMapping;
//!
//! let items = vec!["logger=origin-logger".to_string(), "bogus".to_string()];
//! let (mapping, rejected) = RemoteMapping::with_overrides(&items);
//!
//! assert_eq!(mapping.get("logger"), Some("origin-logger"));
//! assert_eq!(mapping.get("common"), Some("github-common"));
//! assert_eq!(rejected, vec!["bogus".to_string()]);
//! ```

use std::collections::BTreeMap;
use std::str::FromStr;

use log::warn;

use crate::error::OverrideError;

/// Components published by default, in the order `--all` syncs them.
pub const DEFAULT_COMPONENTS: [(&str, &str); 5] = [
    ("logger", "github-logger"),
    ("common", "github-common"),
    ("database", "github-database"),
    ("concurrent", "github-concurrent"),
    ("stringify", "github-stringify"),
];

/// Names of the default components, in sync order.
pub fn default_component_names() -> impl Iterator<Item = &'static str> {
    DEFAULT_COMPONENTS.iter().map(|(name, _)| *name)
}

/// A single parsed `--remote` item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteOverride {
    pub component: String,
    pub remote: String,
}

impl FromStr for RemoteOverride {
    type Err = OverrideError;

    /// Splits on the first `=` and trims both halves.
    fn from_str(item: &str) -> Result<Self, Self::Err> {
        let (component, remote) = item
            .split_once('=')
            .ok_or(OverrideError::MissingSeparator)?;
        let component = component.trim();
        let remote = remote.trim();

        if component.is_empty() {
            return Err(OverrideError::EmptyKey);
        }
        if remote.is_empty() {
            return Err(OverrideError::EmptyValue);
        }

        Ok(Self {
            component: component.to_string(),
            remote: remote.to_string(),
        })
    }
}

/// Component to remote lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteMapping {
    remotes: BTreeMap<String, String>,
}

impl RemoteMapping {
    /// The mapping with every default component and its default remote.
    pub fn defaults() -> Self {
        let remotes = DEFAULT_COMPONENTS
            .iter()
            .map(|(component, remote)| (component.to_string(), remote.to_string()))
            .collect();
        Self { remotes }
    }

    /// Builds the default mapping and applies `items` in order.
    ///
    /// Returns the mapping together with the items that were rejected.
    /// Each rejected item is also logged at `warn` level.
    pub fn with_overrides<S: AsRef<str>>(items: &[S]) -> (Self, Vec<String>) {
        let mut mapping = Self::defaults();
        let mut rejected = Vec::new();

        for item in items {
            let item = item.as_ref();
            match item.parse::<RemoteOverride>() {
                Ok(entry) => mapping.apply(entry),
                Err(reason) => {
                    warn!("ignore invalid --remote item: {} ({})", item, reason);
                    rejected.push(item.to_string());
                }
            }
        }

        (mapping, rejected)
    }

    /// Inserts or replaces the remote for one component.
    pub fn apply(&mut self, entry: RemoteOverride) {
        self.remotes.insert(entry.component, entry.remote);
    }

    pub fn get(&self, component: &str) -> Option<&str> {
        self.remotes.get(component).map(String::as_str)
    }

    pub fn contains(&self, component: &str) -> bool {
        self.remotes.contains_key(component)
    }

    pub fn len(&self) -> usize {
        self.remotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remotes.is_empty()
    }

    /// Iterates `(component, remote)` pairs in component-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.remotes
            .iter()
            .map(|(component, remote)| (component.as_str(), remote.as_str()))
    }
}

impl Default for RemoteMapping {
    fn default() -> Self {
        Self::defaults()
    }
}
