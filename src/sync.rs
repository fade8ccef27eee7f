//! # Sync Orchestration
//!
//! Drives a run over the selected components, one after another:
//!
//! 1. **Cleanup**: delete the stale local `split-<component>` branch. This
//!    usually fails because the branch is already gone; failure is logged
//!    and ignored.
//! 2. **Split**: `git subtree split` the component's directory into
//!    `split-<component>`. Failure ends this component's sync.
//! 3. **Publish**: force-push `split-<component>` to the mapped remote's
//!    target branch. Failure is recorded but does not stop later
//!    components.
//!
//! The run's status is the first non-zero component status, or 0.

use std::io::Write;

use log::{error, info};

use crate::git::{split_branch, CommandRunner, Executor, GitCommand};
use crate::mapping::RemoteMapping;

/// Message printed when every component synced.
pub const SUCCESS_MESSAGE: &str = "All components synced.";

/// Settings that apply to every component in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOptions {
    /// Branch to push to in each destination repository.
    pub branch: String,
    /// Directory in the monorepo that holds the components.
    pub prefix: String,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            branch: "master".to_string(),
            prefix: "library".to_string(),
        }
    }
}

/// What happened to one component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentOutcome {
    Synced,
    /// `git subtree split` exited non-zero; nothing was pushed.
    SplitFailed(i32),
    /// Split succeeded but the push exited non-zero.
    PushFailed(i32),
}

impl ComponentOutcome {
    pub fn status(&self) -> i32 {
        match self {
            ComponentOutcome::Synced => 0,
            ComponentOutcome::SplitFailed(rc) | ComponentOutcome::PushFailed(rc) => *rc,
        }
    }
}

/// Per-component outcomes of a run, in the order they ran.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub outcomes: Vec<(String, ComponentOutcome)>,
}

impl SyncReport {
    /// First non-zero component status, or 0 when every component synced.
    pub fn status(&self) -> i32 {
        self.outcomes
            .iter()
            .map(|(_, outcome)| outcome.status())
            .find(|&rc| rc != 0)
            .unwrap_or(0)
    }

    pub fn is_success(&self) -> bool {
        self.status() == 0
    }

    pub fn failed(&self) -> impl Iterator<Item = &str> {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| *outcome != ComponentOutcome::Synced)
            .map(|(component, _)| component.as_str())
    }
}

pub struct Syncer<R, W: Write> {
    executor: Executor<R, W>,
    options: SyncOptions,
}

impl<R: CommandRunner, W: Write> Syncer<R, W> {
    pub fn new(executor: Executor<R, W>, options: SyncOptions) -> Self {
        Self { executor, options }
    }

    /// Syncs every component in order and reports the outcomes.
    ///
    /// Components are expected to be validated against `mapping` already
    /// (see [`crate::selection::Selection::resolve`]).
    pub fn run(&mut self, components: &[String], mapping: &RemoteMapping) -> SyncReport {
        let mut report = SyncReport::default();

        for component in components {
            let outcome = match mapping.get(component) {
                Some(remote) => self.sync_component(component, remote),
                None => {
                    // never push to a guessed remote
                    error!("no remote configured for {}", component);
                    ComponentOutcome::SplitFailed(1)
                }
            };
            report.outcomes.push((component.clone(), outcome));
        }

        if report.is_success() {
            self.executor.reporter().success(SUCCESS_MESSAGE);
        }

        report
    }

    /// Cleanup, split, then publish a single component.
    pub fn sync_component(&mut self, component: &str, remote: &str) -> ComponentOutcome {
        let local = split_branch(component);
        let branch = self.options.branch.clone();

        self.executor
            .reporter()
            .component_header(component, remote, &branch);

        let rc = self.executor.execute(&GitCommand::delete_branch(&local));
        if rc != 0 {
            info!("delete branch {} returned {}, continuing...", local, rc);
        }

        let split = GitCommand::subtree_split(&self.options.prefix, component, &local);
        let rc = self.executor.execute(&split);
        if rc != 0 {
            error!("subtree split failed for {}", component);
            return ComponentOutcome::SplitFailed(rc);
        }

        let rc = self
            .executor
            .execute(&GitCommand::force_push(remote, &local, &branch));
        if rc != 0 {
            error!("push failed for {}", component);
            return ComponentOutcome::PushFailed(rc);
        }

        ComponentOutcome::Synced
    }

    pub fn into_executor(self) -> Executor<R, W> {
        self.executor
    }
}
