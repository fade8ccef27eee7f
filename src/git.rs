//! Git invocations used by a sync run.
//!
//! The tool's whole contract with git is: build an exact argument vector,
//! run it, look at the exit status. Output is never parsed.
//!
//! [`GitCommand`] builds the three argument vectors. [`CommandRunner`] is
//! the seam between a run and the outside world; [`SystemGit`] is the
//! real implementation. [`Executor`] sits in front of a runner and applies
//! dry-run uniformly, so no command can skip it.

use std::fmt;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

use log::{debug, error};

use crate::output::Reporter;

/// Status used when the git program could not be started at all.
pub const SPAWN_FAILURE_STATUS: i32 = 127;

/// Status used when git was terminated without an exit code (by a signal).
pub const NO_EXIT_CODE_STATUS: i32 = 1;

/// Name of the temporary local branch that holds a component's split history.
pub fn split_branch(component: &str) -> String {
    format!("split-{}", component)
}

/// A git invocation, as the arguments following the program name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitCommand {
    args: Vec<String>,
}

impl GitCommand {
    /// `git branch -D <branch>`
    pub fn delete_branch(branch: &str) -> Self {
        Self::from_args(["branch", "-D", branch])
    }

    /// `git subtree split --prefix=<prefix>/<component> -b <branch>`
    pub fn subtree_split(prefix: &str, component: &str, branch: &str) -> Self {
        let prefix_arg = format!("--prefix={}/{}", prefix, component);
        Self::from_args(["subtree", "split", prefix_arg.as_str(), "-b", branch])
    }

    /// `git push -f <remote> <local>:<target>`
    pub fn force_push(remote: &str, local_branch: &str, target_branch: &str) -> Self {
        let refspec = format!("{}:{}", local_branch, target_branch);
        Self::from_args(["push", "-f", remote, refspec.as_str()])
    }

    fn from_args<'a>(args: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            args: args.into_iter().map(str::to_string).collect(),
        }
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for GitCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "git {}", self.args.join(" "))
    }
}

/// Runs a git command and reports its exit status.
///
/// Implementations must not fail: every problem is expressed as a
/// non-zero status.
pub trait CommandRunner {
    fn run(&mut self, command: &GitCommand) -> i32;
}

/// Runs commands with the system git, inheriting stdio.
#[derive(Debug, Clone)]
pub struct SystemGit {
    program: PathBuf,
    repo_dir: Option<PathBuf>,
}

impl SystemGit {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            repo_dir: None,
        }
    }

    /// Run every command from `dir` instead of the current directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.repo_dir = Some(dir.into());
        self
    }
}

impl Default for SystemGit {
    fn default() -> Self {
        Self::new("git")
    }
}

impl CommandRunner for SystemGit {
    fn run(&mut self, command: &GitCommand) -> i32 {
        let mut process = Command::new(&self.program);
        process.args(command.args());
        if let Some(dir) = &self.repo_dir {
            process.current_dir(dir);
        }

        debug!("spawning {} {:?}", self.program.display(), command.args());

        match process.status() {
            Ok(status) => status.code().unwrap_or(NO_EXIT_CODE_STATUS),
            Err(e) => {
                error!("failed to run {}: {}", self.program.display(), e);
                SPAWN_FAILURE_STATUS
            }
        }
    }
}

/// Echoes every command and either runs it or, in dry-run, pretends it
/// succeeded.
pub struct Executor<R, W: Write> {
    runner: R,
    reporter: Reporter<W>,
    dry_run: bool,
}

impl<R: CommandRunner, W: Write> Executor<R, W> {
    pub fn new(runner: R, reporter: Reporter<W>, dry_run: bool) -> Self {
        Self {
            runner,
            reporter,
            dry_run,
        }
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Prints `+ <command>`, then runs it unless in dry-run. Returns the
    /// exit status, always 0 in dry-run.
    pub fn execute(&mut self, command: &GitCommand) -> i32 {
        self.reporter.command(command);
        if self.dry_run {
            return 0;
        }
        self.runner.run(command)
    }

    pub fn reporter(&mut self) -> &mut Reporter<W> {
        &mut self.reporter
    }

    pub fn into_parts(self) -> (R, Reporter<W>) {
        (self.runner, self.reporter)
    }
}
