//! Shared test utilities for CLI end-to-end tests.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_fake_git(&[("subtree split", 128)]);
//!     fixture.command().arg("--all").assert().code(128);
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    pub use super::TestFixture;
}

/// A temporary monorepo directory, optionally with a fake `git` that
/// records every invocation instead of touching a real repository.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
    fake_git: Option<PathBuf>,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
            fake_git: None,
        }
    }

    /// Install a fake `git` script.
    ///
    /// Each invocation appends its arguments as one line to `git.log`.
    /// An invocation whose argument line contains a rule's pattern exits
    /// with that rule's status; everything else exits 0.
    #[cfg(unix)]
    #[allow(dead_code)]
    pub fn with_fake_git(mut self, failures: &[(&str, i32)]) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let log = self.git_log();
        let mut script = format!(
            "#!/bin/sh\nprintf '%s\\n' \"$*\" >> '{}'\ncase \"$*\" in\n",
            log.display()
        );
        for (pattern, status) in failures {
            script.push_str(&format!("  *'{}'*) exit {} ;;\n", pattern, status));
        }
        script.push_str("esac\nexit 0\n");

        let path = self.temp_dir.path().join("fake-git");
        std::fs::write(&path, script).expect("Failed to write fake git");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake git executable");

        self.fake_git = Some(path);
        self
    }

    /// Add a file with the given path and content.
    #[allow(dead_code)]
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Where the fake git records its invocations.
    pub fn git_log(&self) -> PathBuf {
        self.temp_dir.path().join("git.log")
    }

    /// Recorded fake git invocations, one argument line each.
    #[allow(dead_code)]
    pub fn git_calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.git_log())
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Create a command running in this fixture's directory, with colors
    /// off and the fake git (if any) wired in.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("subrepo-sync");
        cmd.current_dir(self.path())
            .env("NO_COLOR", "1")
            .env_remove("SUBREPO_SYNC_BRANCH")
            .env_remove("SUBREPO_SYNC_PREFIX")
            .env_remove("SUBREPO_SYNC_GIT")
            .env_remove("SUBREPO_SYNC_LOG");
        if let Some(git) = &self.fake_git {
            cmd.arg("--git").arg(git).arg("-C").arg(self.path());
        }
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
