//! # Output Configuration
//!
//! This module controls how progress is written to the terminal: whether
//! it is colored, and the shape of each progress line.
//!
//! ## Respecting User Preferences
//!
//! The module respects the following environment variables and flags:
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals
//!
//! Styling never changes the text itself, so piped output is identical
//! to what a user sees apart from escape codes.

use std::env;
use std::fmt::Display;
use std::io::{self, Write};

use console::Style;

/// Output configuration for controlling colors.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// # Arguments
    /// * `color_flag` - The value of the --color CLI flag: "always", "never", or "auto"
    ///
    /// In auto mode, colors are disabled if:
    /// - `NO_COLOR` environment variable is set (any value, including empty)
    /// - `CLICOLOR=0` is set
    /// - `TERM=dumb` is set
    /// - stdout is not a TTY (unless `CLICOLOR_FORCE=1`)
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        // The presence of NO_COLOR (even if empty) disables colors
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// Create a configuration with colors always enabled.
    #[cfg(test)]
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    /// Create a configuration with colors always disabled.
    pub fn without_color() -> Self {
        Self { use_color: false }
    }

    /// The `error:` label put in front of messages on stderr.
    pub fn error_label(&self) -> String {
        self.style(Style::new().red().bold())
            .apply_to("error:")
            .to_string()
    }

    fn style(&self, style: Style) -> Style {
        if self.use_color {
            style.force_styling(true)
        } else {
            Style::new().force_styling(false)
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Writes run progress: component headers, echoed commands and the
/// closing summary line.
pub struct Reporter<W: Write = io::Stdout> {
    out: W,
    config: OutputConfig,
}

impl Reporter<io::Stdout> {
    pub fn stdout(config: OutputConfig) -> Self {
        Self::new(io::stdout(), config)
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, config: OutputConfig) -> Self {
        Self { out, config }
    }

    /// `==> Sync <component> -> <remote>:<branch>`
    pub fn component_header(&mut self, component: &str, remote: &str, branch: &str) {
        let arrow = self.config.style(Style::new().cyan().bold()).apply_to("==>");
        let target = format!("{}:{}", remote, branch);
        let target = self.config.style(Style::new().bold()).apply_to(target);
        self.line(format_args!("{} Sync {} -> {}", arrow, component, target));
    }

    /// `+ <command line>`
    pub fn command(&mut self, command: &dyn Display) {
        let plus = self.config.style(Style::new().dim()).apply_to("+");
        self.line(format_args!("{} {}", plus, command));
    }

    pub fn success(&mut self, message: &str) {
        let message = self.config.style(Style::new().green()).apply_to(message);
        self.line(format_args!("{}", message));
    }

    /// Consumes the reporter and hands back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, args: std::fmt::Arguments<'_>) {
        // A closed stdout must not turn into a failed sync.
        let _ = writeln!(self.out, "{}", args);
        let _ = self.out.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> Reporter<Vec<u8>> {
        Reporter::new(Vec::new(), OutputConfig::without_color())
    }

    fn text(reporter: Reporter<Vec<u8>>) -> String {
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_color_always() {
        let config = OutputConfig::from_env_and_flag("always");
        assert!(config.use_color);
    }

    #[test]
    fn test_color_never() {
        let config = OutputConfig::from_env_and_flag("never");
        assert!(!config.use_color);
    }

    #[test]
    fn test_component_header_plain() {
        let mut reporter = plain();
        reporter.component_header("logger", "github-logger", "master");
        assert_eq!(text(reporter), "==> Sync logger -> github-logger:master\n");
    }

    #[test]
    fn test_command_plain() {
        let mut reporter = plain();
        reporter.command(&"git branch -D split-logger");
        assert_eq!(text(reporter), "+ git branch -D split-logger\n");
    }

    #[test]
    fn test_colored_output_keeps_text() {
        let mut reporter = Reporter::new(Vec::new(), OutputConfig::with_color());
        reporter.success("All components synced.");
        let output = text(reporter);
        assert!(output.contains("All components synced."));
        assert!(output.contains('\u{1b}'));
    }

    #[test]
    fn test_error_label() {
        assert_eq!(OutputConfig::without_color().error_label(), "error:");
        assert!(OutputConfig::with_color().error_label().contains("error:"));
    }
}
