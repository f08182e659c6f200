//! Run reporting and printing utilities.
//!
//! This module is separate from the pipeline logic so the components stay
//! printing-free; everything user-visible funnels through a [`Report`].

use colored::Colorize;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Collects what a run attempted, what it skipped and what failed, and
/// prints the human-readable summary at the end.
#[derive(Debug, Default)]
pub struct Report {
    verbose: bool,
    actions: usize,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl Report {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            ..Default::default()
        }
    }

    /// Record one completed action (a file written, a tool invoked).
    /// Printed immediately in verbose mode.
    pub fn action(&mut self, message: impl AsRef<str>) {
        self.actions += 1;
        if self.verbose {
            println!("{} {}", SUCCESS_MARK.green(), message.as_ref());
        }
    }

    /// Record a non-fatal problem (malformed record, skipped file).
    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        eprintln!("{}: {}", "warning".bold().yellow(), message);
        self.warnings.push(message);
    }

    /// Record an error that does not abort the whole run.
    pub fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        eprintln!("{}: {}", "error".bold().red(), message);
        self.errors.push(message);
    }

    /// Captured output of an external tool, shown in verbose mode and
    /// always shown on failure by the caller logging an error first.
    pub fn tool_output(&mut self, stdout: &str, stderr: &str) {
        if self.verbose {
            for line in stdout.lines() {
                println!("  {} {}", "|".blue(), line);
            }
        }
        for line in stderr.lines() {
            eprintln!("  {} {}", "|".blue(), line);
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Print the closing summary of what was attempted.
    pub fn print_summary(&self, mode: &str) {
        let mark = if self.errors.is_empty() {
            SUCCESS_MARK.green()
        } else {
            FAILURE_MARK.red()
        };
        println!(
            "{} {}: {} action(s), {} warning(s), {} error(s)",
            mark,
            mode,
            self.actions,
            self.warnings.len(),
            self.errors.len()
        );
    }
}
