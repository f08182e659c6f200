//! External tool invocation.
//!
//! Subprocesses run behind the [`CommandRunner`] capability trait so the
//! wrappers can be exercised with a test double. Launch failure is fatal
//! and re-raised after logging; a non-zero exit is recorded in the run
//! report but does not abort the batch.

pub mod msgtool;
pub mod xsltproc;

use std::{path::Path, process::Command};

use anyhow::{Context, Result};

/// Captured result of one subprocess invocation.
#[derive(Debug, Clone, Default)]
pub struct ToolOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit code when the process terminated normally.
    pub status: Option<i32>,
}

impl ToolOutput {
    pub fn succeeded(&self) -> bool {
        self.status == Some(0)
    }
}

/// Capability interface for running an external executable.
pub trait CommandRunner {
    /// Run `program` with `args`, blocking until completion. `cwd` is the
    /// staging directory for tools that expect their inputs in place.
    fn run(&self, program: &str, args: &[String], cwd: Option<&Path>) -> Result<ToolOutput>;
}

/// Production runner backed by `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String], cwd: Option<&Path>) -> Result<ToolOutput> {
        let mut cmd = Command::new(program);
        cmd.args(args);
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }
        let output = cmd
            .output()
            .with_context(|| format!("Failed to launch: {} {}", program, args.join(" ")))?;
        Ok(ToolOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            status: output.status.code(),
        })
    }
}
