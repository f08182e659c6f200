use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod bundles;
mod dita;
mod pseudo;
mod transcheck;

const BIN_NAME: &str = "msgcat";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(path, content)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }

    pub fn exists(&self, path: &str) -> bool {
        self.project_dir.join(path).exists()
    }
}

/// A small but representative catalog used across the mode tests.
pub const CATALOG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Messages>
  <Message ID="CWLNA0050" category="Server">
    <MsgText>Connection limit is &gt; expected.</MsgText>
    <Explanation>Check the <q>limits</q> section.</Explanation>
    <OperatorResponse>Reduce connections.</OperatorResponse>
  </Message>
  <Message ID="CWLNA0007">
    <MsgText>Hello <q>world</q></MsgText>
  </Message>
</Messages>
"#;

#[test]
fn missing_mode_argument_fails_fast() -> Result<()> {
    let test = CliTest::new()?;
    let output = test.command().output()?;
    assert!(!output.status.success());
    Ok(())
}

#[test]
fn missing_required_flag_for_mode_exits_with_error() -> Result<()> {
    let test = CliTest::with_file("catalog.xml", CATALOG)?;
    // dita without --outputbasedir must fail before writing anything.
    let output = test
        .command()
        .args(["-m", "dita", "-i", "catalog.xml"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--outputbasedir"));
    Ok(())
}

#[test]
fn noop_mode_succeeds_with_no_arguments() -> Result<()> {
    let test = CliTest::new()?;
    let output = test.command().args(["-m", "noop"]).output()?;
    assert_eq!(output.status.code(), Some(0));
    Ok(())
}
