//! Batch wrapper for the external message-validation tool.
//!
//! The tool is a Java program that expects its inputs staged in its own
//! working directory and writes one fixed-named output file there. Per
//! language: stage the inputs, invoke once, relocate the output to the
//! language's templated destination.

use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::report::Report;
use crate::template::{LanguageCode, Placement, ensure_parent_dirs, translated_path};

use super::CommandRunner;

/// The fixed name the tool gives its output in the staging directory.
pub const MSGTOOL_OUTPUT_FILE: &str = "msgcheck.out";

/// Settings for the external tool, straight from the command line.
#[derive(Debug, Clone)]
pub struct MsgToolConfig {
    /// Staging/working directory the tool runs in.
    pub bin_dir: std::path::PathBuf,
    pub classpath: String,
    pub class: String,
}

/// Run the tool once per language over the staged inputs, relocating its
/// output under `out_base`.
pub fn run_msgtool(
    runner: &dyn CommandRunner,
    config: &MsgToolConfig,
    inputs: &[&Path],
    languages: &[LanguageCode],
    out_base: &Path,
    placement: Placement,
    report: &mut Report,
) -> Result<()> {
    for lang in languages {
        stage_inputs(inputs, &config.bin_dir)?;

        let args = vec![
            "-cp".to_string(),
            config.classpath.clone(),
            config.class.clone(),
            lang.raw().to_string(),
        ];
        let output = match runner.run("java", &args, Some(&config.bin_dir)) {
            Ok(output) => output,
            Err(err) => {
                report.error(format!("msgtool launch failed for {}: java -cp {} {} {}",
                    lang.raw(), config.classpath, config.class, lang.raw()));
                return Err(err);
            }
        };
        report.tool_output(&output.stdout, &output.stderr);
        if !output.succeeded() {
            report.error(format!(
                "msgtool exited with status {:?} for language {}",
                output.status,
                lang.raw()
            ));
        }

        let staged = config.bin_dir.join(MSGTOOL_OUTPUT_FILE);
        let dest = translated_path(out_base, Path::new(MSGTOOL_OUTPUT_FILE), lang, placement);
        ensure_parent_dirs(&dest)?;
        fs::copy(&staged, &dest).with_context(|| {
            format!(
                "Failed to collect msgtool output {} -> {}",
                staged.display(),
                dest.display()
            )
        })?;
        report.action(format!("msgtool {} -> {}", lang.raw(), dest.display()));
    }
    Ok(())
}

/// Copy every input into the staging directory.
fn stage_inputs(inputs: &[&Path], staging: &Path) -> Result<()> {
    fs::create_dir_all(staging)
        .with_context(|| format!("Failed to create staging directory: {}", staging.display()))?;
    for input in inputs {
        let name = input
            .file_name()
            .with_context(|| format!("Input has no file name: {}", input.display()))?;
        fs::copy(input, staging.join(name)).with_context(|| {
            format!("Failed to stage input {} into {}", input.display(), staging.display())
        })?;
    }
    Ok(())
}
