//! Top-level dispatch.
//!
//! Validates the selected mode's prerequisites before any I/O, then drives
//! the matching components sequentially: languages in supply order on the
//! outside, input files on the inside.

use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result, bail};

use crate::catalog::{self, Message};
use crate::config::RunConfig;
use crate::generators::{bundles, dita, html, toc};
use crate::pseudo;
use crate::report::Report;
use crate::template::{ensure_parent_dirs, translated_path};
use crate::tools::{CommandRunner, SystemRunner, msgtool, xsltproc};
use crate::transcheck;

use super::args::{Arguments, Mode};
use super::exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let config = RunConfig::from_args(args)?;
    validate(&config)?;

    let mut report = Report::new(config.verbose);
    let result = dispatch(&config, &SystemRunner, &mut report);

    // The summary covers whatever was attempted, aborted run included.
    report.print_summary(&config.mode.to_string());
    result?;

    if report.has_errors() {
        Ok(ExitStatus::Failure.into())
    } else {
        Ok(ExitStatus::Success.into())
    }
}

/// Check the selected mode's required arguments up front; nothing has been
/// read or written when this fails.
pub fn validate(config: &RunConfig) -> Result<()> {
    let need_inputs = || -> Result<()> {
        if config.inputs.is_empty() {
            bail!("mode {} requires at least one --input", config.mode);
        }
        Ok(())
    };
    let need_output_file = || -> Result<()> {
        if config.output_file.is_none() {
            bail!("mode {} requires --outputfile", config.mode);
        }
        Ok(())
    };
    let need_output_base = || -> Result<()> {
        if config.output_base.is_none() {
            bail!("mode {} requires --outputbasedir", config.mode);
        }
        Ok(())
    };
    let need_languages = || -> Result<()> {
        if config.languages.is_empty() {
            bail!("mode {} requires --language or --langlist", config.mode);
        }
        Ok(())
    };

    match config.mode {
        Mode::Icu => {
            need_inputs()?;
            need_output_file()?;
            if config.container.is_none() {
                bail!("mode icu requires --container");
            }
        }
        Mode::Lrb => {
            need_inputs()?;
            need_output_file()?;
            if config.container.is_none() {
                bail!("mode lrb requires --container");
            }
            if config.package.is_none() {
                bail!("mode lrb requires --package");
            }
        }
        Mode::Prb | Mode::Html => {
            need_inputs()?;
            need_output_file()?;
        }
        Mode::Toc | Mode::Dita => {
            need_inputs()?;
            need_output_base()?;
        }
        Mode::Pseudotranslation => {
            need_inputs()?;
            need_output_base()?;
            need_languages()?;
        }
        Mode::Msgtoolwrapper => {
            need_inputs()?;
            need_output_base()?;
            need_languages()?;
            if config.msgtool.is_none() {
                bail!(
                    "mode msgtoolwrapper requires --msgtoolbindir, --msgtoolclasspath and --msgtoolclass"
                );
            }
        }
        Mode::Xsltprocwrapper => {
            need_inputs()?;
            need_output_file()?;
            need_languages()?;
            if config.xsl.is_none() {
                bail!("mode xsltprocwrapper requires --xsl");
            }
        }
        Mode::Checkjstrans => {
            need_inputs()?;
            if config.translation_root.is_none() {
                bail!("mode checkjstrans requires --translationrootdir");
            }
        }
        Mode::Fixclassname => {
            need_inputs()?;
            need_output_file()?;
            // One output file can only hold one renamed class.
            if config.inputs.len() > 1 {
                bail!("mode fixclassname takes exactly one --input");
            }
        }
        Mode::Noop => {}
    }
    Ok(())
}

/// Run the selected mode. `runner` is injected so tests can stub the
/// external tools. Missing prerequisites surface as errors here too, so a
/// caller bypassing [`validate`] cannot panic.
pub fn dispatch(config: &RunConfig, runner: &dyn CommandRunner, report: &mut Report) -> Result<()> {
    match config.mode {
        Mode::Icu => {
            let messages = load_messages(config, report)?;
            let out = bundle_output(config)?;
            bundles::generate_icu(
                &messages,
                config.container.as_deref().unwrap_or("root"),
                &out,
                report,
            )
        }
        Mode::Lrb => {
            let messages = load_messages(config, report)?;
            let out = bundle_output(config)?;
            bundles::generate_lrb(
                &messages,
                config.package.as_deref().unwrap_or_default(),
                config.container.as_deref().unwrap_or_default(),
                &out,
                report,
            )
        }
        Mode::Prb => {
            let messages = load_messages(config, report)?;
            let out = bundle_output(config)?;
            bundles::generate_prb(&messages, &out, report)
        }
        Mode::Html => {
            let messages = load_messages(config, report)?;
            let out = config
                .output_file
                .as_ref()
                .context("mode html requires --outputfile")?;
            html::generate(&messages, Path::new(out), report)
        }
        Mode::Toc => {
            let messages = load_messages(config, report)?;
            let base = config
                .output_base
                .as_ref()
                .context("mode toc requires --outputbasedir")?;
            toc::generate(&messages, base, report)?;
            Ok(())
        }
        Mode::Dita => {
            let messages = load_messages(config, report)?;
            let base = config
                .output_base
                .as_ref()
                .context("mode dita requires --outputbasedir")?;
            dita::generate(&messages, base, report)
        }
        Mode::Pseudotranslation => run_pseudo(config, report),
        Mode::Msgtoolwrapper => {
            let inputs: Vec<&Path> = config.inputs.iter().map(|p| p.as_path()).collect();
            msgtool::run_msgtool(
                runner,
                config
                    .msgtool
                    .as_ref()
                    .context("mode msgtoolwrapper requires the msgtool flags")?,
                &inputs,
                &config.languages,
                config
                    .output_base
                    .as_ref()
                    .context("mode msgtoolwrapper requires --outputbasedir")?,
                config.placement,
                report,
            )
        }
        Mode::Xsltprocwrapper => {
            let inputs: Vec<&Path> = config.inputs.iter().map(|p| p.as_path()).collect();
            xsltproc::run_xsltproc(
                runner,
                config
                    .xsl
                    .as_ref()
                    .context("mode xsltprocwrapper requires --xsl")?,
                &config.extra_args,
                &inputs,
                &config.languages,
                config
                    .output_file
                    .as_ref()
                    .context("mode xsltprocwrapper requires --outputfile")?,
                config.replace_filename_vars,
                report,
            )
        }
        Mode::Checkjstrans => run_checkjstrans(config, report),
        Mode::Fixclassname => run_fixclassname(config, report),
        Mode::Noop => Ok(()),
    }
}

/// Parse every input catalog, surfacing malformed records as warnings,
/// and concatenate the message sequences in input order.
fn load_messages(config: &RunConfig, report: &mut Report) -> Result<Vec<Message>> {
    let mut messages = Vec::new();
    for input in &config.inputs {
        let parsed = catalog::read_catalog(input, &config.vars)?;
        for warning in parsed.warnings {
            report.warn(format!("{}: {}", input.display(), warning));
        }
        messages.extend(parsed.messages);
    }
    Ok(messages)
}

/// Bundle outputs normally land at --outputfile; --zipoutput redirects
/// them into the collection directory for downstream archiving.
fn bundle_output(config: &RunConfig) -> Result<PathBuf> {
    let out = PathBuf::from(
        config
            .output_file
            .as_ref()
            .with_context(|| format!("mode {} requires --outputfile", config.mode))?,
    );
    Ok(match (&config.zip_output, out.file_name()) {
        (Some(dir), Some(name)) => dir.join(name),
        _ => out,
    })
}

/// Languages outer, inputs inner; an unsupported source type skips that
/// file and continues with the rest.
fn run_pseudo(config: &RunConfig, report: &mut Report) -> Result<()> {
    let base = config
        .output_base
        .as_ref()
        .context("mode pseudotranslation requires --outputbasedir")?;
    for lang in &config.languages {
        for input in &config.inputs {
            let dest = translated_path(base, input, lang, config.placement);
            match pseudo::pseudo_translate_file(input, &dest, lang) {
                Ok(()) => report.action(format!(
                    "pseudotranslation {} {} -> {}",
                    lang.raw(),
                    input.display(),
                    dest.display()
                )),
                Err(err) => report.error(format!("{:#}", err)),
            }
        }
    }
    Ok(())
}

fn run_checkjstrans(config: &RunConfig, report: &mut Report) -> Result<()> {
    let root = config
        .translation_root
        .as_ref()
        .context("mode checkjstrans requires --translationrootdir")?;
    let sources: Vec<&Path> = config.inputs.iter().map(|p| p.as_path()).collect();
    let outcome = transcheck::check_translations(&sources, root)?;
    report.action(format!(
        "checked {} file(s) against {} language(s)",
        sources.len(),
        outcome.languages.len()
    ));
    for missing in &outcome.missing {
        if missing.flag_flipped {
            report.warn(format!(
                "{}: no {} translation; flag set to false",
                missing.source, missing.language
            ));
        } else {
            report.warn(format!(
                "{}: no {} translation (already flagged)",
                missing.source, missing.language
            ));
        }
    }
    Ok(())
}

/// One input, one output: a second input would silently overwrite the
/// first result, so the single-input rule is enforced here as well as in
/// [`validate`].
fn run_fixclassname(config: &RunConfig, report: &mut Report) -> Result<()> {
    let [input] = config.inputs.as_slice() else {
        bail!("mode fixclassname takes exactly one --input");
    };
    let output = Path::new(
        config
            .output_file
            .as_ref()
            .context("mode fixclassname requires --outputfile")?,
    );
    let new_class = output
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let old_class = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    let source = fs::read_to_string(input)
        .with_context(|| format!("Failed to read source file: {}", input.display()))?;
    let fixed = pseudo::java_scanner::fix_class_name(&source, &old_class, &new_class)?;
    ensure_parent_dirs(output)?;
    fs::write(output, fixed)
        .with_context(|| format!("Failed to write: {}", output.display()))?;
    report.action(format!(
        "fixclassname {} ({} -> {})",
        output.display(),
        old_class,
        new_class
    ));
    Ok(())
}
