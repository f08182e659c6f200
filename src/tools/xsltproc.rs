//! Stream wrapper for the external XML-stylesheet processor.
//!
//! Unlike the msgtool wrapper there is no staging directory: the argument
//! vector carries everything. Per language: fixed executable, caller extra
//! arguments, `--output` with the language-templated destination, the
//! stylesheet, then the input list (language-templated when requested).

use std::path::Path;

use anyhow::Result;

use crate::report::Report;
use crate::template::{LanguageCode, ensure_parent_dirs, substitute_lang};

use super::CommandRunner;

const XSLTPROC: &str = "xsltproc";

/// Run xsltproc once per language.
///
/// `output_template` and (when `template_inputs` is set) the input paths may
/// contain `%LANG%` / `%lang%` placeholders.
pub fn run_xsltproc(
    runner: &dyn CommandRunner,
    xsl: &Path,
    extra_args: &[String],
    inputs: &[&Path],
    languages: &[LanguageCode],
    output_template: &str,
    template_inputs: bool,
    report: &mut Report,
) -> Result<()> {
    for lang in languages {
        let output = substitute_lang(output_template, lang);
        ensure_parent_dirs(Path::new(&output))?;

        let mut args: Vec<String> = extra_args.to_vec();
        args.push("--output".to_string());
        args.push(output.clone());
        args.push(xsl.to_string_lossy().to_string());
        for input in inputs {
            let path = input.to_string_lossy().to_string();
            if template_inputs {
                args.push(substitute_lang(&path, lang));
            } else {
                args.push(path);
            }
        }

        let result = match runner.run(XSLTPROC, &args, None) {
            Ok(result) => result,
            Err(err) => {
                report.error(format!(
                    "xsltproc launch failed for {}: {} {}",
                    lang.raw(),
                    XSLTPROC,
                    args.join(" ")
                ));
                return Err(err);
            }
        };
        report.tool_output(&result.stdout, &result.stderr);
        if !result.succeeded() {
            report.error(format!(
                "xsltproc exited with status {:?} for language {}",
                result.status,
                lang.raw()
            ));
        }
        report.action(format!("xsltproc {} -> {}", lang.raw(), output));
    }
    Ok(())
}
