//! Run configuration.
//!
//! All mutable knobs of the original build scripts become one immutable
//! [`RunConfig`] record built up front and threaded through every component
//! call. Defaults can come from an optional `.msgcatrc.json` in the working
//! directory; command-line flags always win.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::cli::args::{Arguments, Mode};
use crate::template::{LanguageCode, Placement};
use crate::tools::msgtool::MsgToolConfig;
use crate::vars::VariableTable;

pub const CONFIG_FILE_NAME: &str = ".msgcatrc.json";

/// Defaults read from `.msgcatrc.json`. Every field is optional; a missing
/// file means no defaults at all.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileConfig {
    #[serde(default)]
    pub output_base_dir: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub vars_file: Option<String>,
    #[serde(default)]
    pub msgtool_bin_dir: Option<String>,
    #[serde(default)]
    pub msgtool_classpath: Option<String>,
    #[serde(default)]
    pub msgtool_class: Option<String>,
}

impl FileConfig {
    /// Load defaults from `dir`, tolerating a missing file.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }
}

/// The fully-resolved, immutable configuration of one run.
#[derive(Debug)]
pub struct RunConfig {
    pub mode: Mode,
    /// Expanded input set: `-i` values (globs resolved) plus the contents
    /// of `-x`, in supply order.
    pub inputs: Vec<PathBuf>,
    pub output_file: Option<String>,
    pub output_base: Option<PathBuf>,
    pub container: Option<String>,
    pub package: Option<String>,
    pub zip_output: Option<PathBuf>,
    /// Languages in command-line order after expanding `-s` lists.
    pub languages: Vec<LanguageCode>,
    pub placement: Placement,
    pub vars: VariableTable,
    pub msgtool: Option<MsgToolConfig>,
    pub xsl: Option<PathBuf>,
    pub extra_args: Vec<String>,
    pub translation_root: Option<PathBuf>,
    pub replace_filename_vars: bool,
    pub verbose: bool,
}

impl RunConfig {
    /// Merge command-line arguments with file defaults into the immutable
    /// run record. Fatal on a missing vars file or an unmatched input.
    pub fn from_args(args: Arguments) -> Result<Self> {
        let defaults = FileConfig::load_from(Path::new("."))?;

        let vars = match args
            .varsfile
            .clone()
            .or_else(|| defaults.vars_file.as_ref().map(PathBuf::from))
        {
            Some(path) => VariableTable::load(&path)?,
            None => VariableTable::empty(),
        };

        let inputs = expand_inputs(&args.input, args.inputdir.as_deref())?;

        let mut languages: Vec<LanguageCode> = Vec::new();
        if let Some(lang) = &args.language {
            languages.push(LanguageCode::new(lang));
        }
        for list in &args.langlist {
            for code in list.split_whitespace() {
                languages.push(LanguageCode::new(code));
            }
        }
        if languages.is_empty() {
            for code in &defaults.languages {
                languages.push(LanguageCode::new(code));
            }
        }

        let resolve_name = |name: Option<String>| -> Option<String> {
            name.map(|n| {
                if args.replace_filename_vars {
                    vars.resolve(&n)
                } else {
                    n
                }
            })
        };
        let output_file = resolve_name(args.outputfile);
        let output_base = resolve_name(
            args.outputbasedir
                .or_else(|| defaults.output_base_dir.clone()),
        )
        .map(PathBuf::from);

        let msgtool = match (
            args.msgtoolbindir
                .or_else(|| defaults.msgtool_bin_dir.as_ref().map(PathBuf::from)),
            args.msgtoolclasspath
                .or_else(|| defaults.msgtool_classpath.clone()),
            args.msgtoolclass.or_else(|| defaults.msgtool_class.clone()),
        ) {
            (Some(bin_dir), Some(classpath), Some(class)) => Some(MsgToolConfig {
                bin_dir,
                classpath,
                class,
            }),
            _ => None,
        };

        let extra_args = args
            .extraargs
            .as_deref()
            .map(|s| s.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();

        Ok(Self {
            mode: args.mode,
            inputs,
            output_file,
            output_base,
            container: args.container,
            package: args.package,
            zip_output: args.zipoutput,
            languages,
            placement: if args.langsubdir {
                Placement::Subdirectory
            } else {
                Placement::Suffix
            },
            vars,
            msgtool,
            xsl: args.xsl,
            extra_args,
            translation_root: args.translationrootdir,
            replace_filename_vars: args.replace_filename_vars,
            verbose: args.verbose,
        })
    }
}

/// Resolve `-i` values (globs or literal paths, in supply order) and append
/// the files under `-x`.
fn expand_inputs(patterns: &[String], input_dir: Option<&Path>) -> Result<Vec<PathBuf>> {
    let mut inputs = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.exists() {
            inputs.push(path.to_path_buf());
            continue;
        }
        let matches: Vec<PathBuf> = glob::glob(pattern)
            .with_context(|| format!("Invalid input pattern: {}", pattern))?
            .filter_map(|m| m.ok())
            .collect();
        if matches.is_empty() {
            bail!("Input not found: {}", pattern);
        }
        inputs.extend(matches);
    }

    if let Some(dir) = input_dir {
        let mut found: Vec<PathBuf> = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path().to_path_buf())
            .collect();
        if found.is_empty() {
            bail!("Input directory is empty: {}", dir.display());
        }
        inputs.append(&mut found);
    }

    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn languages_expand_in_supply_order() {
        let args = Arguments::parse_from([
            "msgcat",
            "-m",
            "noop",
            "-l",
            "de",
            "-s",
            "fr ja",
            "-s",
            "zh_TW",
        ]);
        let config = RunConfig::from_args(args).unwrap();
        let raw: Vec<_> = config.languages.iter().map(|l| l.raw().to_string()).collect();
        assert_eq!(raw, vec!["de", "fr", "ja", "zh_TW"]);
    }

    #[test]
    fn missing_input_is_fatal() {
        let args = Arguments::parse_from(["msgcat", "-m", "noop", "-i", "/no/such/file.xml"]);
        assert!(RunConfig::from_args(args).is_err());
    }

    #[test]
    fn inputdir_contents_are_appended() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.xml"), "<x/>").unwrap();
        fs::write(dir.path().join("a.xml"), "<x/>").unwrap();
        let inputs = expand_inputs(&[], Some(dir.path())).unwrap();
        let names: Vec<_> = inputs
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.xml", "b.xml"]);
    }

    #[test]
    fn langsubdir_flag_selects_placement() {
        let args = Arguments::parse_from(["msgcat", "-m", "noop", "-d"]);
        let config = RunConfig::from_args(args).unwrap();
        assert_eq!(config.placement, Placement::Subdirectory);
    }
}
