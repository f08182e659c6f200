//! CLI argument definitions using clap.
//!
//! One flat flag surface shared by all modes; which flags are required
//! depends on the selected `--mode` and is validated in `run.rs` before any
//! I/O happens.

use std::{fmt, path::PathBuf};

use clap::{Parser, ValueEnum};

/// The seven output formats plus the wrapper and maintenance modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Mode {
    /// ICU resource bundle source (genrb .txt)
    Icu,
    /// Java ListResourceBundle source
    Lrb,
    /// PropertyResourceBundle .properties
    Prb,
    /// HTML listing page
    Html,
    /// toc.xml for the generated DITA topics
    Toc,
    /// One DITA reference topic per message
    Dita,
    /// Pseudo-translated copies of catalog/js/java sources
    Pseudotranslation,
    /// Run the external message-validation tool per language
    Msgtoolwrapper,
    /// Run xsltproc per language
    Xsltprocwrapper,
    /// Flag missing web UI translations in the English sources
    Checkjstrans,
    /// Rename a public class declaration to match the output filename
    Fixclassname,
    /// Parse arguments and do nothing
    Noop,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Icu => "icu",
            Mode::Lrb => "lrb",
            Mode::Prb => "prb",
            Mode::Html => "html",
            Mode::Toc => "toc",
            Mode::Dita => "dita",
            Mode::Pseudotranslation => "pseudotranslation",
            Mode::Msgtoolwrapper => "msgtoolwrapper",
            Mode::Xsltprocwrapper => "xsltprocwrapper",
            Mode::Checkjstrans => "checkjstrans",
            Mode::Fixclassname => "fixclassname",
            Mode::Noop => "noop",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Input file (repeatable; glob patterns allowed)
    #[arg(short = 'i', long = "input")]
    pub input: Vec<String>,

    /// Output file (may contain %LANG% / %lang% in wrapper modes)
    #[arg(short = 'o', long = "outputfile")]
    pub outputfile: Option<String>,

    /// Container name (ICU table / Java class name)
    #[arg(short = 'c', long = "container")]
    pub container: Option<String>,

    /// Java package for generated bundle classes
    #[arg(short = 'p', long = "package")]
    pub package: Option<String>,

    /// Base directory for per-message / per-language outputs
    #[arg(short = 'b', long = "outputbasedir")]
    pub outputbasedir: Option<String>,

    /// Directory collecting bundle outputs for downstream archiving
    #[arg(short = 'z', long = "zipoutput")]
    pub zipoutput: Option<PathBuf>,

    /// Directory whose files are added to the input set
    #[arg(short = 'x', long = "inputdir")]
    pub inputdir: Option<PathBuf>,

    /// Single target language code (e.g. de, zh_TW)
    #[arg(short = 'l', long = "language")]
    pub language: Option<String>,

    /// Whitespace-separated language list (repeatable)
    #[arg(short = 's', long = "langlist")]
    pub langlist: Vec<String>,

    /// Place translated output in a per-language subdirectory instead of
    /// suffixing the filename
    #[arg(short = 'd', long = "langsubdir")]
    pub langsubdir: bool,

    /// Working directory of the external message tool
    #[arg(long)]
    pub msgtoolbindir: Option<PathBuf>,

    /// Classpath for the external message tool
    #[arg(long)]
    pub msgtoolclasspath: Option<String>,

    /// Main class of the external message tool
    #[arg(long)]
    pub msgtoolclass: Option<String>,

    /// XSL stylesheet for xsltprocwrapper mode
    #[arg(long)]
    pub xsl: Option<PathBuf>,

    /// Extra whitespace-separated arguments passed to xsltproc
    #[arg(long)]
    pub extraargs: Option<String>,

    /// Root directory holding per-language translation subdirectories
    #[arg(long)]
    pub translationrootdir: Option<PathBuf>,

    /// Substitute ${NAME} / %LANG% variables in file names
    #[arg(short = 'r', long = "replace_filename_vars")]
    pub replace_filename_vars: bool,

    /// Properties file supplying the ${NAME} variable table
    #[arg(long)]
    pub varsfile: Option<PathBuf>,

    /// Output mode
    #[arg(short = 'm', long = "mode", value_enum)]
    pub mode: Mode,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
