//! Per-language output path templating.
//!
//! Two disjoint placeholder vocabularies coexist on filename templates:
//! `%LANG%` / `%lang%` are expanded here, and `${NAME}` belongs to the
//! variable table in [`crate::vars`]. The two must never be conflated: a
//! filename may legitimately carry both.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

/// A language code as supplied on the command line, e.g. `de` or `zh_TW`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageCode {
    raw: String,
}

impl LanguageCode {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The code exactly as supplied. Used for display and for the
    /// pseudo-translation character map lookup.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Lowercased, underscore-to-hyphen form used in filenames and XML
    /// attributes: `zh_TW` -> `zh-tw`.
    pub fn dir_form(&self) -> String {
        self.raw.to_lowercase().replace('_', "-")
    }
}

/// Where a translated output file lands relative to the output base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// `<base>/<lang>/<basename>`
    Subdirectory,
    /// `<base>/<stem>_<lang><ext>`
    Suffix,
}

/// Expand `%LANG%` and `%lang%` in a filename template.
pub fn substitute_lang(template: &str, lang: &LanguageCode) -> String {
    template
        .replace("%LANG%", lang.raw())
        .replace("%lang%", &lang.dir_form())
}

fn has_xml_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("xml"))
}

/// The language form used inside an output path.
///
/// XML sources always take the hyphenated-lowercase form; non-XML sources
/// take it only when subdirectory placement was explicitly requested,
/// otherwise the raw code is used.
fn lang_form(source: &Path, lang: &LanguageCode, placement: Placement) -> String {
    if has_xml_extension(source) || placement == Placement::Subdirectory {
        lang.dir_form()
    } else {
        lang.raw().to_string()
    }
}

/// Compute the output path for `source` translated into `lang`.
///
/// Subdirectory placement puts the file under a per-language directory;
/// suffix placement appends `_<lang>` to the file stem. Exactly one of the
/// two is selected by the caller; there is no inference beyond the extension
/// sniffing in `lang_form`.
pub fn translated_path(
    base: &Path,
    source: &Path,
    lang: &LanguageCode,
    placement: Placement,
) -> PathBuf {
    let form = lang_form(source, lang, placement);
    match placement {
        Placement::Subdirectory => {
            let name = source
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            base.join(form).join(name)
        }
        Placement::Suffix => {
            let stem = source
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default();
            let name = match source.extension() {
                Some(ext) => format!("{}_{}.{}", stem, form, ext.to_string_lossy()),
                None => format!("{}_{}", stem, form),
            };
            base.join(name)
        }
    }
}

/// Create the destination's parent directories if they do not exist yet.
pub fn ensure_parent_dirs(dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    Ok(())
}
