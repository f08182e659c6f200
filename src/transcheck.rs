//! Translation completeness checking for web UI bundles.
//!
//! The translation root contains one subdirectory per language (`de/`,
//! `zh-tw/`, ...). An English nls source advertises its translations with
//! dojo-style availability flags (`"de": true`). When a language directory
//! has no counterpart for a source file, the flag in the English file is
//! flipped to `false` in place, leaving every other byte identical. The
//! rewrite is idempotent: a flag already `false` matches nothing.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use walkdir::WalkDir;

/// One missing translation found during a check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTranslation {
    pub source: String,
    pub language: String,
    /// Whether the availability flag in the source file was flipped by this
    /// run (false when it was already `false`, or the file has no flag).
    pub flag_flipped: bool,
}

/// Result of checking one batch of source files against a translation root.
#[derive(Debug, Default)]
pub struct CheckOutcome {
    pub missing: Vec<MissingTranslation>,
    pub languages: Vec<String>,
}

/// The immediate subdirectories of the translation root, sorted by name.
/// Each one is a language; the directory name is used verbatim as the flag
/// name probed in the source files.
fn language_dirs(root: &Path) -> Result<Vec<String>> {
    let mut langs: Vec<String> = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_dir())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();
    langs.sort();
    if langs.is_empty() {
        anyhow::bail!("no language directories under {}", root.display());
    }
    Ok(langs)
}

/// Check each source file against each language directory, flipping the
/// availability flag of the English original for every missing translation.
pub fn check_translations(sources: &[&Path], root: &Path) -> Result<CheckOutcome> {
    let languages = language_dirs(root)?;
    let mut outcome = CheckOutcome {
        languages: languages.clone(),
        ..Default::default()
    };

    for source in sources {
        let name = source
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        for lang in &languages {
            let translated = root.join(lang).join(&name);
            if translated.exists() {
                continue;
            }
            let flipped = mark_untranslated(source, lang)?;
            outcome.missing.push(MissingTranslation {
                source: source.display().to_string(),
                language: lang.clone(),
                flag_flipped: flipped,
            });
        }
    }
    Ok(outcome)
}

/// Rewrite `"<lang>": true` to `"<lang>": false` in place.
///
/// Only the first occurrence is replaced; when the probe substring is not
/// present (flag already `false`, or no flag at all) the file is left
/// untouched and `Ok(false)` is returned.
fn mark_untranslated(source: &Path, lang: &str) -> Result<bool> {
    let content = fs::read_to_string(source)
        .with_context(|| format!("Failed to read source file: {}", source.display()))?;
    let probe = format!("\"{}\": true", lang);
    let Some(pos) = content.find(&probe) else {
        return Ok(false);
    };
    let mut updated = String::with_capacity(content.len());
    updated.push_str(&content[..pos]);
    updated.push_str(&format!("\"{}\": false", lang));
    updated.push_str(&content[pos + probe.len()..]);
    fs::write(source, updated)
        .with_context(|| format!("Failed to rewrite source file: {}", source.display()))?;
    Ok(true)
}
