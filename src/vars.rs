//! Variable table loading and `${NAME}` substitution.
//!
//! Catalog files are preprocessed with a flat name/value table loaded from a
//! properties-style file. Substitution is a single left-to-right pass:
//! a substituted value that itself contains `${...}` is NOT re-expanded.

use std::{collections::BTreeMap, fs, path::Path, sync::LazyLock};

use anyhow::{Context, Result};
use regex::Regex;

// Matches ${NAME} where NAME is a property-style identifier.
static VAR_REF_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([A-Za-z0-9_.-]+)\}").unwrap());

/// A read-only name/value table for `${NAME}` substitution.
///
/// Loaded once per run; immutable thereafter.
#[derive(Debug, Clone, Default)]
pub struct VariableTable {
    entries: BTreeMap<String, String>,
}

impl VariableTable {
    /// An empty table; `resolve` becomes the identity function.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load a table from a properties file.
    ///
    /// Format: one `NAME=value` per line. Blank lines and lines whose first
    /// non-space character is `#` are ignored. A value wrapped in double
    /// quotes has the quotes stripped. A missing or unreadable file is fatal.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read variables file: {}", path.display()))?;
        Ok(Self::parse(&content))
    }

    fn parse(content: &str) -> Self {
        let mut entries = BTreeMap::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((name, value)) = line.split_once('=') else {
                continue;
            };
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            let mut value = value.trim();
            if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
                value = &value[1..value.len() - 1];
            }
            entries.insert(name.to_string(), value.to_string());
        }
        Self { entries }
    }

    /// Look up a single variable.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Substitute every `${NAME}` occurrence in `text` in one pass.
    ///
    /// Unresolved names are left untouched. Substituted values are not
    /// re-scanned, so chained references stay literal.
    pub fn resolve(&self, text: &str) -> String {
        if self.entries.is_empty() {
            return text.to_string();
        }
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for caps in VAR_REF_REGEX.captures_iter(text) {
            let whole = caps.get(0).unwrap();
            let name = &caps[1];
            out.push_str(&text[last..whole.start()]);
            match self.entries.get(name) {
                Some(value) => out.push_str(value),
                None => out.push_str(whole.as_str()),
            }
            last = whole.end();
        }
        out.push_str(&text[last..]);
        out
    }
}
