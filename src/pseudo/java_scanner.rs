//! Scanner for message source classes.
//!
//! Resource bundle classes carry their text in string literals, bracketed
//! sections of generated constants are fenced with `START NON-TRANSLATABLE`
//! / `END NON-TRANSLATABLE` markers, and the class declaration must be
//! renamed to match the translated output filename.

use anyhow::{Result, bail};

use crate::template::LanguageCode;

use super::translate_line_literals;

const START_MARKER: &str = "START NON-TRANSLATABLE";
const END_MARKER: &str = "END NON-TRANSLATABLE";
const CLASS_MARKER: &str = "public class";

/// Line-level scanner states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// String literals are pseudo-translated.
    Translating,
    /// Inside a NON-TRANSLATABLE fence; everything is copied verbatim.
    Fenced,
}

/// Pseudo-translate the string literals of a source class, renaming its
/// `public class` declaration from `old_class` to `new_class`.
///
/// Content between the `START NON-TRANSLATABLE` and `END NON-TRANSLATABLE`
/// markers is copied verbatim, string literal or not.
pub fn pseudo_translate_java(
    source: &str,
    lang: &LanguageCode,
    old_class: &str,
    new_class: &str,
) -> String {
    let mut out = String::with_capacity(source.len() + source.len() / 2);
    let mut state = State::Translating;

    for line in source.split_inclusive('\n') {
        if line.contains(START_MARKER) {
            state = State::Fenced;
            out.push_str(line);
            continue;
        }
        if line.contains(END_MARKER) {
            state = State::Translating;
            out.push_str(line);
            continue;
        }
        if line.trim_start().starts_with(CLASS_MARKER) {
            out.push_str(&line.replace(old_class, new_class));
            continue;
        }
        match state {
            State::Translating => out.push_str(&translate_line_literals_keep_newline(line, lang)),
            State::Fenced => out.push_str(line),
        }
    }
    out
}

fn translate_line_literals_keep_newline(line: &str, lang: &LanguageCode) -> String {
    if let Some(body) = line.strip_suffix("\r\n") {
        format!("{}\r\n", translate_line_literals(body, lang))
    } else if let Some(body) = line.strip_suffix('\n') {
        format!("{}\n", translate_line_literals(body, lang))
    } else {
        translate_line_literals(line, lang)
    }
}

/// Rename the `public class` declaration only, with no translation.
///
/// More than one matching declaration is ambiguous and fatal; nothing is
/// written in that case.
pub fn fix_class_name(source: &str, old_class: &str, new_class: &str) -> Result<String> {
    let matches = source
        .lines()
        .filter(|l| l.trim_start().starts_with(CLASS_MARKER) && l.contains(old_class))
        .count();
    if matches > 1 {
        bail!(
            "ambiguous class rename: {} declarations of '{}' found",
            matches,
            old_class
        );
    }

    let out: String = source
        .split_inclusive('\n')
        .map(|line| {
            if line.trim_start().starts_with(CLASS_MARKER) && line.contains(old_class) {
                line.replace(old_class, new_class)
            } else {
                line.to_string()
            }
        })
        .collect();
    Ok(out)
}
