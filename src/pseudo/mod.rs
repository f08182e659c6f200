//! Pseudo-translation engine.
//!
//! Produces deterministic translated-looking text so that localization
//! readiness (externalized strings, layout tolerance for expanded and
//! accented text) can be verified without real translators. Catalog XML is
//! rewritten text node by text node; `.js` and `.java` sources go through
//! dedicated scanners that transform only literal-string regions.
//!
//! The transform is NOT idempotent: applying it twice nests the bracket
//! tokens and re-pads. Downstream consumers rely on the exact padding
//! formula, so double application is preserved, not guarded against.

pub mod java_scanner;
pub mod js_scanner;

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use quick_xml::events::{BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::template::LanguageCode;

/// Per-language deterministic character substitution.
///
/// Latin-script languages get accented forms and leave non-Latin text
/// unchanged; the CJK languages substitute only their own script and leave
/// Latin text unchanged. Languages outside the table substitute nothing.
fn char_map(lang: &str) -> &'static [(char, char)] {
    match lang {
        "de" => &[
            ('a', 'ä'),
            ('o', 'ö'),
            ('u', 'ü'),
            ('s', 'ß'),
            ('A', 'Ä'),
            ('O', 'Ö'),
            ('U', 'Ü'),
        ],
        "fr" => &[
            ('a', 'à'),
            ('e', 'é'),
            ('i', 'î'),
            ('o', 'ô'),
            ('u', 'ù'),
            ('c', 'ç'),
            ('A', 'À'),
            ('E', 'É'),
            ('I', 'Î'),
            ('O', 'Ô'),
            ('U', 'Ù'),
            ('C', 'Ç'),
        ],
        "ja" => &[
            ('あ', 'ア'),
            ('い', 'イ'),
            ('う', 'ウ'),
            ('え', 'エ'),
            ('お', 'オ'),
            ('か', 'カ'),
            ('き', 'キ'),
            ('く', 'ク'),
            ('け', 'ケ'),
            ('こ', 'コ'),
        ],
        "zh" => &[('國', '国'), ('門', '门'), ('東', '东'), ('車', '车'), ('馬', '马')],
        "zh_TW" => &[('国', '國'), ('门', '門'), ('东', '東'), ('车', '車'), ('马', '馬')],
        _ => &[],
    }
}

fn substitute_chars(lang: &str, text: &str) -> String {
    let map = char_map(lang);
    if map.is_empty() {
        return text.to_string();
    }
    text.chars()
        .map(|c| map.iter().find(|(from, _)| *from == c).map_or(c, |(_, to)| *to))
        .collect()
}

/// Pseudo-translate one text value.
///
/// Empty or all-whitespace input is returned unchanged so that empty fields
/// stay empty. Otherwise the character-substituted intermediate string is
/// wrapped in the language's bracket tokens with `~` padding of
/// `floor(len/4)` characters, inserted before any trailing whitespace
/// (which is preserved after the closing token).
pub fn pseudo_translate(lang: &LanguageCode, text: &str) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }

    let intermediate = substitute_chars(lang.raw(), text);
    let pad = intermediate.chars().count() / 4;

    let trailing_start = intermediate
        .rfind(|c: char| !c.is_whitespace())
        .map(|i| i + intermediate[i..].chars().next().unwrap().len_utf8())
        .unwrap_or(intermediate.len());
    let (body, trailing) = intermediate.split_at(trailing_start);

    let mut out = String::with_capacity(intermediate.len() + pad + 16);
    out.push_str(&format!("[{}] ", lang.raw()));
    out.push_str(body);
    out.extend(std::iter::repeat_n('~', pad));
    out.push_str(&format!(" [/{}]", lang.raw()));
    out.push_str(trailing);
    out
}

/// Pseudo-translate every text node of an XML document, preserving
/// structure, attributes and comments.
pub fn pseudo_translate_xml(text: &str, lang: &LanguageCode) -> Result<String> {
    let mut reader = Reader::from_str(text);
    reader.trim_text(false);
    let mut writer = Writer::new(Vec::new());

    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(Event::Text(t)) => {
                let decoded = t.unescape().context("failed to decode xml text")?;
                let translated = pseudo_translate(lang, decoded.as_ref());
                writer
                    .write_event(Event::Text(BytesText::new(&translated)))
                    .context("failed to write xml text")?;
            }
            Ok(event) => {
                writer
                    .write_event(event.into_owned())
                    .context("failed to write xml event")?;
            }
            Err(err) => bail!("failed to parse xml: {}", err),
        }
    }

    String::from_utf8(writer.into_inner()).context("xml output is not valid UTF-8")
}

/// Pseudo-translate one source file into `dest`, dispatching on the input
/// extension. Unrecognized extensions are an error; the caller skips the
/// file and continues with the rest of the batch.
pub fn pseudo_translate_file(src: &Path, dest: &Path, lang: &LanguageCode) -> Result<()> {
    let ext = src
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let content = fs::read_to_string(src)
        .with_context(|| format!("Failed to read source file: {}", src.display()))?;

    let translated = match ext.as_str() {
        "xml" => pseudo_translate_xml(&content, lang)?,
        "js" => js_scanner::pseudo_translate_js(&content, lang),
        "java" => {
            let old_class = file_stem(src);
            let new_class = file_stem(dest);
            java_scanner::pseudo_translate_java(&content, lang, &old_class, &new_class)
        }
        other => bail!(
            "unsupported pseudo-translation source type '{}': {}",
            other,
            src.display()
        ),
    };

    crate::template::ensure_parent_dirs(dest)?;
    fs::write(dest, translated)
        .with_context(|| format!("Failed to write translated file: {}", dest.display()))?;
    Ok(())
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Transform the double-quoted string literals on one line, leaving
/// everything else byte-identical. Shared by the two source scanners.
///
/// A backslash-escaped quote does not terminate a literal; a `//` appearing
/// before the first quote suppresses string scanning for the line. A line
/// that ends while still inside a literal is passed through verbatim.
pub(crate) fn translate_line_literals(line: &str, lang: &LanguageCode) -> String {
    scan_line(line, lang, true).0
}

/// One pass over a line: optionally translate string literals, and count
/// the net `{`/`(` vs `}`/`)` balance outside literals and comments. The
/// balance is what the script-object scanner uses to find the end of the
/// `root` stanza.
pub(crate) fn scan_line(line: &str, lang: &LanguageCode, translate: bool) -> (String, i32) {
    let mut out = String::with_capacity(line.len());
    let mut depth = 0i32;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '/' if chars.peek() == Some(&'/') => {
                // Comment guard: the rest of the line is neither scanned for
                // strings nor counted.
                out.push(c);
                out.extend(chars);
                return (out, depth);
            }
            '{' | '(' => {
                depth += 1;
                out.push(c);
            }
            '}' | ')' => {
                depth -= 1;
                out.push(c);
            }
            '"' => {
                // String literal: collect up to the closing unescaped quote.
                let mut literal = String::new();
                let mut closed = false;
                while let Some(c) = chars.next() {
                    if c == '\\' {
                        literal.push(c);
                        if let Some(next) = chars.next() {
                            literal.push(next);
                        }
                        continue;
                    }
                    if c == '"' {
                        closed = true;
                        break;
                    }
                    literal.push(c);
                }
                if !closed {
                    // Malformed line; reproduce it untouched.
                    return (line.to_string(), depth);
                }
                out.push('"');
                if translate {
                    out.push_str(&pseudo_translate(lang, &literal));
                } else {
                    out.push_str(&literal);
                }
                out.push('"');
            }
            _ => out.push(c),
        }
    }
    (out, depth)
}
