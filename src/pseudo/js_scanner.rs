//! Scanner for dojo-style nls script objects.
//!
//! Web UI bundles are `define({ root : ({ ... }), "de": true, ... })`
//! objects. Only the double-quoted string values inside the `root` stanza
//! are user-visible text; everything else (the availability flags, comments,
//! structure) is copied verbatim.

use crate::template::LanguageCode;

use super::scan_line;

/// Scanner states. `InString` exists within [`scan_line`]'s character loop;
/// the line-level machine moves between the other three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Before the wrapping `define(` call.
    OutsideDefine,
    /// Inside the define body, outside the `root` stanza.
    InDefine,
    /// Inside the `root` stanza; string literals are translated here.
    InRoot,
}

/// Pseudo-translate the string literals of the `root` stanza, copying every
/// other line verbatim.
pub fn pseudo_translate_js(source: &str, lang: &LanguageCode) -> String {
    let mut out = String::with_capacity(source.len() + source.len() / 2);
    let mut state = State::OutsideDefine;
    // Net bracket balance of the root stanza; 0 again means the stanza closed.
    let mut root_depth = 0i32;

    for line in source.split_inclusive('\n') {
        let (body, newline) = split_newline(line);
        match state {
            State::OutsideDefine => {
                out.push_str(body);
                if body.contains("define(") {
                    state = State::InDefine;
                }
            }
            State::InDefine => {
                if is_root_opener(body) {
                    let (translated, delta) = scan_line(body, lang, true);
                    out.push_str(&translated);
                    root_depth = delta;
                    state = if root_depth > 0 { State::InRoot } else { State::InDefine };
                } else {
                    out.push_str(body);
                }
            }
            State::InRoot => {
                let (translated, delta) = scan_line(body, lang, true);
                out.push_str(&translated);
                root_depth += delta;
                if root_depth <= 0 {
                    state = State::InDefine;
                }
            }
        }
        out.push_str(newline);
    }
    out
}

/// The stanza opener is a line whose first token is literally `root`
/// followed by a colon, e.g. `root : ({`.
fn is_root_opener(line: &str) -> bool {
    let trimmed = line.trim_start();
    if let Some(rest) = trimmed.strip_prefix("root") {
        rest.trim_start().starts_with(':')
    } else {
        false
    }
}

fn split_newline(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}
