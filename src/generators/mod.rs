//! Output generators.
//!
//! Every generator consumes the same parsed catalog and the same rendering
//! contract from [`crate::render`]; they differ only in file layout and
//! format-specific escaping.

pub mod bundles;
pub mod dita;
pub mod html;
pub mod toc;

/// Escape a rendered value for embedding in a double-quoted Java or ICU
/// string, `\u`-escaping non-ASCII for encoding-agnostic output.
pub(crate) fn escape_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 || (c as u32) > 0x7E => {
                let mut buf = [0u16; 2];
                for unit in c.encode_utf16(&mut buf) {
                    out.push_str(&format!("\\u{:04X}", unit));
                }
            }
            c => out.push(c),
        }
    }
    out
}
