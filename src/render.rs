//! Mixed-content flattening.
//!
//! Each output format needs one literal string per field. The enclosing tag
//! is already stripped by the catalog parser; this module translates the
//! inline tags (`q`, `ul`, `li`, `br`, self-closing `p`) and handles
//! entities.
//!
//! Entity handling is a deliberate two-pass transform: `&gt;` and `&lt;`
//! (with or without the trailing semicolon) are first replaced by reserved
//! sentinel characters, then the general entities are unescaped, then the
//! sentinels are re-emitted as `&gt;` / `&lt;`. A single-pass unescape
//! would turn intentionally-escaped angle brackets back into markup-
//! breaking `<` / `>` characters.

use crate::catalog::{MixedContent, Node};

/// Indentation emitted for each list item in prose output.
pub const LIST_ITEM_INDENT: &str = "    - ";

// Private-use sentinels for the protected angle-bracket entities.
const GT_SENTINEL: char = '\u{E000}';
const LT_SENTINEL: char = '\u{E001}';

/// Flatten a field into prose (the DITA convention, shared by the resource
/// bundle and HTML generators before their own escaping).
///
/// - `q` renders as a literal `"` on both sides
/// - self-closing `p` renders as the two characters `\n\n`
/// - `br` is removed
/// - `ul` boundaries render as a newline; each `li` as a newline plus
///   [`LIST_ITEM_INDENT`]
/// - unknown tags pass through unprocessed
/// - entities are unescaped except protected `&gt;` / `&lt;`
/// - a leading newline left over from stripping is removed
pub fn render_prose(content: &MixedContent) -> String {
    let mut out = String::new();
    flatten_prose(content, &mut out);
    let out = unescape_protected(&out);
    match out.strip_prefix('\n') {
        Some(rest) => rest.to_string(),
        None => out,
    }
}

fn flatten_prose(content: &MixedContent, out: &mut String) {
    for node in content {
        match node {
            Node::Text(t) => out.push_str(t),
            Node::Element {
                name,
                attrs,
                children,
                self_closing,
            } => match name.as_str() {
                "q" => {
                    out.push('"');
                    flatten_prose(children, out);
                    out.push('"');
                }
                "p" if *self_closing => out.push_str("\n\n"),
                "br" => {}
                "ul" => {
                    out.push('\n');
                    flatten_prose(children, out);
                    out.push('\n');
                }
                "li" => {
                    out.push('\n');
                    out.push_str(LIST_ITEM_INDENT);
                    flatten_prose(children, out);
                }
                _ => passthrough(name, attrs, children, *self_closing, out),
            },
        }
    }
}

/// Re-emit an unknown tag verbatim; leniency, not a parse error.
fn passthrough(
    name: &str,
    attrs: &[(String, String)],
    children: &MixedContent,
    self_closing: bool,
    out: &mut String,
) {
    out.push('<');
    out.push_str(name);
    for (k, v) in attrs {
        out.push_str(&format!(" {}=\"{}\"", k, v));
    }
    if self_closing {
        out.push_str("/>");
        return;
    }
    out.push('>');
    flatten_prose(children, out);
    out.push_str(&format!("</{}>", name));
}

/// Flatten a field for HTML output: `ul`/`li` survive as HTML lists, `br`
/// and the paragraph break become HTML breaks, and text keeps its escaped
/// source form (already valid in HTML).
pub fn render_html(content: &MixedContent) -> String {
    let mut out = String::new();
    flatten_html(content, &mut out);
    out
}

fn flatten_html(content: &MixedContent, out: &mut String) {
    for node in content {
        match node {
            Node::Text(t) => out.push_str(t),
            Node::Element {
                name,
                attrs,
                children,
                self_closing,
            } => match name.as_str() {
                "q" => {
                    out.push('"');
                    flatten_html(children, out);
                    out.push('"');
                }
                "p" if *self_closing => out.push_str("<br/><br/>"),
                "br" => out.push_str("<br/>"),
                "ul" | "li" => {
                    out.push_str(&format!("<{}>", name));
                    flatten_html(children, out);
                    out.push_str(&format!("</{}>", name));
                }
                _ => {
                    let mut raw = String::new();
                    passthrough(name, attrs, children, *self_closing, &mut raw);
                    out.push_str(&raw);
                }
            },
        }
    }
}

/// Protect `&gt;` / `&lt;`, unescape everything else, restore the protected
/// sequences in their semicolon-terminated form.
fn unescape_protected(text: &str) -> String {
    let protected = text
        .replace("&gt;", &GT_SENTINEL.to_string())
        .replace("&lt;", &LT_SENTINEL.to_string())
        .replace("&gt", &GT_SENTINEL.to_string())
        .replace("&lt", &LT_SENTINEL.to_string());
    let unescaped = unescape_entities(&protected);
    unescaped
        .replace(GT_SENTINEL, "&gt;")
        .replace(LT_SENTINEL, "&lt;")
}

/// Resolve the general HTML entity escapes to their Unicode characters.
fn unescape_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match rest.find(';') {
            // Entities are short; anything longer is plain text.
            Some(end) if end <= 9 => {
                let entity = &rest[1..end];
                match resolve_entity(entity) {
                    Some(c) => {
                        out.push(c);
                        rest = &rest[end + 1..];
                    }
                    None => {
                        out.push('&');
                        rest = &rest[1..];
                    }
                }
            }
            _ => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn resolve_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{A0}'),
        _ => {
            let code = entity.strip_prefix('#')?;
            let value = match code.strip_prefix('x').or_else(|| code.strip_prefix('X')) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => code.parse().ok()?,
            };
            char::from_u32(value)
        }
    }
}
