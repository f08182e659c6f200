//! Runtime message bundle generation: ICU resource bundle source, Java
//! ListResourceBundle source and PropertyResourceBundle properties.
//!
//! All three map message identifier to rendered MsgText; they share the
//! prose renderer and differ only in container syntax and escaping.

use std::path::Path;

use anyhow::{Context, Result};

use crate::catalog::Message;
use crate::render::render_prose;
use crate::report::Report;
use crate::template::ensure_parent_dirs;

use super::escape_quoted;

/// Write genrb-style ICU resource bundle source. `container` is the table
/// name (`root` for the source-language bundle).
pub fn generate_icu(
    messages: &[Message],
    container: &str,
    out_file: &Path,
    report: &mut Report,
) -> Result<()> {
    let mut doc = format!("// ICU resource bundle source\n{}:table {{\n", container);
    for message in messages {
        doc.push_str(&format!(
            "    {} {{ \"{}\" }}\n",
            message.id,
            escape_quoted(&render_prose(&message.msg_text))
        ));
    }
    doc.push_str("}\n");
    write_bundle(out_file, &doc, "ICU bundle", report)
}

/// Write a Java `ListResourceBundle` subclass. The class name comes from
/// the container flag, the package from the package flag.
pub fn generate_lrb(
    messages: &[Message],
    package: &str,
    class_name: &str,
    out_file: &Path,
    report: &mut Report,
) -> Result<()> {
    let mut doc = String::new();
    doc.push_str(&format!("package {};\n\n", package));
    doc.push_str("import java.util.ListResourceBundle;\n\n");
    doc.push_str(&format!("public class {} extends ListResourceBundle {{\n", class_name));
    doc.push_str("    public Object[][] getContents() {\n        return CONTENTS;\n    }\n\n");
    doc.push_str("    private static final Object[][] CONTENTS = {\n");
    for message in messages {
        doc.push_str(&format!(
            "        {{ \"{}\", \"{}\" }},\n",
            message.id,
            escape_quoted(&render_prose(&message.msg_text))
        ));
    }
    doc.push_str("    };\n}\n");
    write_bundle(out_file, &doc, "list resource bundle", report)
}

/// Write PropertyResourceBundle `.properties` output.
pub fn generate_prb(messages: &[Message], out_file: &Path, report: &mut Report) -> Result<()> {
    let mut doc = String::new();
    for message in messages {
        doc.push_str(&format!(
            "{}={}\n",
            message.id,
            escape_properties(&render_prose(&message.msg_text))
        ));
    }
    write_bundle(out_file, &doc, "property resource bundle", report)
}

/// Properties values: continuation-safe newlines, escaped separators,
/// `\u`-escaped non-ASCII.
fn escape_properties(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '=' | ':' => {
                out.push('\\');
                out.push(c);
            }
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

fn write_bundle(out_file: &Path, content: &str, kind: &str, report: &mut Report) -> Result<()> {
    ensure_parent_dirs(out_file)?;
    std::fs::write(out_file, content)
        .with_context(|| format!("Failed to write {}: {}", kind, out_file.display()))?;
    report.action(format!("{} {}", kind, out_file.display()));
    Ok(())
}
