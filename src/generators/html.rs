//! HTML listing generation: one page covering the whole catalog.

use std::path::Path;

use anyhow::{Context, Result};

use crate::catalog::Message;
use crate::render::render_html;
use crate::report::Report;
use crate::template::ensure_parent_dirs;

/// Write an HTML page listing every message with its explanation and
/// operator response.
pub fn generate(messages: &[Message], out_file: &Path, report: &mut Report) -> Result<()> {
    let mut doc = String::from(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\"/>\n<title>Message Catalog</title>\n</head>\n<body>\n<h1>Message Catalog</h1>\n<dl>\n",
    );
    for message in messages {
        match &message.category {
            Some(category) => doc.push_str(&format!(
                "<dt id=\"{}\">{} ({})</dt>\n",
                message.id, message.id, category
            )),
            None => doc.push_str(&format!("<dt id=\"{}\">{}</dt>\n", message.id, message.id)),
        }
        doc.push_str("<dd>\n");
        doc.push_str(&format!(
            "<p class=\"msgtext\">{}</p>\n",
            render_html(&message.msg_text)
        ));
        if let Some(explanation) = &message.explanation {
            doc.push_str(&format!(
                "<p class=\"explanation\">{}</p>\n",
                render_html(explanation)
            ));
        }
        if let Some(response) = &message.operator_response {
            doc.push_str(&format!(
                "<p class=\"response\">{}</p>\n",
                render_html(response)
            ));
        }
        doc.push_str("</dd>\n");
    }
    doc.push_str("</dl>\n</body>\n</html>\n");

    ensure_parent_dirs(out_file)?;
    std::fs::write(out_file, doc)
        .with_context(|| format!("Failed to write HTML listing: {}", out_file.display()))?;
    report.action(format!("html {}", out_file.display()));
    Ok(())
}
