//! DITA topic generation: one reference topic per catalog message.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::catalog::Message;
use crate::render::render_prose;
use crate::report::Report;
use crate::template::ensure_parent_dirs;

const DITA_HEADER: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE reference PUBLIC "-//OASIS//DTD DITA Reference//EN" "reference.dtd">
"#;

/// Write `<ID>.dita` for every message into `out_dir`.
pub fn generate(messages: &[Message], out_dir: &Path, report: &mut Report) -> Result<()> {
    for message in messages {
        let path = out_dir.join(format!("{}.dita", message.id));
        write_topic(message, &path)?;
        report.action(format!("dita {}", path.display()));
    }
    Ok(())
}

fn write_topic(message: &Message, path: &PathBuf) -> Result<()> {
    let mut doc = String::from(DITA_HEADER);
    doc.push_str(&format!("<reference id=\"{}\" xml:lang=\"en-us\">\n", message.id));
    doc.push_str(&format!("<title>{}</title>\n", message.id));
    doc.push_str(&format!(
        "<titlealts><searchtitle>{}</searchtitle></titlealts>\n",
        message.digits()
    ));
    doc.push_str("<refbody>\n<section>\n");
    doc.push_str(&format!("<msgNumber>{}</msgNumber>\n", message.id));
    doc.push_str(&format!("<msgText>{}</msgText>\n", render_prose(&message.msg_text)));
    doc.push_str(&format!(
        "<msgExplanation>{}</msgExplanation>\n",
        message.explanation.as_ref().map(|c| render_prose(c)).unwrap_or_default()
    ));
    doc.push_str(&format!(
        "<msgUserResponse>{}</msgUserResponse>\n",
        message
            .operator_response
            .as_ref()
            .map(|c| render_prose(c))
            .unwrap_or_default()
    ));
    if let Some(category) = &message.category {
        doc.push_str(&format!("<msgOther>{}</msgOther>\n", category));
    }
    doc.push_str("</section>\n</refbody>\n</reference>\n");

    ensure_parent_dirs(path)?;
    std::fs::write(path, doc)
        .with_context(|| format!("Failed to write DITA topic: {}", path.display()))?;
    Ok(())
}
