//! Table-of-contents generation for the DITA topics.
//!
//! One `<topic>` entry per message, strictly ascending by the numeric
//! value of the digits after the identifier prefix, regardless of catalog
//! order.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::catalog::Message;
use crate::report::Report;
use crate::template::ensure_parent_dirs;

/// Fixed output file name.
pub const TOC_FILE: &str = "toc.xml";

/// Write `toc.xml` into `out_dir`, returning the written path.
pub fn generate(messages: &[Message], out_dir: &Path, report: &mut Report) -> Result<PathBuf> {
    let mut ordered: Vec<&Message> = messages.iter().collect();
    ordered.sort_by_key(|m| m.number());

    let mut doc = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<toc label=\"Messages\">\n");
    for message in ordered {
        doc.push_str(&format!(
            "<topic label=\"{}\" href=\"{}.dita\"/>\n",
            message.id, message.id
        ));
    }
    doc.push_str("</toc>\n");

    let path = out_dir.join(TOC_FILE);
    ensure_parent_dirs(&path)?;
    std::fs::write(&path, doc)
        .with_context(|| format!("Failed to write TOC: {}", path.display()))?;
    report.action(format!("toc {}", path.display()));
    Ok(path)
}
