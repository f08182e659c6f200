//! Message catalog parsing.
//!
//! The catalog is one XML document whose `Message` elements carry an `ID`
//! and optional `category` attribute plus `MsgText` / `Explanation` /
//! `OperatorResponse` mixed-content children. The raw file text is run
//! through the variable table before parsing.
//!
//! Text nodes are captured in their escaped source form: entity handling is
//! a renderer concern (see [`crate::render`]), not a parse concern.

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::vars::VariableTable;

/// One node of a mixed-content field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Raw text, escaped exactly as in the source document.
    Text(String),
    Element {
        name: String,
        attrs: Vec<(String, String)>,
        children: Vec<Node>,
        self_closing: bool,
    },
}

impl Node {
    fn attr(&self, key: &str) -> Option<&str> {
        match self {
            Node::Element { attrs, .. } => attrs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str()),
            Node::Text(_) => None,
        }
    }
}

/// A mixed-content field: text interleaved with the fixed inline tags
/// (`q`, `ul`, `li`, `br`, self-closing `p`). Unknown tags are kept and
/// passed through unprocessed by the renderers.
pub type MixedContent = Vec<Node>;

/// One catalog record. `id` and `msg_text` are required; a record missing
/// either is malformed and never constructed.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: String,
    pub category: Option<String>,
    pub msg_text: MixedContent,
    pub explanation: Option<MixedContent>,
    pub operator_response: Option<MixedContent>,
}

impl Message {
    /// The digits following the 5-character identifier prefix, e.g.
    /// `CWLNA0050` -> `0050`. Falls back to the whole id when it is shorter
    /// than the prefix or byte 5 is not a character boundary.
    pub fn digits(&self) -> &str {
        match self.id.get(5..) {
            Some(digits) if !digits.is_empty() => digits,
            _ => &self.id,
        }
    }

    /// Numeric value of [`Message::digits`], used for TOC ordering.
    pub fn number(&self) -> u64 {
        self.digits().parse().unwrap_or(0)
    }
}

/// Result of parsing one catalog document. Malformed records are reported
/// as warnings and excluded; they never abort the run.
#[derive(Debug, Default)]
pub struct ParsedCatalog {
    pub messages: Vec<Message>,
    pub warnings: Vec<String>,
}

/// Read, variable-substitute and parse a catalog file.
pub fn read_catalog(path: &Path, vars: &VariableTable) -> Result<ParsedCatalog> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
    let resolved = vars.resolve(&raw);
    parse_catalog(&resolved).with_context(|| format!("Failed to parse catalog: {}", path.display()))
}

/// Parse catalog text into ordered message records.
pub fn parse_catalog(text: &str) -> Result<ParsedCatalog> {
    let forest = parse_forest(text)?;
    let mut parsed = ParsedCatalog::default();
    collect_messages(&forest, &mut parsed);
    Ok(parsed)
}

/// Element name and attributes of an open tag.
fn read_head(start: &BytesStart<'_>) -> Result<(String, Vec<(String, String)>)> {
    let name = String::from_utf8_lossy(start.name().as_ref()).to_string();
    let mut attrs = Vec::new();
    for attr in start.attributes() {
        let attr = attr.context("malformed attribute")?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
        let value = attr.unescape_value().context("malformed attribute value")?;
        attrs.push((key, value.to_string()));
    }
    Ok((name, attrs))
}

/// Parse a whole document into a node forest, preserving source order.
fn parse_forest(text: &str) -> Result<Vec<Node>> {
    let mut reader = Reader::from_str(text);
    reader.trim_text(false);

    // Stack of open elements; index 0 is the synthetic root level.
    let mut stack: Vec<(String, Vec<(String, String)>, Vec<Node>)> =
        vec![(String::new(), Vec::new(), Vec::new())];

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                let (name, attrs) = read_head(&start)?;
                stack.push((name, attrs, Vec::new()));
            }
            Ok(Event::Empty(start)) => {
                let (name, attrs) = read_head(&start)?;
                stack.last_mut().unwrap().2.push(Node::Element {
                    name,
                    attrs,
                    children: Vec::new(),
                    self_closing: true,
                });
            }
            Ok(Event::End(_)) => {
                let (name, attrs, children) = stack.pop().expect("parser stack underflow");
                if stack.is_empty() {
                    bail!("unbalanced end tag in catalog document");
                }
                stack.last_mut().unwrap().2.push(Node::Element {
                    name,
                    attrs,
                    children,
                    self_closing: false,
                });
            }
            Ok(Event::Text(t)) => {
                // Keep the escaped source form.
                let raw = String::from_utf8_lossy(t.as_ref()).to_string();
                stack.last_mut().unwrap().2.push(Node::Text(raw));
            }
            Ok(Event::CData(c)) => {
                let raw = String::from_utf8_lossy(c.as_ref()).to_string();
                stack.last_mut().unwrap().2.push(Node::Text(raw));
            }
            Ok(Event::Eof) => break,
            Ok(_) => {} // declarations, comments, processing instructions
            Err(err) => bail!("XML parse error at byte {}: {}", reader.buffer_position(), err),
        }
    }

    if stack.len() != 1 {
        bail!("unterminated element in catalog document");
    }
    Ok(stack.pop().unwrap().2)
}

fn collect_messages(forest: &[Node], parsed: &mut ParsedCatalog) {
    for node in forest {
        let Node::Element { name, children, .. } = node else {
            continue;
        };
        if name == "Message" {
            match build_message(node, children) {
                Ok(msg) => parsed.messages.push(msg),
                Err(reason) => parsed.warnings.push(reason),
            }
        } else {
            // Messages nest directly under the document root; descend.
            collect_messages(children, parsed);
        }
    }
}

/// Build a record or explain why it is malformed. Either all required
/// fields resolve or the record is dropped whole.
fn build_message(node: &Node, children: &[Node]) -> std::result::Result<Message, String> {
    let id = node
        .attr("ID")
        .map(str::to_string)
        .ok_or_else(|| "Message element with no ID attribute skipped".to_string())?;
    let category = node.attr("category").map(str::to_string);

    let field = |tag: &str| -> Option<MixedContent> {
        children.iter().find_map(|n| match n {
            Node::Element { name, children, .. } if name == tag => Some(children.clone()),
            _ => None,
        })
    };

    let msg_text = field("MsgText")
        .filter(|c| !is_blank(c))
        .ok_or_else(|| format!("Message {} has no MsgText; record skipped", id))?;

    Ok(Message {
        id,
        category,
        msg_text,
        explanation: field("Explanation"),
        operator_response: field("OperatorResponse"),
    })
}

fn is_blank(content: &MixedContent) -> bool {
    content.iter().all(|n| match n {
        Node::Text(t) => t.trim().is_empty(),
        Node::Element { .. } => false,
    })
}
