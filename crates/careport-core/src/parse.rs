// SPDX-License-Identifier: AGPL-3.0-or-later
//! Two-stage cell parser
//!
//! Cells coming back from a spreadsheet hold either JSON this system exported
//! (or the editor produced) - re-hydrated exactly - or free-typed plain text,
//! reconstructed by a line heuristic. The heuristic is deliberately lossy:
//! headings, nested lists, links and images typed as text come back as plain
//! paragraphs. Low-friction spreadsheet editing wins over fidelity here.

use crate::ast::{Document, Node};
use crate::error::{CodecError, Result};

/// Parse one spreadsheet cell into a document.
///
/// Tries the exact JSON path first; a malformed-JSON outcome selects the
/// plain-text heuristic. Fails with [`CodecError::EmptyContent`] when neither
/// stage yields a single block node.
pub fn parse_cell(cell: &str) -> Result<Document> {
    let trimmed = cell.trim();
    let doc = match parse_exact(trimmed) {
        Ok(doc) => doc,
        Err(CodecError::MalformedJson(_)) => parse_plain(trimmed)?,
        Err(err) => return Err(err),
    };
    if doc.content.is_empty() {
        return Err(CodecError::EmptyContent);
    }
    Ok(doc)
}

/// Strict decode of a cell holding previously exported document JSON.
pub fn parse_exact(cell: &str) -> Result<Document> {
    Ok(serde_json::from_str(cell)?)
}

/// Line accumulator for the plain-text heuristic. Paragraph and bullet
/// buffers are mutually exclusive; starting one flushes the other.
#[derive(Debug, PartialEq)]
enum Accum {
    Idle,
    Paragraph(Vec<String>),
    Bullets(Vec<Node>),
}

impl Accum {
    /// Consume one line, pushing any block the transition completes.
    fn feed(self, line: &str, blocks: &mut Vec<Node>) -> Self {
        if line.trim().is_empty() {
            self.flush(blocks);
            return Accum::Idle;
        }

        if let Some(rest) = bullet_text(line) {
            let mut items = match self {
                Accum::Bullets(items) => items,
                other => {
                    other.flush(blocks);
                    Vec::new()
                }
            };
            items.push(list_item(rest));
            return Accum::Bullets(items);
        }

        let mut lines = match self {
            Accum::Paragraph(lines) => lines,
            other => {
                other.flush(blocks);
                Vec::new()
            }
        };
        lines.push(line.trim().to_owned());
        Accum::Paragraph(lines)
    }

    fn flush(self, blocks: &mut Vec<Node>) {
        match self {
            Accum::Idle => {}
            Accum::Paragraph(lines) => {
                // consecutive lines reflow into one space-joined paragraph
                let text = lines.join(" ");
                if !text.is_empty() {
                    blocks.push(paragraph(text));
                }
            }
            Accum::Bullets(items) => {
                if !items.is_empty() {
                    blocks.push(Node::BulletList { content: items });
                }
            }
        }
    }
}

fn parse_plain(text: &str) -> Result<Document> {
    let mut blocks = Vec::new();
    let mut state = Accum::Idle;
    for line in text.lines() {
        state = state.feed(line, &mut blocks);
    }
    state.flush(&mut blocks);

    if blocks.is_empty() {
        return Err(CodecError::EmptyContent);
    }
    Ok(Document::new(blocks))
}

/// `- ` at the start of a line opens a bullet; a lone dash does not.
fn bullet_text(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('-')?;
    if rest.starts_with(char::is_whitespace) {
        Some(rest.trim())
    } else {
        None
    }
}

fn paragraph(text: String) -> Node {
    Node::Paragraph {
        content: vec![Node::Text {
            text,
            marks: Vec::new(),
        }],
    }
}

fn list_item(text: &str) -> Node {
    let body = if text.is_empty() {
        Node::Paragraph {
            content: Vec::new(),
        }
    } else {
        paragraph(text.to_owned())
    };
    Node::ListItem {
        content: vec![body],
    }
}
