// SPDX-License-Identifier: AGPL-3.0-or-later
//! Flat-text serializer for rich-text documents
//!
//! Walks a document tree and emits the canonical indented rendering written
//! into spreadsheet cells on export. Total over any tree: kinds without a
//! dedicated rule recurse into their children or degrade to the generic
//! value formatter, so export never fails on a malformed or partially
//! unknown tree.

use serde_json::Value;

use crate::ast::{raw_children, Document, Mark, Node};
use crate::value::format_value;

const INDENT: &str = "  ";

/// Render a document to flat text. A genuinely empty document renders as the
/// empty string; whether that is an error is the caller's decision.
pub fn serialize(doc: &Document) -> String {
    let mut lines = Vec::new();
    for node in &doc.content {
        render_block(node, 0, &mut lines);
    }
    lines
        .iter()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_owned()
}

fn pad(indent: usize) -> String {
    INDENT.repeat(indent)
}

fn render_block(node: &Node, indent: usize, out: &mut Vec<String>) {
    match node {
        Node::Doc { content } => {
            for child in content {
                render_block(child, indent, out);
            }
        }

        Node::Paragraph { content } => {
            let text = paragraph_text(content);
            if text.is_empty() {
                out.push(String::new());
            } else {
                for line in text.split('\n') {
                    out.push(format!("{}{line}", pad(indent)));
                }
            }
        }

        Node::Heading { level, content } => {
            let level = (*level).clamp(1, 6) as usize;
            let text = paragraph_text(content);
            let line = format!("{}{} {text}", pad(indent), "#".repeat(level));
            out.push(line.trim_end().to_owned());
        }

        Node::BulletList { content } => {
            for item in content {
                match item {
                    Node::ListItem { content } => render_item(content, "- ", indent, out),
                    other => render_block(other, indent, out),
                }
            }
        }

        Node::OrderedList { start, content } => {
            let mut number = (*start).max(1);
            for item in content {
                match item {
                    Node::ListItem { content } => {
                        render_item(content, &format!("{number}. "), indent, out);
                        number += 1;
                    }
                    other => render_block(other, indent, out),
                }
            }
        }

        // a list item outside a list still renders as a bullet
        Node::ListItem { content } => render_item(content, "- ", indent, out),

        Node::Blockquote { content } => {
            let mut inner = Vec::new();
            for child in content {
                render_block(child, 0, &mut inner);
            }
            for line in inner {
                if line.trim().is_empty() {
                    out.push(String::new());
                } else {
                    out.push(format!("{}> {line}", pad(indent)));
                }
            }
        }

        Node::HorizontalRule => out.push(format!("{}------", pad(indent))),

        Node::CodeBlock { content } => {
            let mut text = String::new();
            for child in content {
                collect_inline(child, &mut text);
            }
            for line in normalize_breaks(&text).split('\n') {
                out.push(format!("{}{line}", pad(indent)));
            }
        }

        Node::Text { text, .. } => {
            for line in normalize_breaks(text).split('\n') {
                out.push(format!("{}{line}", pad(indent)));
            }
        }

        // no block rule of their own; degrade to the raw-value rendering
        Node::Image { .. } | Node::HardBreak => {
            push_fallback(&Value::from(node.clone()), indent, out);
        }

        Node::Unknown(value) => match raw_children(value) {
            Some(children) => {
                for child in &children {
                    render_block(child, indent, out);
                }
            }
            None => push_fallback(value, indent, out),
        },
    }
}

fn render_item(children: &[Node], marker: &str, indent: usize, out: &mut Vec<String>) {
    let (lead, rest) = match children.split_first() {
        Some((Node::Paragraph { content }, rest)) => (Some(paragraph_text(content)), rest),
        _ => (None, children),
    };
    match lead {
        Some(text) => {
            let mut lines = text.split('\n');
            let first = lines.next().unwrap_or("");
            out.push(format!("{}{marker}{first}", pad(indent)).trim_end().to_owned());
            // wrapped lines hang one level under the marker
            for line in lines {
                out.push(format!("{}{line}", pad(indent + 1)));
            }
        }
        None => out.push(format!("{}{}", pad(indent), marker.trim_end())),
    }
    for child in rest {
        render_block(child, indent + 1, out);
    }
}

fn push_fallback(value: &Value, indent: usize, out: &mut Vec<String>) {
    let rendered = format_value(value, indent);
    if !rendered.is_empty() {
        out.extend(rendered.split('\n').map(str::to_owned));
    }
}

/// Inline text of a paragraph-like node: children concatenated, line endings
/// normalized, every physical line right-trimmed, whole block trimmed.
fn paragraph_text(content: &[Node]) -> String {
    let mut text = String::new();
    for node in content {
        collect_inline(node, &mut text);
    }
    normalize_breaks(&text)
        .split('\n')
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_owned()
}

fn normalize_breaks(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

fn collect_inline(node: &Node, out: &mut String) {
    match node {
        Node::Text { text, marks } => {
            out.push_str(text);
            if let Some(href) = link_href(marks) {
                if href != text {
                    out.push_str(" (");
                    out.push_str(href);
                    out.push(')');
                }
            }
        }

        Node::HardBreak => out.push('\n'),

        Node::Image { src, alt } => out.push_str(&image_text(src.as_deref(), alt.as_deref())),

        Node::Unknown(value) => match raw_children(value) {
            Some(children) => {
                for child in &children {
                    collect_inline(child, out);
                }
            }
            None => {
                if let Some(text) = value.get("text").and_then(Value::as_str) {
                    out.push_str(text);
                }
            }
        },

        other => {
            for child in other.children() {
                collect_inline(child, out);
            }
        }
    }
}

fn link_href(marks: &[Mark]) -> Option<&str> {
    marks.iter().find_map(|mark| match mark {
        Mark::Link { href } => Some(href.as_str()),
        Mark::Unknown(_) => None,
    })
}

fn image_text(src: Option<&str>, alt: Option<&str>) -> String {
    let alt = alt.filter(|alt| !alt.is_empty()).unwrap_or("Image");
    match src.filter(|src| !src.is_empty()) {
        Some(src) => format!("[{alt}] ({src})"),
        None => format!("[{alt}]"),
    }
}
