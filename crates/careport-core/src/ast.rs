// SPDX-License-Identifier: AGPL-3.0-or-later
//! Rich-text document model
//!
//! The node vocabulary mirrors the JSON the admin rich-text editor produces:
//! every node is an object tagged by `type`, attributes live under `attrs`,
//! children under `content`. Decoding is total - kinds this module does not
//! know are preserved as [`Node::Unknown`] with their raw payload, and known
//! kinds carrying extra attributes are accepted rather than rejected.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::error::NotADocument;

/// The root of a rich-text document tree.
///
/// On the wire this is an object with `"type": "doc"`; a value is a document
/// exactly when that tag matches, which is the check that routes a cell to
/// the exact parser path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct Document {
    pub content: Vec<Node>,
}

impl Document {
    pub fn new(content: Vec<Node>) -> Self {
        Self { content }
    }

    /// Sentinel for absent locale variants: exactly one empty paragraph.
    /// Serializes to the empty string.
    pub fn empty() -> Self {
        Self {
            content: vec![Node::Paragraph {
                content: Vec::new(),
            }],
        }
    }
}

impl TryFrom<Value> for Document {
    type Error = NotADocument;

    fn try_from(mut value: Value) -> Result<Self, Self::Error> {
        if value.get("type").and_then(Value::as_str) != Some("doc") {
            return Err(NotADocument);
        }
        Ok(Self {
            content: take_children(&mut value),
        })
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        let mut map = tagged("doc");
        map.insert("content".to_owned(), node_array(doc.content));
        Value::Object(map)
    }
}

/// One element of the document tree.
///
/// Child nodes are owned exclusively by their parent; mutation happens by
/// replacing whole trees, never by patching in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum Node {
    /// Nested document root; only ever seen at the top of a tree in practice
    Doc { content: Vec<Node> },

    /// Plain paragraph
    Paragraph { content: Vec<Node> },

    /// Heading; `level` is clamped to 1-6 at render time
    Heading { level: i64, content: Vec<Node> },

    /// Unordered list of `listItem` children
    BulletList { content: Vec<Node> },

    /// Numbered list; `start` values below 1 are treated as 1
    OrderedList { start: i64, content: Vec<Node> },

    ListItem { content: Vec<Node> },

    Blockquote { content: Vec<Node> },

    HorizontalRule,

    CodeBlock { content: Vec<Node> },

    Image {
        src: Option<String>,
        alt: Option<String>,
    },

    /// Text run with its ordered marks
    Text { text: String, marks: Vec<Mark> },

    HardBreak,

    /// Kind this model does not know. The raw payload is kept so rendering
    /// can still recurse into its `content` or fall back to the generic
    /// value formatter.
    Unknown(Value),
}

impl Node {
    /// Child nodes, for the kinds that own any.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Doc { content }
            | Node::Paragraph { content }
            | Node::Heading { content, .. }
            | Node::BulletList { content }
            | Node::OrderedList { content, .. }
            | Node::ListItem { content }
            | Node::Blockquote { content }
            | Node::CodeBlock { content } => content,
            _ => &[],
        }
    }
}

/// Annotation attached to a text node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum Mark {
    /// Hyperlink; renders as `text (href)` when the href differs from the
    /// text it decorates
    Link { href: String },

    /// Styling marks (bold, italic, color, ...) the flat rendering drops
    Unknown(Value),
}

impl From<Value> for Node {
    fn from(mut value: Value) -> Self {
        let kind = match value.get("type").and_then(Value::as_str) {
            Some(kind) => kind.to_owned(),
            None => return Node::Unknown(value),
        };
        match kind.as_str() {
            "doc" => Node::Doc {
                content: take_children(&mut value),
            },
            "paragraph" => Node::Paragraph {
                content: take_children(&mut value),
            },
            "heading" => Node::Heading {
                level: attr_i64(&value, "level").unwrap_or(1),
                content: take_children(&mut value),
            },
            "bulletList" => Node::BulletList {
                content: take_children(&mut value),
            },
            "orderedList" => Node::OrderedList {
                start: attr_i64(&value, "start").unwrap_or(1),
                content: take_children(&mut value),
            },
            "listItem" => Node::ListItem {
                content: take_children(&mut value),
            },
            "blockquote" => Node::Blockquote {
                content: take_children(&mut value),
            },
            "horizontalRule" => Node::HorizontalRule,
            "codeBlock" => Node::CodeBlock {
                content: take_children(&mut value),
            },
            "image" => Node::Image {
                src: attr_str(&value, "src"),
                alt: attr_str(&value, "alt"),
            },
            "text" => Node::Text {
                text: value
                    .get("text")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_owned(),
                marks: take_marks(&mut value),
            },
            "hardBreak" => Node::HardBreak,
            _ => Node::Unknown(value),
        }
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        match node {
            Node::Doc { content } => block("doc", content),
            Node::Paragraph { content } => block("paragraph", content),
            Node::Heading { level, content } => {
                let mut map = tagged("heading");
                map.insert("attrs".to_owned(), json!({ "level": level }));
                insert_children(&mut map, content);
                Value::Object(map)
            }
            Node::BulletList { content } => block("bulletList", content),
            Node::OrderedList { start, content } => {
                let mut map = tagged("orderedList");
                map.insert("attrs".to_owned(), json!({ "start": start }));
                insert_children(&mut map, content);
                Value::Object(map)
            }
            Node::ListItem { content } => block("listItem", content),
            Node::Blockquote { content } => block("blockquote", content),
            Node::HorizontalRule => Value::Object(tagged("horizontalRule")),
            Node::CodeBlock { content } => block("codeBlock", content),
            Node::Image { src, alt } => {
                let mut attrs = Map::new();
                if let Some(src) = src {
                    attrs.insert("src".to_owned(), Value::String(src));
                }
                if let Some(alt) = alt {
                    attrs.insert("alt".to_owned(), Value::String(alt));
                }
                let mut map = tagged("image");
                map.insert("attrs".to_owned(), Value::Object(attrs));
                Value::Object(map)
            }
            Node::Text { text, marks } => {
                let mut map = tagged("text");
                map.insert("text".to_owned(), Value::String(text));
                if !marks.is_empty() {
                    map.insert(
                        "marks".to_owned(),
                        Value::Array(marks.into_iter().map(Value::from).collect()),
                    );
                }
                Value::Object(map)
            }
            Node::HardBreak => Value::Object(tagged("hardBreak")),
            Node::Unknown(value) => value,
        }
    }
}

impl From<Value> for Mark {
    fn from(value: Value) -> Self {
        match value.get("type").and_then(Value::as_str) {
            Some("link") => match attr_str(&value, "href") {
                Some(href) => Mark::Link { href },
                None => Mark::Unknown(value),
            },
            _ => Mark::Unknown(value),
        }
    }
}

impl From<Mark> for Value {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::Link { href } => json!({ "type": "link", "attrs": { "href": href } }),
            Mark::Unknown(value) => value,
        }
    }
}

/// Children of an unrecognized node's raw payload, decoded on demand.
pub(crate) fn raw_children(value: &Value) -> Option<Vec<Node>> {
    match value.get("content") {
        Some(Value::Array(items)) if !items.is_empty() => {
            Some(items.iter().cloned().map(Node::from).collect())
        }
        _ => None,
    }
}

fn tagged(kind: &str) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("type".to_owned(), Value::String(kind.to_owned()));
    map
}

fn block(kind: &str, content: Vec<Node>) -> Value {
    let mut map = tagged(kind);
    insert_children(&mut map, content);
    Value::Object(map)
}

fn insert_children(map: &mut Map<String, Value>, content: Vec<Node>) {
    if !content.is_empty() {
        map.insert("content".to_owned(), node_array(content));
    }
}

fn node_array(content: Vec<Node>) -> Value {
    Value::Array(content.into_iter().map(Value::from).collect())
}

fn take_children(value: &mut Value) -> Vec<Node> {
    match value.get_mut("content").map(Value::take) {
        Some(Value::Array(items)) => items.into_iter().map(Node::from).collect(),
        _ => Vec::new(),
    }
}

fn take_marks(value: &mut Value) -> Vec<Mark> {
    match value.get_mut("marks").map(Value::take) {
        Some(Value::Array(items)) => items.into_iter().map(Mark::from).collect(),
        _ => Vec::new(),
    }
}

fn attr_i64(value: &Value, name: &str) -> Option<i64> {
    value.get("attrs")?.get(name)?.as_i64()
}

fn attr_str(value: &Value, name: &str) -> Option<String> {
    Some(value.get("attrs")?.get(name)?.as_str()?.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decode_editor_document() {
        let json = r#"{
            "type": "doc",
            "content": [
                {
                    "type": "heading",
                    "attrs": { "level": 2 },
                    "content": [{ "type": "text", "text": "Visit guide" }]
                },
                {
                    "type": "paragraph",
                    "content": [
                        {
                            "type": "text",
                            "text": "Book online",
                            "marks": [
                                { "type": "link", "attrs": { "href": "https://careport.app" } }
                            ]
                        }
                    ]
                }
            ]
        }"#;

        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.content.len(), 2);
        assert_eq!(
            doc.content[0],
            Node::Heading {
                level: 2,
                content: vec![Node::Text {
                    text: "Visit guide".to_owned(),
                    marks: Vec::new(),
                }],
            }
        );
        assert_eq!(
            doc.content[1],
            Node::Paragraph {
                content: vec![Node::Text {
                    text: "Book online".to_owned(),
                    marks: vec![Mark::Link {
                        href: "https://careport.app".to_owned(),
                    }],
                }],
            }
        );
    }

    #[test]
    fn test_non_doc_value_is_rejected() {
        let err = serde_json::from_str::<Document>(r#"{"type":"paragraph"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_unknown_kind_keeps_payload() {
        let raw = json!({ "type": "callout", "attrs": { "tone": "warning" } });
        let node = Node::from(raw.clone());
        assert_eq!(node, Node::Unknown(raw.clone()));
        // and it goes back out untouched
        assert_eq!(Value::from(node), raw);
    }

    #[test]
    fn test_extra_attributes_are_tolerated() {
        let raw = json!({
            "type": "heading",
            "attrs": { "level": 3, "textAlign": "center" },
            "content": [{ "type": "text", "text": "T" }]
        });
        match Node::from(raw) {
            Node::Heading { level, content } => {
                assert_eq!(level, 3);
                assert_eq!(content.len(), 1);
            }
            other => panic!("expected heading, got {other:?}"),
        }
    }

    #[test]
    fn test_styling_mark_is_preserved_as_unknown() {
        let raw = json!({ "type": "text", "text": "x", "marks": [{ "type": "bold" }] });
        match Node::from(raw) {
            Node::Text { marks, .. } => {
                assert_eq!(marks, vec![Mark::Unknown(json!({ "type": "bold" }))]);
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_sentinel_shape() {
        let doc = Document::empty();
        assert_eq!(
            doc.content,
            vec![Node::Paragraph {
                content: Vec::new()
            }]
        );
    }
}
