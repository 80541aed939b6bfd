// SPDX-License-Identifier: AGPL-3.0-or-later
//! Generic value formatter
//!
//! Pretty-prints arbitrary structured metadata (image lists, nested JSON
//! blobs) into indented text that stays legible inside a spreadsheet cell.
//! Not rich-text aware; the serializer also delegates nodes it does not
//! specifically handle to this module. Timestamps reach the formatter as
//! RFC 3339 strings, so they render through the string case.

use serde_json::Value;

const INDENT: &str = "  ";

/// Render a JSON value as indented text, two spaces per level.
pub fn format_value(value: &Value, indent: usize) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => format_array(items, indent),
        Value::Object(map) => format_object(map, indent),
    }
}

fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}

fn format_array(items: &[Value], indent: usize) -> String {
    let pad = INDENT.repeat(indent);
    if items.iter().all(is_scalar) {
        // flat list: one element per line, no markers
        return items
            .iter()
            .map(|item| format!("{pad}{}", format_value(item, indent)))
            .collect::<Vec<_>>()
            .join("\n");
    }

    items
        .iter()
        .map(|item| {
            let rendered = format_value(item, indent + 1);
            if rendered.is_empty() {
                format!("{pad}-")
            } else if rendered.contains('\n') {
                format!("{pad}-\n{rendered}")
            } else {
                format!("{pad}- {}", rendered.trim_start())
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_object(map: &serde_json::Map<String, Value>, indent: usize) -> String {
    let pad = INDENT.repeat(indent);
    map.iter()
        .map(|(key, value)| {
            let rendered = format_value(value, indent + 1);
            if rendered.is_empty() {
                format!("{pad}{key}:")
            } else if rendered.contains('\n') {
                format!("{pad}{key}:\n{rendered}")
            } else {
                format!("{pad}{key}: {}", rendered.trim_start())
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_null_is_empty() {
        assert_eq!(format_value(&Value::Null, 0), "");
    }

    #[test]
    fn test_scalars_render_bare() {
        assert_eq!(format_value(&json!("hello"), 0), "hello");
        assert_eq!(format_value(&json!(42), 0), "42");
        assert_eq!(format_value(&json!(true), 0), "true");
    }

    #[test]
    fn test_scalar_array_joins_lines() {
        let value = json!(["a", "b", 3]);
        assert_eq!(format_value(&value, 0), "a\nb\n3");
    }

    #[test]
    fn test_object_inline_and_nested() {
        let value = json!({
            "name": "Gangnam Clinic",
            "address": { "city": "Seoul", "district": "Gangnam" }
        });
        assert_eq!(
            format_value(&value, 0),
            "address:\n  city: Seoul\n  district: Gangnam\nname: Gangnam Clinic"
        );
    }

    #[test]
    fn test_object_array_renders_bullets() {
        let value = json!([{ "url": "a.jpg" }, { "url": "b.jpg" }]);
        assert_eq!(format_value(&value, 0), "- url: a.jpg\n- url: b.jpg");
    }

    #[test]
    fn test_empty_element_renders_bare_dash() {
        let value = json!([{}, { "url": "a.jpg" }]);
        assert_eq!(format_value(&value, 0), "-\n- url: a.jpg");
    }

    #[test]
    fn test_multiline_element_hangs_under_bare_dash() {
        let value = json!([{ "url": "a.jpg", "caption": "front desk" }]);
        assert_eq!(
            format_value(&value, 0),
            "-\n  caption: front desk\n  url: a.jpg"
        );
    }

    #[test]
    fn test_indent_level_offsets_output() {
        let value = json!({ "tags": ["skin", "dental"] });
        assert_eq!(format_value(&value, 1), "  tags:\n    skin\n    dental");
    }
}
