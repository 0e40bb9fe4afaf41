//! Adapter for the legacy-editor payload.
//!
//! The older content backend serialized rich text as a plain JSON array of
//! nodes. Blocks are tagged by `type` (`"h1"`…`"h6"`, `"ul"`, `"ol"`,
//! `"li"`, `"blockquote"`, `"link"`); a node without a `type` is a
//! paragraph. Text leaves have no type either — they are objects carrying a
//! `text` string plus boolean style marks (`bold`, `italic`, `underline`,
//! `strikethrough`, `code`), which convert into the shared bitmask.

use serde_json::{Map, Value};

use crate::format::TextFormat;
use crate::node::{Document, ListKind, Node};

/// Convert a legacy payload into a document.
///
/// Total: accepts the bare node array or an object wrapping one under
/// `children`; anything else converts to an empty document.
#[must_use]
pub fn document(value: &Value) -> Document {
    let children = value
        .as_array()
        .or_else(|| value.get("children").and_then(Value::as_array));
    match children {
        Some(items) => Document::new(convert_children(items)),
        None => Document::default(),
    }
}

fn convert_children(items: &[Value]) -> Vec<Node> {
    items.iter().filter_map(convert_node).collect()
}

fn convert_node(value: &Value) -> Option<Node> {
    let obj = value.as_object()?;

    // Text leaves carry `text` and no children.
    if let Some(text) = obj.get("text").and_then(Value::as_str) {
        return Some(Node::Text {
            text: text.to_owned(),
            format: convert_marks(obj),
        });
    }

    let children = obj
        .get("children")
        .and_then(Value::as_array)
        .map(|items| convert_children(items))
        .unwrap_or_default();

    let node = match obj.get("type").and_then(Value::as_str) {
        None | Some("p") => Node::Paragraph { children },
        Some(tag @ ("h1" | "h2" | "h3" | "h4" | "h5" | "h6")) => Node::Heading {
            // Slice is safe: every matched tag is exactly "h" + one digit.
            level: tag[1..].parse().unwrap_or(0),
            children,
        },
        Some("ul") => Node::List {
            kind: ListKind::Bullet,
            children,
        },
        Some("ol") => Node::List {
            kind: ListKind::Number,
            children,
        },
        Some("li") => Node::ListItem { children },
        Some("blockquote") => Node::Quote { children },
        Some("link") => Node::Link {
            url: obj.get("url").and_then(Value::as_str).map(str::to_owned),
            new_tab: obj
                .get("newTab")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            children,
        },
        Some(other) => Node::Unknown {
            kind: other.to_owned(),
            children,
        },
    };
    Some(node)
}

fn convert_marks(obj: &Map<String, Value>) -> TextFormat {
    const MARKS: [(&str, TextFormat); 5] = [
        ("bold", TextFormat::BOLD),
        ("italic", TextFormat::ITALIC),
        ("strikethrough", TextFormat::STRIKETHROUGH),
        ("underline", TextFormat::UNDERLINE),
        ("code", TextFormat::CODE),
    ];

    let mut format = TextFormat::empty();
    for (key, flag) in MARKS {
        if obj.get(key).and_then(Value::as_bool) == Some(true) {
            format = format | flag;
        }
    }
    format
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_null_and_scalar_input() {
        assert!(document(&Value::Null).is_empty());
        assert!(document(&json!(true)).is_empty());
        assert!(document(&json!({"fields": []})).is_empty());
    }

    #[test]
    fn test_bare_array_payload() {
        let doc = document(&json!([
            {"children": [{"text": "hello"}]}
        ]));
        assert_eq!(
            doc.children,
            vec![Node::Paragraph {
                children: vec![Node::Text {
                    text: "hello".to_owned(),
                    format: TextFormat::empty(),
                }],
            }]
        );
    }

    #[test]
    fn test_boolean_marks_to_bitmask() {
        let doc = document(&json!([
            {"children": [
                {"text": "x", "bold": true, "code": true},
                {"text": "y", "italic": true, "underline": false}
            ]}
        ]));
        let Node::Paragraph { children } = &doc.children[0] else {
            panic!("expected paragraph");
        };
        assert_eq!(
            children,
            &vec![
                Node::Text {
                    text: "x".to_owned(),
                    format: TextFormat::BOLD | TextFormat::CODE,
                },
                Node::Text {
                    text: "y".to_owned(),
                    format: TextFormat::ITALIC,
                },
            ]
        );
    }

    #[test]
    fn test_heading_and_quote_types() {
        let doc = document(&json!([
            {"type": "h4", "children": [{"text": "t"}]},
            {"type": "blockquote", "children": []}
        ]));
        assert!(matches!(doc.children[0], Node::Heading { level: 4, .. }));
        assert!(matches!(doc.children[1], Node::Quote { .. }));
    }

    #[test]
    fn test_list_types() {
        let doc = document(&json!([
            {"type": "ol", "children": [{"type": "li", "children": []}]},
            {"type": "ul", "children": []}
        ]));
        assert!(matches!(
            doc.children[0],
            Node::List {
                kind: ListKind::Number,
                ..
            }
        ));
        assert!(matches!(
            doc.children[1],
            Node::List {
                kind: ListKind::Bullet,
                ..
            }
        ));
    }

    #[test]
    fn test_link_attributes() {
        let doc = document(&json!([
            {"type": "link", "url": "/shop", "newTab": true, "children": [{"text": "shop"}]}
        ]));
        match &doc.children[0] {
            Node::Link { url, new_tab, .. } => {
                assert_eq!(url.as_deref(), Some("/shop"));
                assert!(*new_tab);
            }
            other => panic!("expected link, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_type_keeps_children() {
        let doc = document(&json!([
            {"type": "upload", "children": [{"text": "caption"}]}
        ]));
        assert_eq!(
            doc.children,
            vec![Node::Unknown {
                kind: "upload".to_owned(),
                children: vec![Node::Text {
                    text: "caption".to_owned(),
                    format: TextFormat::empty(),
                }],
            }]
        );
    }
}
