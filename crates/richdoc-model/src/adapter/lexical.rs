//! Adapter for the lexical-editor payload.
//!
//! Shape: `{ "root": { "children": [...] } }`, nodes tagged by `type`.
//! Text leaves carry an integer `format` bitmask. Headings carry the level
//! in a `tag` field (`"h1"`…`"h6"`), lists a `listType` of `"number"` or
//! `"bullet"`, and links put `url` / `newTab` either under `fields` or flat
//! on the node. `autolink` nodes are links the editor inserted itself; they
//! carry a URL the same way and are folded into [`Node::Link`].

use serde_json::Value;

use crate::format::TextFormat;
use crate::node::{Document, ListKind, Node};

/// Convert a lexical payload into a document.
///
/// Total: any value that is not a recognizable document converts to an
/// empty one.
#[must_use]
pub fn document(value: &Value) -> Document {
    // Serialized state wraps everything in `root`; tolerate a bare node
    // carrying `children` directly.
    let children = value
        .get("root")
        .unwrap_or(value)
        .get("children")
        .and_then(Value::as_array);
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
    let kind = obj.get("type").and_then(Value::as_str).unwrap_or("");
    let children = obj
        .get("children")
        .and_then(Value::as_array)
        .map(|items| convert_children(items))
        .unwrap_or_default();

    let node = match kind {
        "text" => Node::Text {
            text: obj
                .get("text")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_owned(),
            format: convert_format(obj.get("format")),
        },
        "linebreak" => Node::LineBreak,
        "link" | "autolink" => {
            let fields = obj.get("fields").and_then(Value::as_object);
            let url = fields
                .and_then(|f| f.get("url"))
                .or_else(|| obj.get("url"))
                .and_then(Value::as_str)
                .map(str::to_owned);
            let new_tab = fields
                .and_then(|f| f.get("newTab"))
                .or_else(|| obj.get("newTab"))
                .and_then(Value::as_bool)
                .unwrap_or(false);
            Node::Link {
                url,
                new_tab,
                children,
            }
        }
        "heading" => Node::Heading {
            level: convert_heading_tag(obj.get("tag")),
            children,
        },
        "paragraph" => Node::Paragraph { children },
        "list" => Node::List {
            kind: match obj.get("listType").and_then(Value::as_str) {
                Some("number") => ListKind::Number,
                _ => ListKind::Bullet,
            },
            children,
        },
        "listitem" => Node::ListItem { children },
        "quote" => Node::Quote { children },
        other => Node::Unknown {
            kind: other.to_owned(),
            children,
        },
    };
    Some(node)
}

/// Convert the raw `format` field, preserving malformed values.
///
/// A `format` that is present but not an unsigned integer in `u32` range is
/// mapped to an all-ones mask: the unknown bits make the renderer skip the
/// node with a diagnostic instead of guessing at styling.
fn convert_format(value: Option<&Value>) -> TextFormat {
    match value {
        None | Some(Value::Null) => TextFormat::empty(),
        Some(raw) => raw
            .as_u64()
            .and_then(|bits| u32::try_from(bits).ok())
            .map_or(TextFormat::from_bits(u32::MAX), TextFormat::from_bits),
    }
}

/// Parse a heading `tag` like `"h3"`. Anything else yields 0, which the
/// renderer clamps to its default level.
fn convert_heading_tag(value: Option<&Value>) -> u8 {
    value
        .and_then(Value::as_str)
        .and_then(|tag| tag.strip_prefix('h'))
        .and_then(|digits| digits.parse().ok())
        .unwrap_or(0)
}
