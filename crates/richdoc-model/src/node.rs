//! The shared document tree.

use serde::{Deserialize, Serialize};

use crate::format::TextFormat;

/// A rich-text document: an ordered sequence of top-level block nodes.
///
/// A document with no children renders to empty output. The tree is
/// containment-only — no back-references, no cycles — and is built once per
/// render call, walked once, and discarded.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Top-level block nodes in document order.
    pub children: Vec<Node>,
}

impl Document {
    /// Create a document from top-level nodes.
    #[must_use]
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    /// Whether the document has no content at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// Ordered vs. unordered list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListKind {
    /// Unordered (bulleted) list. The default when the payload does not say.
    #[default]
    Bullet,
    /// Ordered (numbered) list.
    Number,
}

/// One node of the document tree.
///
/// The set of node types an editor can emit is open-ended; payloads with
/// types this crate has never seen arrive as [`Node::Unknown`] with their
/// children intact, so new block types degrade to "render the contents
/// without a wrapper" instead of disappearing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// Leaf text run with inline formatting.
    Text {
        /// Raw characters, unescaped.
        text: String,
        /// Inline style bitmask.
        format: TextFormat,
    },
    /// Hard line break.
    LineBreak,
    /// Hyperlink around zero or more inline children.
    Link {
        /// Destination URL. Renderers substitute a no-op anchor when absent.
        url: Option<String>,
        /// Open in a new tab (adds the no-opener attributes when rendered).
        new_tab: bool,
        /// Link contents.
        children: Vec<Node>,
    },
    /// Heading block. The raw level is preserved; renderers clamp to 1–6
    /// and default out-of-range values to 2.
    Heading {
        /// Editor-supplied heading level, unvalidated.
        level: u8,
        /// Heading contents.
        children: Vec<Node>,
    },
    /// Paragraph block.
    Paragraph {
        /// Paragraph contents.
        children: Vec<Node>,
    },
    /// List block containing list items.
    List {
        /// Ordered or unordered.
        kind: ListKind,
        /// List items.
        children: Vec<Node>,
    },
    /// One item of a list.
    ListItem {
        /// Item contents.
        children: Vec<Node>,
    },
    /// Block quotation.
    Quote {
        /// Quoted contents.
        children: Vec<Node>,
    },
    /// Node type this crate does not recognize. Children are preserved and
    /// rendered; the wrapper itself contributes nothing.
    Unknown {
        /// The payload's type tag.
        kind: String,
        /// Converted children.
        children: Vec<Node>,
    },
}

impl Node {
    /// The node's children, empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Text { .. } | Node::LineBreak => &[],
            Node::Link { children, .. }
            | Node::Heading { children, .. }
            | Node::Paragraph { children }
            | Node::List { children, .. }
            | Node::ListItem { children }
            | Node::Quote { children }
            | Node::Unknown { children, .. } => children,
        }
    }

    /// A short name for the node type, for diagnostics.
    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            Node::Text { .. } => "text",
            Node::LineBreak => "linebreak",
            Node::Link { .. } => "link",
            Node::Heading { .. } => "heading",
            Node::Paragraph { .. } => "paragraph",
            Node::List { .. } => "list",
            Node::ListItem { .. } => "listitem",
            Node::Quote { .. } => "quote",
            Node::Unknown { kind, .. } => kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_document() {
        let doc = Document::default();
        assert!(doc.is_empty());
        assert_eq!(doc.children.len(), 0);
    }

    #[test]
    fn test_children_for_leaves() {
        assert!(Node::LineBreak.children().is_empty());
        let text = Node::Text {
            text: "hi".to_owned(),
            format: TextFormat::empty(),
        };
        assert!(text.children().is_empty());
    }

    #[test]
    fn test_children_for_containers() {
        let quote = Node::Quote {
            children: vec![Node::LineBreak, Node::LineBreak],
        };
        assert_eq!(quote.children().len(), 2);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Node::LineBreak.kind(), "linebreak");
        let unknown = Node::Unknown {
            kind: "gallery".to_owned(),
            children: vec![],
        };
        assert_eq!(unknown.kind(), "gallery");
    }

    #[test]
    fn test_typed_serde_round_trip() {
        let doc = Document::new(vec![Node::Paragraph {
            children: vec![Node::Text {
                text: "hello".to_owned(),
                format: TextFormat::BOLD | TextFormat::ITALIC,
            }],
        }]);
        let json = serde_json::to_string(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}
