//! Plain-text extraction.
//!
//! Flattens a document to unformatted text for excerpts, meta descriptions,
//! and search indexing. Blocks land on their own lines; list items get
//! `- ` / `1.`-style markers; inline formatting and links disappear.

use richdoc_model::{Document, ListKind, Node};

/// Flatten a document to plain text.
///
/// Blank blocks are dropped, so the result never starts or ends with a
/// newline.
#[must_use]
pub fn plain_text(doc: &Document) -> String {
    let mut blocks = Vec::new();
    collect_blocks(&doc.children, &mut blocks);
    blocks.join("\n")
}

fn collect_blocks(nodes: &[Node], blocks: &mut Vec<String>) {
    for node in nodes {
        match node {
            Node::Paragraph { children }
            | Node::Heading { children, .. }
            | Node::Quote { children } => {
                let text = inline_text(children);
                if !text.trim().is_empty() {
                    blocks.push(text);
                }
            }
            Node::List { kind, children } => {
                let mut number = 1;
                for item in children {
                    let text = inline_text(item.children());
                    if text.trim().is_empty() {
                        continue;
                    }
                    match kind {
                        ListKind::Bullet => blocks.push(format!("- {text}")),
                        ListKind::Number => {
                            blocks.push(format!("{number}. {text}"));
                            number += 1;
                        }
                    }
                }
            }
            Node::Unknown { children, .. } | Node::ListItem { children } => {
                collect_blocks(children, blocks);
            }
            // Stray inline content at block level still contributes a line.
            Node::Text { text, .. } => {
                if !text.trim().is_empty() {
                    blocks.push(text.clone());
                }
            }
            Node::Link { children, .. } => {
                let text = inline_text(children);
                if !text.trim().is_empty() {
                    blocks.push(text);
                }
            }
            Node::LineBreak => {}
        }
    }
}

fn inline_text(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            Node::Text { text, .. } => out.push_str(text),
            Node::LineBreak => out.push('\n'),
            other => out.push_str(&inline_text(other.children())),
        }
    }
    out
}
