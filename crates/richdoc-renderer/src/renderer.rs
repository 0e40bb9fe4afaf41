//! Generic document renderer with pluggable backend.

use std::fmt;
use std::marker::PhantomData;

use richdoc_model::{Document, ListKind, Node, TextFormat};

use crate::backend::RenderBackend;
use crate::escape::escape_html;

/// Heading level used when the editor supplied none or an out-of-range one.
const DEFAULT_HEADING_LEVEL: u8 = 2;

/// Inline wrapper tags, innermost first.
///
/// Order matches [`TextFormat::NESTING`]: code innermost, strikethrough
/// outermost. `format = BOLD | ITALIC` therefore always renders as
/// `<em><strong>…</strong></em>`.
const FORMAT_TAGS: [(TextFormat, &str); 5] = [
    (TextFormat::CODE, "code"),
    (TextFormat::BOLD, "strong"),
    (TextFormat::ITALIC, "em"),
    (TextFormat::UNDERLINE, "u"),
    (TextFormat::STRIKETHROUGH, "s"),
];

/// Report for one node that could not be rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Node type name.
    pub node: String,
    /// Slash-separated child-index path from the root, e.g. `root/2/0`.
    pub path: String,
    /// What went wrong.
    pub detail: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} node at {}: {}", self.node, self.path, self.detail)
    }
}

/// Outcome of rendering a single node.
///
/// Faults never propagate: a node either contributes markup or is skipped
/// with a [`Diagnostic`], and its siblings render either way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeOutcome {
    /// The node's markup (possibly empty, e.g. a blank paragraph).
    Rendered(String),
    /// The node was dropped; the diagnostic says why.
    Skipped(Diagnostic),
}

/// Result of rendering a document.
#[derive(Clone, Debug)]
pub struct RenderResult {
    /// Rendered markup.
    pub html: String,
    /// One entry per skipped node. Already reported via `tracing`.
    pub diagnostics: Vec<Diagnostic>,
}

/// Generic document renderer with pluggable backend.
///
/// Walks the tree depth-first in a single pass, emitting the common block
/// vocabulary itself and delegating format-specific pieces to the
/// [`RenderBackend`]. The walk is total: malformed nodes are skipped with a
/// diagnostic, never surfaced as an error, so one bad node cannot blank a
/// page of otherwise-valid content.
///
/// Rendering is pure and re-entrant — `render` takes `&self`, holds no
/// mutable state between calls, and produces byte-identical output for
/// identical input.
pub struct DocRenderer<B: RenderBackend> {
    _backend: PhantomData<B>,
}

impl<B: RenderBackend> DocRenderer<B> {
    /// Create a new renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            _backend: PhantomData,
        }
    }

    /// Render a document to markup.
    ///
    /// An empty document yields an empty string. Never panics and never
    /// returns an error; per-node faults land in
    /// [`RenderResult::diagnostics`].
    #[must_use]
    pub fn render(&self, doc: &Document) -> RenderResult {
        let mut diagnostics = Vec::new();
        let html = self.render_children(&doc.children, "root", &mut diagnostics);
        RenderResult { html, diagnostics }
    }

    /// Render one node, reporting the outcome explicitly.
    ///
    /// Diagnostics from *descendants* of a rendered container are appended
    /// to `diagnostics`; the returned outcome describes this node alone.
    pub fn render_node(
        &self,
        node: &Node,
        path: &str,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> NodeOutcome {
        match node {
            Node::Text { text, format } => {
                if format.unknown_bits() != 0 {
                    return NodeOutcome::Skipped(Diagnostic {
                        node: node.kind().to_owned(),
                        path: path.to_owned(),
                        detail: format!(
                            "unrecognized format bits {:#x}",
                            format.unknown_bits()
                        ),
                    });
                }
                let mut html = escape_html(text).into_owned();
                for (flag, tag) in FORMAT_TAGS {
                    if format.contains(flag) {
                        html = format!("<{tag}>{html}</{tag}>");
                    }
                }
                NodeOutcome::Rendered(html)
            }
            Node::LineBreak => {
                let mut out = String::new();
                B::hard_break(&mut out);
                NodeOutcome::Rendered(out)
            }
            Node::Paragraph { children } => {
                let inner = self.render_children(children, path, diagnostics);
                if inner.trim().is_empty() {
                    // Visually blank block; emitting <p></p> would add
                    // phantom whitespace to the page.
                    NodeOutcome::Rendered(String::new())
                } else {
                    NodeOutcome::Rendered(format!("<p>{inner}</p>"))
                }
            }
            Node::Heading { level, children } => {
                let inner = self.render_children(children, path, diagnostics);
                let level = if (1..=6).contains(level) {
                    *level
                } else {
                    DEFAULT_HEADING_LEVEL
                };
                NodeOutcome::Rendered(format!("<h{level}>{inner}</h{level}>"))
            }
            Node::List { kind, children } => {
                let inner = self.render_children(children, path, diagnostics);
                let tag = match kind {
                    ListKind::Bullet => "ul",
                    ListKind::Number => "ol",
                };
                NodeOutcome::Rendered(format!("<{tag}>{inner}</{tag}>"))
            }
            Node::ListItem { children } => {
                let inner = self.render_children(children, path, diagnostics);
                NodeOutcome::Rendered(format!("<li>{inner}</li>"))
            }
            Node::Quote { children } => {
                let inner = self.render_children(children, path, diagnostics);
                let mut out = String::new();
                B::quote_start(&mut out);
                out.push_str(&inner);
                B::quote_end(&mut out);
                NodeOutcome::Rendered(out)
            }
            Node::Link {
                url,
                new_tab,
                children,
            } => {
                let inner = self.render_children(children, path, diagnostics);
                let href = B::transform_link(url.as_deref().unwrap_or_default());
                let mut out = String::new();
                B::link_start(&href, *new_tab, &mut out);
                out.push_str(&inner);
                B::link_end(&mut out);
                NodeOutcome::Rendered(out)
            }
            // Forward compatibility: an unrecognized wrapper contributes
            // nothing itself but its children still render.
            Node::Unknown { children, .. } => {
                NodeOutcome::Rendered(self.render_children(children, path, diagnostics))
            }
        }
    }

    fn render_children(
        &self,
        nodes: &[Node],
        path: &str,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> String {
        let mut out = String::new();
        for (index, node) in nodes.iter().enumerate() {
            match self.render_node(node, &format!("{path}/{index}"), diagnostics) {
                NodeOutcome::Rendered(html) => out.push_str(&html),
                NodeOutcome::Skipped(diagnostic) => {
                    tracing::warn!("skipped {diagnostic}");
                    diagnostics.push(diagnostic);
                }
            }
        }
        out
    }
}

impl<B: RenderBackend> Default for DocRenderer<B> {
    fn default() -> Self {
        Self::new()
    }
}
