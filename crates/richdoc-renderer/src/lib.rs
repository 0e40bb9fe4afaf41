//! Rich-text document renderer with pluggable backends.
//!
//! This crate provides a generic [`DocRenderer`] that walks the shared
//! [`richdoc_model`] document tree and produces markup through the
//! [`RenderBackend`] trait.
//!
//! # Architecture
//!
//! The renderer uses a trait-based abstraction to handle format-specific
//! differences:
//! - [`HtmlBackend`]: Produces semantic HTML5 for web display
//!
//! Common block structure (paragraphs, headings, lists) is handled by the
//! generic walker, while format-specific elements (quotes, line breaks,
//! anchors) are delegated to the backend.
//!
//! The walk is a total function: absent or malformed input yields empty
//! output, unrecognized node types render their children only, and a
//! per-node fault skips just that node — its siblings render and the fault
//! is reported in [`RenderResult::diagnostics`] and via `tracing`. No input
//! makes rendering panic or error.
//!
//! # Example
//!
//! ```
//! use richdoc_renderer::render_lexical_html;
//! use serde_json::json;
//!
//! let payload = json!({"root": {"children": [
//!     {"type": "paragraph", "children": [
//!         {"type": "text", "text": "Hello & welcome", "format": 1}
//!     ]}
//! ]}});
//! let result = render_lexical_html(&payload);
//! assert_eq!(result.html, "<p><strong>Hello &amp; welcome</strong></p>");
//! ```

mod backend;
mod escape;
mod html;
mod renderer;
mod text;

pub use backend::RenderBackend;
pub use escape::escape_html;
pub use html::HtmlBackend;
pub use renderer::{Diagnostic, DocRenderer, NodeOutcome, RenderResult};
pub use text::plain_text;

/// Render a lexical-editor payload straight to HTML.
///
/// Adapter plus walker in one call. Total over any JSON value: a payload
/// that is not a document renders to an empty string.
#[must_use]
pub fn render_lexical_html(value: &serde_json::Value) -> RenderResult {
    let doc = richdoc_model::adapter::lexical::document(value);
    DocRenderer::<HtmlBackend>::new().render(&doc)
}

/// Render a legacy-editor payload straight to HTML.
///
/// Total over any JSON value, like [`render_lexical_html`].
#[must_use]
pub fn render_legacy_html(value: &serde_json::Value) -> RenderResult {
    let doc = richdoc_model::adapter::legacy::document(value);
    DocRenderer::<HtmlBackend>::new().render(&doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    #[test]
    fn test_absent_input_renders_empty() {
        assert_eq!(render_lexical_html(&Value::Null).html, "");
        assert_eq!(render_lexical_html(&json!({})).html, "");
        assert_eq!(render_legacy_html(&Value::Null).html, "");
        assert_eq!(render_legacy_html(&json!({})).html, "");
    }

    #[test]
    fn test_lexical_round_trip() {
        let payload = json!({"root": {"children": [
            {"type": "paragraph", "children": [
                {"type": "text", "text": "Hello & welcome", "format": 1}
            ]}
        ]}});
        assert_eq!(
            render_lexical_html(&payload).html,
            "<p><strong>Hello &amp; welcome</strong></p>"
        );
    }

    #[test]
    fn test_legacy_round_trip() {
        let payload = json!([
            {"children": [
                {"text": "Hello & welcome", "bold": true}
            ]}
        ]);
        assert_eq!(
            render_legacy_html(&payload).html,
            "<p><strong>Hello &amp; welcome</strong></p>"
        );
    }

    #[test]
    fn test_both_backends_agree_on_shared_content() {
        let lexical = json!({"root": {"children": [
            {"type": "heading", "tag": "h2", "children": [
                {"type": "text", "text": "Fleet", "format": 0}
            ]},
            {"type": "list", "listType": "number", "children": [
                {"type": "listitem", "children": [
                    {"type": "text", "text": "Sedan", "format": 2}
                ]}
            ]}
        ]}});
        let legacy = json!([
            {"type": "h2", "children": [{"text": "Fleet"}]},
            {"type": "ol", "children": [
                {"type": "li", "children": [{"text": "Sedan", "italic": true}]}
            ]}
        ]);
        assert_eq!(
            render_lexical_html(&lexical).html,
            render_legacy_html(&legacy).html
        );
    }

    #[test]
    fn test_malformed_format_reported_not_raised() {
        let payload = json!({"root": {"children": [
            {"type": "paragraph", "children": [
                {"type": "text", "text": "good", "format": 0},
                {"type": "text", "text": "bad", "format": "bold"}
            ]}
        ]}});
        let result = render_lexical_html(&payload);
        assert_eq!(result.html, "<p>good</p>");
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].path, "root/0/1");
    }
}
