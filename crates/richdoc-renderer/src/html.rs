//! HTML backend for document rendering.
//!
//! Produces semantic HTML5 output suitable for web display.

use std::fmt::Write;

use crate::backend::RenderBackend;
use crate::escape::escape_html;

/// Destination used when a link node carries no URL.
const FALLBACK_HREF: &str = "#";

/// HTML render backend.
///
/// Produces semantic HTML5 with:
/// - `<blockquote>` for quotes
/// - `<br>` for hard breaks
/// - `<a>` with `target="_blank" rel="noopener noreferrer"` only when the
///   node explicitly asks for a new tab
pub struct HtmlBackend;

impl RenderBackend for HtmlBackend {
    fn quote_start(out: &mut String) {
        out.push_str("<blockquote>");
    }

    fn quote_end(out: &mut String) {
        out.push_str("</blockquote>");
    }

    fn hard_break(out: &mut String) {
        out.push_str("<br>");
    }

    fn link_start(url: &str, new_tab: bool, out: &mut String) {
        let href = if url.is_empty() { FALLBACK_HREF } else { url };
        if new_tab {
            write!(
                out,
                r#"<a href="{}" target="_blank" rel="noopener noreferrer">"#,
                escape_html(href)
            )
            .unwrap();
        } else {
            write!(out, r#"<a href="{}">"#, escape_html(href)).unwrap();
        }
    }

    fn link_end(out: &mut String) {
        out.push_str("</a>");
    }
}
