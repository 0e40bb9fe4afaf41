//! Backend trait for format-specific output.

use std::borrow::Cow;

/// Format-specific rendering hooks.
///
/// The generic [`DocRenderer`](crate::DocRenderer) emits the common block
/// vocabulary (paragraphs, headings, lists) itself and delegates the pieces
/// that differ between output formats — quotes, hard breaks, and anchors —
/// to the backend. Hooks append to the output buffer rather than returning
/// strings to keep the walk allocation-light.
pub trait RenderBackend {
    /// Open a block quotation.
    fn quote_start(out: &mut String);

    /// Close a block quotation.
    fn quote_end(out: &mut String);

    /// Emit a hard line break.
    fn hard_break(out: &mut String);

    /// Open an anchor. `url` is already resolved (never empty) but not yet
    /// escaped; `new_tab` asks for the open-in-new-tab attributes.
    fn link_start(url: &str, new_tab: bool, out: &mut String);

    /// Close an anchor.
    fn link_end(out: &mut String);

    /// Rewrite a link destination before rendering.
    ///
    /// The default keeps URLs as the editor stored them.
    fn transform_link(url: &str) -> Cow<'_, str> {
        Cow::Borrowed(url)
    }
}
