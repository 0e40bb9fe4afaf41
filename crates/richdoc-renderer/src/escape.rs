//! HTML escaping for editor-entered text.

use std::borrow::Cow;

/// Escape the HTML-significant characters `&`, `<`, `>`, and `"`.
///
/// Every piece of free text goes through this before any formatting tags
/// are applied, so markup typed into the editor comes out as literal text.
/// Returns the input unchanged (and unallocated) when nothing needs
/// escaping.
#[must_use]
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clean_text_borrows() {
        let escaped = escape_html("plain text, nothing special");
        assert!(matches!(escaped, Cow::Borrowed(_)));
    }

    #[test]
    fn test_escapes_all_special_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">&</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_injected_tag_neutralized() {
        assert_eq!(escape_html("<b>hi</b>"), "&lt;b&gt;hi&lt;/b&gt;");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(escape_html(""), "");
    }
}
