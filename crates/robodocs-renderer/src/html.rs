//! HTML backends.
//!
//! [`StyledHtmlBackend`] applies the static style table; [`PlainHtmlBackend`]
//! produces class-free semantic HTML5.

use crate::backend::RenderBackend;
use crate::style::NodeKind;

/// HTML backend that applies the static style table.
///
/// Every styled node gets the class from [`NodeKind::style`], so headings,
/// lists, code and links match the hand-written static pages.
pub struct StyledHtmlBackend;

impl RenderBackend for StyledHtmlBackend {
    fn class(kind: NodeKind) -> Option<&'static str> {
        Some(kind.style().class)
    }
}

/// HTML backend without classes.
pub struct PlainHtmlBackend;

impl RenderBackend for PlainHtmlBackend {
    fn class(_kind: NodeKind) -> Option<&'static str> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_styled_code_block_with_language() {
        let mut out = String::new();
        StyledHtmlBackend::code_block(Some("rust"), "fn main() {}", &mut out);
        assert_eq!(
            out,
            format!(
                r#"<pre class="{}"><code class="language-rust">fn main() {{}}</code></pre>"#,
                NodeKind::CodeBlock.style().class
            )
        );
    }

    #[test]
    fn test_plain_code_block_without_language() {
        let mut out = String::new();
        PlainHtmlBackend::code_block(None, "plain <code>", &mut out);
        assert_eq!(out, "<pre><code>plain &lt;code&gt;</code></pre>");
    }

    #[test]
    fn test_inline_code_has_no_language_class() {
        let mut out = String::new();
        StyledHtmlBackend::inline_code("x", &mut out);
        assert!(out.starts_with("<code class=\""));
        assert!(!out.contains("language-"));
    }

    #[test]
    fn test_open_close_use_table_tag() {
        let mut out = String::new();
        PlainHtmlBackend::open(NodeKind::BlockQuote, &mut out);
        out.push_str("quote");
        PlainHtmlBackend::close(NodeKind::BlockQuote, &mut out);
        assert_eq!(out, "<blockquote>quote</blockquote>");
    }

    #[test]
    fn test_link_is_escaped() {
        let mut out = String::new();
        PlainHtmlBackend::link_start("https://example.com/?a=1&b=2", &mut out);
        assert_eq!(out, r#"<a href="https://example.com/?a=1&amp;b=2">"#);
    }

    #[test]
    fn test_deep_heading_reuses_level_three_class() {
        let mut out = String::new();
        StyledHtmlBackend::heading_start(5, "deep", &mut out);
        assert_eq!(
            out,
            format!(
                r#"<h5 id="deep" class="{}">"#,
                NodeKind::Heading3.style().class
            )
        );
    }

    #[test]
    fn test_image_with_title() {
        let mut out = String::new();
        PlainHtmlBackend::image("robot.png", "Robot", "Front view", &mut out);
        assert_eq!(
            out,
            r#"<img src="robot.png" title="Front view" alt="Robot">"#
        );
    }
}
