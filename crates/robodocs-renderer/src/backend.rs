//! Render backend trait for per-node-kind output overrides.
//!
//! The renderer walks `pulldown-cmark` events and asks the backend how each
//! styled node kind should be written. Backends only choose classes by
//! default; any method can be overridden to change the markup itself.

use std::fmt::Write;

use crate::state::escape_html;
use crate::style::NodeKind;

/// Backend trait for node-kind specific rendering.
///
/// Implementations provide the class for every [`NodeKind`]. The provided
/// methods build markup from the static style table and that class:
/// - Block and list containers (`open` / `close`)
/// - Code blocks (`<pre><code class="language-*">`) vs inline code (`<code>`)
/// - Links, horizontal rules, hard breaks, task list markers, images
pub trait RenderBackend {
    /// Class attribute value for a node kind, or `None` for a bare tag.
    fn class(kind: NodeKind) -> Option<&'static str>;

    /// Render the opening tag of a container node.
    fn open(kind: NodeKind, out: &mut String) {
        write!(out, "<{}{}>", kind.style().tag, class_attr(Self::class(kind))).unwrap();
    }

    /// Render the closing tag of a container node.
    fn close(kind: NodeKind, out: &mut String) {
        write!(out, "</{}>", kind.style().tag).unwrap();
    }

    /// Render a heading opening tag with its anchor ID.
    fn heading_start(level: u8, id: &str, out: &mut String) {
        write!(
            out,
            r#"<h{level} id="{id}"{}>"#,
            class_attr(Self::class(NodeKind::heading(level)))
        )
        .unwrap();
    }

    /// Render an ordered list that does not start at 1.
    fn ordered_list_start(start: u64, out: &mut String) {
        write!(
            out,
            r#"<ol start="{start}"{}>"#,
            class_attr(Self::class(NodeKind::OrderedList))
        )
        .unwrap();
    }

    /// Render a fenced or indented code block.
    ///
    /// Fenced blocks with a language carry a `language-*` class on the
    /// inner `<code>` element.
    fn code_block(lang: Option<&str>, content: &str, out: &mut String) {
        let pre_class = class_attr(Self::class(NodeKind::CodeBlock));
        if let Some(lang) = lang {
            write!(
                out,
                r#"<pre{pre_class}><code class="language-{}">{}</code></pre>"#,
                escape_html(lang),
                escape_html(content)
            )
            .unwrap();
        } else {
            write!(out, "<pre{pre_class}><code>{}</code></pre>", escape_html(content)).unwrap();
        }
    }

    /// Render inline code.
    fn inline_code(code: &str, out: &mut String) {
        write!(
            out,
            "<code{}>{}</code>",
            class_attr(Self::class(NodeKind::InlineCode)),
            escape_html(code)
        )
        .unwrap();
    }

    /// Render a hyperlink opening tag.
    fn link_start(href: &str, out: &mut String) {
        write!(
            out,
            r#"<a href="{}"{}>"#,
            escape_html(href),
            class_attr(Self::class(NodeKind::Link))
        )
        .unwrap();
    }

    /// Render a horizontal rule.
    fn horizontal_rule(out: &mut String) {
        write!(out, "<hr{}>", class_attr(Self::class(NodeKind::HorizontalRule))).unwrap();
    }

    /// Render a hard break.
    fn hard_break(out: &mut String) {
        out.push_str("<br>");
    }

    /// Render a task list marker.
    fn task_list_marker(checked: bool, out: &mut String) {
        if checked {
            out.push_str(r#"<input type="checkbox" checked disabled> "#);
        } else {
            out.push_str(r#"<input type="checkbox" disabled> "#);
        }
    }

    /// Render an image.
    fn image(src: &str, alt: &str, title: &str, out: &mut String) {
        let title_attr = if title.is_empty() {
            String::new()
        } else {
            format!(r#" title="{}""#, escape_html(title))
        };
        write!(
            out,
            r#"<img src="{}"{title_attr} alt="{}">"#,
            escape_html(src),
            escape_html(alt)
        )
        .unwrap();
    }
}

/// Format an optional class as a leading-space attribute.
pub(crate) fn class_attr(class: Option<&str>) -> String {
    match class {
        Some(class) if !class.is_empty() => format!(r#" class="{}""#, escape_html(class)),
        _ => String::new(),
    }
}
