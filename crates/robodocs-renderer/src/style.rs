//! Static mapping from markdown node kinds to presentation templates.

use pulldown_cmark::HeadingLevel;

/// Category of a rendered markdown element that carries a style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Heading1,
    Heading2,
    /// Level 3 and deeper.
    Heading3,
    Paragraph,
    UnorderedList,
    OrderedList,
    ListItem,
    InlineCode,
    CodeBlock,
    BlockQuote,
    HorizontalRule,
    Link,
}

impl NodeKind {
    /// Every styled node kind, in table order.
    pub const ALL: [Self; 12] = [
        Self::Heading1,
        Self::Heading2,
        Self::Heading3,
        Self::Paragraph,
        Self::UnorderedList,
        Self::OrderedList,
        Self::ListItem,
        Self::InlineCode,
        Self::CodeBlock,
        Self::BlockQuote,
        Self::HorizontalRule,
        Self::Link,
    ];

    /// Node kind for a heading of the given level (1-6).
    ///
    /// Levels 4-6 share the level-3 template.
    #[must_use]
    pub const fn heading(level: u8) -> Self {
        match level {
            1 => Self::Heading1,
            2 => Self::Heading2,
            _ => Self::Heading3,
        }
    }

    /// Presentation template from the static style table.
    #[must_use]
    pub const fn style(self) -> NodeStyle {
        match self {
            Self::Heading1 => NodeStyle::new(
                "h1",
                "text-4xl font-bold tracking-tight text-black dark:text-zinc-50",
            ),
            Self::Heading2 => {
                NodeStyle::new("h2", "text-2xl font-semibold text-black dark:text-zinc-50")
            }
            Self::Heading3 => {
                NodeStyle::new("h3", "text-xl font-medium text-black dark:text-zinc-50")
            }
            Self::Paragraph => NodeStyle::new("p", "leading-7 text-zinc-700 dark:text-zinc-300"),
            Self::UnorderedList => NodeStyle::new("ul", "list-disc list-inside space-y-2 ml-4"),
            Self::OrderedList => NodeStyle::new("ol", "list-decimal list-inside space-y-2 ml-4"),
            Self::ListItem => NodeStyle::new("li", "text-zinc-700 dark:text-zinc-300"),
            Self::InlineCode => NodeStyle::new(
                "code",
                "bg-zinc-200 dark:bg-zinc-800 px-1 py-0.5 rounded text-sm",
            ),
            Self::CodeBlock => NodeStyle::new(
                "pre",
                "block bg-zinc-100 dark:bg-zinc-900 rounded-lg p-6 text-sm whitespace-pre-wrap",
            ),
            Self::BlockQuote => NodeStyle::new(
                "blockquote",
                "border-l-4 border-zinc-300 pl-4 italic text-zinc-600 dark:text-zinc-400",
            ),
            Self::HorizontalRule => NodeStyle::new("hr", "my-8 border-zinc-200 dark:border-zinc-800"),
            Self::Link => NodeStyle::new(
                "a",
                "text-blue-600 underline hover:text-blue-800 dark:text-blue-400",
            ),
        }
    }
}

/// Tag and style class for one node kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeStyle {
    /// HTML element name.
    pub tag: &'static str,
    /// Value of the `class` attribute.
    pub class: &'static str,
}

impl NodeStyle {
    const fn new(tag: &'static str, class: &'static str) -> Self {
        Self { tag, class }
    }
}

/// Convert heading level enum to number (1-6).
#[must_use]
pub(crate) fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_heading_levels_have_distinct_classes() {
        let h1 = NodeKind::Heading1.style();
        let h2 = NodeKind::Heading2.style();
        let h3 = NodeKind::Heading3.style();
        assert_eq!((h1.tag, h2.tag, h3.tag), ("h1", "h2", "h3"));
        assert_ne!(h1.class, h2.class);
        assert_ne!(h2.class, h3.class);
        assert_ne!(h1.class, h3.class);
    }

    #[test]
    fn test_deep_headings_share_level_three() {
        assert_eq!(NodeKind::heading(1), NodeKind::Heading1);
        assert_eq!(NodeKind::heading(2), NodeKind::Heading2);
        for level in 3..=6 {
            assert_eq!(NodeKind::heading(level), NodeKind::Heading3);
        }
    }

    #[test]
    fn test_every_kind_has_unique_class() {
        let classes: HashSet<_> = NodeKind::ALL.iter().map(|k| k.style().class).collect();
        assert_eq!(classes.len(), NodeKind::ALL.len());
    }

    #[test]
    fn test_code_kinds_use_distinct_tags() {
        assert_eq!(NodeKind::InlineCode.style().tag, "code");
        assert_eq!(NodeKind::CodeBlock.style().tag, "pre");
    }
}
