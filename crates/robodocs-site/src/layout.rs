//! HTML page shell shared by both pages.
//!
//! Single-column Tailwind layout: a centered `<main>` column with a small
//! navigation bar on top.

use std::fmt::Write;

use robodocs_renderer::{TocEntry, escape_html};

/// Tailwind Play CDN, so the generated pages need no build step.
const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

/// Navigation entry in the page header.
pub struct NavLink {
    pub title: &'static str,
    pub href: &'static str,
    pub is_active: bool,
}

/// All data needed to render a page.
pub struct PageData<'a> {
    pub title: &'a str,
    pub body_html: &'a str,
    pub toc: &'a [TocEntry],
    pub navigation: &'a [NavLink],
}

/// Render a complete HTML document.
pub fn render_page(page: &PageData<'_>) -> String {
    let mut html = String::with_capacity(page.body_html.len() + 2048);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape_html(page.title));
    let _ = writeln!(html, "<script src=\"{TAILWIND_CDN}\"></script>");
    html.push_str("</head>\n<body>\n");

    html.push_str(
        "<div class=\"flex min-h-screen items-center justify-center bg-zinc-50 \
         font-sans dark:bg-black\">\n",
    );
    html.push_str(
        "<main class=\"flex min-h-screen w-full max-w-4xl flex-col gap-12 py-16 px-8 \
         bg-white dark:bg-black sm:px-16\">\n",
    );

    render_navigation(&mut html, page.navigation);
    render_toc(&mut html, page.toc);

    html.push_str("<article class=\"flex flex-col gap-6\">\n");
    html.push_str(page.body_html);
    html.push_str("\n</article>\n");

    html.push_str("</main>\n</div>\n</body>\n</html>\n");
    html
}

fn render_navigation(html: &mut String, links: &[NavLink]) {
    if links.is_empty() {
        return;
    }
    html.push_str("<nav class=\"flex gap-4 text-sm\">\n");
    for link in links {
        let class = if link.is_active {
            "font-semibold text-black dark:text-zinc-50"
        } else {
            "text-zinc-600 hover:text-black dark:text-zinc-400"
        };
        let current = if link.is_active {
            " aria-current=\"page\""
        } else {
            ""
        };
        let _ = writeln!(
            html,
            "<a href=\"{}\" class=\"{class}\"{current}>{}</a>",
            escape_html(link.href),
            escape_html(link.title)
        );
    }
    html.push_str("</nav>\n");
}

/// Render the table of contents; nothing for fewer than two entries.
fn render_toc(html: &mut String, toc: &[TocEntry]) {
    if toc.len() < 2 {
        return;
    }
    html.push_str("<aside class=\"text-sm\">\n");
    html.push_str(
        "<p class=\"font-medium text-black dark:text-zinc-50 mb-2\">On this page</p>\n",
    );
    html.push_str("<ul class=\"space-y-1\">\n");
    for entry in toc {
        let indent = match entry.level {
            0..=2 => "",
            3 => " class=\"ml-4\"",
            _ => " class=\"ml-8\"",
        };
        let _ = writeln!(
            html,
            "<li{indent}><a href=\"#{}\" class=\"text-zinc-600 hover:text-black \
             dark:text-zinc-400\">{}</a></li>",
            entry.id,
            escape_html(&entry.title)
        );
    }
    html.push_str("</ul>\n</aside>\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toc_entry(level: u8, title: &str, id: &str) -> TocEntry {
        TocEntry {
            level,
            title: title.to_owned(),
            id: id.to_owned(),
        }
    }

    #[test]
    fn test_render_page_structure() {
        let html = render_page(&PageData {
            title: "Robots & REST",
            body_html: "<p>Hi</p>",
            toc: &[],
            navigation: &[],
        });
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Robots &amp; REST</title>"));
        assert!(html.contains("<article class=\"flex flex-col gap-6\">\n<p>Hi</p>\n</article>"));
        assert!(!html.contains("<nav"));
        assert!(!html.contains("<aside"));
    }

    #[test]
    fn test_navigation_marks_active_link() {
        let html = render_page(&PageData {
            title: "T",
            body_html: "",
            toc: &[],
            navigation: &[
                NavLink {
                    title: "Overview",
                    href: "index.html",
                    is_active: true,
                },
                NavLink {
                    title: "Document",
                    href: "document.html",
                    is_active: false,
                },
            ],
        });
        assert!(html.contains("href=\"index.html\" class=\"font-semibold"));
        assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
    }

    #[test]
    fn test_toc_rendered_with_indent() {
        let toc = [
            toc_entry(2, "Endpoints", "endpoints"),
            toc_entry(3, "Move", "move"),
        ];
        let html = render_page(&PageData {
            title: "T",
            body_html: "",
            toc: &toc,
            navigation: &[],
        });
        assert!(html.contains("<li><a href=\"#endpoints\""));
        assert!(html.contains("<li class=\"ml-4\"><a href=\"#move\""));
    }

    #[test]
    fn test_single_entry_toc_is_omitted() {
        let toc = [toc_entry(2, "Only", "only")];
        let html = render_page(&PageData {
            title: "T",
            body_html: "",
            toc: &toc,
            navigation: &[],
        });
        assert!(!html.contains("<aside"));
    }
}
