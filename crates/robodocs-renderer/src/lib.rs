//! Fenced-block extraction and styled markdown rendering.
//!
//! This crate provides:
//! - [`extract_markdown`]: slices the `` ```markdown `` block out of a source
//!   document, falling back to the whole document when none is found
//! - [`MarkdownRenderer`]: renders markdown to HTML through a [`RenderBackend`]
//!
//! # Architecture
//!
//! Parsing is delegated to `pulldown-cmark`. The renderer maps each event to
//! a [`NodeKind`] and lets the backend write it:
//! - [`StyledHtmlBackend`]: applies the static style table ([`NodeKind::style`])
//! - [`PlainHtmlBackend`]: semantic HTML5 without classes
//!
//! # Example
//!
//! ```
//! use robodocs_renderer::{MarkdownRenderer, StyledHtmlBackend, extract_markdown};
//!
//! let doc = "Notes\n```markdown\n# Hello\n\n**Bold** text\n```";
//! let result = MarkdownRenderer::<StyledHtmlBackend>::new()
//!     .with_title_extraction()
//!     .render_markdown(extract_markdown(doc));
//! assert_eq!(result.title.as_deref(), Some("Hello"));
//! ```

mod backend;
mod extract;
mod html;
mod renderer;
mod state;
mod style;

pub use backend::RenderBackend;
pub use extract::{
    ExtractPolicy, Extraction, FENCE, ParsePolicyError, START_MARKER, extract, extract_markdown,
};
pub use html::{PlainHtmlBackend, StyledHtmlBackend};
pub use renderer::{MarkdownRenderer, RenderResult};
pub use state::{TocEntry, escape_html, slugify};
pub use style::{NodeKind, NodeStyle};
