//! Page rendered from the fenced markdown block of a source document.

use std::path::PathBuf;

use robodocs_config::Config;
use robodocs_renderer::{
    ExtractPolicy, MarkdownRenderer, RenderBackend, TocEntry, extract,
};

/// Error raised while rendering a document page.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// The source document could not be read.
    #[error("Failed to read source document {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Rendered markdown document.
#[derive(Clone, Debug)]
pub struct RenderedDocument {
    /// HTML fragment for the page body.
    pub html: String,
    /// Text of the first H1, if any.
    pub title: Option<String>,
    /// Headings after the title.
    pub toc: Vec<TocEntry>,
    /// Whether the whole document was rendered because no block was found.
    pub fallback: bool,
}

/// Markdown page backed by a source document on disk.
#[derive(Clone, Debug)]
pub struct DocumentPage {
    source: PathBuf,
    policy: ExtractPolicy,
    gfm: bool,
}

impl DocumentPage {
    /// Create a page for the given source document.
    #[must_use]
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            policy: ExtractPolicy::default(),
            gfm: true,
        }
    }

    /// Create a page from resolved configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.document_resolved.source.clone())
            .with_policy(config.document_resolved.policy)
            .with_gfm(config.document_resolved.gfm)
    }

    #[must_use]
    pub fn with_policy(mut self, policy: ExtractPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Read the source document.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Read`] if the file is missing or unreadable.
    pub fn load(&self) -> Result<String, PageError> {
        let content = std::fs::read_to_string(&self.source).map_err(|source| PageError::Read {
            path: self.source.clone(),
            source,
        })?;
        tracing::debug!(
            path = %self.source.display(),
            bytes = content.len(),
            "Loaded source document"
        );
        Ok(content)
    }

    /// Extracted markdown block of the source document, as an owned string.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Read`] if the file is missing or unreadable.
    pub fn extract(&self) -> Result<String, PageError> {
        let content = self.load()?;
        let extraction = extract(&content, self.policy);
        if extraction.is_fallback() {
            self.warn_fallback();
        }
        Ok(extraction.as_str().to_owned())
    }

    /// Load, extract and render the document.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Read`] if the file is missing or unreadable.
    pub fn render<B: RenderBackend>(&self) -> Result<RenderedDocument, PageError> {
        let content = self.load()?;
        let rendered = self.render_content::<B>(&content);
        if rendered.fallback {
            self.warn_fallback();
        }
        Ok(rendered)
    }

    /// Extract and render already-loaded document content.
    #[must_use]
    pub fn render_content<B: RenderBackend>(&self, content: &str) -> RenderedDocument {
        let extraction = extract(content, self.policy);
        let result = MarkdownRenderer::<B>::new()
            .with_gfm(self.gfm)
            .with_title_extraction()
            .render_markdown(extraction.as_str());

        RenderedDocument {
            html: result.html,
            title: result.title,
            toc: result.toc,
            fallback: extraction.is_fallback(),
        }
    }

    fn warn_fallback(&self) {
        tracing::warn!(
            path = %self.source.display(),
            policy = %self.policy,
            "No fenced markdown block found, rendering whole document"
        );
    }
}
