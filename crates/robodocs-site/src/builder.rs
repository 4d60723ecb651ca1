//! Static site builder writing both pages to an output directory.

use std::path::{Path, PathBuf};

use robodocs_config::Config;
use robodocs_renderer::StyledHtmlBackend;

use crate::document_page::{DocumentPage, PageError};
use crate::info_page::{InfoPage, ROBOT_API_PAGE};
use crate::layout::{NavLink, PageData, render_page};

/// File name of the static information page.
pub const INFO_PAGE_FILE: &str = "index.html";
/// File name of the rendered markdown document page.
pub const DOCUMENT_PAGE_FILE: &str = "document.html";

/// Configuration for static site building.
pub struct BuildConfig {
    /// Title used when the document has no H1.
    pub site_title: String,
    /// Markdown document page.
    pub document: DocumentPage,
}

impl BuildConfig {
    /// Build configuration from resolved application config.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            site_title: config.site_resolved.title.clone(),
            document: DocumentPage::from_config(config),
        }
    }
}

/// Error returned by the static site builder.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Page(#[from] PageError),
}

/// Summary of a completed build.
#[derive(Debug)]
pub struct BuildReport {
    /// Written files, in write order.
    pub pages: Vec<PathBuf>,
    /// Whether the document page rendered the whole source document.
    pub document_fallback: bool,
}

/// Builds the two static pages.
pub struct StaticSiteBuilder {
    config: BuildConfig,
    info_page: InfoPage,
}

impl StaticSiteBuilder {
    #[must_use]
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            info_page: ROBOT_API_PAGE,
        }
    }

    /// Replace the static information page content.
    #[must_use]
    pub fn with_info_page(mut self, page: InfoPage) -> Self {
        self.info_page = page;
        self
    }

    /// Render both pages into `output_dir`, creating it if needed.
    ///
    /// The document page is rendered before anything is written, so a
    /// missing source document leaves the output directory untouched.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Page`] if the source document cannot be read and
    /// [`BuildError::Io`] if the output cannot be written.
    pub fn build(&self, output_dir: &Path) -> Result<BuildReport, BuildError> {
        let info_html = self.render_info_page();
        let document = self.config.document.render::<StyledHtmlBackend>()?;

        let title = document.title.as_deref().unwrap_or(&self.config.site_title);
        let document_html = render_page(&PageData {
            title,
            body_html: &document.html,
            toc: &document.toc,
            navigation: &navigation(DOCUMENT_PAGE_FILE),
        });

        std::fs::create_dir_all(output_dir)?;
        let mut pages = Vec::with_capacity(2);
        for (name, html) in [
            (INFO_PAGE_FILE, info_html),
            (DOCUMENT_PAGE_FILE, document_html),
        ] {
            let path = output_dir.join(name);
            std::fs::write(&path, html)?;
            tracing::info!(path = %path.display(), "Wrote page");
            pages.push(path);
        }

        Ok(BuildReport {
            pages,
            document_fallback: document.fallback,
        })
    }

    /// Render the static information page as a complete HTML document.
    #[must_use]
    pub fn render_info_page(&self) -> String {
        let body = self.info_page.render::<StyledHtmlBackend>();
        render_page(&PageData {
            title: self.info_page.title,
            body_html: &body,
            toc: &[],
            navigation: &navigation(INFO_PAGE_FILE),
        })
    }
}

fn navigation(active: &str) -> [NavLink; 2] {
    [
        NavLink {
            title: "Overview",
            href: INFO_PAGE_FILE,
            is_active: active == INFO_PAGE_FILE,
        },
        NavLink {
            title: "Document",
            href: DOCUMENT_PAGE_FILE,
            is_active: active == DOCUMENT_PAGE_FILE,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder_for(source: &Path) -> StaticSiteBuilder {
        StaticSiteBuilder::new(BuildConfig {
            site_title: "Robot Docs".to_owned(),
            document: DocumentPage::new(source),
        })
    }

    #[test]
    fn test_missing_source_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");

        let err = builder_for(&dir.path().join("missing.md"))
            .build(&out)
            .unwrap_err();
        assert!(matches!(err, BuildError::Page(PageError::Read { .. })));
        assert!(!out.exists());
    }

    #[test]
    fn test_site_title_used_without_h1() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("doc.md");
        std::fs::write(&source, "```markdown\n## Only a section\n```").unwrap();
        let out = dir.path().join("out");

        let report = builder_for(&source).build(&out).unwrap();
        assert_eq!(report.pages.len(), 2);
        assert!(!report.document_fallback);

        let html = std::fs::read_to_string(out.join(DOCUMENT_PAGE_FILE)).unwrap();
        assert!(html.contains("<title>Robot Docs</title>"));
    }

    #[test]
    fn test_custom_info_page() {
        let dir = tempfile::tempdir().unwrap();
        let page = InfoPage {
            title: "Custom",
            tagline: "Tagline",
            sections: &[],
        };
        let html = builder_for(dir.path()).with_info_page(page).render_info_page();
        assert!(html.contains("<title>Custom</title>"));
        assert!(!html.contains("<section"));
    }

    #[test]
    fn test_navigation_active_flags() {
        let nav = navigation(DOCUMENT_PAGE_FILE);
        assert!(!nav[0].is_active);
        assert!(nav[1].is_active);
    }
}
