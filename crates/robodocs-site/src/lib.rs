//! Static page generation for robodocs.
//!
//! Two independent pages are produced:
//! - [`ROBOT_API_PAGE`]: fixed content describing the robot REST architecture
//! - [`DocumentPage`]: the fenced markdown block of a source document,
//!   rendered with the styled HTML backend
//!
//! [`StaticSiteBuilder`] wraps both in the shared layout and writes them to
//! an output directory.

mod builder;
mod document_page;
mod info_page;
mod layout;

pub use builder::{
    BuildConfig, BuildError, BuildReport, DOCUMENT_PAGE_FILE, INFO_PAGE_FILE, StaticSiteBuilder,
};
pub use document_page::{DocumentPage, PageError, RenderedDocument};
pub use info_page::{Block, InfoPage, ROBOT_API_PAGE, Section};
pub use layout::{NavLink, PageData, render_page};
