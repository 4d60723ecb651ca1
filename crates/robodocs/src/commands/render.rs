//! `robodocs render` command implementation.

use clap::Args;
use robodocs_renderer::{PlainHtmlBackend, StyledHtmlBackend};
use robodocs_site::DocumentPage;

use super::DocumentArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    #[command(flatten)]
    document: DocumentArgs,

    /// Emit semantic HTML without style classes.
    #[arg(long)]
    plain: bool,
}

impl RenderArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = self.document.load_config(None)?;
        let page = DocumentPage::from_config(&config);
        let rendered = if self.plain {
            page.render::<PlainHtmlBackend>()?
        } else {
            page.render::<StyledHtmlBackend>()?
        };
        Output::new().result(&rendered.html)?;
        Ok(())
    }
}
