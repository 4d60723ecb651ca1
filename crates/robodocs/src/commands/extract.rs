//! `robodocs extract` command implementation.

use clap::Args;
use robodocs_site::DocumentPage;

use super::DocumentArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the extract command.
#[derive(Args)]
pub(crate) struct ExtractArgs {
    #[command(flatten)]
    document: DocumentArgs,
}

impl ExtractArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = self.document.load_config(None)?;
        let markdown = DocumentPage::from_config(&config).extract()?;
        Output::new().result(&markdown)?;
        Ok(())
    }
}
