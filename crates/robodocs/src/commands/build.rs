//! `robodocs build` command implementation.

use std::path::PathBuf;

use clap::Args;
use robodocs_site::{BuildConfig, StaticSiteBuilder};

use super::DocumentArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    #[command(flatten)]
    document: DocumentArgs,

    /// Output directory for the generated pages (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.document.load_config(self.output_dir)?;
        let output_dir = &config.site_resolved.output_dir;

        output.info(&format!(
            "Source: {}",
            config.document_resolved.source.display()
        ));
        output.info(&format!("Output: {}", output_dir.display()));

        let builder = StaticSiteBuilder::new(BuildConfig::from_config(&config));
        let report = builder.build(output_dir)?;

        if report.document_fallback {
            output.warning(&format!(
                "No ```markdown block found (policy: {}), rendered the whole document",
                config.document_resolved.policy
            ));
        }
        output.success(&format!(
            "Built {} pages in {}",
            report.pages.len(),
            output_dir.display()
        ));
        Ok(())
    }
}
