//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod extract;
pub(crate) mod render;

use std::path::PathBuf;

use clap::Args;
use robodocs_config::{CliSettings, Config};
use robodocs_renderer::ExtractPolicy;

use crate::error::CliError;

pub(crate) use build::BuildArgs;
pub(crate) use extract::ExtractArgs;
pub(crate) use render::RenderArgs;

/// Arguments shared by every command that reads the source document.
#[derive(Args)]
pub(crate) struct DocumentArgs {
    /// Path to configuration file (default: auto-discover robodocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Markdown source document (overrides config).
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// Closing fence policy: `last-fence` or `first-fence-after-start` (overrides config).
    #[arg(long)]
    policy: Option<ExtractPolicy>,
}

impl DocumentArgs {
    /// Load configuration with these arguments applied on top.
    pub(crate) fn load_config(&self, output_dir: Option<PathBuf>) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            source: self.source.clone(),
            output_dir,
            policy: self.policy,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        tracing::debug!(config_path = ?config.config_path, "Loaded configuration");
        Ok(config)
    }
}
