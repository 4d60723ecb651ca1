//! robodocs CLI - static robot API pages.
//!
//! Provides commands for:
//! - `build`: Write the overview page and the rendered document page
//! - `extract`: Print the fenced markdown block of the source document
//! - `render`: Print the rendered HTML fragment of the source document

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, ExtractArgs, RenderArgs};
use output::Output;

/// robodocs - static robot API pages.
#[derive(Parser)]
#[command(name = "robodocs", version, about)]
struct Cli {
    /// Enable verbose output (info-level logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build both static pages.
    Build(BuildArgs),
    /// Print the extracted markdown block.
    Extract(ExtractArgs),
    /// Print the rendered markdown as an HTML fragment.
    Render(RenderArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Build(args) => args.execute(),
        Commands::Extract(args) => args.execute(),
        Commands::Render(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
