//! Book CLI - table of contents and page rendering for the book site.
//!
//! Provides commands for:
//! - `sitemap`: Print the table of contents with resolved links
//! - `neighbors`: Print the previous/next pages of a link
//! - `check`: Validate the configuration and table of contents
//! - `render`: Render a markdown page with decorated code blocks

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, NeighborsArgs, RenderArgs, SitemapArgs};
use output::Output;

/// Book - tooling for the C++ book site.
#[derive(Parser)]
#[command(name = "book", version, about)]
struct Cli {
    /// Enable verbose output (show configuration and rendering logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the table of contents as JSON.
    Sitemap(SitemapArgs),
    /// Print the previous and next pages of a link as JSON.
    Neighbors(NeighborsArgs),
    /// Validate the configuration and table of contents.
    Check(CheckArgs),
    /// Render a markdown page to HTML.
    Render(RenderArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Sitemap(args) => args.execute(),
        Commands::Neighbors(args) => args.execute(),
        Commands::Check(args) => args.execute(),
        Commands::Render(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
