//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod neighbors;
pub(crate) mod render;
pub(crate) mod sitemap;

use std::path::PathBuf;

use book_config::{CliSettings, Config};
use clap::Args;

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use neighbors::NeighborsArgs;
pub(crate) use render::RenderArgs;
pub(crate) use sitemap::SitemapArgs;

/// Configuration arguments shared by every command.
#[derive(Args)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover book.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base path the site is served under (overrides config).
    #[arg(long, env = "BOOK_BASE")]
    base: Option<String>,
}

impl ConfigArgs {
    /// Load the configuration with CLI overrides applied.
    pub(crate) fn load(&self, copy_button: Option<bool>) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            base: self.base.clone(),
            copy_button,
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}
