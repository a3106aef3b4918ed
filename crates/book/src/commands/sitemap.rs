//! `book sitemap` command implementation.

use clap::Args;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::write_json;

/// Arguments for the sitemap command.
#[derive(Args)]
pub(crate) struct SitemapArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Print pages in reading order instead of grouped by section.
    #[arg(long)]
    flat: bool,
}

impl SitemapArgs {
    /// Execute the sitemap command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let sitemap = self.config.load(None)?.sitemap()?;

        if self.flat {
            write_json(&sitemap.flat_map())
        } else {
            write_json(&sitemap.sections())
        }
    }
}
