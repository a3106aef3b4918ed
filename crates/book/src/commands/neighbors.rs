//! `book neighbors` command implementation.

use clap::Args;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::write_json;

/// Arguments for the neighbors command.
#[derive(Args)]
pub(crate) struct NeighborsArgs {
    /// Resolved page link (e.g. /cpp-book/basics/io/).
    link: String,

    #[command(flatten)]
    config: ConfigArgs,
}

impl NeighborsArgs {
    /// Execute the neighbors command.
    ///
    /// An unknown link prints an empty object: the page simply has no
    /// previous/next controls.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let sitemap = self.config.load(None)?.sitemap()?;
        write_json(&sitemap.neighbors(&self.link))
    }
}
