//! `book check` command implementation.

use std::path::{Path, PathBuf};

use book_sitemap::{PageRef, Sitemap};
use clap::Args;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Page source extensions, in lookup order.
const PAGE_EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Pages directory to verify every sitemap page has a source file.
    #[arg(short, long)]
    pages_dir: Option<PathBuf>,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, two pages share a
    /// link, or a page has no source file in `--pages-dir`.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load(None)?;

        if let Some(path) = &config.config_path {
            output.info(&format!("Config: {}", path.display()));
        }

        let sitemap = config.sitemap()?;
        output.info(&format!("Base path: {}", sitemap.base()));

        if let Some(pages_dir) = &self.pages_dir {
            let missing = missing_sources(&sitemap, pages_dir);
            if !missing.is_empty() {
                for page in &missing {
                    output.error(&format!("  missing source: {} ({})", page.link, page.name));
                }
                return Err(CliError::Validation(format!(
                    "{} page(s) have no source in {}",
                    missing.len(),
                    pages_dir.display()
                )));
            }
        }

        output.success(&format!(
            "{} sections, {} pages OK",
            sitemap.entries().len(),
            sitemap.len()
        ));
        Ok(())
    }
}

/// Pages of the sitemap without a source file under `pages_dir`.
fn missing_sources<'a>(sitemap: &'a Sitemap, pages_dir: &Path) -> Vec<&'a PageRef> {
    sitemap
        .flat_map()
        .iter()
        .filter(|page| {
            let route = page
                .link
                .strip_prefix(sitemap.base().as_str())
                .unwrap_or(&page.link);
            !source_candidates(pages_dir, route)
                .iter()
                .any(|candidate| candidate.is_file())
        })
        .collect()
}

/// Files that may hold the source of a route (`a/b/` → `a/b.md`, `a/b/index.md`, ...).
fn source_candidates(pages_dir: &Path, route: &str) -> Vec<PathBuf> {
    let route = route.trim_matches('/');
    let mut candidates = Vec::with_capacity(PAGE_EXTENSIONS.len() * 2);

    for ext in PAGE_EXTENSIONS {
        if !route.is_empty() {
            candidates.push(pages_dir.join(format!("{route}.{ext}")));
        }
        candidates.push(pages_dir.join(route).join(format!("index.{ext}")));
    }

    candidates
}
