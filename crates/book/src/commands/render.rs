//! `book render` command implementation.

use std::io::Write;
use std::path::PathBuf;

use book_config::Config;
use book_renderer::{Frontmatter, MarkdownRenderer};
use clap::Args;
use serde::Serialize;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::{Output, write_json};

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown file to render.
    file: PathBuf,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Render code blocks without the copy-to-clipboard button.
    #[arg(long)]
    no_copy_button: bool,

    /// Print the rendered page (layout, title, HTML) as JSON.
    #[arg(long, conflicts_with = "output")]
    json: bool,

    #[command(flatten)]
    config: ConfigArgs,
}

/// Rendered page with its resolved layout.
#[derive(Debug, Serialize)]
pub(crate) struct RenderedPage {
    pub(crate) layout: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) title: Option<String>,
    pub(crate) html: String,
    pub(crate) code_blocks: usize,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, its frontmatter is
    /// malformed, or the output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let copy_button = self.no_copy_button.then_some(false);
        let config = self.config.load(copy_button)?;

        let source = std::fs::read_to_string(&self.file)?;
        let page = render_page(&source, &config)?;

        tracing::info!(
            file = %self.file.display(),
            layout = %page.layout,
            code_blocks = page.code_blocks,
            "Rendered page"
        );

        if self.json {
            return write_json(&page);
        }

        match &self.output {
            Some(path) => {
                std::fs::write(path, &page.html)?;
                output.success(&format!(
                    "Rendered {} -> {} (layout: {})",
                    self.file.display(),
                    path.display(),
                    page.layout
                ));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(page.html.as_bytes())?;
                output.info(&format!("Layout: {}", page.layout));
            }
        }

        Ok(())
    }
}

/// Render a page source: split frontmatter, default the layout, render the body.
pub(crate) fn render_page(source: &str, config: &Config) -> Result<RenderedPage, CliError> {
    let (frontmatter, body) = Frontmatter::split(source)?;
    let frontmatter = frontmatter.with_default_layout(&config.markdown.default_layout);

    let result = MarkdownRenderer::new()
        .with_copy_button(config.markdown.copy_button)
        .render_markdown(body);

    Ok(RenderedPage {
        layout: frontmatter
            .layout
            .unwrap_or_else(|| config.markdown.default_layout.clone()),
        title: frontmatter.title,
        html: result.html,
        code_blocks: result.code_blocks,
    })
}
