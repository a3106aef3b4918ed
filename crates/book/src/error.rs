//! CLI error types.

use book_config::ConfigError;
use book_renderer::FrontmatterError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Frontmatter(#[from] FrontmatterError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Validation(String),

    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
}
