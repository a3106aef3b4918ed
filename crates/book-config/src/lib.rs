//! Configuration management for the book site.
//!
//! Parses `book.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.url`
//! - `site.base`
//!
//! ## Table of Contents
//!
//! Without a `[[sections]]` array the built-in C++ book table is used.

mod expand;

use std::path::{Path, PathBuf};

use book_sitemap::{BasePath, SectionEntry, Sitemap, SitemapError, cpp_book_sections};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override site base path.
    pub base: Option<String>,
    /// Override copy button on code blocks.
    pub copy_button: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "book.toml";

/// Layout applied to pages whose frontmatter names none.
const DEFAULT_LAYOUT: &str = "@layouts/Layout.astro";

/// Application configuration.
///
/// A `[[sections]]` entry needs a name; its page list may be empty, in which
/// case the section shows in menus but adds nothing to the reading order.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site deployment configuration.
    pub site: SiteConfig,
    /// Markdown processing configuration.
    pub markdown: MarkdownConfig,
    /// Table of contents override (built-in table when absent).
    sections: Option<Vec<SectionEntry>>,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Site deployment configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Public origin the site is deployed to (may be empty).
    pub url: String,
    /// Sub-path the site is served under.
    pub base: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            base: BasePath::DEFAULT.to_owned(),
        }
    }
}

/// Markdown processing configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Layout assigned to pages without a `layout` frontmatter key.
    pub default_layout: String,
    /// Whether code blocks get a copy-to-clipboard button.
    pub copy_button: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            default_layout: DEFAULT_LAYOUT.to_owned(),
            copy_button: true,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Table of contents error.
    #[error("Sitemap error: {0}")]
    Sitemap(#[from] SitemapError),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.url`").
        field: String,
        /// Error message (e.g., "${`SITE_URL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `book.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(base) = &settings.base {
            self.site.base.clone_from(base);
        }
        if let Some(copy_button) = settings.copy_button {
            self.markdown.copy_button = copy_button;
        }
    }

    /// Normalised base path of the site.
    #[must_use]
    pub fn base_path(&self) -> BasePath {
        BasePath::new(&self.site.base)
    }

    /// Configured table of contents, or the built-in one.
    #[must_use]
    pub fn sections(&self) -> Vec<SectionEntry> {
        self.sections.clone().unwrap_or_else(cpp_book_sections)
    }

    /// Build the sitemap from the configured base path and sections.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Sitemap` if two pages resolve to the same link.
    pub fn sitemap(&self) -> Result<Sitemap, ConfigError> {
        Ok(Sitemap::new(self.base_path(), self.sections())?)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let cwd = std::env::current_dir().ok()?;
        Self::discover_config_from(&cwd)
    }

    /// Search for config file in `start` and its parents.
    fn discover_config_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                tracing::debug!(path = %candidate.display(), "Discovered config file");
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;

        tracing::info!(path = %path.display(), base = %config.base_path(), "Loaded configuration");

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        require_non_empty(&self.markdown.default_layout, "markdown.default_layout")?;
        self.validate_sections()?;
        Ok(())
    }

    /// Validate site configuration.
    fn validate_site(&self) -> Result<(), ConfigError> {
        // Empty url means the site is only addressed by path
        if !self.site.url.is_empty() {
            require_http_url(&self.site.url, "site.url")?;
        }
        Ok(())
    }

    /// Validate the `[[sections]]` override.
    fn validate_sections(&self) -> Result<(), ConfigError> {
        let Some(sections) = &self.sections else {
            return Ok(());
        };

        for (i, section) in sections.iter().enumerate() {
            require_non_empty(&section.name, &format!("sections[{i}].name"))?;
            for (j, page) in section.pages.iter().enumerate() {
                require_non_empty(&page.name, &format!("sections[{i}].pages[{j}].name"))?;
            }
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.url = expand::expand_env(&self.site.url, "site.url")?;
        self.site.base = expand::expand_env(&self.site.base, "site.base")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILENAME);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.site.url, "");
        assert_eq!(config.base_path().as_str(), "/cpp-book/");
        assert_eq!(config.markdown.default_layout, "@layouts/Layout.astro");
        assert!(config.markdown.copy_button);
        assert_eq!(config.sections(), cpp_book_sections());
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.site.base, "/cpp-book/");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_site_config() {
        let toml = r#"
[site]
url = "https://Miitto.github.io"
base = "cpp-book"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.site.url, "https://Miitto.github.io");
        assert_eq!(config.base_path().as_str(), "/cpp-book/");
    }

    #[test]
    fn test_parse_markdown_config() {
        let toml = r#"
[markdown]
default_layout = "@layouts/Chapter.astro"
copy_button = false
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.markdown.default_layout, "@layouts/Chapter.astro");
        assert!(!config.markdown.copy_button);
    }

    #[test]
    fn test_parse_sections_override() {
        let toml = r#"
[site]
base = "/root/"

[[sections]]
name = "A"
pages = [{ name = "X", base = "" }]

[[sections]]
name = "B"
base = "b"
pages = [{ name = "Y", base = "y" }, { name = "Z", base = "z" }]
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let sitemap = config.sitemap().unwrap();

        let links: Vec<_> = sitemap.flat_map().iter().map(|p| p.link.as_str()).collect();
        assert_eq!(links, vec!["/root/", "/root/b/y/", "/root/b/z/"]);
    }

    #[test]
    fn test_sitemap_duplicate_link_is_config_error() {
        let toml = r#"
[[sections]]
name = "A"
pages = [{ name = "X", base = "x" }, { name = "Also X", base = "x/" }]
"#;
        let config: Config = toml::from_str(toml).unwrap();

        let err = config.sitemap().unwrap_err();
        assert!(matches!(err, ConfigError::Sitemap(_)), "{err:?}");
        assert!(err.to_string().contains("/cpp-book/x/"));
    }

    #[test]
    fn test_apply_cli_settings_base() {
        let mut config = Config::default();
        let overrides = CliSettings {
            base: Some("docs".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.base_path().as_str(), "/docs/");
        assert!(config.markdown.copy_button); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_copy_button() {
        let mut config = Config::default();
        let overrides = CliSettings {
            copy_button: Some(false),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert!(!config.markdown.copy_button);
        assert_eq!(config.site.base, "/cpp-book/"); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default();

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.site.base, "/cpp-book/");
        assert!(config.markdown.copy_button);
    }

    #[test]
    fn test_validate_site_url_scheme() {
        let mut config = Config::default();
        config.site.url = "ftp://example.com".to_owned();

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("site.url"));
    }

    #[test]
    fn test_validate_default_layout_empty() {
        let mut config = Config::default();
        config.markdown.default_layout = "  ".to_owned();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("markdown.default_layout"));
    }

    #[test]
    fn test_section_without_pages_accepted() {
        let toml = r#"
[[sections]]
name = "Empty"
base = "empty"
pages = []

[[sections]]
name = "Introduction"
pages = [{ name = "Index" }]
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.validate().is_ok());

        let sitemap = config.sitemap().unwrap();
        let sections = sitemap.sections();
        assert_eq!(sections.len(), 2);
        assert!(sections[0].pages.is_empty());
        assert_eq!(sitemap.len(), 1);
    }

    #[test]
    fn test_validate_page_without_name() {
        let toml = r#"
[[sections]]
name = "A"
pages = [{ name = "", base = "x" }]
"#;
        let config: Config = toml::from_str(toml).unwrap();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("sections[0].pages[0].name"), "{err}");
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            r#"
[site]
url = "https://example.com"
base = "guide"
"#,
        );

        let config = Config::load(Some(path.as_path()), None).unwrap();

        assert_eq!(config.base_path().as_str(), "/guide/");
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = Config::load(Some(path.as_path()), None).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "[site\nbase = ");

        let err = Config::load(Some(path.as_path()), None).unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_applies_cli_settings_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "[site]\nbase = \"from-file\"\n");
        let settings = CliSettings {
            base: Some("from-cli".to_owned()),
            copy_button: None,
        };

        let config = Config::load(Some(path.as_path()), Some(&settings)).unwrap();

        assert_eq!(config.base_path().as_str(), "/from-cli/");
    }

    #[test]
    fn test_load_expands_env_vars() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("BOOK_TEST_DEPLOY_BASE", "preview");
        }
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "[site]\nurl = \"${BOOK_TEST_SITE_URL:-https://example.com}\"\nbase = \"${BOOK_TEST_DEPLOY_BASE}\"\n",
        );

        let config = Config::load(Some(path.as_path()), None).unwrap();

        assert_eq!(config.site.url, "https://example.com");
        assert_eq!(config.base_path().as_str(), "/preview/");
        unsafe {
            std::env::remove_var("BOOK_TEST_DEPLOY_BASE");
        }
    }

    #[test]
    fn test_discover_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "");
        let nested = dir.path().join("src").join("pages");
        std::fs::create_dir_all(&nested).unwrap();

        let discovered = Config::discover_config_from(&nested);

        assert_eq!(discovered, Some(path));
    }
}
