//! YAML frontmatter and layout defaulting.
//!
//! Pages may start with a YAML block delimited by `---` lines:
//!
//! ```markdown
//! ---
//! title: Variables
//! layout: "@layouts/Chapter.astro"
//! ---
//!
//! # Variables
//! ```
//!
//! Pages that name no `layout` get the site's default layout.

use serde::{Deserialize, Serialize};

/// Frontmatter block delimiter.
const DELIMITER: &str = "---";

/// Page frontmatter.
///
/// Known keys are typed; every other key is kept in [`extra`](Self::extra).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Frontmatter {
    /// Layout the page is rendered with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,

    /// Page title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Remaining keys, passed through untouched.
    #[serde(flatten)]
    pub extra: serde_yaml::Mapping,
}

/// Error type for frontmatter operations.
#[derive(Debug, thiserror::Error)]
pub enum FrontmatterError {
    /// YAML parsing error.
    #[error("Invalid frontmatter: {0}")]
    Parse(String),
}

impl Frontmatter {
    /// Parse frontmatter from YAML content.
    ///
    /// Empty content returns a default instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed.
    pub fn from_yaml(content: &str) -> Result<Self, FrontmatterError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(trimmed).map_err(|e| FrontmatterError::Parse(e.to_string()))
    }

    /// Split a document into its frontmatter and markdown body.
    ///
    /// A document without a leading `---` block (or with an unterminated
    /// one) has empty frontmatter and is returned whole as the body.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontmatter YAML is malformed.
    ///
    /// # Example
    ///
    /// ```
    /// use book_renderer::Frontmatter;
    ///
    /// let (frontmatter, body) = Frontmatter::split("---\ntitle: Loops\n---\n# Loops\n").unwrap();
    /// assert_eq!(frontmatter.title.as_deref(), Some("Loops"));
    /// assert_eq!(body, "# Loops\n");
    /// ```
    pub fn split(source: &str) -> Result<(Self, &str), FrontmatterError> {
        let Some((yaml, body)) = split_block(source) else {
            return Ok((Self::default(), source));
        };
        Ok((Self::from_yaml(yaml)?, body))
    }

    /// Set the layout unless the page already names one.
    #[must_use]
    pub fn with_default_layout(mut self, default: &str) -> Self {
        if self.layout.is_none() {
            self.layout = Some(default.to_owned());
        }
        self
    }
}

/// Locate the YAML block and the body after it.
fn split_block(source: &str) -> Option<(&str, &str)> {
    let rest = source.strip_prefix('\u{feff}').unwrap_or(source);
    let first_line_end = rest.find('\n')?;
    if rest[..first_line_end].trim_end() != DELIMITER {
        return None;
    }

    let yaml_start = first_line_end + 1;
    let mut offset = yaml_start;
    for line in rest[yaml_start..].split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            let yaml = &rest[yaml_start..offset];
            let body = &rest[offset + line.len()..];
            return Some((yaml, body));
        }
        offset += line.len();
    }

    None
}
