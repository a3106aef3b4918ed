//! Link derivation under the site base path.
//!
//! Every page link is built from three parts: the base path the site is
//! deployed under, the optional path segment of the page's section, and the
//! page's own segment. Links always end with a trailing slash so that they
//! match the directory-style URLs the site is served with.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Base path the whole site is served under.
///
/// Always begins and ends with `/` (e.g. `/cpp-book/`, or `/` for a site
/// served from the domain root).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct BasePath(String);

impl BasePath {
    /// Default deployment sub-path of the book.
    pub const DEFAULT: &'static str = "/cpp-book/";

    /// Create a base path, adding the leading and trailing slash if missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use book_sitemap::BasePath;
    ///
    /// assert_eq!(BasePath::new("cpp-book").as_str(), "/cpp-book/");
    /// assert_eq!(BasePath::new("/docs/").as_str(), "/docs/");
    /// assert_eq!(BasePath::new("").as_str(), "/");
    /// ```
    #[must_use]
    pub fn new(path: &str) -> Self {
        let trimmed = path.trim().trim_matches('/');
        if trimmed.is_empty() {
            Self("/".to_owned())
        } else {
            Self(format!("/{trimmed}/"))
        }
    }

    /// Base path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BasePath {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

impl From<String> for BasePath {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl From<BasePath> for String {
    fn from(value: BasePath) -> Self {
        value.0
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolve the absolute link of a page.
///
/// The section segment (when present and non-empty) is followed by `/`, then
/// the page segment is appended. A trailing `/` is added unless the combined
/// path is empty or already ends with one, so an empty page segment resolves
/// to the section index (or to the base path itself).
///
/// # Examples
///
/// ```
/// use book_sitemap::{BasePath, resolve_link};
///
/// let base = BasePath::new("/root/");
/// assert_eq!(resolve_link(&base, None, ""), "/root/");
/// assert_eq!(resolve_link(&base, Some("b"), "y"), "/root/b/y/");
/// assert_eq!(resolve_link(&base, Some("b"), ""), "/root/b/");
/// ```
#[must_use]
pub fn resolve_link(base: &BasePath, section: Option<&str>, page: &str) -> String {
    let mut path = String::with_capacity(section.map_or(0, str::len) + page.len() + 1);
    if let Some(section) = section.filter(|s| !s.is_empty()) {
        path.push_str(section);
        path.push('/');
    }
    path.push_str(page);

    let mut link = String::with_capacity(base.as_str().len() + path.len() + 1);
    link.push_str(base.as_str());
    link.push_str(&path);
    if !path.is_empty() && !path.ends_with('/') {
        link.push('/');
    }
    link
}
