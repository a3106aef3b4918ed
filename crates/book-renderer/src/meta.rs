//! Code block metadata classification.
//!
//! The fence info string of a code block carries the language followed by
//! free-form metadata tokens:
//!
//! ~~~markdown
//! ```cpp A:main.cpp util.hpp ./src/main.cpp
//! int main() {}
//! ```
//! ~~~
//!
//! Each token is either a file name shown as a tab above the block, or a link
//! to the full source shown below it. File names prefixed with `A:` mark the
//! active tab.

use std::sync::LazyLock;

use regex::Regex;

/// Prefix marking the active file tab.
const ACTIVE_PREFIX: &str = "A:";

/// `http://` or `https://` URL.
static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^https?://").unwrap());

/// Relative path: one or two leading characters then `/` (`./`, `../`, `a/`).
static PATH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^..?/").unwrap());

/// Classified metadata token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MetaToken<'a> {
    /// File name label for the tab header.
    FileLabel {
        /// Label with the `A:` prefix removed.
        name: &'a str,
        /// Whether the token carried the `A:` prefix.
        marked_active: bool,
    },
    /// Link to the code's source.
    SourceLink(&'a str),
}

impl<'a> MetaToken<'a> {
    /// Classify a single whitespace-free token.
    ///
    /// # Examples
    ///
    /// ```
    /// use book_renderer::MetaToken;
    ///
    /// assert_eq!(
    ///     MetaToken::classify("A:main.cpp"),
    ///     MetaToken::FileLabel { name: "main.cpp", marked_active: true }
    /// );
    /// assert_eq!(
    ///     MetaToken::classify("./src/main.cpp"),
    ///     MetaToken::SourceLink("./src/main.cpp")
    /// );
    /// ```
    #[must_use]
    pub fn classify(token: &'a str) -> Self {
        if URL_RE.is_match(token) || PATH_RE.is_match(token) {
            return Self::SourceLink(token);
        }

        match token.strip_prefix(ACTIVE_PREFIX) {
            Some(name) => Self::FileLabel {
                name,
                marked_active: true,
            },
            None => Self::FileLabel {
                name: token,
                marked_active: false,
            },
        }
    }
}

/// File tab shown above a code block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileTab {
    /// Display label.
    pub label: String,
    /// Whether the tab is highlighted.
    pub active: bool,
}

/// Code block metadata split into file tabs and source links.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeMeta {
    /// File tabs in declaration order.
    pub files: Vec<FileTab>,
    /// Source links in declaration order.
    pub links: Vec<String>,
}

impl CodeMeta {
    /// Partition a metadata string into file tabs and source links.
    ///
    /// A tab is active when it is the only file, or when it carries the
    /// `A:` prefix.
    #[must_use]
    pub fn parse(meta: &str) -> Self {
        let mut labels = Vec::new();
        let mut links = Vec::new();

        for token in meta.split_whitespace() {
            match MetaToken::classify(token) {
                MetaToken::FileLabel {
                    name,
                    marked_active,
                } => labels.push((name, marked_active)),
                MetaToken::SourceLink(link) => links.push(link.to_owned()),
            }
        }

        let single = labels.len() == 1;
        let files = labels
            .into_iter()
            .map(|(name, marked_active)| FileTab {
                label: name.to_owned(),
                active: single || marked_active,
            })
            .collect();

        Self { files, links }
    }
}
