//! Sitemap model: the book's table of contents with resolved links.
//!
//! A [`Sitemap`] is built once from an ordered list of [`SectionEntry`]
//! values and never changes afterwards. Section order and page order define
//! the reading order used for previous/next navigation.
//!
//! # Architecture
//!
//! The flattened page list is computed at construction and shared by every
//! query:
//! - [`Sitemap::sections`] returns a fresh nested copy for navigation menus
//! - [`Sitemap::flat_map`] exposes the reading order
//! - [`Sitemap::neighbors`] does an O(n) scan over the flattened list

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::link::{BasePath, resolve_link};

/// Section of the table of contents as declared.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionEntry {
    /// Display name.
    pub name: String,
    /// URL segment shared by all pages of the section (None = site root).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    /// Pages in reading order.
    pub pages: Vec<PageEntry>,
}

/// Page of a section as declared.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEntry {
    /// Display name.
    pub name: String,
    /// URL segment of the page (empty for the section index).
    #[serde(default)]
    pub base: String,
}

impl SectionEntry {
    /// Create a section entry from `(name, segment)` page pairs.
    #[must_use]
    pub fn new(name: &str, base: Option<&str>, pages: &[(&str, &str)]) -> Self {
        Self {
            name: name.to_owned(),
            base: base.map(str::to_owned),
            pages: pages
                .iter()
                .map(|&(name, base)| PageEntry {
                    name: name.to_owned(),
                    base: base.to_owned(),
                })
                .collect(),
        }
    }
}

/// Page with its resolved link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRef {
    /// Display name.
    pub name: String,
    /// Absolute URL path (starts with the base path, ends with `/`).
    pub link: String,
}

/// Section with resolved page links, for navigation menus.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Display name.
    pub name: String,
    /// Pages in reading order.
    pub pages: Vec<PageRef>,
}

/// Previous and next pages around a page in reading order.
///
/// A missing side means the navigation control should be hidden.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Neighbors {
    /// Page before the current one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<PageRef>,
    /// Page after the current one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<PageRef>,
}

/// Sitemap construction error.
#[derive(Debug, thiserror::Error)]
pub enum SitemapError {
    /// Two pages resolve to the same link.
    #[error("Duplicate link {link}: \"{first}\" and \"{second}\"")]
    DuplicateLink {
        /// The shared link.
        link: String,
        /// Name of the page declared first.
        first: String,
        /// Name of the page declared second.
        second: String,
    },
}

/// Immutable table of contents with link resolution and neighbor lookup.
///
/// # Example
///
/// ```
/// use book_sitemap::{BasePath, SectionEntry, Sitemap};
///
/// let sitemap = Sitemap::new(
///     BasePath::new("/root/"),
///     vec![
///         SectionEntry::new("A", None, &[("X", "")]),
///         SectionEntry::new("B", Some("b"), &[("Y", "y"), ("Z", "z")]),
///     ],
/// )
/// .unwrap();
///
/// let neighbors = sitemap.neighbors("/root/b/y/");
/// assert_eq!(neighbors.prev.unwrap().link, "/root/");
/// assert_eq!(neighbors.next.unwrap().link, "/root/b/z/");
/// ```
#[derive(Debug)]
pub struct Sitemap {
    base: BasePath,
    entries: Vec<SectionEntry>,
    flat: Vec<PageRef>,
}

impl Sitemap {
    /// Build a sitemap, resolving every page link.
    ///
    /// # Errors
    ///
    /// Returns [`SitemapError::DuplicateLink`] if two pages resolve to the
    /// same link.
    pub fn new(base: BasePath, entries: Vec<SectionEntry>) -> Result<Self, SitemapError> {
        let flat: Vec<PageRef> = entries
            .iter()
            .flat_map(|section| resolve_section(&base, section))
            .collect();

        let mut seen: HashMap<&str, &str> = HashMap::with_capacity(flat.len());
        for page in &flat {
            if let Some(first) = seen.insert(&page.link, &page.name) {
                return Err(SitemapError::DuplicateLink {
                    link: page.link.clone(),
                    first: first.to_owned(),
                    second: page.name.clone(),
                });
            }
        }

        tracing::debug!(
            base = %base,
            sections = entries.len(),
            pages = flat.len(),
            "Sitemap built"
        );

        Ok(Self {
            base,
            entries,
            flat,
        })
    }

    /// Base path every link starts with.
    #[must_use]
    pub fn base(&self) -> &BasePath {
        &self.base
    }

    /// Sections as declared.
    #[must_use]
    pub fn entries(&self) -> &[SectionEntry] {
        &self.entries
    }

    /// Nested table of contents with resolved links.
    ///
    /// Returns a fresh copy on every call; section and page order are kept
    /// exactly as declared.
    #[must_use]
    pub fn sections(&self) -> Vec<Section> {
        self.entries
            .iter()
            .map(|section| Section {
                name: section.name.clone(),
                pages: resolve_section(&self.base, section).collect(),
            })
            .collect()
    }

    /// Every page in reading order (section by section, page by page).
    #[must_use]
    pub fn flat_map(&self) -> &[PageRef] {
        &self.flat
    }

    /// Total number of pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flat.len()
    }

    /// Whether the sitemap has no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flat.is_empty()
    }

    /// Reading-order index of the page with exactly this link.
    #[must_use]
    pub fn position(&self, link: &str) -> Option<usize> {
        self.flat.iter().position(|page| page.link == link)
    }

    /// Previous and next pages of the page with exactly this link.
    ///
    /// Matching is case-sensitive and includes the trailing slash. An
    /// unknown link yields no neighbors.
    #[must_use]
    pub fn neighbors(&self, link: &str) -> Neighbors {
        let Some(index) = self.position(link) else {
            tracing::debug!(link, "No page matches link, navigation unavailable");
            return Neighbors::default();
        };

        Neighbors {
            prev: index
                .checked_sub(1)
                .and_then(|i| self.flat.get(i))
                .cloned(),
            next: self.flat.get(index + 1).cloned(),
        }
    }
}

/// Resolve the links of every page in a section.
fn resolve_section<'a>(
    base: &'a BasePath,
    section: &'a SectionEntry,
) -> impl Iterator<Item = PageRef> + 'a {
    section.pages.iter().map(move |page| PageRef {
        name: page.name.clone(),
        link: resolve_link(base, section.base.as_deref(), &page.base),
    })
}
