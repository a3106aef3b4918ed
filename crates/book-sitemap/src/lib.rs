//! Table of contents and previous/next navigation for the book.
//!
//! This crate provides:
//! - [`Sitemap`]: immutable table of contents with resolved page links
//! - [`resolve_link`]: link derivation under a [`BasePath`]
//! - [`cpp_book_sections`]: the built-in table of the C++ book
//!
//! # Quick Start
//!
//! ```
//! use book_sitemap::{BasePath, Sitemap, cpp_book_sections};
//!
//! let sitemap = Sitemap::new(BasePath::default(), cpp_book_sections()).unwrap();
//!
//! // Navigation menu
//! let sections = sitemap.sections();
//! assert_eq!(sections[0].pages[0].link, "/cpp-book/");
//!
//! // Previous/next controls
//! let neighbors = sitemap.neighbors("/cpp-book/");
//! assert!(neighbors.prev.is_none());
//! assert_eq!(neighbors.next.unwrap().name, "Terminology");
//! ```

mod link;
mod sitemap;
mod table;

pub use link::{BasePath, resolve_link};
pub use sitemap::{Neighbors, PageEntry, PageRef, Section, SectionEntry, Sitemap, SitemapError};
pub use table::cpp_book_sections;
