//! Markdown rendering with decorated code blocks for the book site.
//!
//! # Architecture
//!
//! Rendering a page goes through three steps:
//! - [`Frontmatter::split`] separates the YAML frontmatter from the body and
//!   [`Frontmatter::with_default_layout`] fills in the site layout
//! - [`MarkdownRenderer`] parses the body with pulldown-cmark
//! - every code block is handed to [`CodeBlock::render`], which classifies
//!   the fence metadata with [`CodeMeta`] and adds the file tabs, the copy
//!   button and the source links
//!
//! # Example
//!
//! ```
//! use book_renderer::{Frontmatter, MarkdownRenderer};
//!
//! let source = "---\ntitle: Strings\n---\n```cpp A:main.cpp str.hpp\nstd::string s;\n```\n";
//!
//! let (frontmatter, body) = Frontmatter::split(source).unwrap();
//! let frontmatter = frontmatter.with_default_layout("@layouts/Layout.astro");
//! let result = MarkdownRenderer::new().render_markdown(body);
//!
//! assert_eq!(frontmatter.layout.as_deref(), Some("@layouts/Layout.astro"));
//! assert!(result.html.contains(r#"<span class="active">main.cpp</span><span class="">str.hpp</span>"#));
//! ```

mod code_block;
mod frontmatter;
mod meta;
mod renderer;
mod util;

pub use code_block::CodeBlock;
pub use frontmatter::{Frontmatter, FrontmatterError};
pub use meta::{CodeMeta, FileTab, MetaToken};
pub use renderer::{MarkdownRenderer, RenderResult};
pub use util::{escape_html, parse_fence_info};
