//! Markdown renderer with decorated code blocks.

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd, html};

use crate::code_block::CodeBlock;
use crate::util::parse_fence_info;

/// Result of rendering markdown.
#[derive(Clone, Debug)]
pub struct RenderResult {
    /// Rendered HTML content.
    pub html: String,
    /// Number of code blocks that were decorated.
    pub code_blocks: usize,
}

/// Markdown renderer that decorates code blocks.
///
/// Code blocks (fenced and indented) are replaced by the HTML of
/// [`CodeBlock::render`]; every other event is written by pulldown-cmark's
/// HTML writer.
///
/// # Example
///
/// ```
/// use book_renderer::MarkdownRenderer;
///
/// let markdown = "# Hello\n\n```cpp main.cpp\nint main() {}\n```\n";
/// let result = MarkdownRenderer::new().render_markdown(markdown);
///
/// assert!(result.html.contains("<h1>Hello</h1>"));
/// assert!(result.html.contains(r#"<span class="active">main.cpp</span>"#));
/// assert!(result.html.contains(r#"class="copy-button""#));
/// assert_eq!(result.code_blocks, 1);
/// ```
#[derive(Clone, Debug)]
pub struct MarkdownRenderer {
    copy_button: bool,
    gfm: bool,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Code block being collected between its start and end events.
struct PendingBlock<'a> {
    info: CowStr<'a>,
    code: String,
}

impl MarkdownRenderer {
    /// Create a new renderer with GFM and copy buttons enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            copy_button: true,
            gfm: true,
        }
    }

    /// Enable or disable the copy-to-clipboard button on code blocks.
    #[must_use]
    pub fn with_copy_button(mut self, enabled: bool) -> Self {
        self.copy_button = enabled;
        self
    }

    /// Enable or disable GitHub Flavored Markdown features.
    ///
    /// GFM is enabled by default. When enabled, the parser supports:
    /// - Tables
    /// - Strikethrough (`~~text~~`)
    /// - Task lists (`- [ ] item`)
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Get parser options based on GFM configuration.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        if self.gfm {
            Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_GFM
        } else {
            Options::empty()
        }
    }

    /// Render markdown text using the configured parser options.
    pub fn render_markdown(&self, markdown: &str) -> RenderResult {
        let parser = Parser::new_ext(markdown, self.parser_options());
        let mut events = Vec::new();
        let mut pending: Option<PendingBlock<'_>> = None;
        let mut code_blocks = 0;

        for event in parser {
            if let Some(block) = pending.as_mut() {
                match event {
                    Event::Text(text) => block.code.push_str(&text),
                    Event::End(TagEnd::CodeBlock) => {
                        if let Some(block) = pending.take() {
                            events.push(Event::Html(self.render_block(&block).into()));
                            code_blocks += 1;
                        }
                    }
                    // Code blocks only contain text
                    _ => {}
                }
                continue;
            }

            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let info = match kind {
                        CodeBlockKind::Fenced(info) => info,
                        CodeBlockKind::Indented => CowStr::Borrowed(""),
                    };
                    pending = Some(PendingBlock {
                        info,
                        code: String::new(),
                    });
                }
                event => events.push(event),
            }
        }

        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, events.into_iter());

        tracing::debug!(code_blocks, bytes = out.len(), "Rendered markdown");

        RenderResult {
            html: out,
            code_blocks,
        }
    }

    fn render_block(&self, block: &PendingBlock<'_>) -> String {
        let (lang, meta) = parse_fence_info(&block.info);
        let mut out = String::with_capacity(block.code.len() + 256);
        CodeBlock {
            lang,
            meta,
            code: &block.code,
        }
        .render(self.copy_button, &mut out);
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(markdown: &str) -> RenderResult {
        MarkdownRenderer::new()
            .with_copy_button(false)
            .render_markdown(markdown)
    }

    #[test]
    fn test_plain_markdown_passes_through() {
        let result = render("# Title\n\nSome **bold** text.\n");

        assert_eq!(
            result.html,
            "<h1>Title</h1>\n<p>Some <strong>bold</strong> text.</p>\n"
        );
        assert_eq!(result.code_blocks, 0);
    }

    #[test]
    fn test_fenced_block_decorated() {
        let result = render("```cpp A:main.cpp util.hpp ./main.cpp\nint main() {}\n```\n");

        assert_eq!(
            result.html,
            concat!(
                r#"<div class="file-name"><span class="active">main.cpp</span><span class="">util.hpp</span></div>"#,
                r#"<div class="code-container"><pre><code class="language-cpp">int main() {}"#,
                "\n",
                r#"</code></pre></div>"#,
                r#"<a style="position: relative" href="./main.cpp">Code Source</a>"#,
                "\n"
            )
        );
        assert_eq!(result.code_blocks, 1);
    }

    #[test]
    fn test_fenced_block_without_meta() {
        let result = render("```cpp\nint x;\n```\n");

        assert!(!result.html.contains("file-name"));
        assert!(
            result
                .html
                .starts_with(r#"<div class="code-container"><pre><code class="language-cpp">"#)
        );
    }

    #[test]
    fn test_indented_block_decorated() {
        let result = render("Text\n\n    int x;\n");

        assert!(
            result
                .html
                .contains(r#"<div class="code-container"><pre><code>int x;"#)
        );
        assert_eq!(result.code_blocks, 1);
    }

    #[test]
    fn test_multiline_code_escaped() {
        let result = render("```cpp\n#include <vector>\nstd::vector<int> v;\n```\n");

        assert!(
            result
                .html
                .contains("#include &lt;vector&gt;\nstd::vector&lt;int&gt; v;\n")
        );
    }

    #[test]
    fn test_copy_button_enabled_by_default() {
        let result = MarkdownRenderer::new().render_markdown("```\nx\n```\n");

        assert!(result.html.contains(r#"class="copy-button""#));
    }

    #[test]
    fn test_multiple_blocks_counted() {
        let result = render("```cpp a.cpp\na\n```\n\ntext\n\n```cpp b.cpp\nb\n```\n");

        assert_eq!(result.code_blocks, 2);
        assert_eq!(result.html.matches(r#"class="code-container""#).count(), 2);
        assert!(result.html.contains("<p>text</p>"));
    }

    #[test]
    fn test_gfm_table() {
        let result = render("| a | b |\n|---|---|\n| 1 | 2 |\n");

        assert!(result.html.contains("<table>"));
    }

    #[test]
    fn test_gfm_disabled() {
        let result = MarkdownRenderer::new()
            .with_gfm(false)
            .render_markdown("~~gone~~\n");

        assert!(!result.html.contains("<del>"));
    }
}
