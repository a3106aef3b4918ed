//! Decorated code block HTML.
//!
//! A fenced code block is wrapped with:
//! - a `file-name` header listing the file tabs (only when metadata is present)
//! - a `code-container` holding the `<pre>` block and the copy button
//! - one "Code Source" link per source link in the metadata
//!
//! # Output HTML Structure
//!
//! ```html
//! <div class="file-name"><span class="active">main.cpp</span></div>
//! <div class="code-container">
//!   <pre><code class="language-cpp">int main() {}</code></pre>
//!   <button onclick="..." class="copy-button">...</button>
//! </div>
//! <a style="position: relative" href="./main.cpp">Code Source</a>
//! ```

use crate::meta::CodeMeta;
use crate::util::escape_html;

/// Copies the text of the `<pre>` block right before the button.
const COPY_SCRIPT: &str = "navigator.clipboard.writeText(this.previousSibling.innerText)";

/// Two stacked page glyphs forming the copy icon.
const COPY_ICON: &str = concat!(
    r#"<span style="font-size: .875em; margin-right: .12em; position: relative; top: -.25em; left: -.125em">"#,
    "📄",
    r#"<span style="position: absolute; top: .25em; left: .25em">📄</span>"#,
    "</span>"
);

/// Fenced code block extracted from markdown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeBlock<'a> {
    /// Language from the fence info string.
    pub lang: Option<&'a str>,
    /// Metadata after the language.
    pub meta: Option<&'a str>,
    /// Code content.
    pub code: &'a str,
}

impl CodeBlock<'_> {
    /// Render the decorated block into `out`.
    ///
    /// # Example
    ///
    /// ```
    /// use book_renderer::CodeBlock;
    ///
    /// let block = CodeBlock {
    ///     lang: Some("cpp"),
    ///     meta: Some("main.cpp"),
    ///     code: "int main() {}\n",
    /// };
    /// let mut html = String::new();
    /// block.render(false, &mut html);
    ///
    /// assert!(html.starts_with(r#"<div class="file-name"><span class="active">main.cpp</span></div>"#));
    /// ```
    pub fn render(&self, copy_button: bool, out: &mut String) {
        let meta = self.meta.map(CodeMeta::parse);

        if let Some(meta) = &meta {
            push_file_tabs(meta, out);
        }

        out.push_str(r#"<div class="code-container">"#);
        push_pre(self.lang, self.code, out);
        if copy_button {
            push_copy_button(out);
        }
        out.push_str("</div>");

        if let Some(meta) = &meta {
            for link in &meta.links {
                out.push_str(r#"<a style="position: relative" href=""#);
                out.push_str(&escape_html(link));
                out.push_str(r#"">Code Source</a>"#);
            }
        }
    }
}

/// File tab header; emitted even when the metadata names no file.
fn push_file_tabs(meta: &CodeMeta, out: &mut String) {
    out.push_str(r#"<div class="file-name">"#);
    for file in &meta.files {
        out.push_str(if file.active {
            r#"<span class="active">"#
        } else {
            r#"<span class="">"#
        });
        out.push_str(&escape_html(&file.label));
        out.push_str("</span>");
    }
    out.push_str("</div>");
}

fn push_pre(lang: Option<&str>, code: &str, out: &mut String) {
    match lang {
        Some(lang) => {
            out.push_str(r#"<pre><code class="language-"#);
            out.push_str(&escape_html(lang));
            out.push_str(r#"">"#);
        }
        None => out.push_str("<pre><code>"),
    }
    out.push_str(&escape_html(code));
    out.push_str("</code></pre>");
}

fn push_copy_button(out: &mut String) {
    out.push_str(r#"<button onclick=""#);
    out.push_str(COPY_SCRIPT);
    out.push_str(r#"" class="copy-button">"#);
    out.push_str(COPY_ICON);
    out.push_str("</button>");
}
