//! Shared utility functions for markdown rendering.

use std::borrow::Cow;

/// Escape text for use in HTML content and double-quoted attributes.
///
/// # Examples
///
/// ```
/// use book_renderer::escape_html;
///
/// assert_eq!(escape_html("a < b"), "a &lt; b");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Split a fence info string into language and metadata.
///
/// The first whitespace-separated token is the language; the trimmed rest is
/// the metadata. Empty parts are `None`.
///
/// # Examples
///
/// ```
/// use book_renderer::parse_fence_info;
///
/// assert_eq!(
///     parse_fence_info("cpp main.cpp ./main.cpp"),
///     (Some("cpp"), Some("main.cpp ./main.cpp"))
/// );
/// assert_eq!(parse_fence_info("cpp"), (Some("cpp"), None));
/// assert_eq!(parse_fence_info(""), (None, None));
/// ```
#[must_use]
pub fn parse_fence_info(info: &str) -> (Option<&str>, Option<&str>) {
    let info = info.trim();
    if info.is_empty() {
        return (None, None);
    }

    match info.split_once(char::is_whitespace) {
        Some((lang, rest)) => {
            let rest = rest.trim();
            (Some(lang), (!rest.is_empty()).then_some(rest))
        }
        None => (Some(info), None),
    }
}
