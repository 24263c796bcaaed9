//! Markdown to HTML conversion for rich fields authored as Markdown

use pulldown_cmark::{html, Options, Parser};

/// Convert Markdown to HTML; the result is meant to go through
/// [`crate::jsx::normalize`] next
pub fn to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown.trim(), options);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);

    let trimmed_len = out.trim_end().len();
    out.truncate(trimmed_len);
    out
}
