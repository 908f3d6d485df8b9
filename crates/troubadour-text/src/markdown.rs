//! Markdown to HTML transform.

use pulldown_cmark::{Options, Parser, html};

/// Convert Markdown source to HTML. Inline HTML passes through untouched.
pub fn to_html(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(source, options);
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraph() {
        assert_eq!(to_html("Hello world!"), "<p>Hello world!</p>\n");
    }

    #[test]
    fn empty_input() {
        assert_eq!(to_html(""), "");
    }

    #[test]
    fn inline_span_passes_through() {
        let out = to_html(r#"Are we <span class="red">doomed</span>?"#);
        assert_eq!(out, "<p>Are we <span class=\"red\">doomed</span>?</p>\n");
    }

    #[test]
    fn emphasis_and_heading() {
        let out = to_html("# Title\n\nSome **bold** text");
        assert!(out.contains("<h1>Title</h1>"));
        assert!(out.contains("<strong>bold</strong>"));
    }
}
