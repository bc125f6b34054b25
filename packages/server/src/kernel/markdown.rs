use pulldown_cmark::{html, Event, Options, Parser};

use crate::kernel::BaseMarkdownRenderer;

/// CommonMark renderer with GitHub-style extensions.
///
/// Raw HTML blocks in the source are escaped rather than passed through.
#[derive(Debug, Clone, Copy, Default)]
pub struct PulldownMarkdownRenderer;

impl PulldownMarkdownRenderer {
    pub fn new() -> Self {
        Self
    }

    fn options() -> Options {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        options
    }
}

impl BaseMarkdownRenderer for PulldownMarkdownRenderer {
    fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, Self::options()).map(|event| match event {
            Event::Html(raw) => Event::Text(raw),
            other => other,
        });

        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(md: &str) -> String {
        PulldownMarkdownRenderer::new().render(md)
    }

    #[test]
    fn test_renders_heading_and_paragraph() {
        let html = render("# Title\n\nSome *emphasis* here.");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<p>Some <em>emphasis</em> here.</p>"));
    }

    #[test]
    fn test_renders_tables() {
        let html = render("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn test_escapes_raw_html_blocks() {
        let html = render("<script>alert(1)</script>\n");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_empty_source_renders_empty() {
        assert_eq!(render(""), "");
    }
}
