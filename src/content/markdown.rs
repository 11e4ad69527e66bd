//! Markdown rendering

use pulldown_cmark::{html, Options, Parser};

/// Marker separating the explicit excerpt from the rest of a post
pub const MORE_MARKER: &str = "<!-- more -->";

/// Markdown to HTML renderer
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    options: Options,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        // Front-matter is handled by FrontMatter::parse, so no metadata blocks
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION
            | Options::ENABLE_HEADING_ATTRIBUTES;
        Self { options }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut html_output, parser);
        html_output
    }

    /// Split content at <!-- more -->.
    ///
    /// Returns the markdown before the marker (if present) and the full
    /// markdown with the marker removed.
    pub fn split_excerpt(content: &str) -> (Option<String>, String) {
        match content.split_once(MORE_MARKER) {
            Some((above, below)) => {
                let excerpt = above.trim().to_string();
                let full = format!("{}\n\n{}", excerpt, below.trim());
                (Some(excerpt), full)
            }
            None => (None, content.to_string()),
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}
