//! Post model

use chrono::{DateTime, Local};

/// One article: its metadata plus the rendered body.
///
/// Posts are built by the loader and never change during a build.
#[derive(Debug, Clone)]
pub struct Post {
    pub title: String,
    pub date: DateTime<Local>,
    /// Rendered HTML body
    pub content: String,
    /// Authored excerpt, either the front-matter value or the rendered text
    /// above the fold marker
    pub excerpt: Option<String>,
    pub tags: Vec<String>,
    /// Source path relative to the source directory
    pub source: String,
    /// Site-relative URL including the configured root, unique per post
    pub path: String,
    /// Absolute URL
    pub permalink: String,
    pub published: bool,
    pub slug: String,
}

impl Post {
    pub fn new(title: String, date: DateTime<Local>, source: String) -> Self {
        Self {
            slug: slug::slugify(&title),
            title,
            date,
            content: String::new(),
            excerpt: None,
            tags: Vec::new(),
            source,
            path: String::new(),
            permalink: String::new(),
            published: true,
        }
    }

    /// Site-relative URL with a guaranteed leading slash
    pub fn url(&self) -> String {
        format!("/{}", self.path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_post_defaults() {
        let date = Local.with_ymd_and_hms(2024, 2, 3, 4, 5, 6).unwrap();
        let post = Post::new("Hello, World!".to_string(), date, "_posts/hi.md".to_string());
        assert_eq!(post.slug, "hello-world");
        assert!(post.published);
        assert!(post.tags.is_empty());
    }

    #[test]
    fn test_url_has_leading_slash() {
        let date = Local.with_ymd_and_hms(2024, 2, 3, 4, 5, 6).unwrap();
        let mut post = Post::new("x".to_string(), date, "x.md".to_string());
        post.path = "2024/02/03/x/".to_string();
        assert_eq!(post.url(), "/2024/02/03/x/");
        post.path = "/2024/02/03/x/".to_string();
        assert_eq!(post.url(), "/2024/02/03/x/");
    }
}
