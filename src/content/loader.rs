//! Content loader - discovers posts under source/_posts

use chrono::{DateTime, Local};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{ContentStore, FrontMatter, MarkdownRenderer, Post};
use crate::error::{BuildError, Result};
use crate::Site;

/// Loads content from the source directory
pub struct ContentLoader<'a> {
    site: &'a Site,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        Self {
            site,
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Load every post and build the content store
    pub fn load_store(&self) -> Result<ContentStore> {
        ContentStore::new(self.load_posts()?)
    }

    /// Load all posts from source/_posts
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let posts_dir = self.site.source_dir.join("_posts");
        if !posts_dir.exists() {
            tracing::debug!("No posts directory at {:?}", posts_dir);
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(&posts_dir).follow_links(true).sort_by_file_name() {
            let entry = entry.map_err(|e| BuildError::Io(e.into()))?;
            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }

            let post = self.load_post(path)?;
            if post.published || self.site.config.render_drafts {
                posts.push(post);
            } else {
                tracing::debug!("Skipping draft {:?}", path);
            }
        }

        Ok(posts)
    }

    /// Load a single post from a file
    fn load_post(&self, path: &Path) -> Result<Post> {
        let malformed = |reason: String| BuildError::MalformedPost {
            path: path.to_path_buf(),
            reason,
        };

        let content = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&content).map_err(|e| malformed(e.to_string()))?;

        let title = fm
            .title
            .clone()
            .ok_or_else(|| malformed("missing `title`".to_string()))?;
        let date = match &fm.date {
            None => return Err(malformed("missing `date`".to_string())),
            Some(raw) => fm
                .parse_date()
                .ok_or_else(|| malformed(format!("unrecognized date `{}`", raw)))?,
        };

        let source = path
            .strip_prefix(&self.site.source_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();

        // Slug from front-matter, falling back to the file name
        let slug = fm.slug.clone().unwrap_or_else(|| {
            path.file_stem()
                .and_then(|s| s.to_str())
                .map(slug::slugify)
                .unwrap_or_else(|| slug::slugify(&title))
        });

        let path_url = self.generate_permalink(&date, &slug);
        let permalink = format!(
            "{}{}",
            self.site.config.url.trim_end_matches('/'),
            path_url
        );

        // Split excerpt and render markdown
        let (excerpt_md, full_md) = MarkdownRenderer::split_excerpt(body);
        let content_html = self.renderer.render(&full_md);
        let excerpt = match fm.excerpt {
            Some(explicit) => Some(explicit),
            None => excerpt_md.map(|e| self.renderer.render(&e)),
        };

        let mut post = Post::new(title, date, source);
        post.content = content_html;
        post.excerpt = excerpt;
        post.tags = fm.tags;
        post.path = path_url;
        post.permalink = permalink;
        post.published = fm.published;
        post.slug = slug;

        tracing::debug!("Loaded post {:?} -> {}", path, post.path);
        Ok(post)
    }

    /// Generate the URL path based on the permalink pattern
    fn generate_permalink(&self, date: &DateTime<Local>, slug: &str) -> String {
        let pattern = &self.site.config.permalink;

        let result = pattern
            .replace(":year", &date.format("%Y").to_string())
            .replace(":month", &date.format("%m").to_string())
            .replace(":day", &date.format("%d").to_string())
            .replace(":i_month", &date.format("%-m").to_string())
            .replace(":i_day", &date.format("%-d").to_string())
            .replace(":title", slug)
            .replace(":name", slug)
            .replace(":slug", slug);

        format!(
            "{}{}",
            self.site.config.root,
            result.trim_start_matches('/')
        )
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    fn site_with_posts(posts: &[(&str, &str)]) -> (tempfile::TempDir, Site) {
        let dir = tempfile::tempdir().unwrap();
        let posts_dir = dir.path().join("source").join("_posts");
        fs::create_dir_all(&posts_dir).unwrap();
        for (name, content) in posts {
            fs::write(posts_dir.join(name), content).unwrap();
        }
        let site = Site::with_config(dir.path(), SiteConfig::default());
        (dir, site)
    }

    #[test]
    fn test_load_posts() {
        let (_dir, site) = site_with_posts(&[
            (
                "hello-world.md",
                "---\ntitle: Hello World\ndate: 2024-01-15\n---\nFirst post.\n",
            ),
            ("notes.txt", "not a post"),
        ]);

        let posts = ContentLoader::new(&site).load_posts().unwrap();
        assert_eq!(posts.len(), 1);
        let post = &posts[0];
        assert_eq!(post.title, "Hello World");
        assert_eq!(post.slug, "hello-world");
        assert_eq!(post.path, "/2024/01/15/hello-world/");
        assert_eq!(post.permalink, "http://example.com/2024/01/15/hello-world/");
        assert!(post.content.contains("<p>First post.</p>"));
        assert_eq!(post.excerpt, None);
    }

    #[test]
    fn test_more_marker_excerpt() {
        let (_dir, site) = site_with_posts(&[(
            "fold.md",
            "---\ntitle: Fold\ndate: 2024-02-01\n---\nAbove the fold.\n\n<!-- more -->\n\nBelow.\n",
        )]);

        let posts = ContentLoader::new(&site).load_posts().unwrap();
        assert_eq!(posts[0].excerpt.as_deref(), Some("<p>Above the fold.</p>\n"));
        assert!(posts[0].content.contains("Below."));
    }

    #[test]
    fn test_frontmatter_excerpt_wins() {
        let (_dir, site) = site_with_posts(&[(
            "explicit.md",
            "---\ntitle: Explicit\ndate: 2024-02-01\nexcerpt: Hand written.\n---\nBody.\n\n<!-- more -->\n\nRest.\n",
        )]);

        let posts = ContentLoader::new(&site).load_posts().unwrap();
        assert_eq!(posts[0].excerpt.as_deref(), Some("Hand written."));
    }

    #[test]
    fn test_drafts_skipped() {
        let (_dir, site) = site_with_posts(&[(
            "draft.md",
            "---\ntitle: Draft\ndate: 2024-02-01\npublished: false\n---\nWIP\n",
        )]);

        assert!(ContentLoader::new(&site).load_posts().unwrap().is_empty());
    }

    #[test]
    fn test_missing_title_is_malformed() {
        let (_dir, site) = site_with_posts(&[("untitled.md", "---\ndate: 2024-02-01\n---\nBody\n")]);

        let err = ContentLoader::new(&site).load_posts().unwrap_err();
        assert!(matches!(err, BuildError::MalformedPost { .. }));
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn test_missing_date_is_malformed() {
        let (_dir, site) = site_with_posts(&[("undated.md", "---\ntitle: Undated\n---\nBody\n")]);

        let err = ContentLoader::new(&site).load_posts().unwrap_err();
        assert!(err.to_string().contains("date"));
    }

    #[test]
    fn test_missing_posts_dir() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::with_config(dir.path(), SiteConfig::default());
        let store = ContentLoader::new(&site).load_store().unwrap();
        assert!(store.is_empty());
    }
}
