//! Built-in theme templates using the Tera template engine
//!
//! The templates are embedded in the binary. Autoescaping is off: fragments
//! handed to the templates are already HTML, and plain strings are escaped
//! when the context data is built.

use serde::Serialize;
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::error::Result;
use crate::helpers::{archive_url, html_escape, url_for};

/// Template renderer with the embedded theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all theme templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("theme/layout.html")),
            ("index.html", include_str!("theme/index.html")),
            ("archive.html", include_str!("theme/archive.html")),
            ("post.html", include_str!("theme/post.html")),
        ])?;

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Site-wide values available to every template as `config`
#[derive(Debug, Clone, Serialize)]
pub struct ConfigData {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub author: String,
    pub language: String,
    pub url: String,
    pub home_url: String,
    pub archive_url: String,
}

impl ConfigData {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            title: html_escape(&config.title),
            subtitle: html_escape(&config.subtitle),
            description: html_escape(&config.description),
            author: html_escape(&config.author),
            language: config.language.clone(),
            url: config.url.trim_end_matches('/').to_string(),
            home_url: url_for(config, "/"),
            archive_url: archive_url(config),
        }
    }
}

/// Navigation data for an index page
#[derive(Debug, Clone, Serialize)]
pub struct PaginationData {
    pub total: usize,
    pub current: usize,
    pub current_url: String,
    pub prev_link: Option<String>,
    pub next_link: Option<String>,
    /// Rendered paginator, empty when there is a single page
    pub html: String,
}

/// A post as seen by the post template
#[derive(Debug, Clone, Serialize)]
pub struct PostData {
    pub title: String,
    pub time: String,
    pub path: String,
    pub permalink: String,
    /// Plain-text summary for the description meta tag
    pub description: String,
    pub tags: Vec<String>,
    pub content: String,
}

/// Link to a neighbouring post
#[derive(Debug, Clone, Serialize)]
pub struct NavPost {
    pub title: String,
    pub path: String,
}
