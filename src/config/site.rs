//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::BuildError;
use crate::pagination::Pagination;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // URL
    pub url: String,
    pub root: String,
    pub permalink: String,

    // Directory
    pub source_dir: String,
    pub public_dir: String,
    pub archive_dir: String,
    pub pagination_dir: String,

    // Writing
    pub render_drafts: bool,
    pub date_format: String,

    // Listing
    pub excerpt_length: usize,
    pub read_more: String,

    // Home page
    #[serde(default)]
    pub index_generator: PaginationConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Folio".to_string(),
            subtitle: String::new(),
            description: String::new(),
            author: "John Doe".to_string(),
            language: "en".to_string(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),
            permalink: ":year/:month/:day/:title/".to_string(),

            source_dir: "source".to_string(),
            public_dir: "public".to_string(),
            archive_dir: "archives".to_string(),
            pagination_dir: "page".to_string(),

            render_drafts: false,
            date_format: "YYYY-MM-DD".to_string(),

            excerpt_length: 200,
            read_more: "Read More".to_string(),

            index_generator: PaginationConfig::default(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded site config from {:?}", path.as_ref());
        Ok(config)
    }
}

/// Index pagination settings (`index_generator` in _config.yml)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub enabled: bool,
    /// Signed; negative values are rejected by [`PaginationConfig::policy`]
    pub per_page: i64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            per_page: 10,
        }
    }
}

impl PaginationConfig {
    /// Resolve the configured values into a pagination policy.
    ///
    /// A zero `per_page` or `enabled: false` puts every post on one page.
    /// A negative `per_page` is rejected.
    pub fn policy(&self) -> std::result::Result<Pagination, BuildError> {
        if self.per_page < 0 {
            return Err(BuildError::InvalidConfiguration(format!(
                "index_generator.per_page must not be negative (got {})",
                self.per_page
            )));
        }
        if !self.enabled || self.per_page == 0 {
            return Ok(Pagination::Disabled);
        }
        Ok(Pagination::PerPage(self.per_page as usize))
    }
}
