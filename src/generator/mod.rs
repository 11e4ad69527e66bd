//! Generator module - assembles index, archive and post pages
//!
//! Every output page is built in memory first ([`Generator::assemble`]) and
//! only then written to disk ([`Generator::generate`]). Pages are sorted by
//! output path so two builds over the same posts produce the same files.

use anyhow::{Context as _, Result};
use std::fs;
use std::path::{Path, PathBuf};

use tera::Context;

use crate::config::SiteConfig;
use crate::content::{ContentStore, Post};
use crate::error::BuildError;
use crate::helpers::{
    archive_url, excerpt_for, html_escape, page_url, paginator, render_archive, render_excerpt,
    strip_html, time_tag,
};
use crate::pagination::{Pagination, Paginator};
use crate::templates::{ConfigData, NavPost, PaginationData, PostData, TemplateRenderer};
use crate::Site;

/// Pages on each side of the current one in the paginator
const PAGINATOR_MID_SIZE: usize = 2;

/// What an output page is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// Index listing page (1-based); page 0 is the shell rendered for an
    /// empty site
    Index(usize),
    Archive,
    Post,
}

/// One rendered HTML file
#[derive(Debug, Clone)]
pub struct OutputPage {
    /// Path relative to the public directory
    pub path: PathBuf,
    pub kind: PageKind,
    pub html: String,
}

/// Summary of a finished build. The index shell written for a site without
/// posts is not a listing page and is not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub index_pages: usize,
    pub archive_pages: usize,
    pub post_pages: usize,
}

impl BuildReport {
    pub fn total(&self) -> usize {
        self.index_pages + self.archive_pages + self.post_pages
    }
}

/// Static site generator using Tera templates
pub struct Generator {
    site: Site,
    renderer: TemplateRenderer,
    pagination: Pagination,
}

impl Generator {
    /// Create a new generator.
    ///
    /// The pagination settings are validated here so a bad configuration
    /// aborts the build before any file is written.
    pub fn new(site: &Site) -> Result<Self> {
        let pagination = site.config.index_generator.policy()?;
        let renderer = TemplateRenderer::new().context("loading templates")?;

        Ok(Self {
            site: site.clone(),
            renderer,
            pagination,
        })
    }

    fn config(&self) -> &SiteConfig {
        &self.site.config
    }

    /// Build every page in memory
    pub fn assemble(&self, store: &ContentStore) -> Result<Vec<OutputPage>> {
        let config_data = ConfigData::from_config(self.config());

        let mut pages = self.index_pages(store, &config_data)?;
        pages.push(self.archive_page(store, &config_data)?);
        pages.extend(self.post_pages(store, &config_data)?);

        pages.sort_by(|a, b| a.path.cmp(&b.path));

        // A post may claim the url of the index, a listing page or the archive
        if let Some(pair) = pages.windows(2).find(|w| w[0].path == w[1].path) {
            return Err(BuildError::DuplicateUrl(pair[1].path.display().to_string()).into());
        }
        Ok(pages)
    }

    /// Build every page and write it under the public directory
    pub fn generate(&self, store: &ContentStore) -> Result<BuildReport> {
        let pages = self.assemble(store)?;

        fs::create_dir_all(&self.site.public_dir)
            .with_context(|| format!("creating {:?}", self.site.public_dir))?;

        let mut report = BuildReport::default();
        for page in &pages {
            let output_path = self.site.public_dir.join(&page.path);
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating directory {:?}", parent))?;
            }
            fs::write(&output_path, &page.html)
                .with_context(|| format!("writing {:?}", output_path))?;
            tracing::debug!("Generated: {:?}", output_path);

            match page.kind {
                PageKind::Index(0) => {}
                PageKind::Index(_) => report.index_pages += 1,
                PageKind::Archive => report.archive_pages += 1,
                PageKind::Post => report.post_pages += 1,
            }
        }

        tracing::info!(
            "Generated {} index, {} archive and {} post pages",
            report.index_pages,
            report.archive_pages,
            report.post_pages
        );
        Ok(report)
    }

    /// Create a base context with common variables
    fn create_base_context(&self, config_data: &ConfigData) -> Context {
        let mut context = Context::new();
        context.insert("config", config_data);
        context.insert("generator_version", env!("CARGO_PKG_VERSION"));
        context
    }

    /// Generate index pages with pagination
    fn index_pages(
        &self,
        store: &ContentStore,
        config_data: &ConfigData,
    ) -> Result<Vec<OutputPage>> {
        let config = self.config();
        let posts = store.all_posts();
        let paginator = Paginator::with_policy(posts, self.pagination);
        let total_pages = paginator.total_pages();

        if total_pages == 0 {
            // No listing at all, but the shell with the archive link remains
            let pagination = PaginationData {
                total: 0,
                current: 1,
                current_url: page_url(config, 1),
                prev_link: None,
                next_link: None,
                html: String::new(),
            };
            let mut context = self.create_base_context(config_data);
            context.insert("listing", &false);
            context.insert("excerpts", &Vec::<String>::new());
            context.insert("pagination", &pagination);

            let html = self
                .renderer
                .render("index.html", &context)
                .context("rendering empty index page")?;
            tracing::info!("No posts, generated index shell only");
            return Ok(vec![OutputPage {
                path: output_path(config, &pagination.current_url),
                kind: PageKind::Index(0),
                html,
            }]);
        }

        let mut pages = Vec::with_capacity(total_pages);
        for page in paginator.pages() {
            let excerpts: Vec<String> = page
                .items
                .iter()
                .map(|post| render_excerpt(config, post))
                .collect();

            let nav = page.nav();
            let pagination = PaginationData {
                total: total_pages,
                current: page.index,
                current_url: page_url(config, page.index),
                prev_link: nav.prev.map(|i| page_url(config, i)),
                next_link: nav.next.map(|i| page_url(config, i)),
                html: paginator_html(config, &nav),
            };

            let mut context = self.create_base_context(config_data);
            context.insert("listing", &true);
            context.insert("excerpts", &excerpts);
            context.insert("pagination", &pagination);

            let html = self
                .renderer
                .render("index.html", &context)
                .with_context(|| format!("rendering index page {} of {}", page.index, total_pages))?;

            pages.push(OutputPage {
                path: output_path(config, &pagination.current_url),
                kind: PageKind::Index(page.index),
                html,
            });
        }

        tracing::info!(
            "Generated {} index page(s) for {} posts",
            total_pages,
            posts.len()
        );
        Ok(pages)
    }

    /// Generate the archive page
    fn archive_page(&self, store: &ContentStore, config_data: &ConfigData) -> Result<OutputPage> {
        let config = self.config();

        let mut context = self.create_base_context(config_data);
        context.insert("archive", &render_archive(config, store.all_posts()));
        context.insert("post_count", &store.len());

        let html = self
            .renderer
            .render("archive.html", &context)
            .context("rendering archive page")?;

        Ok(OutputPage {
            path: output_path(config, &archive_url(config)),
            kind: PageKind::Archive,
            html,
        })
    }

    /// Generate individual post pages
    fn post_pages(&self, store: &ContentStore, config_data: &ConfigData) -> Result<Vec<OutputPage>> {
        let config = self.config();
        let posts = store.all_posts();
        let mut pages = Vec::with_capacity(posts.len());

        for (i, post) in posts.iter().enumerate() {
            // Newest first: the previous (older) post follows in the slice
            let prev_post = posts.get(i + 1).map(nav_post);
            let next_post = i.checked_sub(1).and_then(|j| posts.get(j)).map(nav_post);

            let data = PostData {
                title: html_escape(&post.title),
                time: time_tag(&post.date, &config.date_format),
                path: post.url(),
                permalink: post.permalink.clone(),
                description: html_escape(
                    strip_html(excerpt_for(post, config.excerpt_length)).trim(),
                ),
                tags: post.tags.iter().map(|t| html_escape(t)).collect(),
                content: post.content.clone(),
            };

            let mut context = self.create_base_context(config_data);
            context.insert("post", &data);
            context.insert("prev_post", &prev_post);
            context.insert("next_post", &next_post);

            let html = self
                .renderer
                .render("post.html", &context)
                .with_context(|| format!("rendering post {:?}", post.source))?;

            pages.push(OutputPage {
                path: output_path(config, &post.url()),
                kind: PageKind::Post,
                html,
            });
        }

        Ok(pages)
    }
}

fn paginator_html(config: &SiteConfig, nav: &crate::pagination::PageNav) -> String {
    paginator(config, nav, "&laquo; Prev", "Next &raquo;", PAGINATOR_MID_SIZE)
}

fn nav_post(post: &Post) -> NavPost {
    NavPost {
        title: html_escape(&post.title),
        path: post.url(),
    }
}

/// Output file for a site URL: the root prefix is dropped and `index.html`
/// appended, so `/blog/page/2/` becomes `page/2/index.html`.
fn output_path(config: &SiteConfig, url: &str) -> PathBuf {
    let root = config.root.trim_matches('/');
    let rel = url.trim_start_matches('/');
    let rel = rel
        .strip_prefix(root)
        .filter(|r| r.is_empty() || r.starts_with('/'))
        .unwrap_or(rel)
        .trim_matches('/');

    if rel.is_empty() {
        PathBuf::from("index.html")
    } else {
        Path::new(rel).join("index.html")
    }
}
