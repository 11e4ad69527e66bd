//! List site content

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::helpers::page_url;
use crate::pagination::Paginator;
use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    let store = ContentLoader::new(site).load_store()?;

    match content_type {
        "post" | "posts" => {
            println!("Posts ({}):", store.len());
            for post in store.all_posts() {
                println!(
                    "  {} - {} [{}]",
                    post.date.format("%Y-%m-%d"),
                    post.title,
                    post.source
                );
            }
        }
        "page" | "pages" => {
            let policy = site.config.index_generator.policy()?;
            let paginator = Paginator::with_policy(store.all_posts(), policy);
            println!(
                "Index pages ({}, {} per page):",
                paginator.total_pages(),
                paginator.page_size()
            );
            for page in paginator.pages() {
                println!(
                    "  {} - {} post(s)",
                    page_url(&site.config, page.index),
                    page.items.len()
                );
                for post in page.items {
                    println!("      {}", post.title);
                }
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, page", content_type);
        }
    }

    Ok(())
}
