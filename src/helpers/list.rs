//! List helper functions: the archive listing and index page navigation

use super::date::time_tag;
use super::html::html_escape;
use super::url::page_url;
use crate::config::SiteConfig;
use crate::content::Post;
use crate::pagination::PageNav;

/// Generate the flat archive listing: one link per post, in the given order.
/// An empty slice yields an empty list.
pub fn render_archive(config: &SiteConfig, posts: &[Post]) -> String {
    let mut html = r#"<ul class="archive-list">"#.to_string();

    for post in posts {
        html.push_str(&format!(
            r#"<li class="archive-list-item">{} <a class="archive-list-link" href="{}">{}</a></li>"#,
            time_tag(&post.date, &config.date_format),
            post.url(),
            html_escape(&post.title)
        ));
    }

    html.push_str("</ul>");
    html
}

/// Generate the paginator for an index page.
///
/// Returns an empty string when there is a single page (or none).
pub fn paginator(
    config: &SiteConfig,
    nav: &PageNav,
    prev_text: &str,
    next_text: &str,
    mid_size: usize,
) -> String {
    if !nav.is_needed() {
        return String::new();
    }

    let current = nav.current;
    let total = nav.total;
    let mut html = r#"<nav class="pagination">"#.to_string();

    match nav.prev {
        Some(prev) => html.push_str(&format!(
            r#"<a class="pagination-prev" rel="prev" href="{}">{}</a>"#,
            page_url(config, prev),
            prev_text
        )),
        None => html.push_str(&format!(
            r#"<span class="pagination-prev disabled">{}</span>"#,
            prev_text
        )),
    }

    html.push_str(r#"<span class="pagination-numbers">"#);

    let start = current.saturating_sub(mid_size).max(1);
    let end = (current + mid_size).min(total);

    if start > 1 {
        html.push_str(&format!(
            r#"<a class="pagination-number" href="{}">1</a>"#,
            page_url(config, 1)
        ));
        if start > 2 {
            html.push_str(r#"<span class="pagination-ellipsis">…</span>"#);
        }
    }

    for page in start..=end {
        if page == current {
            html.push_str(&format!(
                r#"<span class="pagination-number current">{}</span>"#,
                page
            ));
        } else {
            html.push_str(&format!(
                r#"<a class="pagination-number" href="{}">{}</a>"#,
                page_url(config, page),
                page
            ));
        }
    }

    if end < total {
        if end < total - 1 {
            html.push_str(r#"<span class="pagination-ellipsis">…</span>"#);
        }
        html.push_str(&format!(
            r#"<a class="pagination-number" href="{}">{}</a>"#,
            page_url(config, total),
            total
        ));
    }

    html.push_str("</span>");

    match nav.next {
        Some(next) => html.push_str(&format!(
            r#"<a class="pagination-next" rel="next" href="{}">{}</a>"#,
            page_url(config, next),
            next_text
        )),
        None => html.push_str(&format!(
            r#"<span class="pagination-next disabled">{}</span>"#,
            next_text
        )),
    }

    html.push_str("</nav>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn posts(n: u32) -> Vec<Post> {
        (1..=n)
            .map(|i| {
                let date = Local.with_ymd_and_hms(2024, 1, i, 9, 0, 0).unwrap();
                let mut post = Post::new(format!("Post <{}>", i), date, format!("p{}.md", i));
                post.path = format!("/2024/01/{:02}/p{}/", i, i);
                post
            })
            .collect()
    }

    fn nav(current: usize, total: usize) -> PageNav {
        PageNav {
            current,
            total,
            prev: (current > 1).then(|| current - 1),
            next: (current < total).then(|| current + 1),
        }
    }

    #[test]
    fn test_archive_preserves_order() {
        let config = SiteConfig::default();
        let posts = posts(5);
        let html = render_archive(&config, &posts);

        assert_eq!(html.matches("<li").count(), posts.len());
        let positions: Vec<usize> = posts
            .iter()
            .map(|p| html.find(&format!(r#"href="{}""#, p.path)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("Post &lt;3&gt;"));
        assert!(!html.contains("excerpt"));
    }

    #[test]
    fn test_archive_empty() {
        let html = render_archive(&SiteConfig::default(), &[]);
        assert_eq!(html, r#"<ul class="archive-list"></ul>"#);
    }

    #[test]
    fn test_paginator_hidden_for_single_page() {
        let config = SiteConfig::default();
        assert_eq!(paginator(&config, &nav(1, 1), "Prev", "Next", 2), "");
        assert_eq!(paginator(&config, &nav(0, 0), "Prev", "Next", 2), "");
    }

    #[test]
    fn test_paginator_links() {
        let config = SiteConfig::default();

        let first = paginator(&config, &nav(1, 3), "Prev", "Next", 2);
        assert!(first.contains(r#"<span class="pagination-prev disabled">"#));
        assert!(first.contains(r#"rel="next" href="/page/2/""#));

        let middle = paginator(&config, &nav(2, 3), "Prev", "Next", 2);
        assert!(middle.contains(r#"rel="prev" href="/""#));
        assert!(middle.contains(r#"rel="next" href="/page/3/""#));
        assert!(middle.contains(r#"<span class="pagination-number current">2</span>"#));

        let last = paginator(&config, &nav(3, 3), "Prev", "Next", 2);
        assert!(last.contains(r#"rel="prev" href="/page/2/""#));
        assert!(last.contains(r#"<span class="pagination-next disabled">"#));
    }

    #[test]
    fn test_paginator_ellipsis() {
        let config = SiteConfig::default();
        let html = paginator(&config, &nav(6, 12), "Prev", "Next", 1);
        assert_eq!(html.matches("pagination-ellipsis").count(), 2);
        assert!(html.contains(r#"href="/page/12/">12</a>"#));
        assert!(html.contains(r#"href="/">1</a>"#));
    }
}
