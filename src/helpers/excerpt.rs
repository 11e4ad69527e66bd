//! Excerpt rendering for listing pages

use super::date::time_tag;
use super::html::{balance_tags, html_escape, truncate_at_word};
use crate::config::SiteConfig;
use crate::content::Post;

/// The excerpt shown for `post` in a listing.
///
/// An explicit excerpt is used verbatim. Otherwise the rendered body is cut
/// to at most `max_chars` characters on a word boundary.
pub fn excerpt_for(post: &Post, max_chars: usize) -> &str {
    match &post.excerpt {
        Some(explicit) => explicit.as_str(),
        None => truncate_at_word(&post.content, max_chars),
    }
}

/// Render one listing entry: the linked title, the date, the excerpt and a
/// "read more" link when the excerpt does not cover the whole post.
pub fn render_excerpt(config: &SiteConfig, post: &Post) -> String {
    let url = post.url();
    let excerpt = excerpt_for(post, config.excerpt_length);
    let truncated = excerpt.trim_end() != post.content.trim_end();
    // Only a cut body can leave elements open
    let body = match post.excerpt {
        Some(_) => excerpt.to_string(),
        None => balance_tags(excerpt),
    };

    let mut html = r#"<article class="post-excerpt">"#.to_string();
    html.push_str(&format!(
        r#"<h2 class="post-title"><a href="{}">{}</a></h2>"#,
        url,
        html_escape(&post.title)
    ));
    html.push_str(&format!(
        r#"<div class="post-meta">{}</div>"#,
        time_tag(&post.date, &config.date_format)
    ));
    html.push_str(&format!(
        r#"<div class="post-excerpt-body">{}</div>"#,
        body
    ));
    if truncated {
        html.push_str(&format!(
            r#"<a class="read-more" href="{}">{}</a>"#,
            url,
            html_escape(&config.read_more)
        ));
    }
    html.push_str("</article>");
    html
}
