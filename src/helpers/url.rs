//! URL helper functions

use crate::config::SiteConfig;

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/css/style.css") // -> "/blog/css/style.css"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// URL of an index page. Page 1 is the site root, later pages live under
/// `{pagination_dir}/{n}/`.
pub fn page_url(config: &SiteConfig, page: usize) -> String {
    if page <= 1 {
        url_for(config, "/")
    } else {
        url_for(config, &format!("{}/{}/", config.pagination_dir, page))
    }
}

/// URL of the archive page
pub fn archive_url(config: &SiteConfig) -> String {
    url_for(config, &format!("{}/", config.archive_dir.trim_matches('/')))
}
