//! Content store - the build-wide, read-only post collection

use std::cmp::Ordering;
use std::collections::HashSet;

use super::Post;
use crate::error::{BuildError, Result};

/// All posts of a build, in canonical order (newest first).
///
/// Constructed once after discovery and passed by reference to every
/// renderer. Nothing mutates it afterwards.
#[derive(Debug, Default)]
pub struct ContentStore {
    posts: Vec<Post>,
}

impl ContentStore {
    /// Sort `posts` into canonical order and check url uniqueness
    pub fn new(mut posts: Vec<Post>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(posts.len());
        for post in &posts {
            if !seen.insert(post.url()) {
                return Err(BuildError::DuplicateUrl(post.url()));
            }
        }

        posts.sort_by(canonical_order);
        tracing::debug!("Content store holds {} posts", posts.len());
        Ok(Self { posts })
    }

    /// Every post, newest first. Ties on date are broken by title, then url.
    pub fn all_posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

fn canonical_order(a: &Post, b: &Post) -> Ordering {
    b.date
        .cmp(&a.date)
        .then_with(|| a.title.cmp(&b.title))
        .then_with(|| a.path.cmp(&b.path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn post(title: &str, day: u32) -> Post {
        let date = Local.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap();
        let mut post = Post::new(title.to_string(), date, format!("_posts/{}.md", title));
        post.path = format!("/2024/01/{:02}/{}/", day, post.slug);
        post
    }

    fn titles(store: &ContentStore) -> Vec<&str> {
        store.all_posts().iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn test_newest_first() {
        let store = ContentStore::new(vec![post("old", 1), post("new", 20), post("mid", 10)]).unwrap();
        assert_eq!(titles(&store), vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_ties_are_deterministic() {
        let a = ContentStore::new(vec![post("beta", 5), post("alpha", 5), post("gamma", 5)]).unwrap();
        let b = ContentStore::new(vec![post("gamma", 5), post("beta", 5), post("alpha", 5)]).unwrap();
        assert_eq!(titles(&a), vec!["alpha", "beta", "gamma"]);
        assert_eq!(titles(&a), titles(&b));
    }

    #[test]
    fn test_empty_store() {
        let store = ContentStore::new(Vec::new()).unwrap();
        assert!(store.is_empty());
        assert!(store.all_posts().is_empty());
    }

    #[test]
    fn test_duplicate_url_rejected() {
        let mut second = post("other", 3);
        second.path = post("first", 3).path;
        let err = ContentStore::new(vec![post("first", 3), second]).unwrap_err();
        assert!(matches!(err, BuildError::DuplicateUrl(url) if url == "/2024/01/03/first/"));
    }
}
