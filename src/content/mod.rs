//! Content module - posts, discovery, and the build-wide store

mod frontmatter;
pub mod loader;
mod markdown;
mod post;
mod store;

pub use frontmatter::{FrontMatter, FrontMatterError};
pub use markdown::{MarkdownRenderer, MORE_MARKER};
pub use post::Post;
pub use store::ContentStore;
