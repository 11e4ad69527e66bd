//! Build errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning posts into listing pages
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Page {page} requested but only {total} page(s) exist")]
    OutOfRangeRequest { page: usize, total: usize },

    #[error("Two posts resolve to the same url: {0}")]
    DuplicateUrl(String),

    #[error("Malformed post {path:?}: {reason}")]
    MalformedPost { path: PathBuf, reason: String },

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for core operations
pub type Result<T> = std::result::Result<T, BuildError>;
