//! Configuration module

mod site;

pub use site::PaginationConfig;
pub use site::SiteConfig;
