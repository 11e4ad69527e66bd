//! Command implementations behind the CLI

pub mod clean;
pub mod generate;
pub mod list;
