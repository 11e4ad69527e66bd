//! Helper functions for building page fragments
//!
//! URL generation, HTML escaping, date formatting, and the listing
//! fragments (excerpts, archive list, paginator) used by the generator.

mod date;
mod excerpt;
mod html;
mod list;
mod url;

pub use date::*;
pub use excerpt::*;
pub use html::*;
pub use list::*;
pub use url::*;
