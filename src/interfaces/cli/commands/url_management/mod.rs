//! URL management CLI commands

mod delete;
mod helpers;
mod list;
mod resolve;
mod shorten;

pub use delete::delete_url;
pub use list::{ListOptions, list_urls};
pub use resolve::resolve_url;
pub use shorten::shorten_url;
