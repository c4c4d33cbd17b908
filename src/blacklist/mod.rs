//! Blacklist zones to query: the built-in table plus user additions.

mod error;
mod loader;
mod types;

pub use error::BlacklistError;
pub use loader::{load_blacklist_file, parse_blacklists};
pub use types::{BlacklistEntry, BlacklistSet, default_blacklists};
