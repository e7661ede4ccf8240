pub mod config;
pub mod content;
pub mod error;
pub mod slug;
pub mod types;

pub use config::parse_site_toml;
pub use content::load_snapshot;
pub use error::{Error, Result};
pub use slug::{slugify, unslugify};
pub use types::*;
