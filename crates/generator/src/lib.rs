// Site artifacts derived from the content snapshot: listings, navigation,
// route parameters, syndication feeds and the sitemap

pub mod aggregate;
pub mod feed;
pub mod navigate;
pub mod routes;
pub mod sitemap;

use anyhow::Result;
use chrono::{DateTime, Utc};
use portfolio_kit_core::{ContentSnapshot, SiteConfig};

pub use aggregate::{
    all_categories, all_tags, case_studies_with_tag, categories_by_language, posts_in_category,
};
pub use feed::{Feed, FeedScope, generate_feeds};
pub use navigate::{Adjacent, adjacent, adjacent_in_language};
pub use routes::{RouteSurface, route_surface};
pub use sitemap::Sitemap;

pub const SITEMAP_FILE: &str = "sitemap.xml";

/// A rendered document and its path relative to the output directory
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub path: String,
    pub contents: String,
}

impl GeneratedFile {
    pub fn new(path: impl Into<String>, contents: String) -> Self {
        Self {
            path: path.into(),
            contents,
        }
    }
}

pub struct GeneratedSite {
    pub feeds: Vec<GeneratedFile>,
    pub sitemap: GeneratedFile,
}

impl GeneratedSite {
    pub fn files(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.feeds.iter().chain(std::iter::once(&self.sitemap))
    }
}

/// Render every output document in memory. Feeds are skipped when disabled
/// in the config; the sitemap is always produced.
pub fn generate_site(
    snapshot: &ContentSnapshot,
    config: &SiteConfig,
    now: DateTime<Utc>,
) -> Result<GeneratedSite> {
    let feeds = if config.feeds.enabled {
        generate_feeds(snapshot, config, now)?
    } else {
        Vec::new()
    };

    let sitemap = Sitemap::build(snapshot, config, now.date_naive()).into_xml();

    Ok(GeneratedSite {
        feeds,
        sitemap: GeneratedFile::new(SITEMAP_FILE, sitemap),
    })
}
