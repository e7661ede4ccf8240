//! Sitemap generation.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/en/blog/hello-world</loc>
//!     <lastmod>2024-02-01</lastmod>
//!     <changefreq>monthly</changefreq>
//!     <priority>0.7</priority>
//!   </url>
//! </urlset>
//! ```

use crate::routes::{category_routes, tag_routes};
use chrono::NaiveDate;
use portfolio_kit_core::{ChangeFreq, ContentSnapshot, SiteConfig};

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

const POST_PRIORITY: f32 = 0.7;
const CASE_STUDY_PRIORITY: f32 = 0.8;
const LISTING_PRIORITY: f32 = 0.6;

#[derive(Debug, Clone)]
pub struct Sitemap {
    pub urls: Vec<UrlEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UrlEntry {
    pub loc: String,
    pub lastmod: NaiveDate,
    pub changefreq: ChangeFreq,
    pub priority: f32,
}

impl Sitemap {
    /// Static pages, posts, case studies, category listings, then tag
    /// listings. Pages without a content date use `today`.
    pub fn build(snapshot: &ContentSnapshot, config: &SiteConfig, today: NaiveDate) -> Self {
        let base = &config.site.url;

        let statics = config.sitemap.static_pages.iter().map(|page| UrlEntry {
            loc: format!("{}{}", base, page.path),
            lastmod: today,
            changefreq: page.changefreq,
            priority: page.priority,
        });

        let posts = snapshot.posts().iter().map(|post| UrlEntry {
            loc: post.permalink(base),
            lastmod: post.date.date_naive(),
            changefreq: ChangeFreq::Monthly,
            priority: POST_PRIORITY,
        });

        let case_studies = snapshot.case_studies().iter().map(|cs| UrlEntry {
            loc: cs.permalink(base),
            lastmod: cs.date.date_naive(),
            changefreq: ChangeFreq::Monthly,
            priority: CASE_STUDY_PRIORITY,
        });

        let listings = category_routes(snapshot)
            .iter()
            .map(|route| route.path())
            .chain(tag_routes(snapshot).iter().map(|route| route.path()))
            .map(|path| UrlEntry {
                loc: format!("{}{}", base, path),
                lastmod: today,
                changefreq: ChangeFreq::Weekly,
                priority: LISTING_PRIORITY,
            })
            .collect::<Vec<_>>();

        let urls = statics
            .chain(posts)
            .chain(case_studies)
            .chain(listings)
            .collect();

        Self { urls }
    }

    pub fn into_xml(self) -> String {
        let mut xml = String::with_capacity(256 + self.urls.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        xml.push('\n');

        for entry in self.urls {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
            xml.push_str(&format!(
                "    <lastmod>{}</lastmod>\n",
                entry.lastmod.format("%Y-%m-%d")
            ));
            xml.push_str(&format!("    <changefreq>{}</changefreq>\n", entry.changefreq));
            xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
