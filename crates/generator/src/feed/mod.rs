//! Syndication feeds.
//!
//! One [`Feed`] is assembled per [`FeedScope`] and rendered three ways:
//!
//! | scope | RSS 2.0       | JSON Feed      | Atom           |
//! |-------|---------------|----------------|----------------|
//! | all   | `rss.xml`     | `rss.json`     | `atom.xml`     |
//! | en    | `rss-en.xml`  | `rss-en.json`  | `atom-en.xml`  |
//! | fr    | `rss-fr.xml`  | `rss-fr.json`  | `atom-fr.xml`  |

mod atom;
mod json;
mod rss;

use crate::GeneratedFile;
use anyhow::Result;
use chrono::{DateTime, Datelike, Utc};
use portfolio_kit_core::{ContentSnapshot, Locale, Post, SiteConfig};

/// Which posts a feed covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedScope {
    All,
    Language(Locale),
}

impl FeedScope {
    pub const ALL: [FeedScope; 3] = [
        FeedScope::All,
        FeedScope::Language(Locale::En),
        FeedScope::Language(Locale::Fr),
    ];

    pub fn locale(self) -> Option<Locale> {
        match self {
            FeedScope::All => None,
            FeedScope::Language(locale) => Some(locale),
        }
    }

    fn includes(self, post: &Post) -> bool {
        self.locale().is_none_or(|locale| post.language == locale)
    }

    fn suffix(self) -> String {
        match self {
            FeedScope::All => String::new(),
            FeedScope::Language(locale) => format!("-{}", locale),
        }
    }

    pub fn rss2_file(self) -> String {
        format!("rss{}.xml", self.suffix())
    }

    pub fn json_file(self) -> String {
        format!("rss{}.json", self.suffix())
    }

    pub fn atom_file(self) -> String {
        format!("atom{}.xml", self.suffix())
    }
}

/// Absolute self-links of the three renderings
#[derive(Debug, Clone)]
pub struct FeedLinks {
    pub rss2: String,
    pub json: String,
    pub atom: String,
}

#[derive(Debug, Clone)]
pub struct FeedMeta {
    pub title: String,
    pub description: String,
    pub id: String,
    pub link: String,
    pub image: String,
    pub favicon: String,
    pub copyright: String,
    pub generator: String,
    pub language: Option<Locale>,
    pub updated: DateTime<Utc>,
    pub author: FeedAuthor,
    pub links: FeedLinks,
}

#[derive(Debug, Clone)]
pub struct FeedAuthor {
    pub name: String,
    pub email: String,
    pub link: String,
}

#[derive(Debug, Clone)]
pub struct FeedEntry {
    pub title: String,
    pub id: String,
    pub link: String,
    pub description: String,
    pub published: DateTime<Utc>,
    pub author: FeedAuthor,
}

#[derive(Debug, Clone)]
pub struct Feed {
    pub scope: FeedScope,
    pub meta: FeedMeta,
    pub entries: Vec<FeedEntry>,
}

impl Feed {
    /// Assemble the feed for one scope. `now` stamps the copyright year and
    /// the feed's update time.
    pub fn build(
        snapshot: &ContentSnapshot,
        config: &SiteConfig,
        scope: FeedScope,
        now: DateTime<Utc>,
    ) -> Self {
        let site_url = &config.site.url;
        let locale = scope.locale();

        let author = FeedAuthor {
            name: config.author.name.clone(),
            email: config.author.email.clone(),
            link: config.author.link.clone(),
        };

        let meta = FeedMeta {
            title: config.feed_title(locale),
            description: config.feed_description(locale),
            id: site_url.clone(),
            link: site_url.clone(),
            image: config.site.image.clone(),
            favicon: config.site.favicon.clone(),
            copyright: format!(
                "All rights reserved {}, {}",
                now.year(),
                config.author.name
            ),
            generator: config.site.generator.clone(),
            language: locale,
            updated: now,
            author: author.clone(),
            links: FeedLinks {
                rss2: format!("{}/{}", site_url, scope.rss2_file()),
                json: format!("{}/{}", site_url, scope.json_file()),
                atom: format!("{}/{}", site_url, scope.atom_file()),
            },
        };

        let entries = snapshot
            .posts_newest_first()
            .into_iter()
            .filter(|post| scope.includes(post))
            .map(|post| {
                let link = post.permalink(site_url);
                FeedEntry {
                    title: post.title.clone(),
                    id: link.clone(),
                    link,
                    description: post.description.clone(),
                    published: post.date,
                    author: author.clone(),
                }
            })
            .collect();

        Self {
            scope,
            meta,
            entries,
        }
    }

    pub fn to_rss2(&self) -> Result<String> {
        rss::render(self)
    }

    pub fn to_atom(&self) -> Result<String> {
        atom::render(self)
    }

    pub fn to_json(&self) -> Result<String> {
        json::render(self)
    }

    /// All three renderings with their output file names
    pub fn render(&self) -> Result<Vec<GeneratedFile>> {
        Ok(vec![
            GeneratedFile::new(self.scope.rss2_file(), self.to_rss2()?),
            GeneratedFile::new(self.scope.json_file(), self.to_json()?),
            GeneratedFile::new(self.scope.atom_file(), self.to_atom()?),
        ])
    }
}

/// Render every scope. Nothing is returned unless all nine documents
/// rendered successfully.
pub fn generate_feeds(
    snapshot: &ContentSnapshot,
    config: &SiteConfig,
    now: DateTime<Utc>,
) -> Result<Vec<GeneratedFile>> {
    let mut files = Vec::with_capacity(FeedScope::ALL.len() * 3);
    for scope in FeedScope::ALL {
        files.extend(Feed::build(snapshot, config, scope, now).render()?);
    }
    Ok(files)
}
