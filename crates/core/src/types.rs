use crate::error::Error;
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Site language. Only the two published locales exist; anything else is
/// rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Fr,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Fr];

    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }

    /// Long date in the locale's convention: "January 5, 2024" (en-US),
    /// "5 janvier 2024" (fr-FR)
    pub fn format_date(self, date: DateTime<Utc>) -> String {
        let month0 = date.month0() as usize;
        match self {
            Locale::En => format!("{} {}, {}", EN_MONTHS[month0], date.day(), date.year()),
            Locale::Fr => format!("{} {} {}", date.day(), FR_MONTHS[month0], date.year()),
        }
    }

    pub fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Fr => "Français",
        }
    }

    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::En => &EN_LABELS,
            Locale::Fr => &FR_LABELS,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "fr" => Ok(Locale::Fr),
            other => Err(Error::InvalidLocale(other.to_string())),
        }
    }
}

const EN_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

const FR_MONTHS: [&str; 12] = [
    "janvier", "février", "mars", "avril", "mai", "juin",
    "juillet", "août", "septembre", "octobre", "novembre", "décembre",
];

/// Post footer strings
#[derive(Debug, PartialEq, Eq)]
pub struct Labels {
    pub previous: &'static str,
    pub next: &'static str,
    pub written_by: &'static str,
    pub recommended_articles: &'static str,
    pub copy_link: &'static str,
    pub min: &'static str,
}

static EN_LABELS: Labels = Labels {
    previous: "Previous",
    next: "Next",
    written_by: "Written by",
    recommended_articles: "Recommended Articles",
    copy_link: "Copy link",
    min: "min",
};

static FR_LABELS: Labels = Labels {
    previous: "Précédent",
    next: "Suivant",
    written_by: "Écrit par",
    recommended_articles: "Articles recommandés",
    copy_link: "Copier le lien",
    min: "min",
};

/// Blog article as produced by the content pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub slug: String,
    pub language: Locale,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(with = "content_date")]
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub time_to_read: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub url: String,
}

impl Post {
    /// Canonical localized URL: `{site_url}/{language}/blog/{slug}`
    pub fn permalink(&self, site_url: &str) -> String {
        format!("{}/{}/blog/{}", site_url, self.language, self.slug)
    }
}

/// Portfolio work item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    pub slug: String,
    pub title: String,
    #[serde(with = "content_date")]
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub client: Client,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_duration: Option<String>,
    #[serde(rename = "projectURL", skip_serializing_if = "Option::is_none")]
    pub project_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<GalleryImage>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testimonial: Option<Testimonial>,
    pub url: String,
}

impl CaseStudy {
    /// First tag, used as the case study's category
    pub fn primary_tag(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }

    pub fn permalink(&self, site_url: &str) -> String {
        format!("{}/work/{}", site_url, self.slug)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Immutable view of all content, loaded once per build or server run
#[derive(Debug, Clone, Default)]
pub struct ContentSnapshot {
    posts: Vec<Post>,
    case_studies: Vec<CaseStudy>,
}

impl ContentSnapshot {
    pub fn new(posts: Vec<Post>, case_studies: Vec<CaseStudy>) -> Self {
        Self {
            posts,
            case_studies,
        }
    }

    /// Posts in collection order
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Case studies in collection order
    pub fn case_studies(&self) -> &[CaseStudy] {
        &self.case_studies
    }

    pub fn posts_newest_first(&self) -> Vec<&Post> {
        newest_first(self.posts.iter(), |p| p.date)
    }

    /// Posts of one language partition, newest first
    pub fn posts_by_language(&self, locale: Locale) -> Vec<&Post> {
        newest_first(
            self.posts.iter().filter(|p| p.language == locale),
            |p| p.date,
        )
    }

    pub fn post_by_slug(&self, slug: &str, locale: Locale) -> Option<&Post> {
        self.posts
            .iter()
            .find(|p| p.slug == slug && p.language == locale)
    }

    pub fn case_study_by_slug(&self, slug: &str) -> Option<&CaseStudy> {
        self.case_studies.iter().find(|c| c.slug == slug)
    }

    /// Case studies for the featured work listing, newest first
    pub fn featured_work(&self) -> Vec<&CaseStudy> {
        newest_first(self.case_studies.iter(), |c| c.date)
    }
}

fn newest_first<'a, T, I, F>(items: I, date: F) -> Vec<&'a T>
where
    I: Iterator<Item = &'a T>,
    F: Fn(&T) -> DateTime<Utc>,
{
    let mut items: Vec<&T> = items.collect();
    items.sort_by_key(|item| std::cmp::Reverse(date(*item)));
    items
}

/// Complete site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteMeta,
    pub author: Author,
    pub locales: BTreeMap<Locale, LocaleOverrides>,
    pub content: ContentConfig,
    pub feeds: FeedsConfig,
    pub sitemap: SitemapConfig,
}

impl SiteConfig {
    /// Feed title for a language scope, or the site title for the combined feed
    pub fn feed_title(&self, locale: Option<Locale>) -> String {
        let Some(locale) = locale else {
            return self.site.title.clone();
        };
        self.locales
            .get(&locale)
            .and_then(|o| o.feed_title.clone())
            .unwrap_or_else(|| format!("{} ({})", self.site.title, locale.native_name()))
    }

    pub fn feed_description(&self, locale: Option<Locale>) -> String {
        locale
            .and_then(|l| self.locales.get(&l))
            .and_then(|o| o.feed_description.clone())
            .unwrap_or_else(|| self.site.description.clone())
    }
}

/// Site-level metadata; `image` and `favicon` are absolute URLs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteMeta {
    /// Base URL without trailing slash
    pub url: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub favicon: String,
    pub generator: String,
}

/// Author block attached to every feed entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub email: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocaleOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed_description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Directory holding `Post/_index.json` and `CaseStudy/_index.json`
    pub dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedsConfig {
    pub enabled: bool,
    pub output: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SitemapConfig {
    /// Cache lifetime in seconds for the sitemap endpoint
    pub max_age: u32,
    pub static_pages: Vec<StaticPage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticPage {
    /// Path relative to the site url ("" for the home page)
    pub path: String,
    pub priority: f32,
    pub changefreq: ChangeFreq,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFreq::Always => "always",
            ChangeFreq::Hourly => "hourly",
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
            ChangeFreq::Yearly => "yearly",
            ChangeFreq::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content dates arrive either as `YYYY-MM-DD` or as RFC 3339 timestamps.
mod content_date {
    use chrono::{DateTime, NaiveDate, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid date '{}'", raw)))
    }

    pub(super) fn parse(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
    }
}
