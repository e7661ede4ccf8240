use crate::error::{Error, Result};
use crate::types::*;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

/// Default cache lifetime for the sitemap endpoint (one hour)
pub const DEFAULT_SITEMAP_MAX_AGE: u32 = 3600;

/// Raw TOML configuration structure
/// This matches the site.toml file structure exactly
#[derive(Debug, Deserialize)]
struct RawConfig {
    site: RawSite,
    author: RawAuthor,
    #[serde(default)]
    locales: HashMap<String, LocaleOverrides>,
    #[serde(default)]
    content: Option<RawContent>,
    #[serde(default)]
    feeds: Option<RawFeeds>,
    #[serde(default)]
    sitemap: Option<RawSitemap>,
}

#[derive(Debug, Deserialize)]
struct RawSite {
    url: String,
    title: String,
    description: String,
    image: Option<String>,   // Relative to url unless absolute
    favicon: Option<String>, // Relative to url unless absolute
    generator: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawAuthor {
    name: String,
    email: String,
    link: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawContent {
    dir: String, // Convert to PathBuf
}

#[derive(Debug, Deserialize)]
struct RawFeeds {
    #[serde(default = "default_true")]
    enabled: bool,
    output: Option<String>, // Convert to PathBuf
}

#[derive(Debug, Deserialize)]
struct RawSitemap {
    max_age: Option<u32>,
    #[serde(default)]
    static_pages: Option<Vec<StaticPage>>,
}

fn default_true() -> bool {
    true
}

/// Parse site.toml from a file path
pub fn parse_site_toml<P: AsRef<Path>>(path: P) -> Result<SiteConfig> {
    let content = fs::read_to_string(path)?;
    parse_site_toml_str(&content)
}

/// Parse site.toml from a string (useful for testing)
pub fn parse_site_toml_str(content: &str) -> Result<SiteConfig> {
    let raw: RawConfig = toml::from_str(content)?;

    let url = validate_site_url(&raw.site.url)?;

    if !is_valid_email(&raw.author.email) {
        return Err(Error::ConfigParse(format!(
            "Invalid author.email: '{}'",
            raw.author.email
        )));
    }

    let site = SiteMeta {
        image: absolute_url(&url, raw.site.image.as_deref().unwrap_or("logo.png")),
        favicon: absolute_url(&url, raw.site.favicon.as_deref().unwrap_or("favicon.ico")),
        generator: raw
            .site
            .generator
            .unwrap_or_else(|| format!("portfolio-kit {}", env!("CARGO_PKG_VERSION"))),
        url,
        title: raw.site.title,
        description: raw.site.description,
    };

    let author = Author {
        link: raw.author.link.unwrap_or_else(|| site.url.clone()),
        name: raw.author.name,
        email: raw.author.email,
    };

    // Locale keys go through the same parser as content, so a typo fails here
    let locales = raw
        .locales
        .into_iter()
        .map(|(key, overrides)| Ok((key.parse::<Locale>()?, overrides)))
        .collect::<Result<BTreeMap<_, _>>>()?;

    let content = ContentConfig {
        dir: match raw.content {
            Some(c) => validate_path(&c.dir, "content.dir")?,
            None => PathBuf::from(".contentlayer/generated"),
        },
    };

    let feeds = match raw.feeds {
        Some(f) => FeedsConfig {
            enabled: f.enabled,
            output: match f.output {
                Some(out) => validate_path(&out, "feeds.output")?,
                None => PathBuf::from("public"),
            },
        },
        None => FeedsConfig {
            enabled: true,
            output: PathBuf::from("public"),
        },
    };

    let (max_age, static_pages) = match raw.sitemap {
        Some(s) => (
            s.max_age.unwrap_or(DEFAULT_SITEMAP_MAX_AGE),
            s.static_pages.unwrap_or_else(default_static_pages),
        ),
        None => (DEFAULT_SITEMAP_MAX_AGE, default_static_pages()),
    };

    for page in &static_pages {
        if !(0.0..=1.0).contains(&page.priority) {
            return Err(Error::ConfigParse(format!(
                "Sitemap priority for '{}' must be between 0.0 and 1.0, got {}",
                page.path, page.priority
            )));
        }
        if !page.path.is_empty() && !page.path.starts_with('/') {
            return Err(Error::ConfigParse(format!(
                "Sitemap static page path must start with '/': '{}'",
                page.path
            )));
        }
    }

    Ok(SiteConfig {
        site,
        author,
        locales,
        content,
        feeds,
        sitemap: SitemapConfig {
            max_age,
            static_pages,
        },
    })
}

/// Home page, both blog indexes and the work index
pub fn default_static_pages() -> Vec<StaticPage> {
    let mut pages = vec![StaticPage {
        path: String::new(),
        priority: 1.0,
        changefreq: ChangeFreq::Weekly,
    }];
    pages.extend(Locale::ALL.iter().map(|locale| StaticPage {
        path: format!("/{}/blog", locale),
        priority: 0.9,
        changefreq: ChangeFreq::Daily,
    }));
    pages.push(StaticPage {
        path: "/work".to_string(),
        priority: 0.9,
        changefreq: ChangeFreq::Weekly,
    });
    pages
}

/// Require an absolute http(s) URL and strip any trailing slash so that
/// `{url}/{path}` joins cleanly.
fn validate_site_url(url: &str) -> Result<String> {
    let trimmed = url.trim().trim_end_matches('/');
    let host = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .ok_or_else(|| {
            Error::ConfigParse(format!(
                "site.url must be an absolute http(s) URL: '{}'",
                url
            ))
        })?;

    if host.is_empty() || host.contains(char::is_whitespace) {
        return Err(Error::ConfigParse(format!("Invalid site.url: '{}'", url)));
    }

    Ok(trimmed.to_string())
}

fn absolute_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Basic email shape check: one '@', non-empty local part, dotted domain
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.contains(char::is_whitespace)
}

/// Validate and convert a path string to PathBuf.
///
/// Rejects absolute paths and parent directory references (`..`), so a
/// site.toml can only point inside its own project directory.
///
/// # Examples
///
/// ```text
/// validate_path(".contentlayer/generated", "content.dir")  → Ok(PathBuf)
/// validate_path("/etc", "content.dir")                      → Err("Absolute paths not allowed...")
/// validate_path("../public", "feeds.output")                → Err("Parent directory references...")
/// ```
fn validate_path(path_str: &str, field_name: &str) -> Result<PathBuf> {
    let path = Path::new(path_str);

    // Reject absolute paths
    if path.is_absolute() {
        return Err(Error::ConfigParse(format!(
            "Absolute paths not allowed in '{}': '{}'. Use relative paths only.",
            field_name, path_str
        )));
    }

    // Check for parent directory references
    for component in path.components() {
        if component == std::path::Component::ParentDir {
            return Err(Error::ConfigParse(format!(
                "Parent directory references (..) not allowed in '{}': '{}'",
                field_name, path_str
            )));
        }
    }

    // Ensure path is not empty
    if path_str.trim().is_empty() {
        return Err(Error::ConfigParse(format!(
            "Empty path in '{}' field",
            field_name
        )));
    }

    Ok(path.to_path_buf())
}
