use anyhow::{Context, Result};
use portfolio_kit_core::{ContentSnapshot, SiteConfig, load_snapshot, parse_site_toml};
use std::path::{Path, PathBuf};

pub const SITE_TOML: &str = "site.toml";

/// A site directory: its parsed `site.toml` and the content snapshot it
/// points at
pub struct Project {
    pub root: PathBuf,
    pub config: SiteConfig,
    pub snapshot: ContentSnapshot,
}

impl Project {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!("Site directory does not exist: {}", path.display());
        }

        let site_toml = path.join(SITE_TOML);
        if !site_toml.exists() {
            anyhow::bail!("{} not found in {}", SITE_TOML, path.display());
        }

        let config = parse_site_toml(&site_toml).context("Failed to parse site.toml")?;

        let content_dir = path.join(&config.content.dir);
        let snapshot = load_snapshot(&content_dir).with_context(|| {
            format!("Failed to load content from {}", content_dir.display())
        })?;

        Ok(Self {
            root: path.to_path_buf(),
            config,
            snapshot,
        })
    }

    /// Explicit output directory, or `feeds.output` under the site directory
    pub fn output_dir(&self, output: Option<PathBuf>) -> PathBuf {
        output.unwrap_or_else(|| self.root.join(&self.config.feeds.output))
    }
}
