use super::validate::ensure_valid;
use crate::project::Project;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use portfolio_kit_generator::generate_site;
use portfolio_kit_validator::validate_snapshot;
use std::fs;
use std::path::{Path, PathBuf};

/// Render feeds and the sitemap into the output directory
pub async fn run(path: PathBuf, output: Option<PathBuf>) -> Result<()> {
    println!("🔨 Building feeds and sitemap...");
    println!("   Source: {}", path.display());

    let project = Project::load(&path)?;
    let output = project.output_dir(output);
    println!("   Output: {}", output.display());
    println!();

    println!("✓ Loaded: {}", project.config.site.title);
    println!("  Posts: {}", project.snapshot.posts().len());
    println!("  Case studies: {}", project.snapshot.case_studies().len());
    println!();

    ensure_valid(&validate_snapshot(&project.snapshot))?;

    let written = build_into(&project, &output, Utc::now())?;

    println!();
    println!("✅ Build complete! {} files written", written.len());
    println!("   Output: {}", output.display());
    println!();

    Ok(())
}

/// Render everything in memory, then write. Nothing touches the output
/// directory unless every document rendered.
pub fn build_into(project: &Project, output: &Path, now: DateTime<Utc>) -> Result<Vec<PathBuf>> {
    if !project.config.feeds.enabled {
        println!("   Feeds disabled in site.toml, writing sitemap only");
    }

    let site = generate_site(&project.snapshot, &project.config, now)
        .context("Failed to render feeds and sitemap")?;

    println!("📁 Writing to {}...", output.display());
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory {}", output.display()))?;

    let mut written = Vec::new();
    for file in site.files() {
        let dest = output.join(&file.path);
        fs::write(&dest, &file.contents)
            .with_context(|| format!("Failed to write {}", dest.display()))?;
        println!("   ✓ {}", file.path);
        written.push(dest);
    }

    Ok(written)
}
