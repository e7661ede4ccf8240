use crate::project::Project;
use anyhow::{Context, Result};
use portfolio_kit_generator::route_surface;
use std::path::PathBuf;

/// Print every route's parameters as JSON for the page generator
pub async fn run(path: PathBuf) -> Result<()> {
    let project = Project::load(&path)?;
    let surface = route_surface(&project.snapshot);

    let json = serde_json::to_string_pretty(&surface).context("Failed to serialize routes")?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::fixtures;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_routes_for_site() {
        let dir = TempDir::new().unwrap();
        fixtures::write_site(dir.path());

        run(dir.path().to_path_buf()).await.unwrap();

        let project = Project::load(dir.path()).unwrap();
        let surface = route_surface(&project.snapshot);
        assert_eq!(surface.posts.len(), 3);
        assert_eq!(surface.categories.len(), 2);
        assert_eq!(surface.tags[0].tag_slug, "full-stack");
    }
}
