use crate::project::Project;
use anyhow::Result;
use portfolio_kit_validator::{ValidationReport, validate_snapshot};
use std::path::PathBuf;

pub async fn run(path: PathBuf) -> Result<()> {
    println!("Validating site at: {}", path.display());

    let project = Project::load(&path)?;
    println!("✓ site.toml valid");
    println!("  Site: {}", project.config.site.title);

    let report = validate_snapshot(&project.snapshot);
    for line in &report.info {
        println!("  {}", line);
    }

    ensure_valid(&report)?;
    println!("\n✅ Content valid");
    Ok(())
}

/// Print warnings and errors; fail when any error was reported.
pub fn ensure_valid(report: &ValidationReport) -> Result<()> {
    for warning in &report.warnings {
        eprintln!("   ⚠ Warning: {}", warning);
    }
    for error in &report.errors {
        eprintln!("   ✗ {}", error);
    }

    if !report.is_ok() {
        anyhow::bail!("Content validation failed with {} error(s)", report.errors.len());
    }
    Ok(())
}
