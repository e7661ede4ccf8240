use super::validate::ensure_valid;
use crate::project::Project;
use anyhow::{Context, Result};
use axum::{
    Router,
    extract::State,
    http::{Uri, header},
    response::{IntoResponse, Redirect},
    routing::get,
};
use chrono::Utc;
use portfolio_kit_core::{ContentSnapshot, SiteConfig};
use portfolio_kit_generator::Sitemap;
use portfolio_kit_validator::validate_snapshot;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tower_http::services::ServeDir;

#[derive(Clone)]
struct AppState {
    snapshot: Arc<ContentSnapshot>,
    config: Arc<SiteConfig>,
}

/// Serve the sitemap, legacy redirects and the built output directory.
///
/// Content is loaded once at startup; restart to pick up changes.
pub async fn run(path: PathBuf, port: u16) -> Result<()> {
    println!("🌐 Starting server...");
    println!("   Site: {}", path.display());

    let project = Project::load(&path)?;
    ensure_valid(&validate_snapshot(&project.snapshot))?;

    let output = project.output_dir(None);
    println!("   ✓ Loaded: {}", project.config.site.title);
    println!("   ✓ Posts: {}", project.snapshot.posts().len());
    println!("   ✓ Case studies: {}", project.snapshot.case_studies().len());
    if !output.exists() {
        eprintln!(
            "   ⚠ Warning: {} does not exist, run 'portfolio-kit build' for feeds",
            output.display()
        );
    }

    let state = AppState {
        snapshot: Arc::new(project.snapshot),
        config: Arc::new(project.config),
    };
    let app = router(state, output);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    println!("\n🚀 Ready at: http://localhost:{}", port);
    println!("   Sitemap: http://localhost:{}/sitemap.xml", port);
    println!("   Press Ctrl+C to stop\n");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to port")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn router(state: AppState, output: PathBuf) -> Router {
    Router::new()
        .route("/sitemap.xml", get(sitemap_handler))
        .route("/blog", get(legacy_redirect))
        .route("/blog/{slug}", get(legacy_redirect))
        .route("/blog/categories/{category}", get(legacy_redirect))
        .fallback_service(ServeDir::new(output))
        .with_state(state)
}

async fn sitemap_handler(State(state): State<AppState>) -> impl IntoResponse {
    let today = Utc::now().date_naive();
    let xml = Sitemap::build(&state.snapshot, &state.config, today).into_xml();
    let max_age = state.config.sitemap.max_age;

    (
        [
            (header::CONTENT_TYPE, "application/xml".to_string()),
            (
                header::CACHE_CONTROL,
                format!("public, max-age={max_age}, s-maxage={max_age}"),
            ),
        ],
        xml,
    )
}

/// `/blog/...` moved under the English prefix. The request path is forwarded
/// as received, still percent-encoded, so it is always a valid `Location`.
async fn legacy_redirect(uri: Uri) -> Redirect {
    let target = match uri.query() {
        Some(query) => format!("/en{}?{}", uri.path(), query),
        None => format!("/en{}", uri.path()),
    };
    Redirect::permanent(&target)
}
