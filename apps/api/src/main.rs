mod analysis;
mod config;
mod errors;
mod matching;
mod models;
mod pipeline;
mod routes;
mod skills;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::extractor::DocumentTextExtractor;
use crate::config::Config;
use crate::matching::catalog::{load_catalog, source_from_config, CatalogHandle};
use crate::matching::ranker::{JobRanker, TfIdfRanker};
use crate::routes::build_router;
use crate::skills::SkillCatalog;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Jobmatch API v{}", env!("CARGO_PKG_VERSION"));

    // Skill vocabulary: fixed for the lifetime of the process
    let skills = match &config.skills_path {
        Some(path) => SkillCatalog::from_file(path).await?,
        None => SkillCatalog::builtin().context("built-in skills bank is invalid")?,
    };
    info!("Skill catalog ready ({} skills)", skills.len());

    // Job catalog: initial snapshot, replaced wholesale on reload
    let catalog_source = source_from_config(&config)?;
    let catalog = load_catalog(catalog_source.as_ref())
        .await
        .with_context(|| format!("failed to load job catalog from {}", catalog_source.describe()))?;

    let ranker: Arc<dyn JobRanker> = Arc::new(TfIdfRanker);
    info!("Job ranker initialized (backend: {})", ranker.backend());

    let state = AppState {
        config: config.clone(),
        skills: Arc::new(skills),
        catalog: Arc::new(CatalogHandle::new(catalog)),
        catalog_source,
        extractor: Arc::new(DocumentTextExtractor),
        ranker,
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
