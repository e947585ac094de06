pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as resume_handlers;
use crate::matching::handlers as job_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // Résumé API
        .route("/api/v1/resumes/analyze", post(resume_handlers::handle_analyze))
        .route(
            "/api/v1/resumes/recommend",
            post(resume_handlers::handle_recommend),
        )
        // Jobs API
        .route("/api/v1/jobs/recommend", post(job_handlers::handle_recommend_jobs))
        // Catalog API
        .route("/api/v1/catalog", get(job_handlers::handle_catalog_info))
        .route(
            "/api/v1/catalog/reload",
            post(job_handlers::handle_catalog_reload),
        )
        .layer(body_limit)
        .with_state(state)
}
