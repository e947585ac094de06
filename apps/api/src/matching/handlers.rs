//! Axum route handlers for the Jobs and Catalog APIs.

use std::collections::BTreeSet;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::matching::catalog::{load_catalog, CatalogInfo};
use crate::models::job::RankedResult;
use crate::models::profile::ExtractedProfile;
use crate::pipeline;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RecommendJobsRequest {
    pub skills: Vec<String>,
    #[serde(default)]
    pub top_n: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub recommendations: RankedResult,
    pub scorer_backend: String,
    pub catalog_size: usize,
}

/// Trims and lower-cases caller-supplied skills so case variants collapse
/// into one term.
fn normalize_skills(raw: &[String]) -> BTreeSet<String> {
    raw.iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Falls back to the configured default; zero is rejected.
pub(crate) fn resolve_top_n(requested: Option<usize>, default: usize) -> Result<usize, AppError> {
    match requested {
        Some(0) => Err(AppError::Validation("top_n must be at least 1".to_string())),
        Some(n) => Ok(n),
        None => Ok(default),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/jobs/recommend
///
/// Ranks the current catalog against an explicit skill list, skipping résumé analysis.
pub async fn handle_recommend_jobs(
    State(state): State<AppState>,
    Json(request): Json<RecommendJobsRequest>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let top_n = resolve_top_n(request.top_n, state.config.default_top_n)?;

    let profile = ExtractedProfile {
        skills: normalize_skills(&request.skills),
        ..Default::default()
    };

    let catalog = state.catalog.snapshot();
    let recommendations = pipeline::recommend(state.ranker.as_ref(), &profile, &catalog, top_n);

    Ok(Json(RecommendationsResponse {
        recommendations,
        scorer_backend: state.ranker.backend().to_string(),
        catalog_size: catalog.len(),
    }))
}

/// GET /api/v1/catalog
pub async fn handle_catalog_info(State(state): State<AppState>) -> Json<CatalogInfo> {
    Json(state.catalog.snapshot().info(state.skills.len()))
}

/// POST /api/v1/catalog/reload
///
/// Loads a fresh snapshot from the configured source and swaps it in.
/// On failure the previous snapshot stays in place.
pub async fn handle_catalog_reload(
    State(state): State<AppState>,
) -> Result<Json<CatalogInfo>, AppError> {
    let fresh = load_catalog(state.catalog_source.as_ref()).await?;
    let current = state.catalog.replace(fresh);
    info!("Job catalog reloaded: {} jobs", current.len());
    Ok(Json(current.info(state.skills.len())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_top_n_default() {
        assert_eq!(resolve_top_n(None, 3).unwrap(), 3);
    }

    #[test]
    fn test_resolve_top_n_explicit() {
        assert_eq!(resolve_top_n(Some(5), 1).unwrap(), 5);
    }

    #[test]
    fn test_resolve_top_n_zero_rejected() {
        assert!(matches!(resolve_top_n(Some(0), 1), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_normalize_skills_collapses_case_variants() {
        let raw = vec![
            "Python".to_string(),
            " python ".to_string(),
            "".to_string(),
            "SQL".to_string(),
        ];
        let skills: Vec<String> = normalize_skills(&raw).into_iter().collect();
        assert_eq!(skills, vec!["python", "sql"]);
    }

    #[test]
    fn test_request_top_n_is_optional() {
        let req: RecommendJobsRequest = serde_json::from_str(r#"{"skills": ["python"]}"#).unwrap();
        assert_eq!(req.skills, vec!["python"]);
        assert!(req.top_n.is_none());
    }
}
