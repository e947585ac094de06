//! Axum route handlers for the Résumé API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::debug;

use crate::analysis::extractor::{Document, ExtractionError};
use crate::errors::AppError;
use crate::matching::handlers::resolve_top_n;
use crate::models::job::RankedResult;
use crate::models::profile::ExtractedProfile;
use crate::pipeline;
use crate::state::AppState;

const RESUME_FIELD: &str = "resume";
const TOP_N_FIELD: &str = "top_n";

#[derive(Debug, Serialize)]
pub struct ResumeRecommendationResponse {
    pub profile: ExtractedProfile,
    pub recommendations: RankedResult,
    pub scorer_backend: String,
}

/// Fields pulled out of a résumé upload form.
#[derive(Debug)]
struct ResumeUpload {
    document: Document,
    top_n: Option<usize>,
}

async fn read_upload(mut multipart: Multipart) -> Result<ResumeUpload, AppError> {
    let mut document = None;
    let mut top_n = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        match field.name() {
            Some(RESUME_FIELD) => {
                let content_type = field.content_type().map(str::to_string);
                let file_name = field.file_name().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("failed to read résumé: {e}")))?;
                debug!("Received résumé upload: {} bytes, {:?}", bytes.len(), content_type);
                document = Some(Document {
                    bytes,
                    content_type,
                    file_name,
                });
            }
            Some(TOP_N_FIELD) => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("failed to read top_n: {e}")))?;
                let parsed = raw.trim().parse::<usize>().map_err(|_| {
                    AppError::Validation(format!("top_n must be a positive integer, got '{raw}'"))
                })?;
                top_n = Some(parsed);
            }
            _ => {}
        }
    }

    let document = document
        .ok_or_else(|| AppError::Validation(format!("missing '{RESUME_FIELD}' file field")))?;
    Ok(ResumeUpload { document, top_n })
}

/// Runs extraction and analysis on the blocking pool.
async fn analyze_document(state: &AppState, document: Document) -> Result<ExtractedProfile, AppError> {
    let extractor = state.extractor.clone();
    let skills = state.skills.clone();

    let outcome = tokio::task::spawn_blocking(move || {
        pipeline::analyze(extractor.as_ref(), &skills, &document)
    })
    .await;

    match outcome {
        Ok(result) => Ok(result?),
        Err(e) if e.is_panic() => Err(ExtractionError::ParserPanicked.into()),
        Err(e) => Err(AppError::Internal(e.into())),
    }
}

/// POST /api/v1/resumes/analyze
///
/// Multipart upload with a `resume` file. Returns the extracted name and skills.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ExtractedProfile>, AppError> {
    let upload = read_upload(multipart).await?;
    let profile = analyze_document(&state, upload.document).await?;
    Ok(Json(profile))
}

/// POST /api/v1/resumes/recommend
///
/// Full pipeline: résumé → profile → ranked jobs against the current catalog snapshot.
/// An optional `top_n` form field overrides the configured default.
pub async fn handle_recommend(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ResumeRecommendationResponse>, AppError> {
    let upload = read_upload(multipart).await?;
    let top_n = resolve_top_n(upload.top_n, state.config.default_top_n)?;

    let profile = analyze_document(&state, upload.document).await?;

    let catalog = state.catalog.snapshot();
    let recommendations = pipeline::recommend(state.ranker.as_ref(), &profile, &catalog, top_n);

    Ok(Json(ResumeRecommendationResponse {
        profile,
        recommendations,
        scorer_backend: state.ranker.backend().to_string(),
    }))
}
