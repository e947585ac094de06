use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::extractor::ExtractionError;

/// Failure to build the skill catalog or a job catalog snapshot.
///
/// Distinct from "no skills found" / "no jobs matched", which are empty
/// collections and never errors.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalog '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch catalog: {0}")]
    Http(#[from] reqwest::Error),

    #[error("catalog fetch from {url} returned status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("malformed catalog CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("catalog is missing required column '{0}'")]
    MissingColumn(String),

    #[error("catalog row {row} has an empty Role")]
    MissingRole { row: usize },

    #[error("skill '{0}' appears more than once (case-insensitive)")]
    DuplicateSkill(String),

    #[error("invalid skill label '{label}': {reason}")]
    InvalidSkill { label: String, reason: String },
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Catalog load error: {0}")]
    CatalogLoad(#[from] CatalogLoadError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::Extraction(_) => (StatusCode::UNPROCESSABLE_ENTITY, "EXTRACTION_ERROR"),
            AppError::CatalogLoad(_) => (StatusCode::SERVICE_UNAVAILABLE, "CATALOG_UNAVAILABLE"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match &self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Extraction(e) => {
                tracing::warn!("Extraction error: {e}");
                e.to_string()
            }
            AppError::CatalogLoad(e) => {
                tracing::error!("Catalog load error: {e}");
                e.to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal server error occurred".to_string()
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let (status, code) = AppError::Validation("top_n must be at least 1".into()).status_and_code();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "VALIDATION_ERROR");
    }

    #[test]
    fn test_extraction_maps_to_unprocessable() {
        let err: AppError = ExtractionError::UnsupportedFormat("image/png".into()).into();
        assert_eq!(err.status_and_code().0, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_catalog_load_maps_to_service_unavailable() {
        let err: AppError = CatalogLoadError::MissingColumn("Role".into()).into();
        let (status, code) = err.status_and_code();
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(code, "CATALOG_UNAVAILABLE");
    }

    #[test]
    fn test_missing_column_message_names_column() {
        let err = CatalogLoadError::MissingColumn("Features".into());
        assert!(err.to_string().contains("Features"));
    }
}
