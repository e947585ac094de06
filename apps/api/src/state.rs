use std::sync::Arc;

use crate::analysis::extractor::TextExtractor;
use crate::config::Config;
use crate::matching::catalog::{CatalogHandle, CatalogSource};
use crate::matching::ranker::JobRanker;
use crate::skills::SkillCatalog;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Everything here is read-only per request: handlers take a catalog
/// snapshot up front and never see it change underneath them.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub skills: Arc<SkillCatalog>,
    pub catalog: Arc<CatalogHandle>,
    /// Where `/api/v1/catalog/reload` pulls a fresh snapshot from.
    pub catalog_source: Arc<dyn CatalogSource>,
    pub extractor: Arc<dyn TextExtractor>,
    /// Pluggable ranker. Default: TfIdfRanker.
    pub ranker: Arc<dyn JobRanker>,
}
