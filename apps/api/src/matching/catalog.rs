//! Job catalog snapshots and the sources they are loaded from.

use std::io::Read;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Serialize;
use tracing::info;

use crate::config::Config;
use crate::errors::CatalogLoadError;
use crate::models::job::JobRecord;

pub const ROLE_COLUMN: &str = "Role";

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Immutable set of job rows. Requests hold an `Arc` to one snapshot for their
/// whole lifetime; reloads build a new snapshot instead of mutating this one.
#[derive(Debug, Clone)]
pub struct JobCatalog {
    jobs: Vec<JobRecord>,
    source: String,
    loaded_at: DateTime<Utc>,
}

/// Summary of the current snapshot, returned by the catalog endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogInfo {
    pub job_count: usize,
    pub skill_count: usize,
    pub source: String,
    pub loaded_at: DateTime<Utc>,
}

impl JobCatalog {
    pub fn new(jobs: Vec<JobRecord>, source: impl Into<String>) -> Self {
        Self {
            jobs,
            source: source.into(),
            loaded_at: Utc::now(),
        }
    }

    pub fn jobs(&self) -> &[JobRecord] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn info(&self, skill_count: usize) -> CatalogInfo {
        CatalogInfo {
            job_count: self.len(),
            skill_count,
            source: self.source.clone(),
            loaded_at: self.loaded_at,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// CSV parsing
// ────────────────────────────────────────────────────────────────────────────

/// Parses a job catalog CSV.
///
/// The `Role` column and `features_column` must both be present in the header.
/// Every row needs a non-empty role; a missing or short feature cell becomes "".
pub fn parse_jobs_csv<R: Read>(
    reader: R,
    features_column: &str,
) -> Result<Vec<JobRecord>, CatalogLoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| CatalogLoadError::MissingColumn(name.to_string()))
    };
    let role_idx = column(ROLE_COLUMN)?;
    let features_idx = column(features_column)?;

    let mut jobs = Vec::new();
    for (idx, record) in csv_reader.records().enumerate() {
        let record = record?;
        // Header is line 1.
        let row = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(idx + 2);

        let role = record.get(role_idx).unwrap_or("");
        if role.trim().is_empty() {
            return Err(CatalogLoadError::MissingRole { row });
        }

        jobs.push(JobRecord::new(
            role,
            record.get(features_idx).unwrap_or(""),
        ));
    }

    Ok(jobs)
}

// ────────────────────────────────────────────────────────────────────────────
// Sources
// ────────────────────────────────────────────────────────────────────────────

/// Where a job catalog comes from. Implement this to add a new backing store.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self) -> Result<Vec<JobRecord>, CatalogLoadError>;

    /// Human-readable origin, e.g. a path or URL.
    fn describe(&self) -> String;
}

/// Reads the catalog CSV from local disk.
pub struct CsvFileSource {
    path: PathBuf,
    features_column: String,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>, features_column: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            features_column: features_column.into(),
        }
    }
}

#[async_trait]
impl CatalogSource for CsvFileSource {
    async fn load(&self) -> Result<Vec<JobRecord>, CatalogLoadError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| CatalogLoadError::Io {
                path: self.path.display().to_string(),
                source,
            })?;
        parse_jobs_csv(bytes.as_slice(), &self.features_column)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Downloads the catalog CSV over HTTP.
pub struct HttpCsvSource {
    client: Client,
    url: String,
    features_column: String,
}

impl HttpCsvSource {
    pub fn new(
        url: impl Into<String>,
        features_column: impl Into<String>,
    ) -> Result<Self, CatalogLoadError> {
        let client = Client::builder().timeout(FETCH_TIMEOUT).build()?;
        Ok(Self {
            client,
            url: url.into(),
            features_column: features_column.into(),
        })
    }
}

#[async_trait]
impl CatalogSource for HttpCsvSource {
    async fn load(&self) -> Result<Vec<JobRecord>, CatalogLoadError> {
        info!("Fetching job catalog from {}", self.url);

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogLoadError::HttpStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        parse_jobs_csv(body.as_ref(), &self.features_column)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Picks the configured source: HTTP when `JOBS_CATALOG_URL` is set, else the CSV file.
pub fn source_from_config(config: &Config) -> Result<Arc<dyn CatalogSource>, CatalogLoadError> {
    let source: Arc<dyn CatalogSource> = match &config.jobs_catalog_url {
        Some(url) => Arc::new(HttpCsvSource::new(url.clone(), config.features_column.clone())?),
        None => Arc::new(CsvFileSource::new(
            config.jobs_catalog_path.clone(),
            config.features_column.clone(),
        )),
    };
    Ok(source)
}

/// Loads a fresh snapshot from `source`.
pub async fn load_catalog(source: &dyn CatalogSource) -> Result<JobCatalog, CatalogLoadError> {
    let jobs = source.load().await?;
    let catalog = JobCatalog::new(jobs, source.describe());
    info!(
        "Loaded {} jobs from {}",
        catalog.len(),
        catalog.source()
    );
    Ok(catalog)
}

// ────────────────────────────────────────────────────────────────────────────
// Snapshot handle
// ────────────────────────────────────────────────────────────────────────────

/// Shared pointer to the current snapshot. The lock only guards the `Arc`
/// swap, never the catalog contents.
#[derive(Debug)]
pub struct CatalogHandle {
    current: RwLock<Arc<JobCatalog>>,
}

impl CatalogHandle {
    pub fn new(catalog: JobCatalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    pub fn snapshot(&self) -> Arc<JobCatalog> {
        // A poisoned lock still holds a complete Arc.
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&*guard)
    }

    /// Installs `catalog` as the current snapshot and returns it.
    pub fn replace(&self, catalog: JobCatalog) -> Arc<JobCatalog> {
        let next = Arc::new(catalog);
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        *guard = Arc::clone(&next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE_CSV: &str = "\
Role,Features
Data Scientist,python sql machine learning
Web Developer,javascript html css
";

    #[test]
    fn test_parse_sample_catalog() {
        let jobs = parse_jobs_csv(SAMPLE_CSV.as_bytes(), "Features").unwrap();
        assert_eq!(
            jobs,
            vec![
                JobRecord::new("Data Scientist", "python sql machine learning"),
                JobRecord::new("Web Developer", "javascript html css"),
            ]
        );
    }

    #[test]
    fn test_extra_columns_and_order_are_ignored() {
        let csv = "Id,Features,Category,Role\n1,\"rust, tokio\",eng,Backend Engineer\n";
        let jobs = parse_jobs_csv(csv.as_bytes(), "Features").unwrap();
        assert_eq!(jobs, vec![JobRecord::new("Backend Engineer", "rust, tokio")]);
    }

    #[test]
    fn test_missing_feature_cell_becomes_empty() {
        let csv = "Role,Features\nDesigner,\nWriter\n";
        let jobs = parse_jobs_csv(csv.as_bytes(), "Features").unwrap();
        assert_eq!(jobs[0].feature_text, "");
        assert_eq!(jobs[1].feature_text, "");
    }

    #[test]
    fn test_missing_role_column_is_error() {
        let csv = "Title,Features\nDev,python\n";
        let err = parse_jobs_csv(csv.as_bytes(), "Features").unwrap_err();
        assert!(matches!(err, CatalogLoadError::MissingColumn(ref c) if c == "Role"));
    }

    #[test]
    fn test_missing_features_column_is_error() {
        let csv = "Role,Skills\nDev,python\n";
        let err = parse_jobs_csv(csv.as_bytes(), "Features").unwrap_err();
        assert!(matches!(err, CatalogLoadError::MissingColumn(ref c) if c == "Features"));
    }

    #[test]
    fn test_custom_features_column() {
        let csv = "Role,Skills\nDev,python\n";
        let jobs = parse_jobs_csv(csv.as_bytes(), "Skills").unwrap();
        assert_eq!(jobs[0].feature_text, "python");
    }

    #[test]
    fn test_empty_role_is_error_with_row() {
        let csv = "Role,Features\nDev,python\n  ,sql\n";
        let err = parse_jobs_csv(csv.as_bytes(), "Features").unwrap_err();
        assert!(matches!(err, CatalogLoadError::MissingRole { row: 3 }));
    }

    #[test]
    fn test_header_only_is_empty_catalog() {
        let jobs = parse_jobs_csv("Role,Features\n".as_bytes(), "Features").unwrap();
        assert!(jobs.is_empty());
    }

    #[tokio::test]
    async fn test_csv_file_source_loads() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_CSV.as_bytes()).unwrap();

        let source = CsvFileSource::new(file.path(), "Features");
        let catalog = load_catalog(&source).await.unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.source(), file.path().display().to_string());
    }

    #[tokio::test]
    async fn test_csv_file_source_missing_file() {
        let source = CsvFileSource::new("/nonexistent/jobs.csv", "Features");
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, CatalogLoadError::Io { .. }));
    }

    #[test]
    fn test_source_from_config_prefers_file_without_url() {
        let config = Config::for_catalog("data/jobs.csv");
        let source = source_from_config(&config).unwrap();
        assert_eq!(source.describe(), "data/jobs.csv");
    }

    #[test]
    fn test_handle_replace_does_not_touch_old_snapshot() {
        let handle = CatalogHandle::new(JobCatalog::new(
            vec![JobRecord::new("Old", "python")],
            "first",
        ));
        let before = handle.snapshot();

        handle.replace(JobCatalog::new(
            vec![JobRecord::new("New", "rust"), JobRecord::new("Newer", "go")],
            "second",
        ));

        assert_eq!(before.len(), 1);
        assert_eq!(before.jobs()[0].role, "Old");
        let after = handle.snapshot();
        assert_eq!(after.len(), 2);
        assert_eq!(after.source(), "second");
    }

    #[test]
    fn test_info_reports_counts() {
        let catalog = JobCatalog::new(vec![JobRecord::new("Dev", "")], "mem");
        let info = catalog.info(42);
        assert_eq!(info.job_count, 1);
        assert_eq!(info.skill_count, 42);
        assert_eq!(info.source, "mem");
    }
}
