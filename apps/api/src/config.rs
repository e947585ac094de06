use std::path::PathBuf;

use anyhow::{bail, Context, Result};

const DEFAULT_CATALOG_PATH: &str = "data/jobs_dataset_with_features.csv";
const DEFAULT_FEATURES_COLUMN: &str = "Features";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub jobs_catalog_path: PathBuf,
    /// When set, the catalog is fetched over HTTP instead of read from disk.
    pub jobs_catalog_url: Option<String>,
    pub features_column: String,
    pub skills_path: Option<PathBuf>,
    pub default_top_n: usize,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let default_top_n = parse_env("DEFAULT_TOP_N", 1usize)?;
        if default_top_n == 0 {
            bail!("DEFAULT_TOP_N must be at least 1");
        }

        Ok(Config {
            jobs_catalog_path: optional_env("JOBS_CATALOG_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH)),
            jobs_catalog_url: optional_env("JOBS_CATALOG_URL"),
            features_column: optional_env("FEATURES_COLUMN")
                .unwrap_or_else(|| DEFAULT_FEATURES_COLUMN.to_string()),
            skills_path: optional_env("SKILLS_PATH").map(PathBuf::from),
            default_top_n,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            port: parse_env("PORT", 8080u16)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
impl Config {
    /// Config pointing at a catalog file, with defaults for everything else.
    pub fn for_catalog(path: impl Into<PathBuf>) -> Self {
        Config {
            jobs_catalog_path: path.into(),
            jobs_catalog_url: None,
            features_column: DEFAULT_FEATURES_COLUMN.to_string(),
            skills_path: None,
            default_top_n: 1,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            port: 0,
            rust_log: "info".to_string(),
        }
    }
}
