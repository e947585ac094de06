use serde::{Deserialize, Serialize};

/// One row of the job catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub role: String,
    /// Free-text skills/features for the posting. Empty when the CSV cell is missing.
    pub feature_text: String,
}

impl JobRecord {
    pub fn new(role: impl Into<String>, feature_text: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            feature_text: feature_text.into(),
        }
    }
}

/// A catalog row scored against one candidate. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredJob {
    pub role: String,
    pub match_score: f64, // 0.0 – 100.0
    pub apply_link: String,
}

/// Scored jobs, best first, already truncated to the requested top-N.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankedResult(Vec<ScoredJob>);

impl RankedResult {
    pub fn new(jobs: Vec<ScoredJob>) -> Self {
        Self(jobs)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn top(&self) -> Option<&ScoredJob> {
        self.0.first()
    }

    #[cfg(test)]
    pub fn iter(&self) -> std::slice::Iter<'_, ScoredJob> {
        self.0.iter()
    }
}
