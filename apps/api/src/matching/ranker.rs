//! Job ranking — pluggable, trait-based ranker that scores catalog rows against a skill set.
//!
//! Default: `TfIdfRanker` (TF-IDF + cosine similarity, deterministic).
//!
//! `AppState` holds an `Arc<dyn JobRanker>`.

use std::collections::BTreeSet;

use tracing::debug;

use crate::matching::tfidf::{cosine_similarity, TfIdfModel};
use crate::models::job::{JobRecord, RankedResult, ScoredJob};

pub const APPLY_LINK_BASE: &str = "https://www.linkedin.com/jobs/search/?keywords=";

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap ranking backends without touching handlers.
pub trait JobRanker: Send + Sync {
    fn rank(
        &self,
        candidate_skills: &BTreeSet<String>,
        jobs: &[JobRecord],
        top_n: usize,
    ) -> RankedResult;

    /// Short backend label, surfaced in responses.
    fn backend(&self) -> &'static str;
}

pub struct TfIdfRanker;

impl JobRanker for TfIdfRanker {
    fn rank(
        &self,
        candidate_skills: &BTreeSet<String>,
        jobs: &[JobRecord],
        top_n: usize,
    ) -> RankedResult {
        get_top_jobs(candidate_skills, jobs, top_n)
    }

    fn backend(&self) -> &'static str {
        "tfidf"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core ranking algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Scores every job against the candidate and returns the best `top_n`.
///
/// Algorithm:
/// 1. candidate profile = skills joined by spaces, lower-cased
/// 2. job text = lower-cased feature text
/// 3. one TF-IDF model fitted over all job texts plus the candidate profile
/// 4. match_score = cosine(candidate, job) × 100
/// 5. stable sort by score descending, so catalog order breaks ties
/// 6. keep the first `top_n`
pub fn get_top_jobs(
    candidate_skills: &BTreeSet<String>,
    jobs: &[JobRecord],
    top_n: usize,
) -> RankedResult {
    if jobs.is_empty() {
        return RankedResult::default();
    }

    let candidate_profile = build_candidate_profile(candidate_skills);

    // The candidate goes last so job indices line up with the vectors.
    let mut corpus: Vec<String> = jobs.iter().map(|j| j.feature_text.to_lowercase()).collect();
    corpus.push(candidate_profile);

    let (model, mut vectors) = TfIdfModel::fit_transform(&corpus);
    let candidate_vector = vectors.pop().unwrap_or_default();

    debug!(
        "Ranking {} jobs over a vocabulary of {} terms",
        jobs.len(),
        model.vocabulary_len()
    );

    let mut scored: Vec<ScoredJob> = jobs
        .iter()
        .zip(vectors.iter())
        .map(|(job, job_vector)| {
            let similarity = cosine_similarity(&candidate_vector, job_vector);
            ScoredJob {
                role: job.role.clone(),
                match_score: (similarity * 100.0).clamp(0.0, 100.0),
                apply_link: apply_link(&job.role),
            }
        })
        .collect();

    // `sort_by` is stable.
    scored.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
    scored.truncate(top_n);

    RankedResult::new(scored)
}

fn build_candidate_profile(skills: &BTreeSet<String>) -> String {
    skills
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Job-search link for a role. Only spaces are encoded (as `%20`);
/// every other character is left as is.
pub fn apply_link(role: &str) -> String {
    format!("{APPLY_LINK_BASE}{}", role.replace(' ', "%20"))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
