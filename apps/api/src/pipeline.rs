//! The two operations exposed to the HTTP layer: `analyze` and `recommend`.
//!
//! bytes → TextExtractor → text → extract_name / extract_skills → profile
//! profile + catalog snapshot → JobRanker → ranked jobs

use tracing::info;

use crate::analysis::extractor::{Document, ExtractionError, TextExtractor};
use crate::analysis::name::extract_name;
use crate::analysis::skills::extract_skills;
use crate::matching::catalog::JobCatalog;
use crate::matching::ranker::JobRanker;
use crate::models::job::RankedResult;
use crate::models::profile::ExtractedProfile;
use crate::skills::SkillCatalog;

/// Extracts text from `document` and derives the candidate profile.
///
/// Empty text is valid and yields the default name with no skills.
pub fn analyze(
    extractor: &dyn TextExtractor,
    skills: &SkillCatalog,
    document: &Document,
) -> Result<ExtractedProfile, ExtractionError> {
    let text = extractor.extract(document)?;
    let profile = ExtractedProfile {
        name: extract_name(&text),
        skills: extract_skills(&text, skills),
    };
    info!(
        "Analyzed résumé: {} chars, {} skills matched",
        text.len(),
        profile.skills.len()
    );
    Ok(profile)
}

/// Ranks the snapshot's jobs against the profile's skills.
pub fn recommend(
    ranker: &dyn JobRanker,
    profile: &ExtractedProfile,
    catalog: &JobCatalog,
    top_n: usize,
) -> RankedResult {
    ranker.rank(&profile.skills, catalog.jobs(), top_n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::extractor::DocumentTextExtractor;
    use crate::matching::ranker::TfIdfRanker;
    use crate::models::job::JobRecord;

    const RESUME: &str = "\
Priya Natarajan
Data Analyst
Skills: Python, SQL, Tableau and some Machine Learning.
";

    fn skills() -> SkillCatalog {
        SkillCatalog::new(["Python", "SQL", "Tableau", "Machine Learning", "JavaScript"]).unwrap()
    }

    fn catalog() -> JobCatalog {
        JobCatalog::new(
            vec![
                JobRecord::new("Web Developer", "javascript html css"),
                JobRecord::new("Data Scientist", "python sql machine learning"),
                JobRecord::new("BI Analyst", "tableau sql excel"),
            ],
            "memory",
        )
    }

    #[test]
    fn test_analyze_plain_text_resume() {
        let doc = Document::new(RESUME).with_content_type("text/plain");
        let profile = analyze(&DocumentTextExtractor, &skills(), &doc).unwrap();
        assert_eq!(profile.name, "Priya Natarajan");
        assert_eq!(profile.skills.len(), 4);
        assert!(!profile.skills.contains("JavaScript"));
    }

    #[test]
    fn test_analyze_empty_text_gives_default_profile() {
        let doc = Document::new(Vec::<u8>::new()).with_content_type("text/plain");
        let profile = analyze(&DocumentTextExtractor, &skills(), &doc).unwrap();
        assert_eq!(profile, ExtractedProfile::default());
    }

    #[test]
    fn test_analyze_propagates_extraction_error() {
        let doc = Document::new(b"\x89PNG".to_vec()).with_content_type("image/png");
        let err = analyze(&DocumentTextExtractor, &skills(), &doc).unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_end_to_end_recommendation() {
        let doc = Document::new(RESUME).with_content_type("text/plain");
        let profile = analyze(&DocumentTextExtractor, &skills(), &doc).unwrap();
        let ranked = recommend(&TfIdfRanker, &profile, &catalog(), 1);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked.top().unwrap().role, "Data Scientist");
    }

    #[test]
    fn test_recommend_with_no_skills_keeps_catalog_order() {
        let ranked = recommend(&TfIdfRanker, &ExtractedProfile::default(), &catalog(), 3);
        let roles: Vec<&str> = ranked.iter().map(|j| j.role.as_str()).collect();
        assert_eq!(roles, vec!["Web Developer", "Data Scientist", "BI Analyst"]);
        assert!(ranked.iter().all(|j| j.match_score == 0.0));
    }
}
