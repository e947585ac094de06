use std::collections::HashSet;
use std::path::Path;

use regex::Regex;
use tracing::info;

use crate::errors::CatalogLoadError;
use crate::skills::bank::DEFAULT_SKILLS;

/// A catalog label together with its compiled whole-word matcher.
#[derive(Debug, Clone)]
pub struct SkillPattern {
    label: String,
    pattern: Regex,
}

impl SkillPattern {
    fn compile(label: &str) -> Result<Self, CatalogLoadError> {
        // Whole word: the label may not touch a word character on either side.
        // Unlike a bare `\b`, this also works for labels ending in symbols ("C++").
        let source = format!(r"(?i)(?:^|\W){}(?:\W|$)", regex::escape(label));
        let pattern = Regex::new(&source).map_err(|e| CatalogLoadError::InvalidSkill {
            label: label.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            label: label.to_string(),
            pattern,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// True when the label occurs in `text` as a whole word, ignoring case.
    ///
    /// Labels ending in a symbol differ from `\b`: "C++" is not found in "C++11".
    pub fn is_found_in(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Ordered, immutable set of canonical skill labels.
///
/// Built once at startup and shared read-only between requests.
#[derive(Debug, Clone)]
pub struct SkillCatalog {
    entries: Vec<SkillPattern>,
}

impl SkillCatalog {
    /// Builds a catalog from labels, trimming each one.
    ///
    /// Rejects empty labels and labels that repeat ignoring case.
    pub fn new<I, S>(labels: I) -> Result<Self, CatalogLoadError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for raw in labels {
            let label = raw.as_ref().trim();
            if label.is_empty() {
                return Err(CatalogLoadError::InvalidSkill {
                    label: raw.as_ref().to_string(),
                    reason: "label is empty".to_string(),
                });
            }
            if !seen.insert(label.to_lowercase()) {
                return Err(CatalogLoadError::DuplicateSkill(label.to_string()));
            }
            entries.push(SkillPattern::compile(label)?);
        }

        Ok(Self { entries })
    }

    /// The built-in skills bank.
    pub fn builtin() -> Result<Self, CatalogLoadError> {
        Self::new(DEFAULT_SKILLS.iter().copied())
    }

    /// Reads one label per line. Blank lines and `#` comments are skipped.
    pub async fn from_file(path: &Path) -> Result<Self, CatalogLoadError> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogLoadError::Io {
                path: path.display().to_string(),
                source,
            })?;
        let catalog = Self::parse(&raw)?;
        info!(
            "Loaded {} skills from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    fn parse(raw: &str) -> Result<Self, CatalogLoadError> {
        Self::new(
            raw.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    pub fn entries(&self) -> &[SkillPattern] {
        &self.entries
    }

    #[cfg(test)]
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(SkillPattern::label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
