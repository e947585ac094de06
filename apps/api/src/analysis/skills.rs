use std::collections::BTreeSet;

use crate::skills::SkillCatalog;

/// Returns every catalog label found in `text` as a whole word, ignoring case.
///
/// Labels are returned with the catalog's spelling. An empty set means no
/// skills were recognized; it is not an error.
pub fn extract_skills(text: &str, catalog: &SkillCatalog) -> BTreeSet<String> {
    catalog
        .entries()
        .iter()
        .filter(|skill| skill.is_found_in(text))
        .map(|skill| skill.label().to_string())
        .collect()
}
