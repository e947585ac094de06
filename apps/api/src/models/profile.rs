use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Name used when no line of the résumé looks like a name.
pub const DEFAULT_CANDIDATE_NAME: &str = "Candidate";

/// What the analyzer pulls out of a résumé.
///
/// `skills` is a set of catalog labels. Consumers must not rely on its order;
/// the `BTreeSet` only keeps serialized output stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedProfile {
    pub name: String,
    pub skills: BTreeSet<String>,
}

impl Default for ExtractedProfile {
    fn default() -> Self {
        Self {
            name: DEFAULT_CANDIDATE_NAME.to_string(),
            skills: BTreeSet::new(),
        }
    }
}
