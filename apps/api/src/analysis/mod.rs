// Résumé analysis: document bytes → text → (name, skills).
// Pure functions except for the extractor, which wraps pdf-extract.

pub mod extractor;
pub mod handlers;
pub mod name;
pub mod skills;
