//! Skill vocabulary used for keyword-style extraction from résumé text.

pub mod bank;
pub mod catalog;

pub use catalog::SkillCatalog;
