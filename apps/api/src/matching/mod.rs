// Job matching: catalog snapshots, TF-IDF vectorizer, ranking backends.

pub mod catalog;
pub mod handlers;
pub mod ranker;
pub mod tfidf;
