//! TF-IDF vectorizer over a small in-memory corpus.
//!
//! Weighting follows the usual smoothed form:
//! - tokens: lower-cased runs of two or more word characters
//! - tf: raw term count in the document
//! - idf: ln((1 + n) / (1 + df)) + 1
//! - every vector is L2-normalized, so cosine similarity is a plain dot product

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use regex::Regex;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is valid"));

/// Splits text into lower-cased tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Sparse vector keyed by vocabulary index, sorted by index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    fn from_map(map: HashMap<usize, f64>) -> Self {
        let mut entries: Vec<(usize, f64)> = map.into_iter().collect();
        entries.sort_unstable_by_key(|(idx, _)| *idx);
        Self { entries }
    }

    #[cfg(test)]
    pub fn is_zero(&self) -> bool {
        self.entries.iter().all(|(_, w)| *w == 0.0)
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    fn normalized(mut self) -> Self {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, w) in &mut self.entries {
                *w /= norm;
            }
        }
        self
    }

    /// Dot product via a merge over the two sorted index lists.
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_idx, a_w) = self.entries[i];
            let (b_idx, b_w) = other.entries[j];
            match a_idx.cmp(&b_idx) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a_w * b_w;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

/// Vocabulary and idf weights learned from one corpus.
#[derive(Debug, Clone, Default)]
pub struct TfIdfModel {
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
}

impl TfIdfModel {
    /// Learns the vocabulary and document frequencies of `corpus`.
    pub fn fit<S: AsRef<str>>(corpus: &[S]) -> Self {
        let mut doc_freq: BTreeMap<String, usize> = BTreeMap::new();
        for doc in corpus {
            let mut terms = tokenize(doc.as_ref());
            terms.sort_unstable();
            terms.dedup();
            for term in terms {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let n_docs = corpus.len() as f64;
        let mut vocabulary = BTreeMap::new();
        let mut idf = Vec::with_capacity(doc_freq.len());
        for (idx, (term, df)) in doc_freq.into_iter().enumerate() {
            idf.push(((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0);
            vocabulary.insert(term, idx);
        }

        Self { vocabulary, idf }
    }

    /// L2-normalized TF-IDF vector for `text`. Unknown terms are dropped.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut weights: HashMap<usize, f64> = HashMap::new();
        for term in tokenize(text) {
            if let Some(&idx) = self.vocabulary.get(&term) {
                *weights.entry(idx).or_insert(0.0) += 1.0;
            }
        }
        for (idx, w) in weights.iter_mut() {
            *w *= self.idf[*idx];
        }
        SparseVector::from_map(weights).normalized()
    }

    /// Fits on `corpus` and returns one vector per document, in order.
    pub fn fit_transform<S: AsRef<str>>(corpus: &[S]) -> (Self, Vec<SparseVector>) {
        let model = Self::fit(corpus);
        let vectors = corpus.iter().map(|doc| model.transform(doc.as_ref())).collect();
        (model, vectors)
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    #[cfg(test)]
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&idx| self.idf[idx])
    }
}

/// Cosine similarity of two L2-normalized vectors. Zero when either is empty.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    a.dot(b)
}
