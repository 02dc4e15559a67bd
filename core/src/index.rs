use crate::document::DocumentStatus;
use crate::error::{Error, Result};
use crate::DocId;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentData {
    pub rating: i32,
    pub status: DocumentStatus,
}

/// Append-only inverted index plus per-document metadata.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    word_to_document_freqs: HashMap<String, BTreeMap<DocId, f64>>, // word -> doc -> tf
    documents: HashMap<DocId, DocumentData>,
    document_ids: Vec<DocId>, // insertion order
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    /// Record a document. Callers validate the id first; `words` has stop words removed.
    pub(crate) fn insert(&mut self, id: DocId, words: &[&str], data: DocumentData) {
        debug_assert!(!self.documents.contains_key(&id));
        if !words.is_empty() {
            let inv_word_count = 1.0 / words.len() as f64;
            for word in words {
                *self.word_to_document_freqs.entry((*word).to_string()).or_default().entry(id).or_insert(0.0) += inv_word_count;
            }
        }
        self.documents.insert(id, data);
        self.document_ids.push(id);
    }

    pub fn contains_document(&self, id: DocId) -> bool { self.documents.contains_key(&id) }

    pub fn document(&self, id: DocId) -> Option<&DocumentData> { self.documents.get(&id) }

    pub fn document_count(&self) -> usize { self.document_ids.len() }

    pub fn document_id(&self, index: usize) -> Result<DocId> {
        self.document_ids
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfRange { index, count: self.document_ids.len() })
    }

    pub fn document_ids(&self) -> impl Iterator<Item = DocId> + '_ { self.document_ids.iter().copied() }

    /// Documents containing `word` with the word's term frequency in each.
    pub fn term_frequencies(&self, word: &str) -> Option<&BTreeMap<DocId, f64>> { self.word_to_document_freqs.get(word) }

    pub fn contains_word(&self, word: &str, id: DocId) -> bool {
        self.term_frequencies(word).is_some_and(|freqs| freqs.contains_key(&id))
    }

    /// ln(N / df). Zero for words absent from the index.
    pub fn inverse_document_freq(&self, word: &str) -> f64 {
        match self.term_frequencies(word) {
            Some(freqs) if !freqs.is_empty() => (self.document_count() as f64 / freqs.len() as f64).ln(),
            _ => 0.0,
        }
    }

    pub fn word_frequencies(&self, id: DocId) -> BTreeMap<&str, f64> {
        self.word_to_document_freqs
            .iter()
            .filter_map(|(word, freqs)| freqs.get(&id).map(|tf| (word.as_str(), *tf)))
            .collect()
    }
}

/// Integer mean truncated toward zero; 0 for no ratings.
pub fn compute_average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|&r| r as i64).sum();
    (sum / ratings.len() as i64) as i32
}
