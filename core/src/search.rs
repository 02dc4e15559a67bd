//! TF-IDF ranking and document matching over a `SearchServer`.

use crate::document::{Document, DocumentStatus};
use crate::error::{Error, Result};
use crate::query::ParsedQuery;
use crate::server::SearchServer;
use crate::DocId;
use std::cmp::Ordering;
use std::collections::BTreeMap;

impl SearchServer {
    /// Rank documents against `raw_query`, keeping those for which
    /// `predicate(id, status, rating)` holds. The predicate runs once per candidate.
    pub fn find_top_documents_with<F>(&self, raw_query: &str, predicate: F) -> Result<Vec<Document>>
    where
        F: Fn(DocId, DocumentStatus, i32) -> bool,
    {
        let query = ParsedQuery::parse(raw_query, &self.stop_words)?;
        let mut matched = self.find_all_documents(&query, predicate);
        let epsilon = self.config.relevance_epsilon;
        matched.sort_by(|a, b| compare_ranked(a, b, epsilon));
        let total = matched.len();
        matched.truncate(self.config.max_result_count);
        tracing::debug!(query = raw_query, candidates = total, returned = matched.len(), "find top documents");
        Ok(matched)
    }

    pub fn find_top_documents_by_status(&self, raw_query: &str, status: DocumentStatus) -> Result<Vec<Document>> {
        self.find_top_documents_with(raw_query, |_, document_status, _| document_status == status)
    }

    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.find_top_documents_by_status(raw_query, DocumentStatus::Active)
    }

    /// Required words of `raw_query` present in document `id`, sorted, with its status.
    /// The word list is empty when the document holds any forbidden word.
    pub fn match_document(&self, raw_query: &str, id: DocId) -> Result<(Vec<String>, DocumentStatus)> {
        let query = ParsedQuery::parse(raw_query, &self.stop_words)?;
        let status = self.index.document(id).ok_or(Error::UnknownDocument(id))?.status;
        if query.minus_words.iter().any(|w| self.index.contains_word(w, id)) {
            return Ok((Vec::new(), status));
        }
        let words = query
            .plus_words
            .iter()
            .filter(|w| self.index.contains_word(w, id))
            .cloned()
            .collect();
        Ok((words, status))
    }

    fn find_all_documents<F>(&self, query: &ParsedQuery, predicate: F) -> Vec<Document>
    where
        F: Fn(DocId, DocumentStatus, i32) -> bool,
    {
        let mut candidates: BTreeMap<DocId, f64> = BTreeMap::new();
        for word in &query.plus_words {
            if let Some(freqs) = self.index.term_frequencies(word) {
                for &id in freqs.keys() {
                    candidates.entry(id).or_insert(0.0);
                }
            }
        }
        candidates.retain(|&id, _| !query.minus_words.iter().any(|w| self.index.contains_word(w, id)));
        candidates.retain(|&id, _| {
            self.index.document(id).is_some_and(|data| predicate(id, data.status, data.rating))
        });

        for word in &query.plus_words {
            let Some(freqs) = self.index.term_frequencies(word) else { continue };
            let idf = self.index.inverse_document_freq(word);
            for (id, relevance) in candidates.iter_mut() {
                if let Some(tf) = freqs.get(id) {
                    *relevance += tf * idf;
                }
            }
        }

        candidates
            .into_iter()
            .filter_map(|(id, relevance)| {
                let rating = self.index.document(id)?.rating;
                Some(Document::new(id, relevance, rating))
            })
            .collect()
    }
}

/// Higher relevance first; scores rounding to the same multiple of `epsilon`
/// tie and fall back to higher rating, then lower id. Bucketing keeps the
/// ordering total, so two scores closer than `epsilon` but on either side of a
/// bucket edge still order by relevance.
fn compare_ranked(a: &Document, b: &Document, epsilon: f64) -> Ordering {
    let bucket = |relevance: f64| if epsilon > 0.0 { (relevance / epsilon).round() } else { relevance };
    bucket(b.relevance)
        .total_cmp(&bucket(a.relevance))
        .then_with(|| b.rating.cmp(&a.rating))
        .then_with(|| a.id.cmp(&b.id))
}
