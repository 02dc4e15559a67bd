use crate::config::SearchConfig;
use crate::document::DocumentStatus;
use crate::error::{Error, Result};
use crate::index::{compute_average_rating, DocumentData, InvertedIndex};
use crate::tokenizer::{ensure_valid_text, StopWords};
use crate::DocId;
use std::collections::BTreeMap;

/// In-memory TF-IDF search server: stop words, the inverted index and ranking settings.
///
/// Documents are only ever added. Searches borrow the server immutably, so a
/// `RequestQueue` can hold a reference to it while other readers query it.
#[derive(Debug)]
pub struct SearchServer {
    pub(crate) stop_words: StopWords,
    pub(crate) index: InvertedIndex,
    pub(crate) config: SearchConfig,
}

impl SearchServer {
    /// Build from a whitespace-delimited stop word string.
    pub fn new(stop_words_text: &str) -> Result<Self> {
        Ok(Self::with_config(StopWords::parse(stop_words_text)?, SearchConfig::default()))
    }

    pub fn from_stop_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::with_config(StopWords::from_words(words)?, SearchConfig::default()))
    }

    pub fn with_config(stop_words: StopWords, config: SearchConfig) -> Self {
        Self { stop_words, index: InvertedIndex::new(), config }
    }

    pub fn config(&self) -> &SearchConfig { &self.config }

    pub fn stop_words(&self) -> &StopWords { &self.stop_words }

    /// Add a document. Validation precedes every mutation: on error the server is unchanged.
    pub fn add_document(&mut self, id: DocId, text: &str, status: DocumentStatus, ratings: &[i32]) -> Result<()> {
        if id < 0 {
            return Err(Error::NegativeId(id));
        }
        if self.index.contains_document(id) {
            return Err(Error::DuplicateId(id));
        }
        ensure_valid_text(text)?;

        let words: Vec<&str> = self.stop_words.filter(text).collect();
        let rating = compute_average_rating(ratings);
        tracing::debug!(id, words = words.len(), rating, ?status, "add document");
        self.index.insert(id, &words, DocumentData { rating, status });
        Ok(())
    }

    pub fn document_count(&self) -> usize { self.index.document_count() }

    /// Id of the document added `index`-th (zero based).
    pub fn document_id(&self, index: usize) -> Result<DocId> { self.index.document_id(index) }

    pub fn document_ids(&self) -> impl Iterator<Item = DocId> + '_ { self.index.document_ids() }

    pub fn word_frequencies(&self, id: DocId) -> BTreeMap<&str, f64> { self.index.word_frequencies(id) }

    pub fn index(&self) -> &InvertedIndex { &self.index }
}
