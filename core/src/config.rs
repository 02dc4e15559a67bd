use serde::{Deserialize, Serialize};

/// Results past this count are cut from a ranked search.
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;
/// Relevance scores closer than this are treated as equal when ranking.
pub const RELEVANCE_EPSILON: f64 = 1e-6;
/// Number of tracked queries kept by a `RequestQueue` (one day of minutes).
pub const REQUEST_WINDOW: usize = 1440;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub max_result_count: usize,
    pub relevance_epsilon: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_result_count: MAX_RESULT_DOCUMENT_COUNT, relevance_epsilon: RELEVANCE_EPSILON }
    }
}

impl SearchConfig {
    pub fn with_max_result_count(mut self, n: usize) -> Self { self.max_result_count = n; self }
}
