//! Sliding-window tracker of query outcomes over a borrowed `SearchServer`.

use crate::config::REQUEST_WINDOW;
use crate::document::{Document, DocumentStatus};
use crate::error::Result;
use crate::server::SearchServer;
use crate::DocId;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
struct QueryResult {
    query: String,
    result_count: usize,
}

/// Counts zero-result queries among the last `window` tracked calls.
///
/// Eviction follows the tick counter: the first `window` calls never evict,
/// every later call drops exactly the oldest entry. A zero window records nothing.
#[derive(Debug)]
pub struct RequestQueue<'a> {
    server: &'a SearchServer,
    requests: VecDeque<QueryResult>, // newest at the front
    no_result_requests: usize,
    current_tick: u64,
    window: usize,
}

impl<'a> RequestQueue<'a> {
    pub fn new(server: &'a SearchServer) -> Self { Self::with_window(server, REQUEST_WINDOW) }

    pub fn with_window(server: &'a SearchServer, window: usize) -> Self {
        Self { server, requests: VecDeque::with_capacity(window), no_result_requests: 0, current_tick: 0, window }
    }

    /// Track a filtered search. A failing query is returned as is and not recorded.
    pub fn add_find_request_with<F>(&mut self, raw_query: &str, predicate: F) -> Result<Vec<Document>>
    where
        F: Fn(DocId, DocumentStatus, i32) -> bool,
    {
        let results = self.server.find_top_documents_with(raw_query, predicate)?;
        self.record(raw_query, results.len());
        Ok(results)
    }

    pub fn add_find_request_by_status(&mut self, raw_query: &str, status: DocumentStatus) -> Result<Vec<Document>> {
        self.add_find_request_with(raw_query, |_, document_status, _| document_status == status)
    }

    pub fn add_find_request(&mut self, raw_query: &str) -> Result<Vec<Document>> {
        self.add_find_request_by_status(raw_query, DocumentStatus::Active)
    }

    pub fn no_result_requests(&self) -> usize { self.no_result_requests }

    pub fn window(&self) -> usize { self.window }

    /// Queries currently held, newest first.
    pub fn recent_queries(&self) -> impl Iterator<Item = &str> { self.requests.iter().map(|r| r.query.as_str()) }

    fn record(&mut self, raw_query: &str, result_count: usize) {
        if self.window == 0 {
            return;
        }
        self.current_tick += 1;
        if self.current_tick > self.window as u64 {
            if let Some(evicted) = self.requests.pop_back() {
                tracing::trace!(query = %evicted.query, results = evicted.result_count, "evict request");
                if evicted.result_count == 0 {
                    self.no_result_requests -= 1;
                }
            }
        }
        self.requests.push_front(QueryResult { query: raw_query.to_string(), result_count });
        if result_count == 0 {
            self.no_result_requests += 1;
        }
    }
}
