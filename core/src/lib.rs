pub mod config;
pub mod document;
pub mod error;
pub mod index;
pub mod paginate;
pub mod query;
pub mod request_queue;
pub mod search;
pub mod server;
pub mod tokenizer;

pub use config::{SearchConfig, MAX_RESULT_DOCUMENT_COUNT, RELEVANCE_EPSILON, REQUEST_WINDOW};
pub use document::{Document, DocumentStatus};
pub use error::{Error, Result};
pub use index::InvertedIndex;
pub use paginate::{paginate, Page, Paginator};
pub use query::ParsedQuery;
pub use request_queue::RequestQueue;
pub use server::SearchServer;
pub use tokenizer::StopWords;

pub type DocId = i32;
