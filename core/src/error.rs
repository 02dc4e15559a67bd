//! Error types for the search core

use crate::DocId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("document id {0} is negative")]
    NegativeId(DocId),

    #[error("document id {0} was already added")]
    DuplicateId(DocId),

    /// Document text, query text or a stop word holds a byte below space.
    #[error("text contains control characters: {0:?}")]
    InvalidText(String),

    #[error("malformed query: {0}")]
    MalformedQuery(String),

    #[error("document index {index} out of range for {count} documents")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("document id {0} not found")]
    UnknownDocument(DocId),

    #[error("unknown document status: {0}")]
    UnknownStatus(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(Error::NegativeId(-3).to_string(), "document id -3 is negative");
        let err = Error::IndexOutOfRange { index: 7, count: 2 };
        assert_eq!(err.to_string(), "document index 7 out of range for 2 documents");
    }
}
