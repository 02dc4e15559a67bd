//! Query parsing: raw text into required ("plus") and forbidden ("minus") word sets.

use crate::error::{Error, Result};
use crate::tokenizer::{ensure_valid_text, split_into_words, StopWords};
use std::collections::BTreeSet;

/// A parsed query. A word may sit in both sets; forbidden always wins at match time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedQuery {
    pub plus_words: BTreeSet<String>,
    pub minus_words: BTreeSet<String>,
}

enum QueryWord<'a> {
    Plus(&'a str),
    Minus(&'a str),
}

fn parse_query_word(token: &str) -> Result<QueryWord<'_>> {
    if token == "-" {
        return Err(Error::MalformedQuery("dangling minus".into()));
    }
    match token.strip_prefix('-') {
        Some(rest) if rest.starts_with('-') => Err(Error::MalformedQuery(format!("double minus in {token:?}"))),
        Some(rest) => Ok(QueryWord::Minus(rest)),
        None => Ok(QueryWord::Plus(token)),
    }
}

impl ParsedQuery {
    pub fn parse(text: &str, stop_words: &StopWords) -> Result<Self> {
        ensure_valid_text(text)?;
        let mut query = ParsedQuery::default();
        for token in split_into_words(text) {
            match parse_query_word(token)? {
                QueryWord::Plus(w) if !stop_words.contains(w) => { query.plus_words.insert(w.to_string()); }
                QueryWord::Minus(w) if !stop_words.contains(w) => { query.minus_words.insert(w.to_string()); }
                _ => {}
            }
        }
        Ok(query)
    }

    pub fn is_empty(&self) -> bool { self.plus_words.is_empty() }
}
