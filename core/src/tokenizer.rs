use crate::error::{Error, Result};
use std::collections::BTreeSet;

/// Split text into words on spaces. Empty tokens never appear.
pub fn split_into_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(' ').filter(|w| !w.is_empty())
}

/// True if any byte of `text` is below space.
pub fn has_control_chars(text: &str) -> bool {
    text.bytes().any(|b| b < b' ')
}

pub fn ensure_valid_text(text: &str) -> Result<()> {
    if has_control_chars(text) {
        return Err(Error::InvalidText(text.to_string()));
    }
    Ok(())
}

/// Words excluded from indexing and from query matching. Fixed at construction.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: BTreeSet<String>,
}

impl StopWords {
    pub fn parse(text: &str) -> Result<Self> { Self::from_words(split_into_words(text)) }

    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for word in words {
            let word = word.as_ref();
            if word.is_empty() { continue; }
            ensure_valid_text(word)?;
            set.insert(word.to_string());
        }
        Ok(Self { words: set })
    }

    pub fn contains(&self, word: &str) -> bool { self.words.contains(word) }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }

    /// Tokenize `text` and drop stop words.
    pub fn filter<'t>(&'t self, text: &'t str) -> impl Iterator<Item = &'t str> + 't {
        split_into_words(text).filter(move |w| !self.contains(w))
    }
}
