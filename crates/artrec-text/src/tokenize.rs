//! Text → token list.

use std::collections::HashSet;

use crate::lemmatize::lemmatize;
use crate::stop_words;

/// Default shortest token kept.
pub const DEFAULT_MIN_TOKEN_LEN: usize = 2;

/// Lowercasing, stop-word-filtering, lemmatizing tokenizer.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stop_words: HashSet<String>,
    min_len: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_TOKEN_LEN)
    }
}

impl Tokenizer {
    /// Tokenizer with the built-in English stop list. `min_len` is clamped to at least 1.
    #[must_use]
    pub fn new(min_len: usize) -> Self {
        Self {
            stop_words: stop_words::ENGLISH.iter().map(|w| (*w).to_string()).collect(),
            min_len: min_len.max(1),
        }
    }

    /// Add more stop words. Matching is case-insensitive.
    #[must_use]
    pub fn with_extra_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words
            .extend(words.into_iter().map(|w| w.as_ref().trim().to_lowercase()));
        self
    }

    /// Whether `word`, already lowercased, is dropped as a stop word.
    fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Split `text` into normalized tokens, in order of appearance.
    #[must_use]
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|raw| !raw.is_empty())
            .map(str::to_lowercase)
            .filter(|word| !self.is_stop_word(word))
            .map(|word| lemmatize(&word))
            .filter(|token| token.chars().count() >= self.min_len)
            .collect()
    }
}
