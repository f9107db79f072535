//! Text preprocessing settings for content-based filtering.

use serde::{Deserialize, Serialize};

/// Shortest token kept by the tokenizer.
const fn default_min_token_len() -> usize {
    2
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentConfig {
    /// Words dropped in addition to the built-in English stop list.
    #[serde(default)]
    pub extra_stop_words: Vec<String>,

    /// Tokens shorter than this many characters are discarded.
    #[serde(default = "default_min_token_len")]
    pub min_token_len: usize,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            extra_stop_words: Vec::new(),
            min_token_len: default_min_token_len(),
        }
    }
}
