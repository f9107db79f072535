//! Recommender tuning knobs.

use serde::{Deserialize, Serialize};

/// Default number of recommendations per query.
const fn default_limit() -> u32 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecommendConfig {
    /// Default result limit when `--limit` is not given.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Fill short collaborative results with popular unseen articles.
    #[serde(default)]
    pub pad_with_popular: bool,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            pad_with_popular: false,
        }
    }
}
