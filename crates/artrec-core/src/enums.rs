//! Recommendation strategies.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which recommender produced a result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Global popularity by interaction count.
    TopRanked,
    /// User-user collaborative filtering.
    Collaborative,
    /// TF-IDF similarity to a user's seen articles.
    Content,
    /// TF-IDF similarity to a single article.
    SimilarArticles,
}

impl Strategy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TopRanked => "top_ranked",
            Self::Collaborative => "collaborative",
            Self::Content => "content",
            Self::SimilarArticles => "similar_articles",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
