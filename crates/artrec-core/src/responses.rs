//! CLI response types returned by `artrec` commands.
//!
//! These structs define the JSON shape of `artrec top`, `artrec user`,
//! `artrec content`, `artrec similar`, `artrec neighbors`, `artrec seen`,
//! `artrec stats`, and the demo report.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Strategy;
use crate::ids::{ArticleId, UserId};

/// A recommended article with the score that ranked it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ScoredArticle {
    pub article_id: ArticleId,
    pub title: String,
    /// Interaction count, aggregate neighbor weight, or cosine similarity,
    /// depending on the strategy.
    pub score: f64,
}

/// Ranked output of one recommender run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RecommendationResponse {
    pub strategy: Strategy,
    pub user_id: Option<UserId>,
    /// Article id or title for similar-article lookups.
    pub query: Option<String>,
    /// True when a personalized strategy degraded to the popularity ranking.
    pub fallback: bool,
    pub articles: Vec<ScoredArticle>,
    pub total_results: u32,
}

impl RecommendationResponse {
    #[must_use]
    pub fn new(strategy: Strategy, articles: Vec<ScoredArticle>) -> Self {
        let total_results = u32::try_from(articles.len()).unwrap_or(u32::MAX);
        Self {
            strategy,
            user_id: None,
            query: None,
            fallback: false,
            articles,
            total_results,
        }
    }

    #[must_use]
    pub fn for_user(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    #[must_use]
    pub fn with_fallback(mut self, fallback: bool) -> Self {
        self.fallback = fallback;
        self
    }

    /// Article ids in rank order.
    #[must_use]
    pub fn article_ids(&self) -> Vec<ArticleId> {
        self.articles.iter().map(|a| a.article_id).collect()
    }
}

/// A user ranked by how many articles they share with the target user.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Neighbor {
    pub neighbor_id: UserId,
    /// Number of distinct articles both users interacted with.
    pub similarity: u32,
    /// Total interaction rows recorded for the neighbor.
    pub num_interactions: u32,
}

/// Response from `artrec neighbors`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NeighborsResponse {
    pub user_id: UserId,
    pub neighbors: Vec<Neighbor>,
}

/// An article a user has interacted with.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SeenArticle {
    pub article_id: ArticleId,
    pub title: String,
    pub interactions: u32,
}

/// Response from `artrec seen`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SeenArticlesResponse {
    pub user_id: UserId,
    pub articles: Vec<SeenArticle>,
}

/// Response from `artrec stats`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DatasetStats {
    pub interactions: u32,
    pub users: u32,
    pub articles_interacted: u32,
    pub catalog_articles: u32,
    pub catalog_duplicates_dropped: u32,
    /// Articles with interactions but no catalog entry (invisible to content filtering).
    pub articles_missing_from_catalog: u32,
}

/// The fixed demo sequence printed by `artrec` with no subcommand.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DemoReport {
    pub top: RecommendationResponse,
    pub collaborative: RecommendationResponse,
    pub content: RecommendationResponse,
    pub similar: RecommendationResponse,
}
