//! The [`Recommender`] facade: one dataset snapshot, every strategy.

use std::path::Path;

use artrec_core::enums::Strategy;
use artrec_core::ids::{ArticleQuery, UserId};
use artrec_core::responses::{
    DatasetStats, NeighborsResponse, RecommendationResponse, SeenArticle, SeenArticlesResponse,
};
use artrec_data::Dataset;
use artrec_text::Tokenizer;
use artrec_text::tokenize::DEFAULT_MIN_TOKEN_LEN;

use crate::collaborative;
use crate::content::ContentModel;
use crate::error::EngineError;
use crate::rank::PopularityRanking;

/// Knobs that change how the models are built or how results are filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    /// Top up short collaborative results with popular unseen articles.
    pub pad_with_popular: bool,
    pub min_token_len: usize,
    pub extra_stop_words: Vec<String>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            pad_with_popular: false,
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
            extra_stop_words: Vec::new(),
        }
    }
}

/// Read-only recommender over a loaded dataset.
///
/// Every query is a pure function of the snapshot and its arguments.
#[derive(Debug, Clone)]
pub struct Recommender {
    dataset: Dataset,
    ranking: PopularityRanking,
    content: ContentModel,
    options: EngineOptions,
}

impl Recommender {
    /// Build the popularity ranking and the content model for `dataset`.
    #[must_use]
    pub fn new(dataset: Dataset, options: EngineOptions) -> Self {
        let tokenizer = Tokenizer::new(options.min_token_len)
            .with_extra_stop_words(options.extra_stop_words.iter().map(String::as_str));
        let ranking = PopularityRanking::build(&dataset);
        let content = ContentModel::build(&dataset, &tokenizer);

        tracing::info!(
            ranked_articles = ranking.len(),
            vocabulary = content.vocabulary_len(),
            "recommender ready"
        );

        Self {
            dataset,
            ranking,
            content,
            options,
        }
    }

    /// Load both CSV files and build the recommender.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Data`] if either file cannot be read or parsed.
    pub fn load(
        interactions_path: &Path,
        articles_path: &Path,
        options: EngineOptions,
    ) -> Result<Self, EngineError> {
        let dataset = Dataset::load(interactions_path, articles_path)?;
        Ok(Self::new(dataset, options))
    }

    /// The `n` most-interacted articles.
    #[must_use]
    pub fn top_articles(&self, n: usize) -> RecommendationResponse {
        RecommendationResponse::new(Strategy::TopRanked, self.ranking.top(&self.dataset, n))
    }

    /// User-user collaborative recommendations, falling back to
    /// [`Self::top_articles`] for users without history.
    #[must_use]
    pub fn user_user_recs(&self, user_id: UserId, n: usize) -> RecommendationResponse {
        let outcome = collaborative::recommend(
            &self.dataset,
            &self.ranking,
            user_id,
            n,
            self.options.pad_with_popular,
        );
        RecommendationResponse::new(Strategy::Collaborative, outcome.articles)
            .for_user(user_id)
            .with_fallback(outcome.fallback)
    }

    /// The `k` users most similar to `user_id`.
    #[must_use]
    pub fn neighbors(&self, user_id: UserId, k: usize) -> NeighborsResponse {
        let mut neighbors = collaborative::ranked_neighbors(&self.dataset, user_id);
        neighbors.truncate(k);
        NeighborsResponse { user_id, neighbors }
    }

    /// Articles `user_id` interacted with, ascending by id.
    #[must_use]
    pub fn user_articles(&self, user_id: UserId) -> SeenArticlesResponse {
        let articles = self
            .dataset
            .seen(user_id)
            .map(|seen| {
                seen.iter()
                    .map(|(article_id, interactions)| SeenArticle {
                        article_id: *article_id,
                        title: self.dataset.title(*article_id),
                        interactions: *interactions,
                    })
                    .collect()
            })
            .unwrap_or_default();
        SeenArticlesResponse { user_id, articles }
    }

    /// Catalog articles whose descriptions are closest to the queried one.
    ///
    /// A title that matches nothing in the catalog yields an empty response.
    #[must_use]
    pub fn similar_articles(&self, query: &ArticleQuery, n: usize) -> RecommendationResponse {
        let article_id = match query {
            ArticleQuery::Id(id) => Some(*id),
            ArticleQuery::Title(title) => self.dataset.find_by_title(title),
        };
        let articles = article_id
            .map(|id| self.content.similar_articles(&self.dataset, id, n))
            .unwrap_or_default();

        if article_id.is_none() {
            tracing::warn!(%query, "no catalog article matches query");
        }

        RecommendationResponse::new(Strategy::SimilarArticles, articles).with_query(query.to_string())
    }

    /// Content-based recommendations from the user's reading history.
    #[must_use]
    pub fn content_recs(&self, user_id: UserId, n: usize) -> RecommendationResponse {
        RecommendationResponse::new(
            Strategy::Content,
            self.content.content_recs(&self.dataset, user_id, n),
        )
        .for_user(user_id)
    }

    #[must_use]
    pub fn stats(&self) -> DatasetStats {
        self.dataset.stats()
    }
}
