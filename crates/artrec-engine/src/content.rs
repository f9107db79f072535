//! Content-based recommendations over TF-IDF vectors of catalog descriptions.
//!
//! The similarity matrix is computed once when the model is built. Row and
//! column order follow the de-duplicated catalog.

use std::cmp::Ordering;
use std::collections::HashMap;

use artrec_core::ids::{ArticleId, UserId};
use artrec_core::responses::ScoredArticle;
use artrec_data::Dataset;
use artrec_text::{SimilarityMatrix, TfidfModel, Tokenizer};

/// Pairwise description similarity for every catalog article.
#[derive(Debug, Clone, Default)]
pub struct ContentModel {
    matrix: SimilarityMatrix,
    vocabulary: usize,
}

impl ContentModel {
    /// Tokenize every catalog article's similarity text and fit TF-IDF over the catalog.
    #[must_use]
    pub fn build(dataset: &Dataset, tokenizer: &Tokenizer) -> Self {
        let documents: Vec<Vec<String>> = dataset
            .catalog()
            .iter()
            .map(|article| tokenizer.tokenize(article.similarity_text()))
            .collect();

        let (tfidf, vectors) = TfidfModel::fit_transform(&documents);
        let empty = vectors.iter().filter(|v| v.is_empty()).count();
        if empty > 0 {
            tracing::debug!(empty, "catalog articles without usable text");
        }

        Self {
            matrix: SimilarityMatrix::from_vectors(&vectors),
            vocabulary: tfidf.vocabulary_len(),
        }
    }

    /// Number of distinct terms after preprocessing.
    #[must_use]
    pub const fn vocabulary_len(&self) -> usize {
        self.vocabulary
    }

    /// The `n` catalog articles most similar to `article_id`, excluding itself.
    ///
    /// Zero-similarity articles are never returned. Articles outside the
    /// catalog have no vector and yield an empty list.
    #[must_use]
    pub fn similar_articles(
        &self,
        dataset: &Dataset,
        article_id: ArticleId,
        n: usize,
    ) -> Vec<ScoredArticle> {
        let Some(row) = dataset
            .catalog_position(article_id)
            .and_then(|position| self.matrix.row(position))
        else {
            tracing::debug!(%article_id, "article not in catalog");
            return Vec::new();
        };

        let scored = dataset
            .catalog()
            .iter()
            .zip(row)
            .filter(|(article, _)| article.article_id != article_id)
            .map(|(article, similarity)| (article.article_id, *similarity))
            .collect();

        top_scored(dataset, scored, n)
    }

    /// Unseen catalog articles scored by their summed similarity to what
    /// `user_id` has read.
    ///
    /// Seen articles missing from the catalog contribute nothing. Unknown
    /// users yield an empty list.
    #[must_use]
    pub fn content_recs(&self, dataset: &Dataset, user_id: UserId, n: usize) -> Vec<ScoredArticle> {
        let Some(seen) = dataset.seen(user_id) else {
            tracing::debug!(%user_id, "unknown user");
            return Vec::new();
        };

        let rows: Vec<&[f64]> = seen
            .keys()
            .filter_map(|id| dataset.catalog_position(*id))
            .filter_map(|position| self.matrix.row(position))
            .collect();
        if rows.is_empty() {
            tracing::debug!(%user_id, "no seen articles in catalog");
            return Vec::new();
        }

        let mut scores: HashMap<ArticleId, f64> = HashMap::new();
        for (position, article) in dataset.catalog().iter().enumerate() {
            if seen.contains_key(&article.article_id) {
                continue;
            }
            let score: f64 = rows.iter().map(|row| row[position]).sum();
            scores.insert(article.article_id, score);
        }

        top_scored(dataset, scores.into_iter().collect(), n)
    }
}

/// Drop non-positive scores, order by score desc then id asc, keep `n`.
fn top_scored(dataset: &Dataset, mut scored: Vec<(ArticleId, f64)>, n: usize) -> Vec<ScoredArticle> {
    scored.retain(|(_, score)| *score > 0.0);
    scored.sort_unstable_by(compare_scored);
    scored.truncate(n);

    scored
        .into_iter()
        .map(|(article_id, score)| ScoredArticle {
            article_id,
            title: dataset.title(article_id),
            score,
        })
        .collect()
}

fn compare_scored(a: &(ArticleId, f64), b: &(ArticleId, f64)) -> Ordering {
    b.1.total_cmp(&a.1).then(a.0.cmp(&b.0))
}
