//! Rank-based (popularity) recommendations.
//!
//! Articles are ordered by interaction count, highest first, ties broken by
//! ascending article id. Used directly and as the cold-start fallback.

use artrec_core::ids::ArticleId;
use artrec_core::responses::ScoredArticle;
use artrec_data::Dataset;

/// Every interacted article in popularity order, computed once per dataset.
#[derive(Debug, Clone, Default)]
pub struct PopularityRanking {
    ranked: Vec<(ArticleId, u32)>,
}

impl PopularityRanking {
    #[must_use]
    pub fn build(dataset: &Dataset) -> Self {
        let mut ranked: Vec<(ArticleId, u32)> = dataset.popularity().collect();
        ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        Self { ranked }
    }

    /// Number of distinct ranked articles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// Top `n` articles with their interaction counts as scores.
    #[must_use]
    pub fn top(&self, dataset: &Dataset, n: usize) -> Vec<ScoredArticle> {
        self.top_excluding(dataset, n, |_| false)
    }

    /// Top `n` articles for which `skip` returns false.
    #[must_use]
    pub fn top_excluding<F>(&self, dataset: &Dataset, n: usize, skip: F) -> Vec<ScoredArticle>
    where
        F: Fn(ArticleId) -> bool,
    {
        self.ranked
            .iter()
            .filter(|(article_id, _)| !skip(*article_id))
            .take(n)
            .map(|(article_id, count)| ScoredArticle {
                article_id: *article_id,
                title: dataset.title(*article_id),
                score: f64::from(*count),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use artrec_core::entities::Interaction;
    use artrec_core::ids::UserId;
    use pretty_assertions::assert_eq;

    use super::*;

    fn dataset(rows: &[(u32, u64)]) -> Dataset {
        let interactions = rows
            .iter()
            .map(|(user, article)| Interaction {
                user_id: UserId(*user),
                article_id: ArticleId(*article),
                title: format!("article {article}"),
                timestamp: None,
            })
            .collect();
        Dataset::from_parts(interactions, Vec::new())
    }

    #[test]
    fn ties_break_by_ascending_id() {
        let data = dataset(&[(1, 30), (2, 20), (1, 10), (3, 30)]);
        let ranking = PopularityRanking::build(&data);
        let ids: Vec<u64> = ranking.top(&data, 3).iter().map(|a| a.article_id.get()).collect();
        assert_eq!(ids, vec![30, 10, 20]);
    }

    #[test]
    fn exclusion_skips_without_shortening_early() {
        let data = dataset(&[(1, 1), (1, 1), (2, 2), (3, 3)]);
        let ranking = PopularityRanking::build(&data);
        let ids: Vec<u64> = ranking
            .top_excluding(&data, 2, |id| id == ArticleId(1))
            .iter()
            .map(|a| a.article_id.get())
            .collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn scores_are_interaction_counts() {
        let data = dataset(&[(1, 5), (2, 5), (3, 5)]);
        let top = PopularityRanking::build(&data).top(&data, 1);
        assert!((top[0].score - 3.0).abs() < f64::EPSILON);
        assert_eq!(top[0].title, "article 5");
    }
}
