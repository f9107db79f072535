//! User-user collaborative filtering.
//!
//! Two users are similar in proportion to the number of distinct articles
//! they both interacted with (the dot product of their binary user-item
//! rows). Neighbors are ranked by similarity, then by how active they are,
//! then by ascending user id.
//!
//! Candidates come from walking the ranked neighbors that share at least one
//! article: each unseen article a neighbor read gains that neighbor's
//! similarity as weight. The walk stops once enough candidates exist and the
//! next neighbor is strictly less similar than the previous one, so equally
//! similar neighbors are never split.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use artrec_core::ids::{ArticleId, UserId};
use artrec_core::responses::{Neighbor, ScoredArticle};
use artrec_data::Dataset;

use crate::rank::PopularityRanking;

/// Result of a collaborative query.
#[derive(Debug, Clone, PartialEq)]
pub struct CollaborativeOutcome {
    pub articles: Vec<ScoredArticle>,
    /// True when the user had no history and the popularity ranking was served.
    pub fallback: bool,
}

/// All other users ranked by similarity to `user_id`. Unknown user → empty.
#[must_use]
pub fn ranked_neighbors(dataset: &Dataset, user_id: UserId) -> Vec<Neighbor> {
    let Some(target) = dataset.seen(user_id) else {
        return Vec::new();
    };

    let mut neighbors: Vec<Neighbor> = dataset
        .users()
        .filter(|(other, _)| *other != user_id)
        .map(|(other, seen)| Neighbor {
            neighbor_id: other,
            similarity: shared_articles(target, seen),
            num_interactions: dataset.user_interactions(other),
        })
        .collect();

    neighbors.sort_unstable_by(compare_neighbors);
    neighbors
}

fn compare_neighbors(a: &Neighbor, b: &Neighbor) -> Ordering {
    b.similarity
        .cmp(&a.similarity)
        .then(b.num_interactions.cmp(&a.num_interactions))
        .then(a.neighbor_id.cmp(&b.neighbor_id))
}

fn shared_articles(a: &BTreeMap<ArticleId, u32>, b: &BTreeMap<ArticleId, u32>) -> u32 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let shared = small.keys().filter(|id| large.contains_key(id)).count();
    u32::try_from(shared).unwrap_or(u32::MAX)
}

/// Recommend up to `n` articles for `user_id` from similar users.
///
/// Users without history get exactly the popularity ranking. When
/// `pad_with_popular` is set, short results are topped up with popular
/// articles the user has not seen.
#[must_use]
pub fn recommend(
    dataset: &Dataset,
    ranking: &PopularityRanking,
    user_id: UserId,
    n: usize,
    pad_with_popular: bool,
) -> CollaborativeOutcome {
    let Some(seen) = dataset.seen(user_id).filter(|seen| !seen.is_empty()) else {
        tracing::debug!(%user_id, "no history; serving popularity ranking");
        return CollaborativeOutcome {
            articles: ranking.top(dataset, n),
            fallback: true,
        };
    };

    if n == 0 {
        return CollaborativeOutcome {
            articles: Vec::new(),
            fallback: false,
        };
    }

    let mut weights: HashMap<ArticleId, u64> = HashMap::new();
    let mut last_similarity: Option<u32> = None;
    let mut visited = 0usize;

    for neighbor in ranked_neighbors(dataset, user_id) {
        if neighbor.similarity == 0 {
            break;
        }
        if weights.len() >= n && last_similarity.is_some_and(|last| neighbor.similarity < last) {
            break;
        }
        if let Some(their_seen) = dataset.seen(neighbor.neighbor_id) {
            for article_id in their_seen.keys().filter(|id| !seen.contains_key(id)) {
                *weights.entry(*article_id).or_default() += u64::from(neighbor.similarity);
            }
        }
        last_similarity = Some(neighbor.similarity);
        visited += 1;
    }

    let mut candidates: Vec<(ArticleId, u64, u32)> = weights
        .into_iter()
        .map(|(article_id, weight)| (article_id, weight, dataset.article_interactions(article_id)))
        .collect();
    candidates.sort_unstable_by(|a, b| {
        b.1.cmp(&a.1)
            .then(b.2.cmp(&a.2))
            .then(a.0.cmp(&b.0))
    });
    candidates.truncate(n);

    tracing::debug!(
        %user_id,
        neighbors_visited = visited,
        candidates = candidates.len(),
        "collaborative candidates ranked"
    );

    #[allow(clippy::cast_precision_loss)]
    let mut articles: Vec<ScoredArticle> = candidates
        .into_iter()
        .map(|(article_id, weight, _)| ScoredArticle {
            article_id,
            title: dataset.title(article_id),
            score: weight as f64,
        })
        .collect();

    if pad_with_popular && articles.len() < n {
        let chosen: Vec<ArticleId> = articles.iter().map(|a| a.article_id).collect();
        let padding = ranking.top_excluding(dataset, n - articles.len(), |id| {
            seen.contains_key(&id) || chosen.contains(&id)
        });
        articles.extend(padding.into_iter().map(|article| ScoredArticle {
            score: 0.0,
            ..article
        }));
    }

    CollaborativeOutcome {
        articles,
        fallback: false,
    }
}

#[cfg(test)]
mod tests {
    use artrec_core::entities::Interaction;
    use pretty_assertions::assert_eq;

    use super::*;

    fn dataset(rows: &[(u32, u64)]) -> Dataset {
        let interactions = rows
            .iter()
            .map(|(user, article)| Interaction {
                user_id: UserId(*user),
                article_id: ArticleId(*article),
                title: String::new(),
                timestamp: None,
            })
            .collect();
        Dataset::from_parts(interactions, Vec::new())
    }

    fn ids(articles: &[ScoredArticle]) -> Vec<u64> {
        articles.iter().map(|a| a.article_id.get()).collect()
    }

    #[test]
    fn neighbors_rank_by_similarity_then_activity_then_id() {
        let data = dataset(&[
            (1, 1),
            (1, 2),
            // user 2: shares 1, very active
            (2, 1),
            (2, 9),
            (2, 9),
            (2, 9),
            // user 3: shares 2
            (3, 1),
            (3, 2),
            // user 4 and 5: share 1, same activity
            (5, 2),
            (5, 8),
            (4, 1),
            (4, 7),
        ]);
        let order: Vec<u32> = ranked_neighbors(&data, UserId(1))
            .iter()
            .map(|n| n.neighbor_id.get())
            .collect();
        assert_eq!(order, vec![3, 2, 4, 5]);
    }

    #[test]
    fn target_is_not_its_own_neighbor() {
        let data = dataset(&[(1, 1), (2, 1)]);
        let neighbors = ranked_neighbors(&data, UserId(1));
        assert_eq!(neighbors.len(), 1);
        assert_eq!(neighbors[0].neighbor_id, UserId(2));
        assert_eq!(neighbors[0].similarity, 1);
    }

    #[test]
    fn weights_accumulate_across_tied_neighbors() {
        let data = dataset(&[
            (1, 1),
            (2, 1),
            (2, 50),
            (3, 1),
            (3, 50),
            (3, 60),
        ]);
        let outcome = recommend(&data, &PopularityRanking::build(&data), UserId(1), 1, false);
        assert!(!outcome.fallback);
        assert_eq!(ids(&outcome.articles), vec![50]);
        assert!((outcome.articles[0].score - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn walk_stops_before_less_similar_neighbor_once_filled() {
        let data = dataset(&[
            (1, 1),
            (1, 2),
            // user 2: shares 2
            (2, 1),
            (2, 2),
            (2, 10),
            // user 3: shares 1
            (3, 1),
            (3, 20),
        ]);
        let ranking = PopularityRanking::build(&data);

        let one = recommend(&data, &ranking, UserId(1), 1, false);
        assert_eq!(ids(&one.articles), vec![10]);

        let two = recommend(&data, &ranking, UserId(1), 2, false);
        assert_eq!(ids(&two.articles), vec![10, 20]);
        assert!((two.articles[0].score - 2.0).abs() < f64::EPSILON);
        assert!((two.articles[1].score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn seen_articles_are_never_recommended() {
        let data = dataset(&[(1, 1), (1, 2), (2, 1), (2, 2), (2, 3)]);
        let outcome = recommend(&data, &PopularityRanking::build(&data), UserId(1), 10, false);
        assert_eq!(ids(&outcome.articles), vec![3]);
    }

    #[test]
    fn padding_fills_from_popular_unseen() {
        let data = dataset(&[(1, 1), (2, 1), (2, 2), (3, 4), (4, 4), (5, 5), (6, 1)]);
        let ranking = PopularityRanking::build(&data);

        let unpadded = recommend(&data, &ranking, UserId(1), 3, false);
        assert_eq!(ids(&unpadded.articles), vec![2]);

        let padded = recommend(&data, &ranking, UserId(1), 3, true);
        assert_eq!(ids(&padded.articles), vec![2, 4, 5]);
        assert!(padded.articles[1].score.abs() < f64::EPSILON);
    }

    #[test]
    fn users_sharing_nothing_contribute_nothing() {
        let data = dataset(&[(1, 1), (2, 2), (3, 3)]);
        let outcome = recommend(&data, &PopularityRanking::build(&data), UserId(1), 5, false);
        assert!(!outcome.fallback);
        assert!(outcome.articles.is_empty());
    }

    #[test]
    fn unknown_user_gets_popularity_ranking() {
        let data = dataset(&[(1, 1), (1, 2), (2, 2)]);
        let ranking = PopularityRanking::build(&data);
        let outcome = recommend(&data, &ranking, UserId(42), 2, false);
        assert!(outcome.fallback);
        assert_eq!(outcome.articles, ranking.top(&data, 2));
    }

    #[test]
    fn zero_limit_is_empty() {
        let data = dataset(&[(1, 1), (2, 2)]);
        let outcome = recommend(&data, &PopularityRanking::build(&data), UserId(1), 0, true);
        assert!(outcome.articles.is_empty());
    }
}
