//! Human-readable rendering: a header line, then one indented line per item.

use std::fmt::Write as _;

use artrec_core::enums::Strategy;
use artrec_core::responses::{
    DatasetStats, DemoReport, NeighborsResponse, RecommendationResponse, SeenArticlesResponse,
};
use serde::Serialize;
use serde_json::{Value, json};

use super::to_table_value;

const INDENT: &str = "     ";

/// A response that can be printed in every output format.
pub trait Render: Serialize {
    fn text(&self) -> String;

    /// Value shown by table output. Defaults to the whole response.
    fn table_value(&self) -> anyhow::Result<Value> {
        to_table_value(self)
    }
}

fn section<I>(header: &str, lines: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut out = String::from(header);
    let mut empty = true;
    for line in lines {
        empty = false;
        let _ = write!(out, "\n{INDENT}{line}");
    }
    if empty {
        let _ = write!(out, "\n{INDENT}(none)");
    }
    out
}

fn recommendation_header(response: &RecommendationResponse) -> String {
    let user = response
        .user_id
        .map_or_else(|| "unknown".to_string(), |id| id.to_string());
    let query = response.query.as_deref().unwrap_or_default();

    match response.strategy {
        Strategy::TopRanked => format!(
            "The top {} popular articles are:",
            response.articles.len()
        ),
        Strategy::Collaborative if response.fallback => format!(
            "User {user} has no history; the most popular articles are:"
        ),
        Strategy::Collaborative => format!(
            "Based on user-user collaborative filtering, the recommended articles for user {user} are:"
        ),
        Strategy::Content => format!(
            "Based on article descriptions, the recommended articles for user {user} are:"
        ),
        Strategy::SimilarArticles => format!(
            "Based on article descriptions, these are the {} articles most similar to '{query}':",
            response.articles.len()
        ),
    }
}

impl Render for RecommendationResponse {
    fn text(&self) -> String {
        section(
            &recommendation_header(self),
            self.articles.iter().map(|article| article.title.clone()),
        )
    }

    fn table_value(&self) -> anyhow::Result<Value> {
        to_table_value(&self.articles)
    }
}

impl Render for NeighborsResponse {
    fn text(&self) -> String {
        section(
            &format!("Users most similar to user {}:", self.user_id),
            self.neighbors.iter().map(|neighbor| {
                format!(
                    "user {} (shared articles: {}, interactions: {})",
                    neighbor.neighbor_id, neighbor.similarity, neighbor.num_interactions
                )
            }),
        )
    }

    fn table_value(&self) -> anyhow::Result<Value> {
        to_table_value(&self.neighbors)
    }
}

impl Render for SeenArticlesResponse {
    fn text(&self) -> String {
        section(
            &format!(
                "User {} has interacted with {} articles:",
                self.user_id,
                self.articles.len()
            ),
            self.articles.iter().map(|article| article.title.clone()),
        )
    }

    fn table_value(&self) -> anyhow::Result<Value> {
        to_table_value(&self.articles)
    }
}

impl Render for DatasetStats {
    fn text(&self) -> String {
        section(
            "Dataset summary:",
            [
                format!("interactions: {}", self.interactions),
                format!("users: {}", self.users),
                format!("articles with interactions: {}", self.articles_interacted),
                format!("catalog articles: {}", self.catalog_articles),
                format!("catalog duplicates dropped: {}", self.catalog_duplicates_dropped),
                format!(
                    "articles missing from catalog: {}",
                    self.articles_missing_from_catalog
                ),
            ],
        )
    }
}

impl Render for DemoReport {
    fn text(&self) -> String {
        [&self.top, &self.collaborative, &self.content, &self.similar]
            .iter()
            .map(|response| response.text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// One row per recommended article, tagged with its strategy.
    fn table_value(&self) -> anyhow::Result<Value> {
        let rows = [&self.top, &self.collaborative, &self.content, &self.similar]
            .iter()
            .flat_map(|response| {
                response.articles.iter().enumerate().map(|(index, article)| {
                    json!({
                        "strategy": response.strategy.as_str(),
                        "rank": index + 1,
                        "article_id": article.article_id,
                        "title": article.title,
                        "score": article.score,
                    })
                })
            })
            .collect::<Vec<_>>();
        Ok(Value::Array(rows))
    }
}

#[cfg(test)]
mod tests {
    use artrec_core::ids::{ArticleId, UserId};
    use artrec_core::responses::{Neighbor, ScoredArticle};
    use pretty_assertions::assert_eq;

    use super::*;

    fn scored(id: u64, title: &str) -> ScoredArticle {
        ScoredArticle {
            article_id: ArticleId(id),
            title: title.to_string(),
            score: 1.0,
        }
    }

    #[test]
    fn top_articles_text_has_header_and_indented_titles() {
        let response = RecommendationResponse::new(
            Strategy::TopRanked,
            vec![scored(1, "first"), scored(2, "second")],
        );
        assert_eq!(
            response.text(),
            "The top 2 popular articles are:\n     first\n     second"
        );
    }

    #[test]
    fn collaborative_fallback_is_called_out() {
        let response = RecommendationResponse::new(Strategy::Collaborative, vec![scored(1, "a")])
            .for_user(UserId(9))
            .with_fallback(true);
        assert!(response.text().starts_with("User 9 has no history"));
    }

    #[test]
    fn empty_lists_say_none() {
        let response = RecommendationResponse::new(Strategy::Content, Vec::new()).for_user(UserId(3));
        assert_eq!(
            response.text(),
            "Based on article descriptions, the recommended articles for user 3 are:\n     (none)"
        );
    }

    #[test]
    fn similar_header_names_query() {
        let response =
            RecommendationResponse::new(Strategy::SimilarArticles, vec![scored(5, "five")])
                .with_query("Data Wrangling at Slack");
        assert!(response.text().contains("most similar to 'Data Wrangling at Slack'"));
    }

    #[test]
    fn neighbors_table_value_is_the_neighbor_list() {
        let response = NeighborsResponse {
            user_id: UserId(1),
            neighbors: vec![Neighbor {
                neighbor_id: UserId(4),
                similarity: 3,
                num_interactions: 12,
            }],
        };
        let value = response.table_value().unwrap();
        assert_eq!(value[0]["neighbor_id"], 4);
        assert!(response.text().contains("user 4 (shared articles: 3, interactions: 12)"));
    }

    #[test]
    fn demo_table_tags_rows_with_strategy() {
        let top = RecommendationResponse::new(Strategy::TopRanked, vec![scored(1, "a")]);
        let empty = |strategy| RecommendationResponse::new(strategy, Vec::new());
        let report = DemoReport {
            top,
            collaborative: empty(Strategy::Collaborative),
            content: empty(Strategy::Content),
            similar: RecommendationResponse::new(Strategy::SimilarArticles, vec![scored(2, "b")]),
        };
        let value = report.table_value().unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert_eq!(value[1]["strategy"], "similar_articles");
        assert_eq!(value[1]["rank"], 1);
        assert_eq!(report.text().matches("\n\n").count(), 3);
    }
}
