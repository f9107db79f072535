//! Serde roundtrip and JsonSchema validation tests for CLI response types.

use artrec_core::entities::{Article, Interaction};
use artrec_core::enums::Strategy;
use artrec_core::ids::{ArticleId, UserId};
use artrec_core::responses::*;
use chrono::{TimeZone, Utc};
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn scored(id: u64, title: &str, score: f64) -> ScoredArticle {
    ScoredArticle {
        article_id: ArticleId(id),
        title: title.to_string(),
        score,
    }
}

fn top_response() -> RecommendationResponse {
    RecommendationResponse::new(
        Strategy::TopRanked,
        vec![
            scored(1429, "use deep learning for image classification", 937.0),
            scored(1330, "insights from new york car accident reports", 927.0),
        ],
    )
}

roundtrip_and_validate!(interaction_roundtrip, Interaction, Interaction {
    user_id: UserId(1),
    article_id: ArticleId(1430),
    title: "using pixiedust for fast, flexible, and easier data analysis".into(),
    timestamp: Some(Utc.with_ymd_and_hms(2017, 1, 2, 3, 4, 5).unwrap()),
});

roundtrip_and_validate!(article_roundtrip, Article, Article {
    article_id: ArticleId(0),
    title: "Detect Malfunctioning IoT Sensors with Streaming Analytics".into(),
    description: "Detect bad readings in real time using Python and Streaming Analytics.".into(),
    body: None,
    status: Some("Live".into()),
});

roundtrip_and_validate!(top_response_roundtrip, RecommendationResponse, top_response());

roundtrip_and_validate!(
    collaborative_response_roundtrip,
    RecommendationResponse,
    RecommendationResponse::new(Strategy::Collaborative, vec![scored(43, "deep learning", 3.0)])
        .for_user(UserId(1))
        .with_fallback(true)
);

roundtrip_and_validate!(
    similar_response_roundtrip,
    RecommendationResponse,
    RecommendationResponse::new(Strategy::SimilarArticles, vec![])
        .with_query("Data Wrangling at Slack")
);

roundtrip_and_validate!(neighbors_roundtrip, NeighborsResponse, NeighborsResponse {
    user_id: UserId(1),
    neighbors: vec![Neighbor {
        neighbor_id: UserId(3933),
        similarity: 35,
        num_interactions: 45,
    }],
});

roundtrip_and_validate!(seen_roundtrip, SeenArticlesResponse, SeenArticlesResponse {
    user_id: UserId(2),
    articles: vec![SeenArticle {
        article_id: ArticleId(1024),
        title: "using deep learning to reconstruct high-resolution audio".into(),
        interactions: 2,
    }],
});

roundtrip_and_validate!(stats_roundtrip, DatasetStats, DatasetStats {
    interactions: 45_993,
    users: 5_149,
    articles_interacted: 714,
    catalog_articles: 1_051,
    catalog_duplicates_dropped: 5,
    articles_missing_from_catalog: 277,
});

roundtrip_and_validate!(demo_roundtrip, DemoReport, DemoReport {
    top: top_response(),
    collaborative: top_response(),
    content: RecommendationResponse::new(Strategy::Content, vec![]),
    similar: RecommendationResponse::new(Strategy::SimilarArticles, vec![]),
});

#[test]
fn total_results_tracks_article_count() {
    let response = top_response();
    assert_eq!(response.total_results, 2);
    assert_eq!(response.article_ids(), vec![ArticleId(1429), ArticleId(1330)]);
}
