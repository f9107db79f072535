//! In-memory dataset snapshot with the indexes every recommender needs.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use artrec_core::entities::{Article, Interaction};
use artrec_core::ids::{ArticleId, UserId};
use artrec_core::responses::DatasetStats;

use crate::error::DataError;
use crate::reader::{self, Catalog};

/// Read-only view of the interaction log and the article catalog.
///
/// Built once per run; nothing mutates it afterwards.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    interactions: Vec<Interaction>,
    catalog: Vec<Article>,
    catalog_index: HashMap<ArticleId, usize>,
    duplicates_dropped: usize,
    /// user -> article -> interaction rows for that pair
    user_articles: BTreeMap<UserId, BTreeMap<ArticleId, u32>>,
    user_rows: HashMap<UserId, u32>,
    article_rows: HashMap<ArticleId, u32>,
    titles: HashMap<ArticleId, String>,
}

impl Dataset {
    /// Load both CSV files and build the indexes.
    ///
    /// # Errors
    ///
    /// Returns any [`DataError`] raised while reading either file.
    pub fn load(interactions_path: &Path, articles_path: &Path) -> Result<Self, DataError> {
        let interactions = reader::read_interactions(interactions_path)?;
        let catalog = reader::read_catalog(articles_path)?;
        let dataset = Self::from_catalog(interactions, catalog);

        let stats = dataset.stats();
        tracing::info!(
            interactions = stats.interactions,
            users = stats.users,
            articles = stats.articles_interacted,
            catalog = stats.catalog_articles,
            "dataset loaded"
        );
        if stats.articles_missing_from_catalog > 0 {
            tracing::warn!(
                missing = stats.articles_missing_from_catalog,
                "interacted articles absent from catalog; content filtering cannot score them"
            );
        }

        Ok(dataset)
    }

    /// Build from already-parsed rows. Catalog duplicates are dropped, first row wins.
    #[must_use]
    pub fn from_parts(interactions: Vec<Interaction>, articles: Vec<Article>) -> Self {
        Self::from_catalog(interactions, reader::dedup_catalog(articles))
    }

    fn from_catalog(interactions: Vec<Interaction>, catalog: Catalog) -> Self {
        let mut user_articles: BTreeMap<UserId, BTreeMap<ArticleId, u32>> = BTreeMap::new();
        let mut user_rows: HashMap<UserId, u32> = HashMap::new();
        let mut article_rows: HashMap<ArticleId, u32> = HashMap::new();
        let mut titles: HashMap<ArticleId, String> = HashMap::new();

        for row in &interactions {
            *user_articles
                .entry(row.user_id)
                .or_default()
                .entry(row.article_id)
                .or_default() += 1;
            *user_rows.entry(row.user_id).or_default() += 1;
            *article_rows.entry(row.article_id).or_default() += 1;
            if !row.title.trim().is_empty() {
                titles
                    .entry(row.article_id)
                    .or_insert_with(|| row.title.clone());
            }
        }

        let catalog_index = catalog
            .articles
            .iter()
            .enumerate()
            .map(|(position, article)| (article.article_id, position))
            .collect();

        Self {
            interactions,
            catalog: catalog.articles,
            catalog_index,
            duplicates_dropped: catalog.duplicates_dropped,
            user_articles,
            user_rows,
            article_rows,
            titles,
        }
    }

    /// De-duplicated catalog in file order.
    #[must_use]
    pub fn catalog(&self) -> &[Article] {
        &self.catalog
    }

    /// Position of `article_id` in [`Self::catalog`].
    #[must_use]
    pub fn catalog_position(&self, article_id: ArticleId) -> Option<usize> {
        self.catalog_index.get(&article_id).copied()
    }

    #[must_use]
    pub fn article(&self, article_id: ArticleId) -> Option<&Article> {
        self.catalog_position(article_id)
            .map(|position| &self.catalog[position])
    }

    /// Find a catalog article by title: exact match first, then ASCII
    /// case-insensitive. The earliest catalog row wins.
    #[must_use]
    pub fn find_by_title(&self, title: &str) -> Option<ArticleId> {
        let title = title.trim();
        self.catalog
            .iter()
            .find(|article| article.title == title)
            .or_else(|| {
                self.catalog
                    .iter()
                    .find(|article| article.title.eq_ignore_ascii_case(title))
            })
            .map(|article| article.article_id)
    }

    /// Display title: first interaction title, then catalog title, then the id.
    #[must_use]
    pub fn title(&self, article_id: ArticleId) -> String {
        if let Some(title) = self.titles.get(&article_id) {
            return title.clone();
        }
        self.article(article_id)
            .map(|article| article.title.trim())
            .filter(|title| !title.is_empty())
            .map_or_else(|| article_id.to_string(), str::to_string)
    }

    /// Distinct articles `user_id` interacted with, ascending, with row counts.
    #[must_use]
    pub fn seen(&self, user_id: UserId) -> Option<&BTreeMap<ArticleId, u32>> {
        self.user_articles.get(&user_id)
    }

    /// All users with at least one interaction, ascending.
    pub fn users(&self) -> impl Iterator<Item = (UserId, &BTreeMap<ArticleId, u32>)> {
        self.user_articles.iter().map(|(user, seen)| (*user, seen))
    }

    /// Interaction rows recorded for `user_id`.
    #[must_use]
    pub fn user_interactions(&self, user_id: UserId) -> u32 {
        self.user_rows.get(&user_id).copied().unwrap_or(0)
    }

    /// Interaction rows recorded for `article_id` (its popularity).
    #[must_use]
    pub fn article_interactions(&self, article_id: ArticleId) -> u32 {
        self.article_rows.get(&article_id).copied().unwrap_or(0)
    }

    /// Every interacted article with its interaction count, unordered.
    pub fn popularity(&self) -> impl Iterator<Item = (ArticleId, u32)> + '_ {
        self.article_rows.iter().map(|(id, count)| (*id, *count))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.interactions.is_empty() && self.catalog.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> DatasetStats {
        let count = |n: usize| u32::try_from(n).unwrap_or(u32::MAX);
        let missing = self
            .article_rows
            .keys()
            .filter(|id| !self.catalog_index.contains_key(id))
            .count();

        DatasetStats {
            interactions: count(self.interactions.len()),
            users: count(self.user_articles.len()),
            articles_interacted: count(self.article_rows.len()),
            catalog_articles: count(self.catalog.len()),
            catalog_duplicates_dropped: count(self.duplicates_dropped),
            articles_missing_from_catalog: count(missing),
        }
    }
}
