//! Input dataset locations.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_interactions_path() -> PathBuf {
    PathBuf::from("data/user-item-interactions.csv")
}

fn default_articles_path() -> PathBuf {
    PathBuf::from("data/articles_community.csv")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataConfig {
    /// CSV of user-article interactions (`article_id`, `title`, `email`).
    #[serde(default = "default_interactions_path")]
    pub interactions_path: PathBuf,

    /// CSV of catalog articles (`article_id`, `doc_full_name`, `doc_description`, ...).
    #[serde(default = "default_articles_path")]
    pub articles_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            interactions_path: default_interactions_path(),
            articles_path: default_articles_path(),
        }
    }
}
