use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::ArticleId;

/// A catalog entry, used for content similarity.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Article {
    pub article_id: ArticleId,
    pub title: String,
    pub description: String,
    pub body: Option<String>,
    pub status: Option<String>,
}

impl Article {
    /// Text fed to the vectorizer: the description, or the title when the
    /// description is blank.
    #[must_use]
    pub fn similarity_text(&self) -> &str {
        if self.description.trim().is_empty() {
            &self.title
        } else {
            &self.description
        }
    }
}
