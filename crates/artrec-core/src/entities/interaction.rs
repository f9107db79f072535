use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::{ArticleId, UserId};

/// One observed engagement of a user with an article.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Interaction {
    pub user_id: UserId,
    pub article_id: ArticleId,
    /// Title as recorded on the interaction row.
    pub title: String,
    pub timestamp: Option<DateTime<Utc>>,
}
