//! Parameters of the fixed demo run.

use serde::{Deserialize, Serialize};

const fn default_user_id() -> u32 {
    1
}

fn default_similar_title() -> String {
    "Data Wrangling at Slack".to_string()
}

const fn default_similar_limit() -> u32 {
    2
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DemoConfig {
    /// User whose personalized recommendations are shown.
    #[serde(default = "default_user_id")]
    pub user_id: u32,

    /// Article title used for the similar-articles section.
    #[serde(default = "default_similar_title")]
    pub similar_title: String,

    /// How many similar articles to show.
    #[serde(default = "default_similar_limit")]
    pub similar_limit: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
            similar_title: default_similar_title(),
            similar_limit: default_similar_limit(),
        }
    }
}
