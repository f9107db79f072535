use artrec_config::ArtrecConfig;
use artrec_data::Dataset;
use artrec_engine::{EngineOptions, Recommender};

use crate::progress::Progress;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: ArtrecConfig,
    pub recommender: Recommender,
}

impl AppContext {
    /// Load both datasets and build every model.
    pub fn init(config: ArtrecConfig) -> anyhow::Result<Self> {
        let progress = Progress::spinner("loading interactions and catalog");

        let dataset = match Dataset::load(&config.data.interactions_path, &config.data.articles_path)
        {
            Ok(dataset) => dataset,
            Err(error) => {
                progress.finish_err("failed to load data");
                return Err(error.into());
            }
        };

        progress.set_message("vectorizing article descriptions");
        let recommender = Recommender::new(dataset, engine_options(&config));

        progress.finish_clear();
        Ok(Self {
            config,
            recommender,
        })
    }
}

fn engine_options(config: &ArtrecConfig) -> EngineOptions {
    EngineOptions {
        pad_with_popular: config.recommend.pad_with_popular,
        min_token_len: config.content.min_token_len,
        extra_stop_words: config.content.extra_stop_words.clone(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn engine_options_follow_config() {
        let mut config = ArtrecConfig::default();
        config.recommend.pad_with_popular = true;
        config.content.min_token_len = 3;
        config.content.extra_stop_words = vec!["ibm".to_string()];

        let options = engine_options(&config);
        assert!(options.pad_with_popular);
        assert_eq!(options.min_token_len, 3);
        assert_eq!(options.extra_stop_words, vec!["ibm".to_string()]);
    }
}
