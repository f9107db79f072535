//! # artrec-config
//!
//! Layered configuration loading for artrec using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ARTREC_*` prefix, `__` as separator)
//! 2. Project-level `.artrec/config.toml`
//! 3. User-level `~/.config/artrec/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ARTREC_DATA__INTERACTIONS_PATH` -> `data.interactions_path`,
//! `ARTREC_RECOMMEND__DEFAULT_LIMIT` -> `recommend.default_limit`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use artrec_config::ArtrecConfig;
//!
//! let config = ArtrecConfig::load_with_dotenv().expect("config");
//! println!("interactions: {}", config.data.interactions_path.display());
//! ```

mod content;
mod data;
mod demo;
mod error;
mod recommend;

pub use content::ContentConfig;
pub use data::DataConfig;
pub use demo::DemoConfig;
pub use error::ConfigError;
pub use recommend::RecommendConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ArtrecConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub recommend: RecommendConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

impl ArtrecConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source fails to parse and
    /// [`ConfigError::InvalidValue`] when a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".artrec/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("ARTREC_").split("__"))
    }

    /// Reject values the recommenders cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content.min_token_len == 0 {
            return Err(ConfigError::InvalidValue {
                field: "content.min_token_len".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.demo.user_id == 0 {
            return Err(ConfigError::InvalidValue {
                field: "demo.user_id".to_string(),
                reason: "user ids start at 1".to_string(),
            });
        }
        if self.data.interactions_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "data.interactions_path".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.data.articles_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "data.articles_path".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("artrec").join("config.toml"))
    }
}
