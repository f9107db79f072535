use artrec_config::ArtrecConfig;

use crate::cli::GlobalFlags;

/// Load layered config (with `.env`) and apply CLI path overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<ArtrecConfig> {
    let config = ArtrecConfig::load_with_dotenv()?;
    Ok(apply_overrides(config, flags))
}

fn apply_overrides(mut config: ArtrecConfig, flags: &GlobalFlags) -> ArtrecConfig {
    if let Some(path) = &flags.interactions {
        config.data.interactions_path.clone_from(path);
    }
    if let Some(path) = &flags.articles {
        config.data.articles_path.clone_from(path);
    }
    config
}

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &ArtrecConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &ArtrecConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let defaults = ArtrecConfig::default();

    let mut warnings = Vec::new();

    if config.data.interactions_path == defaults.data.interactions_path
        && config.data.articles_path == defaults.data.articles_path
        && has_single_underscore_key(&env_keys, "ARTREC_DATA")
    {
        warnings.push(
            "Data paths appear default while ARTREC_DATA* env vars exist. Use double underscores (example: ARTREC_DATA__INTERACTIONS_PATH)."
                .to_string(),
        );
    }

    if config.demo.user_id == defaults.demo.user_id
        && config.demo.similar_title == defaults.demo.similar_title
        && has_single_underscore_key(&env_keys, "ARTREC_DEMO")
    {
        warnings.push(
            "Demo config appears default while ARTREC_DEMO* env vars exist. Use double underscores (example: ARTREC_DEMO__USER_ID)."
                .to_string(),
        );
    }

    warnings
}

fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('_') && !rest.starts_with("__"))
    })
}
