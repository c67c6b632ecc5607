use std::path::Path;

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Json, Toml, Yaml};

use super::{Settings, smart_load};

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Prefix for environment overrides, e.g. `DIRHUNT_EXCLUDE_HIDDEN=true`
pub const ENV_PREFIX: &str = "DIRHUNT_";

/// Load settings from defaults, config file and environment
///
/// With `custom_config`, only that file is read (format picked by extension).
/// Otherwise `dirhunt.{toml,json,yaml,yml}` in the working directory are
/// merged in that order. Missing files are skipped.
pub fn load(custom_config: Option<&Path>) -> Result<Settings> {
    tracing::trace!("CONFIG LOAD: Starting");

    let settings: Settings = provider_stack(custom_config)
        .extract()
        .context("Failed to parse configuration")?;
    settings.validate()?;

    tracing::debug!("Loaded settings: {:?}", settings);
    Ok(settings)
}

/// The merged provider stack, lowest priority first
pub fn provider_stack(custom_config: Option<&Path>) -> Figment {
    let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));

    if let Some(custom_path) = custom_config {
        if !custom_path.exists() {
            tracing::warn!("Config file {} not found, using defaults", custom_path.display());
        }
        figment = figment.merge(smart_load::auto(custom_path));
    } else {
        figment = figment
            .merge(Toml::file("dirhunt.toml"))
            .merge(Json::file("dirhunt.json"))
            .merge(Yaml::file("dirhunt.yaml"))
            .merge(Yaml::file("dirhunt.yml"));
    }

    // Environment variables always have highest priority
    figment.merge(Env::prefixed(ENV_PREFIX))
}
