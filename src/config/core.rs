use super::Settings;
use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Json, Toml, Yaml},
};
use std::path::Path;

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Layered configuration for the parsum harness
pub struct ParsumConfig {
    figment: Figment,
}

impl ParsumConfig {
    pub fn load() -> Result<Self> {
        Self::load_with_custom_config(None)
    }

    /// Merge, lowest priority first: embedded defaults, user config, repo
    /// config, the custom file (if any), then `PARSUM_` environment variables.
    pub fn load_with_custom_config(custom_config: Option<&str>) -> Result<Self> {
        tracing::trace!("CONFIG LOAD: Starting");

        let user_base = Self::user_config_base_path();
        let mut figment = Figment::new()
            .merge(Toml::string(DEFAULT_CONFIG))
            // User config - support multiple formats
            .merge(Toml::file(format!("{user_base}.toml")))
            .merge(Json::file(format!("{user_base}.json")))
            .merge(Yaml::file(format!("{user_base}.yaml")))
            .merge(Yaml::file(format!("{user_base}.yml")))
            // Repository config - support multiple formats
            .merge(Toml::file("parsum.toml"))
            .merge(Json::file("parsum.json"))
            .merge(Yaml::file("parsum.yaml"))
            .merge(Yaml::file("parsum.yml"));

        if let Some(custom_path) = custom_config {
            tracing::trace!("CONFIG LOAD: Applying custom config {}", custom_path);
            figment = Self::merge_file(figment, custom_path);
        }

        // Environment variables always have highest priority
        figment = figment.merge(Env::prefixed("PARSUM_").split("__"));

        Ok(ParsumConfig { figment })
    }

    /// Pick the provider from the file extension, defaulting to TOML
    fn merge_file(figment: Figment, path: &str) -> Figment {
        let extension = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("json") => figment.merge(Json::file(path)),
            Some("yaml") | Some("yml") => figment.merge(Yaml::file(path)),
            _ => figment.merge(Toml::file(path)),
        }
    }

    /// Extract the typed settings
    pub fn settings(&self) -> Result<Settings> {
        self.figment
            .extract()
            .context("Failed to parse parsum configuration")
    }

    /// Get a nested object/section as JSON
    pub fn get_section(&self, path: &str) -> Result<serde_json::Value> {
        Ok(self.figment.extract_inner(path)?)
    }

    /// Get the full merged configuration as a structured value
    pub fn get_full_config(&self) -> Result<serde_json::Value> {
        Ok(self.figment.extract()?)
    }

    fn user_config_base_path() -> String {
        match std::env::var("HOME") {
            Ok(home) => format!("{}/.config/parsum/config", home),
            Err(_) => "~/.config/parsum/config".to_string(),
        }
    }
}
