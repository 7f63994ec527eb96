use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct BrowserConfig {
    /// Base URL the recipe list is served from
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the recipe list relative to `base_url`
    #[serde(default = "default_recipes_path")]
    pub recipes_path: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Search box behaviour
    #[serde(default)]
    pub search: SearchConfig,
}

/// Configuration for the suggestion search box
#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    /// Placeholder shown in the empty input
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    /// Shortest input that triggers a suggestion fetch
    #[serde(default = "default_minimum_search_length")]
    pub minimum_search_length: usize,
    /// Quiet period before a keystroke is committed, in milliseconds
    #[serde(default = "default_debounce_delay_ms")]
    pub debounce_delay_ms: u64,
}

impl SearchConfig {
    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_delay_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            minimum_search_length: default_minimum_search_length(),
            debounce_delay_ms: default_debounce_delay_ms(),
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            recipes_path: default_recipes_path(),
            timeout: default_timeout(),
            search: SearchConfig::default(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "http://localhost:8080/".to_string()
}

fn default_recipes_path() -> String {
    "data/recipes.json".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_placeholder() -> String {
    "Search for recipes...".to_string()
}

fn default_minimum_search_length() -> usize {
    2
}

fn default_debounce_delay_ms() -> u64 {
    300
}

impl BrowserConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPES__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPES__SEARCH__DEBOUNCE_DELAY_MS
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Load configuration from an optional `config.toml` and `RECIPES__` variables
pub fn load_config() -> Result<BrowserConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: RECIPES__SEARCH__PLACEHOLDER
        .add_source(
            Environment::with_prefix("RECIPES")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_default_values() {
        assert_eq!(default_recipes_path(), "data/recipes.json");
        assert_eq!(default_timeout(), 30);
        assert_eq!(default_minimum_search_length(), 2);
        assert_eq!(default_debounce_delay_ms(), 300);
    }

    #[test]
    fn test_search_config_default() {
        let search = SearchConfig::default();
        assert_eq!(search.placeholder, "Search for recipes...");
        assert_eq!(search.minimum_search_length, 2);
        assert_eq!(search.debounce_delay(), Duration::from_millis(300));
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let toml = r#"
            base_url = "https://recipes.example.com/"

            [search]
            debounce_delay_ms = 400
        "#;

        let config: BrowserConfig = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.base_url, "https://recipes.example.com/");
        assert_eq!(config.recipes_path, "data/recipes.json");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.search.debounce_delay_ms, 400);
        assert_eq!(config.search.minimum_search_length, 2);
    }

    #[test]
    fn test_load_config_without_file() {
        // Every field has a default, so loading never needs a file
        let result = load_config();
        assert!(result.is_ok());
    }
}
