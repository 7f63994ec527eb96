use async_trait::async_trait;
use log::{debug, info};
use reqwest::{Client, Url};
use std::time::Duration;

use crate::config::BrowserConfig;
use crate::error::{BrowseError, Result};
use crate::model::Recipe;
use crate::source::RecipeSource;

/// Loads recipes from a JSON document served over HTTP.
pub struct HttpRecipeSource {
    client: Client,
    url: Url,
}

impl HttpRecipeSource {
    /// Create a source reading `recipes_path` under `base_url`
    pub fn new(base_url: &str, recipes_path: &str, timeout: Option<Duration>) -> Result<Self> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0 (compatible; RecipeBrowser/1.0)")
            .build()?;

        let base = Url::parse(base_url)
            .map_err(|e| BrowseError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        let url = base
            .join(recipes_path)
            .map_err(|e| BrowseError::InvalidUrl(format!("{}: {}", recipes_path, e)))?;

        Ok(Self { client, url })
    }

    /// Create a source from the loaded configuration
    pub fn from_config(config: &BrowserConfig) -> Result<Self> {
        Self::new(
            &config.base_url,
            &config.recipes_path,
            Some(config.request_timeout()),
        )
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl RecipeSource for HttpRecipeSource {
    async fn fetch_all_recipes(&self) -> Result<Vec<Recipe>> {
        debug!("Fetching recipes from {}", self.url);
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;

        // A `null` document is treated as an empty collection.
        let recipes: Option<Vec<Recipe>> = serde_json::from_str(&body)?;
        let recipes = recipes.unwrap_or_default();
        info!("Loaded {} recipes", recipes.len());
        Ok(recipes)
    }
}
