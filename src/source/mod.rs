mod http;

pub use http::HttpRecipeSource;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::Recipe;

/// Where the page loads its recipe collection from.
///
/// Failures are returned to the caller as-is; no retries are attempted.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Load the full recipe list
    async fn fetch_all_recipes(&self) -> Result<Vec<Recipe>>;

    /// Look up a single recipe by id
    async fn get_recipe_by_id(&self, id: &str) -> Result<Option<Recipe>> {
        let recipes = self.fetch_all_recipes().await?;
        Ok(recipes.into_iter().find(|recipe| recipe.id == id))
    }
}
