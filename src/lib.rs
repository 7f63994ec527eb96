//! Recipe browsing core: tag-aware filtering over an in-memory recipe list and
//! a search box with debounced, cancellable autocomplete.

pub mod browser;
pub mod config;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod model;
pub mod search;
pub mod source;
pub mod suggest;
pub mod tags;

pub use browser::RecipeBrowser;
pub use crate::config::{load_config, BrowserConfig, SearchConfig};
pub use debounce::{DebounceHandle, DebounceOutcome, Debouncer, ErrorCallback};
pub use error::{BrowseError, Result};
pub use filter::{filter_recipes, filter_recipes_by_tags_inclusive, update_tag_counts};
pub use model::{Recipe, Tag};
pub use search::{
    DropdownState, Key, SearchBoxView, SearchState, SearchSuggestBox, SearchSuggestBoxBuilder,
    SuggestionView,
};
pub use source::{HttpRecipeSource, RecipeSource};
pub use suggest::{FnProvider, RecipeTitleProvider, SuggestionProvider};
pub use tags::{filter_tags, get_tags_from_recipes};

/// Fetch every recipe from the configured HTTP source.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = recipe_browser::BrowserConfig::load()?;
/// let recipes = recipe_browser::fetch_all_recipes(&config).await?;
/// println!("{} recipes", recipes.len());
/// # Ok(())
/// # }
/// ```
pub async fn fetch_all_recipes(config: &BrowserConfig) -> Result<Vec<Recipe>> {
    HttpRecipeSource::from_config(config)?
        .fetch_all_recipes()
        .await
}
