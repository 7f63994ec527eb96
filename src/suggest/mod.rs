mod func;
mod recipe_titles;

pub use func::FnProvider;
pub use recipe_titles::RecipeTitleProvider;

use async_trait::async_trait;

use crate::error::Result;

/// Source of autocomplete suggestions for a search box.
///
/// Implementations may be called again before an earlier call resolves.
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    /// Get the provider name (e.g., "recipe_titles")
    fn provider_name(&self) -> &str;

    /// Suggestions for `query`, in display order
    async fn suggest(&self, query: &str) -> Result<Vec<String>>;
}
