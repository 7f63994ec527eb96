use std::future::Future;

use async_trait::async_trait;

use crate::error::Result;
use crate::suggest::SuggestionProvider;

/// Adapts an async closure into a [`SuggestionProvider`].
///
/// ```
/// use recipe_browser::{BrowseError, FnProvider};
///
/// let provider = FnProvider::new(|query: String| async move {
///     Ok::<_, BrowseError>(vec![format!("{} soup", query)])
/// });
/// ```
pub struct FnProvider<F> {
    name: String,
    func: F,
}

impl<F> FnProvider<F> {
    pub fn new(func: F) -> Self {
        Self::named("fn", func)
    }

    pub fn named(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

#[async_trait]
impl<F, Fut> SuggestionProvider for FnProvider<F>
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Vec<String>>> + Send,
{
    fn provider_name(&self) -> &str {
        &self.name
    }

    async fn suggest(&self, query: &str) -> Result<Vec<String>> {
        (self.func)(query.to_string()).await
    }
}
