use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::config::SearchConfig;
use crate::debounce::{Debouncer, ErrorCallback};
use crate::error::BrowseError;
use crate::search::{SearchState, SearchSuggestBox, SearchTermCallback};
use crate::suggest::SuggestionProvider;

/// Builder for configuring a [`SearchSuggestBox`]
pub struct SearchSuggestBoxBuilder {
    placeholder: String,
    initial_search_term: String,
    minimum_search_length: usize,
    debounce_delay: Duration,
    on_search_term_changed: Option<SearchTermCallback>,
    provider: Option<Arc<dyn SuggestionProvider>>,
    on_error: Option<ErrorCallback>,
}

impl Default for SearchSuggestBoxBuilder {
    fn default() -> Self {
        Self {
            placeholder: String::new(),
            initial_search_term: String::new(),
            minimum_search_length: 0,
            debounce_delay: Duration::ZERO,
            on_search_term_changed: None,
            provider: None,
            on_error: None,
        }
        .with_config(&SearchConfig::default())
    }
}

impl SearchSuggestBoxBuilder {
    /// Apply placeholder, minimum length and debounce delay from configuration
    ///
    /// # Example
    /// ```
    /// use recipe_browser::{SearchConfig, SearchSuggestBox};
    ///
    /// let config = SearchConfig {
    ///     debounce_delay_ms: 400,
    ///     ..Default::default()
    /// };
    /// let builder = SearchSuggestBox::builder().with_config(&config);
    /// ```
    pub fn with_config(mut self, config: &SearchConfig) -> Self {
        self.placeholder = config.placeholder.clone();
        self.minimum_search_length = config.minimum_search_length;
        self.debounce_delay = config.debounce_delay();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Text shown in the input before the first keystroke
    pub fn initial_search_term(mut self, term: impl Into<String>) -> Self {
        self.initial_search_term = term.into();
        self
    }

    /// Shortest input, in characters, that is sent to the suggestion provider
    pub fn minimum_search_length(mut self, length: usize) -> Self {
        self.minimum_search_length = length;
        self
    }

    pub fn debounce_delay(mut self, delay: Duration) -> Self {
        self.debounce_delay = delay;
        self
    }

    /// Called with the search term once typing settles or a suggestion is chosen
    pub fn on_search_term_changed<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_search_term_changed = Some(Arc::new(callback));
        self
    }

    /// Enable autocomplete using `provider`
    pub fn suggestion_provider<P>(self, provider: P) -> Self
    where
        P: SuggestionProvider + 'static,
    {
        self.shared_suggestion_provider(Arc::new(provider))
    }

    pub fn shared_suggestion_provider(mut self, provider: Arc<dyn SuggestionProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Called when the suggestion provider fails or a debounced callback panics
    pub fn on_error<F>(mut self, callback: F) -> Self
    where
        F: Fn(&BrowseError) + Send + Sync + 'static,
    {
        self.on_error = Some(Arc::new(callback));
        self
    }

    pub fn build(self) -> SearchSuggestBox {
        let mut debouncer = Debouncer::new(self.debounce_delay);
        if let Some(on_error) = &self.on_error {
            debouncer = debouncer.with_error_callback(Arc::clone(on_error));
        }

        SearchSuggestBox {
            placeholder: self.placeholder,
            minimum_search_length: self.minimum_search_length,
            provider: self.provider,
            on_search_term_changed: self
                .on_search_term_changed
                .unwrap_or_else(|| Arc::new(|_: &str| {})),
            on_error: self.on_error,
            state: Arc::new(Mutex::new(SearchState::new(self.initial_search_term))),
            debouncer,
            disposed: false,
        }
    }
}
