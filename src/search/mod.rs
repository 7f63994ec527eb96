//! Search box with debounced, generation-checked autocomplete suggestions.
//!
//! Every keystroke updates the text immediately and restarts one debounce
//! window. When a window elapses the committed text is reported and, if the
//! text is long enough, the suggestion provider is queried. Results are only
//! applied if no newer request has started since, so a slow early response
//! can never overwrite a later one.

mod builder;
mod state;

pub use builder::SearchSuggestBoxBuilder;
pub use state::{DropdownState, Key, SearchState};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, warn};

use crate::debounce::{Debouncer, ErrorCallback};
use crate::error::Result;
use crate::suggest::SuggestionProvider;

/// Receives the committed search term
pub type SearchTermCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// What the presentation layer needs to draw the box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBoxView {
    pub value: String,
    pub placeholder: String,
    /// Empty while the dropdown is closed
    pub items: Vec<SuggestionView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionView {
    pub text: String,
    pub active: bool,
}

pub struct SearchSuggestBox {
    placeholder: String,
    minimum_search_length: usize,
    provider: Option<Arc<dyn SuggestionProvider>>,
    on_search_term_changed: SearchTermCallback,
    on_error: Option<ErrorCallback>,
    state: Arc<Mutex<SearchState>>,
    debouncer: Debouncer,
    disposed: bool,
}

impl SearchSuggestBox {
    pub fn builder() -> SearchSuggestBoxBuilder {
        SearchSuggestBoxBuilder::default()
    }

    /// Handle a keystroke that changed the input to `text`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn input(&mut self, text: impl Into<String>) {
        if self.disposed {
            return;
        }

        let text = text.into();
        let fetch = self.should_fetch(&text);
        let (revision, generation) = {
            let mut state = lock(&self.state);
            state.current_text = text.clone();
            let revision = state.next_text_revision();
            let generation = state.next_generation();
            if !fetch {
                state.close();
            }
            (revision, generation)
        };

        let window = Window {
            state: Arc::clone(&self.state),
            text,
            revision,
            generation,
            provider: if fetch { self.provider.clone() } else { None },
            on_changed: Arc::clone(&self.on_search_term_changed),
            on_error: self.on_error.clone(),
        };

        self.debouncer
            .trigger(move || window.run())
            .report_panics(self.on_error.clone());
    }

    /// Handle a key press while the input has focus
    pub fn key_down(&mut self, key: impl Into<Key>) {
        if self.disposed {
            return;
        }

        match key.into() {
            Key::ArrowDown => lock(&self.state).highlight_next(),
            Key::ArrowUp => lock(&self.state).highlight_previous(),
            Key::Enter => {
                let chosen = lock(&self.state).highlighted_suggestion().map(str::to_string);
                if let Some(chosen) = chosen {
                    self.commit(chosen);
                }
            }
            Key::Escape => {
                let mut state = lock(&self.state);
                state.close();
                state.next_generation();
            }
            Key::Other => {}
        }
    }

    /// Handle a pointer click on one of the shown suggestions.
    ///
    /// Returns false if `suggestion` is not currently shown.
    pub fn select_suggestion(&mut self, suggestion: &str) -> bool {
        if self.disposed || !lock(&self.state).suggestions.iter().any(|s| s == suggestion) {
            return false;
        }
        self.commit(suggestion.to_string());
        true
    }

    /// Tear the box down: no pending window fires and no late result applies.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.debouncer.dispose();

        let mut state = lock(&self.state);
        *state = SearchState {
            pending_request_generation: state.pending_request_generation + 1,
            text_revision: state.text_revision + 1,
            ..Default::default()
        };
        debug!("Search box disposed");
    }

    pub fn snapshot(&self) -> SearchState {
        lock(&self.state).clone()
    }

    pub fn dropdown_state(&self) -> DropdownState {
        lock(&self.state).dropdown_state()
    }

    pub fn is_open(&self) -> bool {
        lock(&self.state).dropdown_open()
    }

    pub fn current_text(&self) -> String {
        lock(&self.state).current_text.clone()
    }

    pub fn suggestions(&self) -> Vec<String> {
        lock(&self.state).suggestions.clone()
    }

    pub fn highlighted_index(&self) -> Option<usize> {
        lock(&self.state).highlighted_index
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn minimum_search_length(&self) -> usize {
        self.minimum_search_length
    }

    pub fn view(&self) -> SearchBoxView {
        let state = lock(&self.state);
        let items = state
            .suggestions
            .iter()
            .enumerate()
            .map(|(i, text)| SuggestionView {
                text: text.clone(),
                active: state.highlighted_index == Some(i),
            })
            .collect();

        SearchBoxView {
            value: state.current_text.clone(),
            placeholder: self.placeholder.clone(),
            items,
        }
    }

    fn should_fetch(&self, text: &str) -> bool {
        self.provider.is_some() && text.chars().count() >= self.minimum_search_length
    }

    /// Accept `chosen` as the search term right away, skipping the debounce.
    fn commit(&mut self, chosen: String) {
        self.debouncer.cancel();
        {
            let mut state = lock(&self.state);
            state.current_text = chosen.clone();
            state.next_text_revision();
            state.close();
            state.next_generation();
        }
        debug!("Committed suggestion {:?}", chosen);
        (self.on_search_term_changed)(&chosen);
    }
}

impl Drop for SearchSuggestBox {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// One elapsed debounce window and everything it needs to finish.
struct Window {
    state: Arc<Mutex<SearchState>>,
    /// Text as typed when the window opened
    text: String,
    revision: u64,
    generation: u64,
    provider: Option<Arc<dyn SuggestionProvider>>,
    on_changed: SearchTermCallback,
    on_error: Option<ErrorCallback>,
}

impl Window {
    async fn run(self) -> Result<()> {
        // A keystroke or commit may land after the timer fired but before the
        // cancel reached it; the newer event owns the report then.
        if lock(&self.state).text_revision != self.revision {
            debug!("Window for {:?} overtaken by newer input", self.text);
            return Ok(());
        }
        (self.on_changed)(&self.text);

        let Some(provider) = self.provider else {
            return Ok(());
        };
        // Escape may have dismissed the dropdown while the window was open.
        if lock(&self.state).pending_request_generation != self.generation {
            debug!("Skipping suggestions for {:?}, request superseded", self.text);
            return Ok(());
        }

        let result = provider.suggest(&self.text).await;
        apply_suggestions(&self.state, self.generation, result, self.on_error.as_ref());
        Ok(())
    }
}

fn lock(state: &Mutex<SearchState>) -> MutexGuard<'_, SearchState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

fn apply_suggestions(
    state: &Mutex<SearchState>,
    generation: u64,
    result: Result<Vec<String>>,
    on_error: Option<&ErrorCallback>,
) {
    let error = {
        let mut state = lock(state);
        if state.pending_request_generation != generation {
            debug!(
                "Discarding suggestions from generation {} (current {})",
                generation, state.pending_request_generation
            );
            return;
        }

        match result {
            Ok(suggestions) => {
                debug!("Showing {} suggestions", suggestions.len());
                state.show(suggestions);
                None
            }
            Err(e) => {
                state.close();
                Some(e)
            }
        }
    };

    if let Some(e) = error {
        warn!("Suggestion provider failed: {}", e);
        if let Some(callback) = on_error {
            callback(&e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BrowseError;
    use crate::suggest::FnProvider;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Fixture {
        state: Arc<Mutex<SearchState>>,
        reported: Arc<Mutex<Vec<String>>>,
        fetches: Arc<AtomicUsize>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                state: Arc::new(Mutex::new(SearchState::default())),
                reported: Arc::new(Mutex::new(Vec::new())),
                fetches: Arc::new(AtomicUsize::new(0)),
            }
        }

        /// A window opened for `text` at the state's current revision and generation
        fn window(&self, text: &str) -> Window {
            let (revision, generation) = {
                let state = self.state.lock().unwrap();
                (state.text_revision, state.pending_request_generation)
            };
            let reported = self.reported.clone();
            let fetches = self.fetches.clone();
            let provider = FnProvider::new(move |query: String| {
                fetches.fetch_add(1, Ordering::SeqCst);
                async move { Ok::<_, BrowseError>(vec![format!("{} pie", query)]) }
            });

            Window {
                state: self.state.clone(),
                text: text.to_string(),
                revision,
                generation,
                provider: Some(Arc::new(provider)),
                on_changed: Arc::new(move |term: &str| {
                    reported.lock().unwrap().push(term.to_string())
                }),
                on_error: None,
            }
        }
    }

    #[tokio::test]
    async fn test_window_reports_its_own_text() {
        let fixture = Fixture::new();
        let window = fixture.window("apple");
        // Text in state moved on without a new keystroke being recorded
        fixture.state.lock().unwrap().current_text = "something else".to_string();

        window.run().await.unwrap();

        assert_eq!(*fixture.reported.lock().unwrap(), vec!["apple"]);
        assert_eq!(fixture.state.lock().unwrap().suggestions, vec!["apple pie"]);
    }

    #[tokio::test]
    async fn test_overtaken_window_does_nothing() {
        let fixture = Fixture::new();
        let window = fixture.window("first");
        fixture.state.lock().unwrap().next_text_revision();

        window.run().await.unwrap();

        assert!(fixture.reported.lock().unwrap().is_empty());
        assert_eq!(fixture.fetches.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_superseded_window_reports_but_skips_fetch() {
        let fixture = Fixture::new();
        let window = fixture.window("apple");
        // Escape bumps the generation but leaves the text alone
        fixture.state.lock().unwrap().next_generation();

        window.run().await.unwrap();

        assert_eq!(*fixture.reported.lock().unwrap(), vec!["apple"]);
        assert_eq!(fixture.fetches.load(Ordering::SeqCst), 0);
        assert!(!fixture.state.lock().unwrap().dropdown_open());
    }
}
