//! Dropdown state for the suggestion search box.
//!
//! `SearchState` holds the transitions that do not involve timers, so they can
//! be exercised without a runtime. The dropdown is open exactly when there are
//! suggestions; `highlighted_index` always points into `suggestions`.

/// Visible phase of the suggestion dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownState {
    /// No suggestions shown
    Closed,
    /// Suggestions shown, none highlighted
    Open,
    /// Suggestions shown with one highlighted
    Navigating,
}

/// Keys the search box reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    Other,
}

impl From<&str> for Key {
    /// Map a DOM `KeyboardEvent.key` value
    fn from(key: &str) -> Self {
        match key {
            "ArrowDown" => Key::ArrowDown,
            "ArrowUp" => Key::ArrowUp,
            "Enter" => Key::Enter,
            "Escape" => Key::Escape,
            _ => Key::Other,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub current_text: String,
    pub suggestions: Vec<String>,
    pub highlighted_index: Option<usize>,
    /// Generation of the newest suggestion request; older results are stale
    pub pending_request_generation: u64,
    /// Bumped whenever the text changes, so an elapsed window can tell it was
    /// overtaken by a later keystroke
    pub text_revision: u64,
}

impl SearchState {
    pub fn new(initial_text: impl Into<String>) -> Self {
        Self {
            current_text: initial_text.into(),
            ..Default::default()
        }
    }

    pub fn dropdown_open(&self) -> bool {
        !self.suggestions.is_empty()
    }

    pub fn dropdown_state(&self) -> DropdownState {
        match (self.dropdown_open(), self.highlighted_index) {
            (false, _) => DropdownState::Closed,
            (true, None) => DropdownState::Open,
            (true, Some(_)) => DropdownState::Navigating,
        }
    }

    pub fn highlighted_suggestion(&self) -> Option<&str> {
        self.highlighted_index
            .and_then(|i| self.suggestions.get(i))
            .map(String::as_str)
    }

    /// Start a new request generation, invalidating any in flight
    pub fn next_generation(&mut self) -> u64 {
        self.pending_request_generation += 1;
        self.pending_request_generation
    }

    /// Record a change of `current_text`
    pub fn next_text_revision(&mut self) -> u64 {
        self.text_revision += 1;
        self.text_revision
    }

    /// Replace the suggestions wholesale; an empty list closes the dropdown.
    pub fn show(&mut self, suggestions: Vec<String>) {
        self.suggestions = suggestions;
        self.highlighted_index = None;
    }

    pub fn close(&mut self) {
        self.suggestions.clear();
        self.highlighted_index = None;
    }

    /// Move the highlight down, stopping at the last suggestion
    pub fn highlight_next(&mut self) {
        let Some(last) = self.suggestions.len().checked_sub(1) else {
            return;
        };
        self.highlighted_index = Some(match self.highlighted_index {
            None => 0,
            Some(i) => (i + 1).min(last),
        });
    }

    /// Move the highlight up, stopping at the first suggestion.
    ///
    /// Does nothing until navigation has started.
    pub fn highlight_previous(&mut self) {
        if let Some(i) = self.highlighted_index {
            self.highlighted_index = Some(i.saturating_sub(1));
        }
    }
}
