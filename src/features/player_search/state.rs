//! Query state owned by a single search controller

use super::MIN_QUERY_LEN;

/// Everything the search widget renders
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    /// Current input text, exactly as typed
    pub text: String,
    /// A lookup is outstanding
    pub is_loading: bool,
    /// User-facing error, empty when there is none
    pub error_message: String,
    /// Suggestions from the most recent successful lookup, in server order
    pub suggestions: Vec<String>,
    pub suggestions_visible: bool,
    /// A lookup succeeded since the last clear or failure
    pub has_results: bool,
}

impl QueryState {
    /// Input is long enough to be searched
    pub fn is_searchable(&self) -> bool {
        self.text.chars().count() >= MIN_QUERY_LEN
    }

    pub fn has_error(&self) -> bool {
        !self.error_message.is_empty()
    }

    /// The dropdown should render the suggestion rows
    pub fn shows_suggestions(&self) -> bool {
        self.suggestions_visible && !self.suggestions.is_empty()
    }

    /// The dropdown should render the "no players found" notice
    pub fn shows_no_results(&self) -> bool {
        self.suggestions_visible
            && !self.is_loading
            && self.is_searchable()
            && self.suggestions.is_empty()
    }

    pub(super) fn hide_suggestions(&mut self) {
        self.suggestions_visible = false;
    }

    /// Forget the last result; focus will not re-show the dropdown until
    /// the next successful lookup
    pub(super) fn drop_suggestions(&mut self) {
        self.suggestions.clear();
        self.suggestions_visible = false;
        self.has_results = false;
    }
}
