//! Search controller
//!
//! Turns keystrokes into debounced remote lookups and a submit into a
//! validated selection. All methods run on the owner's update loop; spawned
//! tasks only sleep or await the backend and then post a [`SearchEvent`]
//! back through the channel returned by [`SearchController::new`].

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::lookup::{LookupError, PlayerLookup};
use super::state::QueryState;
use super::timer::CancelableTimer;
use super::username::{Username, ValidationError};
use super::MIN_QUERY_LEN;
use crate::features::settings::SearchSettings;

/// Completions delivered back to the controller's owner
#[derive(Debug, Clone)]
pub enum SearchEvent {
    /// The debounce quiet period elapsed
    DebounceElapsed(u64),
    /// A lookup finished; `seq` identifies which one
    LookupFinished {
        seq: u64,
        term: String,
        result: Result<Vec<String>, LookupError>,
    },
    /// The blur grace delay elapsed
    BlurGraceElapsed(u64),
}

/// A player chosen by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Picked from the server-provided list, taken as is
    Picked(String),
    /// Typed and confirmed, validated
    Submitted(Username),
}

impl Selection {
    pub fn username(&self) -> &str {
        match self {
            Selection::Picked(name) => name,
            Selection::Submitted(name) => name.as_str(),
        }
    }

    pub fn into_username(self) -> String {
        match self {
            Selection::Picked(name) => name,
            Selection::Submitted(name) => name.into_inner(),
        }
    }
}

pub struct SearchController {
    state: QueryState,
    lookup: Arc<dyn PlayerLookup>,
    events: mpsc::UnboundedSender<SearchEvent>,
    debounce: CancelableTimer,
    blur_grace: CancelableTimer,
    /// Sequence number of the newest lookup; older responses are dropped
    latest_seq: u64,
}

impl SearchController {
    /// Create a controller and the receiver its completions arrive on
    pub fn new(
        lookup: Arc<dyn PlayerLookup>,
        settings: &SearchSettings,
    ) -> (Self, mpsc::UnboundedReceiver<SearchEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let controller = Self {
            state: QueryState::default(),
            lookup,
            events,
            debounce: CancelableTimer::new(settings.debounce()),
            blur_grace: CancelableTimer::new(settings.blur_grace()),
            latest_seq: 0,
        };
        (controller, rx)
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// Store the new text and restart the quiet period
    pub fn on_text_change(&mut self, text: impl Into<String>) {
        self.state.text = text.into();
        if self.state.text.chars().count() < MIN_QUERY_LEN {
            self.state.error_message.clear();
        }

        let tx = self.events.clone();
        self.debounce.schedule(move |ticket| {
            let _ = tx.send(SearchEvent::DebounceElapsed(ticket));
        });
    }

    /// Accept a suggestion from the dropdown
    pub fn on_suggestion_pick(&mut self, username: impl Into<String>) -> Selection {
        let username = username.into();
        debug!("Suggestion picked: {}", username);

        self.debounce.cancel();
        self.invalidate_lookups();
        self.state.text = username.clone();
        self.state.hide_suggestions();
        Selection::Picked(username)
    }

    /// Validate the typed text and turn it into a selection
    pub fn on_submit(&mut self) -> Result<Selection, ValidationError> {
        match Username::parse(&self.state.text) {
            Ok(username) => {
                self.debounce.cancel();
                self.invalidate_lookups();
                self.state.hide_suggestions();
                debug!("Search submitted: {}", username);
                Ok(Selection::Submitted(username))
            }
            Err(e) => {
                self.state.error_message = e.to_string();
                Err(e)
            }
        }
    }

    /// Reset to the initial state without touching the backend
    pub fn on_clear(&mut self) {
        self.debounce.cancel();
        self.blur_grace.cancel();
        self.invalidate_lookups();
        self.state = QueryState::default();
    }

    pub fn on_focus(&mut self) {
        self.blur_grace.cancel();
        if self.state.is_searchable() && self.state.has_results {
            self.state.suggestions_visible = true;
        }
    }

    /// Hide the dropdown after the grace delay so a click on a row still lands
    pub fn on_blur(&mut self) {
        let tx = self.events.clone();
        self.blur_grace.schedule(move |ticket| {
            let _ = tx.send(SearchEvent::BlurGraceElapsed(ticket));
        });
    }

    /// Apply a completion posted by one of our tasks
    pub fn handle(&mut self, event: SearchEvent) {
        match event {
            SearchEvent::DebounceElapsed(ticket) => {
                if self.debounce.complete(ticket) {
                    self.fire_lookup();
                }
            }
            SearchEvent::LookupFinished { seq, term, result } => {
                self.finish_lookup(seq, &term, result);
            }
            SearchEvent::BlurGraceElapsed(ticket) => {
                if self.blur_grace.complete(ticket) {
                    self.state.hide_suggestions();
                }
            }
        }
    }

    fn fire_lookup(&mut self) {
        if !self.state.is_searchable() {
            self.invalidate_lookups();
            self.state.drop_suggestions();
            return;
        }

        self.latest_seq += 1;
        let seq = self.latest_seq;
        let term = self.state.text.clone();
        self.state.is_loading = true;
        self.state.error_message.clear();
        debug!("Issuing player lookup #{} for {:?}", seq, term);

        let request = self.lookup.search(&term);
        let tx = self.events.clone();
        tokio::spawn(async move {
            let result = request.await;
            let _ = tx.send(SearchEvent::LookupFinished { seq, term, result });
        });
    }

    fn finish_lookup(&mut self, seq: u64, term: &str, result: Result<Vec<String>, LookupError>) {
        if seq != self.latest_seq {
            debug!(
                "Discarding stale lookup #{} for {:?} (latest is #{})",
                seq, term, self.latest_seq
            );
            return;
        }

        self.state.is_loading = false;
        match result {
            Ok(suggestions) => {
                debug!("Lookup #{} returned {} players", seq, suggestions.len());
                self.state.suggestions = suggestions;
                self.state.suggestions_visible = true;
                self.state.has_results = true;
            }
            Err(e) => {
                warn!("Lookup #{} for {:?} failed: {}", seq, term, e.detail());
                self.state.drop_suggestions();
                self.state.error_message = e.user_message().to_string();
            }
        }
    }

    /// Make any outstanding response stale
    fn invalidate_lookups(&mut self) {
        self.latest_seq += 1;
        self.state.is_loading = false;
    }
}

impl std::fmt::Debug for SearchController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchController")
            .field("state", &self.state)
            .field("debounce", &self.debounce)
            .field("blur_grace", &self.blur_grace)
            .field("latest_seq", &self.latest_seq)
            .finish()
    }
}
