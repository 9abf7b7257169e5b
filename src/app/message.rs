//! Application messages

use crate::api::HealthStatus;
use crate::app::state::Route;
use crate::features::player_search::SearchEvent;

/// Application messages
#[derive(Clone)]
pub enum Message {
    /// No-op message for event interception
    Noop,

    // ============ Search ============
    /// Search text edited
    SearchInput(String),
    /// Search form confirmed (Enter or the search button)
    SearchSubmit,
    /// Clear button pressed
    SearchClear,
    /// Search widget gained focus (press landed on one of its widgets)
    SearchFocus,
    /// Search widget lost focus (press on empty space, or Escape)
    SearchBlur,
    /// Suggestion row clicked
    SuggestionPicked(String),
    /// Completion from the search controller of the given mount
    Search(u64, SearchEvent),

    // ============ Navigation ============
    /// Go to a route
    Navigate(Route),
    /// Navigate back in history
    NavigateBack,

    // ============ Backend ============
    /// Startup health probe finished
    HealthChecked(Result<HealthStatus, String>),

    // ============ Window ============
    /// Main window closed
    WindowClosed,
}

impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        macro_rules! simple {
            ($name:literal) => { write!(f, $name) };
            ($name:literal, $($arg:tt)*) => { write!(f, concat!($name, "({})"), format_args!($($arg)*)) };
        }

        match self {
            Self::Noop => simple!("Noop"),

            // Search
            Self::SearchInput(text) => simple!("SearchInput", "{:?}", text),
            Self::SearchSubmit => simple!("SearchSubmit"),
            Self::SearchClear => simple!("SearchClear"),
            Self::SearchFocus => simple!("SearchFocus"),
            Self::SearchBlur => simple!("SearchBlur"),
            Self::SuggestionPicked(name) => simple!("SuggestionPicked", "{}", name),
            Self::Search(generation, event) => match event {
                SearchEvent::DebounceElapsed(ticket) => {
                    simple!("SearchDebounceElapsed", "mount={}, ticket={}", generation, ticket)
                }
                SearchEvent::LookupFinished { seq, result, .. } => simple!(
                    "SearchLookupFinished",
                    "mount={}, seq={}, {}",
                    generation,
                    seq,
                    match result {
                        Ok(names) => format!("{} players", names.len()),
                        Err(_) => "failed".to_string(),
                    }
                ),
                SearchEvent::BlurGraceElapsed(ticket) => {
                    simple!("SearchBlurGraceElapsed", "mount={}, ticket={}", generation, ticket)
                }
            },

            // Navigation
            Self::Navigate(route) => simple!("Navigate", "{}", route.path()),
            Self::NavigateBack => simple!("NavigateBack"),

            // Backend
            Self::HealthChecked(r) => simple!("HealthChecked", "ok={}", r.is_ok()),

            // Window
            Self::WindowClosed => simple!("WindowClosed"),
        }
    }
}
