// src/app/state.rs
//! Application state definitions

use crate::api::StatsApi;
use crate::features::Settings;
use crate::features::player_search::SearchController;
use crate::i18n::Locale;

/// Main application state
pub struct App {
    /// Core infrastructure (Settings, API client)
    pub core: CoreState,
    /// UI state (Navigation, mounted widgets)
    pub ui: UiState,
}

/// Core Infrastructure & Services
pub struct CoreState {
    pub settings: Settings,
    pub locale: Locale,
    pub api: StatsApi,
    pub backend: BackendStatus,
}

/// Result of the startup health probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendStatus {
    #[default]
    Checking,
    Online,
    Offline,
}

/// UI state
pub struct UiState {
    pub route: Route,
    /// Routes to return to with "Back"
    pub history: Vec<Route>,
    /// Search widget, present only while the home page is shown
    pub search: Option<MountedSearch>,
    /// Bumped on every mount so events from a dropped controller are ignored
    pub search_generation: u64,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            route: Route::Home,
            history: Vec::new(),
            search: None,
            search_generation: 0,
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

/// A search controller tied to one mount of the search widget
#[derive(Debug)]
pub struct MountedSearch {
    pub generation: u64,
    pub controller: SearchController,
}

/// Client-side routes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Player(String),
}

impl Route {
    /// URL-style path, matching the web dashboard routes
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Player(name) => format!("/player/{}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(
            Route::Player("Player_1".to_string()).path(),
            "/player/Player_1"
        );
    }

    #[test]
    fn test_starts_home_without_history() {
        let ui = UiState::new();
        assert_eq!(ui.route, Route::Home);
        assert!(ui.history.is_empty());
        assert!(ui.search.is_none());
    }
}
