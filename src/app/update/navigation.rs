// src/app/update/navigation.rs
//! Navigation message handlers

use std::sync::Arc;

use iced::Task;

use crate::app::helpers::search_events;
use crate::app::message::Message;
use crate::app::state::{App, MountedSearch, Route};
use crate::features::player_search::SearchController;

impl App {
    /// Create a fresh search controller and start forwarding its completions
    pub(crate) fn mount_search(&mut self) -> Task<Message> {
        self.ui.search_generation += 1;
        let generation = self.ui.search_generation;

        let (controller, rx) = SearchController::new(
            Arc::new(self.core.api.clone()),
            &self.core.settings.search,
        );
        self.ui.search = Some(MountedSearch {
            generation,
            controller,
        });
        tracing::debug!("Mounted player search #{}", generation);

        Task::run(search_events(rx), move |event| {
            Message::Search(generation, event)
        })
    }

    /// Switch to `route`, mounting the search widget only on the home page
    fn show_route(&mut self, route: Route) -> Task<Message> {
        tracing::info!("Navigating to {}", route.path());
        let is_home = route == Route::Home;
        self.ui.route = route;
        if !is_home {
            // Dropping the controller cancels its timers
            self.ui.search = None;
            Task::none()
        } else if self.ui.search.is_none() {
            self.mount_search()
        } else {
            Task::none()
        }
    }

    /// Handle navigation-related messages
    pub fn handle_navigation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Noop => Some(Task::none()),

            Message::NavigateBack => {
                if let Some(route) = self.ui.history.pop() {
                    Some(self.show_route(route))
                } else {
                    Some(Task::none())
                }
            }

            Message::Navigate(route) => {
                if *route == self.ui.route {
                    return Some(Task::none());
                }
                self.ui.history.push(self.ui.route.clone());
                Some(self.show_route(route.clone()))
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::update::test_support;

    #[test]
    fn test_starts_home_with_search_mounted() {
        let app = test_support::app();
        assert_eq!(app.ui.route, Route::Home);
        assert_eq!(app.ui.search.as_ref().map(|s| s.generation), Some(1));
    }

    #[test]
    fn test_navigate_and_back() {
        let mut app = test_support::app();
        let player = Route::Player("Player_1".to_string());

        let _ = app.update(Message::Navigate(player.clone()));
        assert_eq!(app.ui.route, player);
        assert!(app.ui.search.is_none());
        assert_eq!(app.ui.history, vec![Route::Home]);

        let _ = app.update(Message::NavigateBack);
        assert_eq!(app.ui.route, Route::Home);
        assert!(app.ui.history.is_empty());
        assert_eq!(app.ui.search.as_ref().map(|s| s.generation), Some(2));
    }

    #[test]
    fn test_navigate_to_current_route_is_noop() {
        let mut app = test_support::app();
        let _ = app.update(Message::Navigate(Route::Home));
        assert!(app.ui.history.is_empty());
        assert_eq!(app.ui.search_generation, 1);
    }

    #[test]
    fn test_back_without_history() {
        let mut app = test_support::app();
        let _ = app.update(Message::NavigateBack);
        assert_eq!(app.ui.route, Route::Home);
    }

    #[test]
    fn test_remount_starts_empty() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let _guard = rt.enter();

        let mut app = test_support::app();
        let _ = app.update(Message::SearchInput("abc".to_string()));
        let _ = app.update(Message::Navigate(Route::Player("abc".to_string())));
        let _ = app.update(Message::NavigateBack);

        let state = app.ui.search.as_ref().unwrap().controller.state();
        assert_eq!(state.text, "");
        assert!(!state.is_loading);
    }
}
