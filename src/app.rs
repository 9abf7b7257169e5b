//! Main application module

pub mod helpers;
mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::api::StatsApi;
use crate::features::Settings;
use crate::i18n::{Language, Locale};
pub use message::Message;
pub use state::{App, BackendStatus, CoreState, Route, UiState};

impl App {
    /// Create new application instance
    pub fn new(settings: Settings, api: StatsApi) -> (Self, Task<Message>) {
        // 1. Locale from persisted display settings
        let locale = Locale::new(Language::from_code(&settings.display.language));

        // 2. Core and UI state
        let core = CoreState {
            settings,
            locale,
            api,
            backend: BackendStatus::Checking,
        };
        let mut app = Self {
            core,
            ui: UiState::new(),
        };

        // 3. Open main window
        let (window_id, open_window) = iced::window::open(iced::window::Settings {
            size: iced::Size::new(960.0, 640.0),
            min_size: Some(iced::Size::new(560.0, 420.0)),
            #[cfg(target_os = "linux")]
            platform_specific: iced::window::settings::PlatformSpecific {
                application_id: "statscout".to_string(),
                ..Default::default()
            },
            ..Default::default()
        });
        tracing::info!("Opening main window with id: {:?}", window_id);

        // 4. Mount the search widget and probe the backend
        let search_task = app.mount_search();
        let init_task = Task::batch([
            open_window.discard(),
            search_task,
            Task::perform(helpers::check_health(app.core.api.clone()), Message::HealthChecked),
        ]);

        (app, init_task)
    }

    /// Application theme for a specific window
    pub fn theme(&self, _window_id: iced::window::Id) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title follows the current route
    pub fn title(&self, _window_id: iced::window::Id) -> String {
        match &self.ui.route {
            Route::Home => "Statscout".to_string(),
            Route::Player(name) => format!("Statscout - {}", name),
        }
    }

    /// Subscriptions for window close and search focus tracking
    pub fn subscription(&self) -> iced::Subscription<Message> {
        let close_sub = iced::window::close_events().map(|_id| Message::WindowClosed);

        // Focus follows the same input events text_input reacts to
        let focus_sub = if self.ui.search.is_some() {
            iced::event::listen_with(subscription_logic::search_focus_event)
        } else {
            iced::Subscription::none()
        };

        iced::Subscription::batch([close_sub, focus_sub])
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    use iced::event::Status;
    use iced::{Event, keyboard, mouse, window};

    use super::Message;

    /// Map raw input to search focus changes.
    ///
    /// Only used while the home page is shown, where every interactive
    /// widget belongs to the search widget: a press captured by a widget
    /// keeps or gives focus, a press on empty space or Escape drops it.
    pub fn search_focus_event(event: Event, status: Status, _id: window::Id) -> Option<Message> {
        match event {
            Event::Mouse(mouse::Event::ButtonPressed(_)) => match status {
                Status::Captured => Some(Message::SearchFocus),
                Status::Ignored => Some(Message::SearchBlur),
            },
            Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) => Some(Message::SearchBlur),
            _ => None,
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn press(status: Status) -> Option<Message> {
            search_focus_event(
                Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
                status,
                window::Id::unique(),
            )
        }

        #[test]
        fn test_press_on_widget_focuses() {
            assert!(matches!(press(Status::Captured), Some(Message::SearchFocus)));
        }

        #[test]
        fn test_press_elsewhere_blurs() {
            assert!(matches!(press(Status::Ignored), Some(Message::SearchBlur)));
        }

        #[test]
        fn test_pointer_motion_ignored() {
            let moved = search_focus_event(
                Event::Mouse(mouse::Event::CursorLeft),
                Status::Ignored,
                window::Id::unique(),
            );
            assert!(moved.is_none());
        }
    }
}
