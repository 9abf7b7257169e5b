// src/app/view.rs
//! Application view rendering

use iced::Element;

use super::App;
use super::message::Message;
use super::state::Route;
use crate::ui::pages;

impl App {
    /// Build the view for a specific window
    pub fn view(&self, _window_id: iced::window::Id) -> Element<'_, Message> {
        let locale = self.core.locale;
        match &self.ui.route {
            Route::Home => pages::home::view(
                self.ui.search.as_ref().map(|s| s.controller.state()),
                &self.core.backend,
                locale,
            ),
            Route::Player(username) => pages::player::view(username, locale),
        }
    }
}
