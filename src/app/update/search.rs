// src/app/update/search.rs
//! Player search message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::{App, Route};
use crate::features::player_search::Selection;

impl App {
    /// Handle search-related messages
    pub fn handle_search(&mut self, message: &Message) -> Option<Task<Message>> {
        let selection = match message {
            Message::SearchInput(text) => {
                if let Some(search) = &mut self.ui.search {
                    search.controller.on_text_change(text.clone());
                }
                return Some(Task::none());
            }

            Message::SearchSubmit => self
                .ui
                .search
                .as_mut()
                .and_then(|search| search.controller.on_submit().ok()),

            Message::SuggestionPicked(username) => self
                .ui
                .search
                .as_mut()
                .map(|search| search.controller.on_suggestion_pick(username.clone())),

            Message::SearchClear => {
                if let Some(search) = &mut self.ui.search {
                    search.controller.on_clear();
                }
                return Some(Task::none());
            }

            Message::SearchFocus => {
                if let Some(search) = &mut self.ui.search {
                    search.controller.on_focus();
                }
                return Some(Task::none());
            }

            Message::SearchBlur => {
                if let Some(search) = &mut self.ui.search {
                    search.controller.on_blur();
                }
                return Some(Task::none());
            }

            Message::Search(generation, event) => {
                match &mut self.ui.search {
                    Some(search) if search.generation == *generation => {
                        search.controller.handle(event.clone());
                    }
                    _ => tracing::debug!("Dropping event from unmounted search {}", generation),
                }
                return Some(Task::none());
            }

            _ => return None,
        };

        Some(match selection {
            Some(selection) => self.open_player(selection),
            None => Task::none(),
        })
    }

    fn open_player(&mut self, selection: Selection) -> Task<Message> {
        tracing::info!("Opening player {}", selection.username());
        self.update(Message::Navigate(Route::Player(selection.into_username())))
    }
}
