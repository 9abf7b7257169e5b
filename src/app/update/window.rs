// src/app/update/window.rs
//! Window message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle window-related messages
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::WindowClosed => {
                tracing::info!("Main window closed, exiting");
                self.ui.search = None;
                Some(iced::exit())
            }

            _ => None,
        }
    }
}
